//! UI module for rendering the TUI

mod components;
mod dashboard;
mod enrollment;
mod forms;
mod home;
mod layout;
mod login;

use crate::app::App;
use crate::state::enrollment::{DialogCopy, SubmissionError, WizardPhase};
use crate::state::View;
use components::{render_confirm_dialog, render_error_dialog, render_success_toast};
use ratatui::Frame;
use std::time::Instant;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let now = Instant::now();
    let (header_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, app);

    // Draw main content based on current view
    match app.state.current_view {
        View::Home => home::draw(frame, main_area, app),
        View::Enrollment => enrollment::draw(frame, main_area, app, now),
        View::Login => login::draw(frame, main_area, app),
        View::Dashboard => dashboard::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    let wizard = &app.state.wizard;
    if app.state.current_view == View::Enrollment {
        match wizard.phase() {
            WizardPhase::ConfirmPending(..) | WizardPhase::Submitting => {
                if let Some(pending) = wizard.dialog() {
                    let copy = DialogCopy::for_transition(pending);
                    render_confirm_dialog(frame, pending.kind(), &copy, app.state.dialog_button);
                }
            }
            WizardPhase::SubmissionFailed => {
                if let Some(failure) = wizard.failure() {
                    render_error_dialog(frame, "Pendaftaran Gagal", &failure_message(failure));
                }
            }
            WizardPhase::Editing(_) | WizardPhase::SubmittedSuccess => {}
        }
    }

    // The toast outlives the view that triggered it
    if let Some(receipt) = wizard.toast().receipt() {
        render_success_toast(frame, receipt, wizard.toast().elapsed_fraction(now));
    }

    // Draw error dialog on top of everything if there's an error
    if let Some(error) = app.state.current_error() {
        render_error_dialog(frame, "Terjadi Kesalahan", error);
    }
}

fn failure_message(failure: &SubmissionError) -> String {
    let mut message = failure.to_string();
    if let SubmissionError::Rejected(errors) = failure {
        for error in errors {
            message.push_str(&format!("\n• {}: {}", error.field.label(), error.message));
        }
    }
    message
}
