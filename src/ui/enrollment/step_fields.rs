//! Inputs of the current wizard step, scrolled to keep the focused one visible

use crate::app::App;
use crate::state::enrollment::{FieldKey, FieldKind};
use crate::ui::forms::{draw_field_with_value, field_height};
use ratatui::{layout::Rect, Frame};
use std::ops::Range;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let fields = app.state.step_fields();
    let active = app.state.active_field;
    let errors = app.state.wizard.errors();

    let values: Vec<String> = fields
        .iter()
        .enumerate()
        .map(|(idx, key)| field_text(app, *key, idx == active))
        .collect();
    let heights: Vec<u16> = values
        .iter()
        .map(|value| field_height(value.split('\n').count()))
        .collect();

    let mut y = area.y;
    for idx in visible_range(&heights, active, area.height) {
        let key = fields[idx];
        let height = heights[idx].min(area.bottom().saturating_sub(y));
        if height == 0 {
            break;
        }
        let label = if key.is_required() {
            format!("{} *", key.label())
        } else {
            key.label().to_string()
        };
        let field_area = Rect {
            y,
            height,
            ..area
        };
        draw_field_with_value(
            frame,
            field_area,
            &label,
            &values[idx],
            idx == active,
            errors.for_field(key),
            key.placeholder(),
        );
        y += height;
    }
}

/// Text shown in the box of `key`
fn field_text(app: &App, key: FieldKey, is_active: bool) -> String {
    let form = app.state.wizard.form();
    let value = form.display_value(key);
    match key.kind() {
        FieldKind::Choice(_) if is_active => format!("◀ {} ▶", value),
        FieldKind::File if is_active && !app.state.file_input.is_empty() => {
            app.state.file_input.clone()
        }
        FieldKind::File if is_active && value.is_empty() => {
            "ketik path berkas lalu Enter".to_string()
        }
        _ => value,
    }
}

/// Fields that fit in `available` rows, starting as early as possible while
/// still showing the active field
fn visible_range(heights: &[u16], active: usize, available: u16) -> Range<usize> {
    if heights.is_empty() {
        return 0..0;
    }
    let active = active.min(heights.len() - 1);

    // Walk back from the active field while there is room
    let mut start = active;
    let mut used = heights[active];
    while start > 0 && used + heights[start - 1] <= available {
        start -= 1;
        used += heights[start];
    }

    // Then fill forward
    let mut end = active + 1;
    while end < heights.len() && used + heights[end] <= available {
        used += heights[end];
        end += 1;
    }

    // Prefer showing the top of the form when everything before fits
    let total_before: u16 = heights[..active].iter().sum();
    if total_before + heights[active] <= available {
        let mut end = 0;
        let mut used = 0;
        while end < heights.len() && used + heights[end] <= available {
            used += heights[end];
            end += 1;
        }
        return 0..end;
    }

    start..end
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_everything_fits() {
        assert_eq!(visible_range(&[3, 3, 3], 2, 20), 0..3);
    }

    #[test]
    fn test_top_of_form_when_active_fits() {
        assert_eq!(visible_range(&[3, 3, 3, 3], 1, 7), 0..2);
    }

    #[test]
    fn test_scrolls_to_active_field() {
        assert_eq!(visible_range(&[3, 3, 3, 3, 3], 4, 9), 2..5);
        assert_eq!(visible_range(&[3, 4, 3, 3], 3, 7), 2..4);
    }

    #[test]
    fn test_tall_active_field_still_shown() {
        assert_eq!(visible_range(&[3, 10], 1, 5), 1..2);
        assert_eq!(visible_range(&[], 0, 5), 0..0);
    }
}
