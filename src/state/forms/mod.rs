//! Form domain layer
//!
//! Text-field forms outside the enrollment wizard share the [`Form`] trait
//! for focus movement.

mod field;
mod login_form;

pub use field::FormField;
pub use login_form::{Form, LoginForm, LOGIN_EMAIL, LOGIN_PASSWORD};
