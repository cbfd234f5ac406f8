//! PPDB enrollment wizard: form model, step machine, validation and notifications

mod field;
mod form;
mod notification;
mod step;
mod submission;
mod transition;
mod validation;
mod wizard;

pub use field::*;
pub use form::*;
pub use notification::*;
pub use step::*;
pub use submission::*;
pub use transition::*;
pub use validation::*;
pub use wizard::*;
