//! Application state module

mod app_state;
pub mod enrollment;
mod forms;
mod progress;
mod session;

pub use app_state::*;
pub use forms::*;
pub use session::*;
