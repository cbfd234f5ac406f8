//! Form rendering module
//!
//! - `field_renderer`: bordered single-line inputs shared by the login
//!   screen and the enrollment wizard

mod field_renderer;

pub use field_renderer::{draw_field, draw_field_with_value, field_height, FIELD_HEIGHT};
