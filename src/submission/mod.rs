//! Delivery of finished enrollments

mod logging;
mod traits;

pub use logging::{LoggingSubmitter, DEFAULT_API_URL};
pub use traits::EnrollmentSubmitter;

#[cfg(test)]
pub use traits::MockEnrollmentSubmitter;
