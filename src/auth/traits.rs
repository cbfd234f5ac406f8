//! Trait abstraction for authentication to enable mocking in tests

use crate::state::{Credentials, Role, Session};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Email dan password wajib diisi")]
    MissingCredentials,
    #[error("Email atau password salah")]
    InvalidCredentials,
    #[error("Akun ini terdaftar sebagai {actual}, bukan {requested}")]
    RoleMismatch { requested: Role, actual: Role },
    #[error("Layanan login tidak tersedia: {0}")]
    Unavailable(String),
}

/// Checks staff credentials and opens a session
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthPort: Send + Sync {
    async fn authenticate(&self, credentials: &Credentials) -> Result<Session, AuthError>;
}
