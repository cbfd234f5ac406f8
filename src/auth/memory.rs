//! Authenticator backed by an explicit list of accounts

use super::traits::{AuthError, AuthPort};
use crate::state::{Credentials, Role, Session, User};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A login the in-memory authenticator accepts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub password: String,
    pub user: User,
}

impl Account {
    pub fn new(user: User, password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
            user,
        }
    }
}

/// The three demo staff accounts, one per role
pub fn default_accounts() -> Vec<Account> {
    let user = |id: &str, name: &str, email: &str, role: Role| User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
    };
    vec![
        Account::new(
            user("1", "Administrator", "admin@smanusantara.sch.id", Role::Admin),
            "admin123",
        ),
        Account::new(
            user(
                "2",
                "Dr. Ahmad Suryadi, M.Pd",
                "kepsek@smanusantara.sch.id",
                Role::Kepsek,
            ),
            "kepsek123",
        ),
        Account::new(
            user("3", "Budi Santoso, S.Pd", "budi@smanusantara.sch.id", Role::Guru),
            "guru123",
        ),
    ]
}

#[derive(Debug, Clone)]
pub struct InMemoryAuthenticator {
    accounts: Vec<Account>,
}

impl InMemoryAuthenticator {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }

    fn verify(&self, credentials: &Credentials) -> Result<&User, AuthError> {
        if credentials.email.trim().is_empty() || credentials.password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        if self.accounts.is_empty() {
            return Err(AuthError::Unavailable(
                "belum ada akun staf yang terdaftar".to_string(),
            ));
        }

        let account = self
            .accounts
            .iter()
            .find(|a| a.user.email.eq_ignore_ascii_case(credentials.email.trim()))
            .filter(|a| a.password == credentials.password)
            .ok_or(AuthError::InvalidCredentials)?;

        if account.user.role != credentials.role {
            return Err(AuthError::RoleMismatch {
                requested: credentials.role,
                actual: account.user.role,
            });
        }
        Ok(&account.user)
    }
}

impl Default for InMemoryAuthenticator {
    fn default() -> Self {
        Self::new(default_accounts())
    }
}

#[async_trait]
impl AuthPort for InMemoryAuthenticator {
    async fn authenticate(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        match self.verify(credentials) {
            Ok(user) => {
                tracing::info!(role = user.role.as_str(), "staff signed in");
                Ok(Session::new(user.clone()))
            }
            Err(err) => {
                tracing::warn!(error = %err, "sign-in rejected");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn creds(email: &str, password: &str, role: Role) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: password.to_string(),
            role,
        }
    }

    #[tokio::test]
    async fn test_accepts_matching_account() {
        let auth = InMemoryAuthenticator::default();
        let session = auth
            .authenticate(&creds("kepsek@smanusantara.sch.id", "kepsek123", Role::Kepsek))
            .await
            .unwrap();
        assert_eq!(session.user.name, "Dr. Ahmad Suryadi, M.Pd");
        assert_eq!(session.role(), Role::Kepsek);
    }

    #[tokio::test]
    async fn test_email_is_case_insensitive() {
        let auth = InMemoryAuthenticator::default();
        let result = auth
            .authenticate(&creds(" Admin@SMANusantara.sch.id ", "admin123", Role::Admin))
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_rejects_wrong_password() {
        let auth = InMemoryAuthenticator::default();
        let err = auth
            .authenticate(&creds("admin@smanusantara.sch.id", "salah", Role::Admin))
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
    }

    #[tokio::test]
    async fn test_rejects_unknown_email() {
        let auth = InMemoryAuthenticator::default();
        let err = auth
            .authenticate(&creds("siapa@x.id", "admin123", Role::Admin))
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
    }

    #[tokio::test]
    async fn test_rejects_role_mismatch() {
        let auth = InMemoryAuthenticator::default();
        let err = auth
            .authenticate(&creds("budi@smanusantara.sch.id", "guru123", Role::Admin))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            AuthError::RoleMismatch {
                requested: Role::Admin,
                actual: Role::Guru
            }
        );
        assert_eq!(
            err.to_string(),
            "Akun ini terdaftar sebagai Guru, bukan Administrator"
        );
    }

    #[test]
    fn test_empty_fields_are_rejected_before_lookup() {
        let auth = InMemoryAuthenticator::new(Vec::new());
        let result = tokio_test::block_on(auth.authenticate(&creds("", "", Role::Guru)));
        assert_eq!(result.unwrap_err(), AuthError::MissingCredentials);
    }

    #[tokio::test]
    async fn test_no_accounts_is_unavailable() {
        let auth = InMemoryAuthenticator::new(Vec::new());
        let result = auth
            .authenticate(&creds("admin@smanusantara.sch.id", "admin123", Role::Admin))
            .await;
        assert!(matches!(result, Err(AuthError::Unavailable(_))));
    }
}
