//! Staff authentication: the port, an in-memory account list and the remembered login

mod memory;
mod store;
mod traits;

pub use memory::{default_accounts, Account, InMemoryAuthenticator};
pub use store::SessionStore;
pub use traits::{AuthError, AuthPort};

#[cfg(test)]
pub use traits::MockAuthPort;
