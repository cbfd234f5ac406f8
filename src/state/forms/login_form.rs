//! Form trait and the staff login form

use super::field::FormField;
use crate::state::session::{Credentials, Role};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    /// Text field under the cursor, if the focused row takes typed input
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

pub const LOGIN_EMAIL: usize = 0;
pub const LOGIN_PASSWORD: usize = 1;
pub const LOGIN_ROLE: usize = 2;
pub const LOGIN_BUTTON: usize = 3;

#[derive(Debug, Clone)]
pub struct LoginForm {
    pub email: FormField,
    pub password: FormField,
    pub role: Role,
    pub active_field_index: usize,
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            email: FormField::text("Email"),
            password: FormField::masked("Password"),
            role: Role::Admin,
            active_field_index: LOGIN_EMAIL,
        }
    }

    /// Pre-fill the email remembered from the last session and focus the password
    pub fn with_remembered_email(email: String) -> Self {
        Self {
            email: FormField::text_with_value("Email", email),
            active_field_index: LOGIN_PASSWORD,
            ..Self::new()
        }
    }

    pub fn is_role_active(&self) -> bool {
        self.active_field_index == LOGIN_ROLE
    }

    pub fn is_button_active(&self) -> bool {
        self.active_field_index == LOGIN_BUTTON
    }

    pub fn cycle_role(&mut self, forward: bool) {
        self.role = self.role.cycle(forward);
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.as_text().trim().to_string(),
            password: self.password.as_text().to_string(),
            role: self.role,
        }
    }

    /// Forget the password after an attempt, keep everything else
    pub fn clear_password(&mut self) {
        self.password.clear();
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for LoginForm {
    fn field_count(&self) -> usize {
        4 // email, password, role, button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(LOGIN_BUTTON);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            LOGIN_EMAIL => Some(&mut self.email),
            LOGIN_PASSWORD => Some(&mut self.password),
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            LOGIN_EMAIL => Some(&self.email),
            LOGIN_PASSWORD => Some(&self.password),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_wraps() {
        let mut form = LoginForm::new();
        form.prev_field();
        assert!(form.is_button_active());
        form.next_field();
        assert_eq!(form.active_field(), LOGIN_EMAIL);
    }

    #[test]
    fn test_typing_goes_to_active_text_field() {
        let mut form = LoginForm::new();
        for c in "guru@x.id".chars() {
            form.get_active_field_mut().unwrap().push_char(c);
        }
        form.next_field();
        form.get_active_field_mut().unwrap().push_char('p');
        form.next_field();
        assert!(form.get_active_field_mut().is_none());

        let creds = form.credentials();
        assert_eq!(creds.email, "guru@x.id");
        assert_eq!(creds.password, "p");
        assert_eq!(creds.role, Role::Admin);
    }

    #[test]
    fn test_remembered_email_focuses_password() {
        let form = LoginForm::with_remembered_email("admin@x.id".to_string());
        assert_eq!(form.active_field(), LOGIN_PASSWORD);
        assert_eq!(form.email.as_text(), "admin@x.id");
    }

    #[test]
    fn test_set_active_field_clamps() {
        let mut form = LoginForm::new();
        form.set_active_field(9);
        assert!(form.is_button_active());
    }
}
