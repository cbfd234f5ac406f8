//! Single-line text input used by the login form

/// Represents a single form field with its label and value
#[derive(Debug, Clone, Default)]
pub struct FormField {
    pub label: String,
    value: String,
    /// Render the value as bullets
    pub is_masked: bool,
}

impl FormField {
    /// Create a new text field
    pub fn text(label: &str) -> Self {
        Self {
            label: label.to_string(),
            value: String::new(),
            is_masked: false,
        }
    }

    /// Create a new field whose value is hidden on screen
    pub fn masked(label: &str) -> Self {
        Self {
            is_masked: true,
            ..Self::text(label)
        }
    }

    /// Create a new text field with initial value
    pub fn text_with_value(label: &str, value: String) -> Self {
        Self {
            value,
            ..Self::text(label)
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        if self.is_masked {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}
