// Contact form state and validation
//
// Three required fields. Validation runs on submit: all fields must be
// non-empty after trimming and the email must look like local@domain.tld.
// Failures are plain values surfaced to the notification slot; the fields
// are left untouched so the user can correct them. A successful submit
// clears the form. Nothing is ever sent anywhere.

use regex::Regex;
use std::fmt;

/// Shape check only: something@something.tld, no whitespace.
const EMAIL_SHAPE: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// The form's fields, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Message,
            Field::Message => Field::Name,
        }
    }
}

/// Why a submit was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    MissingFields,
    InvalidEmail,
}

impl FormError {
    /// User-facing message for the notification.
    pub fn message(&self) -> &'static str {
        match self {
            FormError::MissingFields => "Please fill in all fields",
            FormError::InvalidEmail => "Please enter a valid email address",
        }
    }
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for FormError {}

/// The contact form's current input.
#[derive(Debug)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    email_shape: Regex,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            // Pattern is a literal; compilation cannot fail
            email_shape: Regex::new(EMAIL_SHAPE).unwrap(),
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    /// Check the current input without consuming it.
    pub fn validate(&self) -> Result<(), FormError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(FormError::MissingFields);
        }
        if !self.email_shape.is_match(email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }

    /// Validate and, on success, reset the form. On failure the input is
    /// preserved for correction.
    pub fn submit(&mut self) -> Result<(), FormError> {
        self.validate()?;
        self.name.clear();
        self.email.clear();
        self.message.clear();
        Ok(())
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(name: &str, email: &str, message: &str) -> ContactForm {
        let mut form = ContactForm::new();
        form.name = name.to_string();
        form.email = email.to_string();
        form.message = message.to_string();
        form
    }

    #[test]
    fn test_empty_field_rejected_and_preserved() {
        let mut form = filled("", "x@y.com", "hi");
        assert_eq!(form.submit(), Err(FormError::MissingFields));
        assert_eq!(form.email, "x@y.com");
        assert_eq!(form.message, "hi");
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let mut form = filled("   ", "x@y.com", "hi");
        assert_eq!(form.submit(), Err(FormError::MissingFields));
    }

    #[test]
    fn test_malformed_email_rejected() {
        let mut form = filled("A", "bad-email", "hi");
        assert_eq!(form.submit(), Err(FormError::InvalidEmail));
        assert_eq!(form.name, "A");
    }

    #[test]
    fn test_email_needs_a_dotted_domain() {
        assert_eq!(
            filled("A", "a@b", "hi").validate(),
            Err(FormError::InvalidEmail)
        );
        assert_eq!(
            filled("A", "a b@c.com", "hi").validate(),
            Err(FormError::InvalidEmail)
        );
        assert!(filled("A", "a@b.co", "hi").validate().is_ok());
    }

    #[test]
    fn test_successful_submit_clears_fields() {
        let mut form = filled("A", "a@b.co", "hi");
        assert!(form.submit().is_ok());
        assert!(form.name.is_empty());
        assert!(form.email.is_empty());
        assert!(form.message.is_empty());
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed_for_validation() {
        let form = filled("  A  ", "  a@b.co  ", " hi ");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_field_tab_order_cycles() {
        assert_eq!(Field::Name.next(), Field::Email);
        assert_eq!(Field::Email.next(), Field::Message);
        assert_eq!(Field::Message.next(), Field::Name);
    }
}
