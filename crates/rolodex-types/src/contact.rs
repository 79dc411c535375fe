use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A single contact record. The `name` field is the identity key: update and
/// delete address a record by its current name, and the backend matches names
/// case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

impl Contact {
    /// Build a validated contact. All three fields are trimmed; any field
    /// that is empty after trimming is rejected. This runs before every
    /// create/update so no request is ever sent with a missing field.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into().trim().to_string();
        let phone = phone.into().trim().to_string();
        let email = email.into().trim().to_string();

        if name.is_empty() {
            return Err(Error::EmptyField("name"));
        }
        if phone.is_empty() {
            return Err(Error::EmptyField("phone"));
        }
        if email.is_empty() {
            return Err(Error::EmptyField("email"));
        }

        Ok(Self { name, phone, email })
    }

    /// Case-insensitive identity match, mirroring the backend's lookup.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.trim().eq_ignore_ascii_case(name.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_all_fields() {
        let c = Contact::new("  Alice ", " 555-0100 ", " a@example.com  ").unwrap();
        assert_eq!(c.name, "Alice");
        assert_eq!(c.phone, "555-0100");
        assert_eq!(c.email, "a@example.com");
    }

    #[test]
    fn new_rejects_empty_fields() {
        assert_eq!(
            Contact::new("", "555", "a@x.com"),
            Err(Error::EmptyField("name"))
        );
        assert_eq!(
            Contact::new("A", "   ", "a@x.com"),
            Err(Error::EmptyField("phone"))
        );
        assert_eq!(Contact::new("A", "1", ""), Err(Error::EmptyField("email")));
    }

    #[test]
    fn is_named_ignores_case_and_whitespace() {
        let c = Contact::new("Alice", "555", "a@x.com").unwrap();
        assert!(c.is_named("alice"));
        assert!(c.is_named(" ALICE "));
        assert!(!c.is_named("alic"));
    }

    #[test]
    fn deserializes_with_missing_optional_fields() {
        let c: Contact = serde_json::from_str(r#"{"name":"Bob"}"#).unwrap();
        assert_eq!(c.name, "Bob");
        assert_eq!(c.phone, "");
        assert_eq!(c.email, "");
    }
}
