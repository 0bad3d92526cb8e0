//! User value shapes for the two registration variants.

use serde::{Deserialize, Serialize};

use crate::validate::{ValidationError, Validator};

/// Registration payload, variant A: the minimal create-user shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Email address; must not contain the substring `"admin"`.
    pub email: String,
    /// Chosen username.
    pub username: String,
    /// Password.
    pub password: String,
    /// Must equal `password`.
    pub confirm_password: String,
}

impl User {
    /// Validates the email ban and the password match.
    ///
    /// # Errors
    ///
    /// Returns every violated constraint.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        v.check_forbidden_substring("email", &self.email, "admin");
        v.check_fields_match(
            "confirm_password",
            &self.password,
            &self.confirm_password,
            "passwords do not match",
        );
        v.finish()
    }
}

/// Gender, a closed enumeration. Any other literal is rejected at
/// deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
    /// Other or undisclosed.
    Other,
}

/// Registration payload, variant B: the full signup shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    /// First name, at most 50 characters.
    pub firstname: String,
    /// Last name, at most 50 characters.
    pub lastname: String,
    /// Username, at most 20 characters.
    pub username: String,
    /// Date of birth.
    pub date_of_birth: String,
    /// Email address.
    pub email: String,
    /// Gender from the closed enumeration.
    pub gender: Gender,
    /// Phone number, at most 20 characters.
    pub phone: String,
    /// Password.
    pub password: String,
    /// Must equal `password`.
    pub confirm_password: String,
}

impl Registration {
    /// Validates the length bounds and the password match.
    ///
    /// # Errors
    ///
    /// Returns every violated constraint.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        v.check_max_len("firstname", &self.firstname, 50);
        v.check_max_len("lastname", &self.lastname, 50);
        v.check_max_len("username", &self.username, 20);
        v.check_max_len("phone", &self.phone, 20);
        v.check_fields_match(
            "confirm_password",
            &self.password,
            &self.confirm_password,
            "passwords do not match",
        );
        v.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration(username: &str) -> Registration {
        Registration {
            firstname: "Ada".to_string(),
            lastname: "Lovelace".to_string(),
            username: username.to_string(),
            date_of_birth: "1815-12-10".to_string(),
            email: "ada@example.com".to_string(),
            gender: Gender::Female,
            phone: "555-0100".to_string(),
            password: "secret".to_string(),
            confirm_password: "secret".to_string(),
        }
    }

    #[test]
    fn test_admin_email_rejected() {
        let user = User {
            email: "admin@example.com".to_string(),
            username: "ada".to_string(),
            password: "secret".to_string(),
            confirm_password: "secret".to_string(),
        };
        let err = user.validate().unwrap_err();
        assert_eq!(err.violations[0].field, "email");
    }

    #[test]
    fn test_plain_email_accepted() {
        let user = User {
            email: "user@example.com".to_string(),
            username: "ada".to_string(),
            password: "secret".to_string(),
            confirm_password: "secret".to_string(),
        };
        assert!(user.validate().is_ok());
    }

    #[test]
    fn test_password_mismatch_rejected() {
        let mut reg = registration("ada");
        reg.confirm_password = "different".to_string();
        let err = reg.validate().unwrap_err();
        assert_eq!(err.violations[0].field, "confirm_password");
    }

    #[test]
    fn test_username_length_is_a_maximum() {
        let reg = registration("exactly-twenty-chars");
        assert!(reg.validate().is_ok());

        let reg = registration("twenty-one-characters");
        let err = reg.validate().unwrap_err();
        assert_eq!(err.violations[0].field, "username");
    }

    #[test]
    fn test_gender_rejects_unknown_literal() {
        let ok: Result<Gender, _> = serde_json::from_str(r#""female""#);
        assert!(ok.is_ok());
        let bad: Result<Gender, _> = serde_json::from_str(r#""unknown""#);
        assert!(bad.is_err());
    }
}
