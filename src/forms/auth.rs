use serde::Deserialize;
use validator::Validate;

/// Credentials accepted by the login endpoint and the `/admin` form.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(email(message = "Format d'email invalide"))]
    pub email: String,
    #[validate(length(min = 6, message = "Le mot de passe doit contenir au moins 6 caractères"))]
    pub password: String,
}

impl LoginForm {
    /// Whether either credential is missing or blank.
    ///
    /// The API contract answers a plain 400 for absent credentials before any
    /// lookup happens, so this check is separate from schema validation.
    pub fn is_blank(&self) -> bool {
        self.email.trim().is_empty() || self.password.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::validation_details;

    #[test]
    fn valid_credentials_pass() {
        let form = LoginForm {
            email: "admin1@example.com".to_string(),
            password: "secret-password".to_string(),
        };

        assert!(form.validate().is_ok());
        assert!(!form.is_blank());
    }

    #[test]
    fn short_password_is_rejected_with_message() {
        let form = LoginForm {
            email: "admin1@example.com".to_string(),
            password: "abc".to_string(),
        };

        let errors = form.validate().expect_err("expected validation failure");
        let details = validation_details(&errors);
        let messages = details.get("password").expect("password messages");
        assert!(messages[0].contains("6 caractères"));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let form = LoginForm {
            email: "not-an-email".to_string(),
            password: "secret-password".to_string(),
        };

        let errors = form.validate().expect_err("expected validation failure");
        assert!(validation_details(&errors).contains_key("email"));
    }

    #[test]
    fn blank_credentials_are_detected() {
        let form = LoginForm {
            email: "  ".to_string(),
            password: "secret-password".to_string(),
        };
        assert!(form.is_blank());
    }
}
