use crate::domain::admin::AdminProfile;
use crate::forms::auth::LoginForm;
use crate::repository::AdminReader;
use crate::services::{ServiceError, ServiceResult};

/// Verify admin credentials and return the client-facing profile.
///
/// An unknown email and a wrong password both map to
/// [`ServiceError::Unauthorized`]; callers must not distinguish the two, so
/// the response never reveals whether the account exists.
pub fn login<R>(repo: &R, form: &LoginForm) -> ServiceResult<AdminProfile>
where
    R: AdminReader + ?Sized,
{
    if form.is_blank() {
        return Err(ServiceError::Form(
            "Email and password are required".to_string(),
        ));
    }

    let admin = repo
        .get_admin_by_email(form.email.trim())
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::Unauthorized)?;

    let password_matches = bcrypt::verify(&form.password, &admin.password)?;
    if !password_matches {
        return Err(ServiceError::Unauthorized);
    }

    Ok(admin.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    use crate::domain::admin::Admin;
    use crate::repository::mock::MockAdminReader;

    fn datetime() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .unwrap_or_default()
    }

    fn stored_admin(email: &str, password: &str) -> Admin {
        Admin {
            id: 1,
            name: "admin1".to_string(),
            email: email.to_string(),
            password: bcrypt::hash(password, 4).expect("hashing"),
            role: "admin".to_string(),
            created_at: datetime(),
            updated_at: datetime(),
        }
    }

    fn credentials(email: &str, password: &str) -> LoginForm {
        LoginForm {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn blank_credentials_are_a_form_error() {
        let repo = MockAdminReader::new();

        let result = login(&repo, &credentials("", "secret"));

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn correct_credentials_return_profile_without_password() {
        let mut repo = MockAdminReader::new();
        repo.expect_get_admin_by_email()
            .times(1)
            .withf(|email| email == "admin1@example.com")
            .returning(|_| Ok(Some(stored_admin("admin1@example.com", "hunter22"))));

        let profile = login(&repo, &credentials("admin1@example.com", "hunter22"))
            .expect("expected success");

        assert_eq!(profile.email, "admin1@example.com");

        let value = serde_json::to_value(&profile).expect("serialization");
        assert!(value.get("password").is_none());
    }

    #[test]
    fn unknown_email_and_wrong_password_are_indistinguishable() {
        let mut repo = MockAdminReader::new();
        repo.expect_get_admin_by_email()
            .returning(|email| match email {
                "admin1@example.com" => Ok(Some(stored_admin("admin1@example.com", "hunter22"))),
                _ => Ok(None),
            });

        let wrong_password = login(&repo, &credentials("admin1@example.com", "wrong-pass"));
        let unknown_email = login(&repo, &credentials("ghost@example.com", "hunter22"));

        assert!(matches!(wrong_password, Err(ServiceError::Unauthorized)));
        assert!(matches!(unknown_email, Err(ServiceError::Unauthorized)));
    }

    #[test]
    fn email_is_trimmed_before_lookup() {
        let mut repo = MockAdminReader::new();
        repo.expect_get_admin_by_email()
            .times(1)
            .withf(|email| email == "admin1@example.com")
            .returning(|_| Ok(Some(stored_admin("admin1@example.com", "hunter22"))));

        let result = login(&repo, &credentials("  admin1@example.com  ", "hunter22"));

        assert!(result.is_ok());
    }
}
