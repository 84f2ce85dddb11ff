use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::submission::NewSubmission;
use crate::forms::empty_string_as_none;

/// Supplier lead payload accepted by `POST /api/soumissions`.
///
/// Field names are camelCase on the wire (`productId`, `acceptTerms`).
/// Messages mirror the public site's language.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionForm {
    #[serde(default)]
    #[validate(length(min = 2, message = "Le nom est requis"))]
    pub supplier: String,
    #[serde(default)]
    #[validate(email(message = "Email invalide"))]
    pub email: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub company: Option<String>,
    /// Optional; the empty string counts as absent, anything else must be a
    /// well-formed URL.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(url(message = "URL invalide"))]
    pub website: Option<String>,
    #[validate(required(message = "Veuillez sélectionner un produit"))]
    pub product_id: Option<i32>,
    #[serde(default)]
    #[validate(length(min = 1, message = "La quantité est requise"))]
    pub quantity: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub price: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub quality: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, message = "L'origine est requise"))]
    pub origin: String,
    #[serde(default)]
    #[validate(length(min = 10, message = "Veuillez fournir plus de détails (min. 10 caractères)"))]
    pub message: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub certifications: Option<String>,
    /// Must be `true`; a missing field deserializes to `false` and fails.
    #[serde(default)]
    #[validate(custom(function = accepted, message = "Vous devez accepter les conditions"))]
    pub accept_terms: bool,
}

fn accepted(value: &bool) -> Result<(), ValidationError> {
    if *value {
        Ok(())
    } else {
        Err(ValidationError::new("accepted"))
    }
}

impl SubmissionForm {
    /// Convert the validated payload into a domain `NewSubmission`.
    ///
    /// Callers must run [`Validate::validate`] first; the fallback product id
    /// of 0 never survives the create service's existence check.
    pub fn into_new_submission(self) -> NewSubmission {
        let mut new_submission = NewSubmission::new(
            self.supplier,
            self.email,
            self.product_id.unwrap_or(0),
            self.quantity,
            self.origin,
            self.message,
        );

        if let Some(phone) = self.phone {
            new_submission = new_submission.with_phone(phone);
        }
        if let Some(company) = self.company {
            new_submission = new_submission.with_company(company);
        }
        if let Some(website) = self.website {
            new_submission = new_submission.with_website(website);
        }
        if let Some(price) = self.price {
            new_submission = new_submission.with_price(price);
        }
        if let Some(quality) = self.quality {
            new_submission = new_submission.with_quality(quality);
        }
        if let Some(certifications) = self.certifications {
            new_submission = new_submission.with_certifications(certifications);
        }

        new_submission
    }
}
