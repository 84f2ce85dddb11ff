use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::pagination::Pagination;

/// Lifecycle states of a supplier submission.
///
/// Submissions are created as [`SubmissionStatus::Pending`]; transitions
/// happen out-of-band (there is no status-editing surface on the site).
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionStatus {
    /// Awaiting review by the sourcing team.
    Pending,
    /// Reviewed and accepted as a supplier lead.
    Accepted,
    /// Reviewed and declined.
    Rejected,
}

impl Default for SubmissionStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl SubmissionStatus {
    /// Database and API text form of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Accepted => "ACCEPTED",
            Self::Rejected => "REJECTED",
        }
    }

    /// Parse the text form; returns `None` for unknown values.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "PENDING" => Some(Self::Pending),
            "ACCEPTED" => Some(Self::Accepted),
            "REJECTED" => Some(Self::Rejected),
            _ => None,
        }
    }
}

impl From<&str> for SubmissionStatus {
    fn from(value: &str) -> Self {
        Self::parse(value).unwrap_or_default()
    }
}

/// Minimal product fields embedded in a submission row for display.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SubmissionProduct {
    pub name: String,
    pub slug: String,
}

/// Domain representation of a supplier lead referencing a product.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Submission {
    /// Unique identifier of the submission.
    pub id: i32,
    /// Supplier contact name.
    pub supplier: String,
    /// Supplier contact email.
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub website: Option<String>,
    /// Identifier of the product this lead offers to supply.
    pub product_id: i32,
    /// Offered quantity, free text (for example `500kg`).
    pub quantity: String,
    /// Offered price, free text.
    pub price: Option<String>,
    /// Offered quality grade, free text.
    pub quality: Option<String>,
    /// Region of origin of the offered goods.
    pub origin: String,
    /// Free-text message from the supplier.
    pub message: String,
    /// Certification list, free text.
    pub certifications: Option<String>,
    /// Current review status.
    pub status: SubmissionStatus,
    /// Minimal product fields, populated when the query joins products.
    pub product: Option<SubmissionProduct>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new submission.
///
/// The payload intentionally has no status field: rows are always inserted
/// as [`SubmissionStatus::Pending`], whatever the client sent.
#[derive(Debug, Clone)]
pub struct NewSubmission {
    pub supplier: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub product_id: i32,
    pub quantity: String,
    pub price: Option<String>,
    pub quality: Option<String>,
    pub origin: String,
    pub message: String,
    pub certifications: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl NewSubmission {
    /// Build a new submission payload with the required fields and current
    /// timestamp.
    pub fn new(
        supplier: impl Into<String>,
        email: impl Into<String>,
        product_id: i32,
        quantity: impl Into<String>,
        origin: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let now = chrono::Local::now().naive_utc();
        Self {
            supplier: supplier.into(),
            email: email.into(),
            phone: None,
            company: None,
            website: None,
            product_id,
            quantity: quantity.into(),
            price: None,
            quality: None,
            origin: origin.into(),
            message: message.into(),
            certifications: None,
            updated_at: now,
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    pub fn with_quality(mut self, quality: impl Into<String>) -> Self {
        self.quality = Some(quality.into());
        self
    }

    pub fn with_certifications(mut self, certifications: impl Into<String>) -> Self {
        self.certifications = Some(certifications.into());
        self
    }
}

/// Query definition used to filter and paginate submissions.
#[derive(Debug, Clone, Default)]
pub struct SubmissionListQuery {
    /// Optional status filter.
    pub status: Option<SubmissionStatus>,
    /// Optional pagination options applied to the query.
    pub pagination: Option<Pagination>,
}

impl SubmissionListQuery {
    /// Construct a query matching all submissions, newest first.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter the results by review status.
    pub fn status(mut self, status: SubmissionStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Apply pagination to the query with the given page number and page size.
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_text() {
        for status in [
            SubmissionStatus::Pending,
            SubmissionStatus::Accepted,
            SubmissionStatus::Rejected,
        ] {
            assert_eq!(SubmissionStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn unknown_status_text_is_rejected() {
        assert_eq!(SubmissionStatus::parse("SHIPPED"), None);
    }

    #[test]
    fn status_serializes_screaming_snake_case() {
        let value = serde_json::to_value(SubmissionStatus::Pending).expect("serialization");
        assert_eq!(value, serde_json::json!("PENDING"));
    }
}
