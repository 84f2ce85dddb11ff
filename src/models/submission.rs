use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::submission::{
    NewSubmission as DomainNewSubmission, Submission as DomainSubmission, SubmissionProduct,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::submissions)]
pub struct Submission {
    pub id: i32,
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
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::submissions)]
pub struct NewSubmission<'a> {
    pub supplier: &'a str,
    pub email: &'a str,
    pub phone: Option<&'a str>,
    pub company: Option<&'a str>,
    pub website: Option<&'a str>,
    pub product_id: i32,
    pub quantity: &'a str,
    pub price: Option<&'a str>,
    pub quality: Option<&'a str>,
    pub origin: &'a str,
    pub message: &'a str,
    pub certifications: Option<&'a str>,
    /// Always `PENDING` at insert time; the domain payload carries no status.
    pub status: &'a str,
    pub updated_at: NaiveDateTime,
}

impl Submission {
    /// Convert the row into its domain form, optionally attaching the minimal
    /// product fields resolved by a join.
    pub fn into_domain(self, product: Option<SubmissionProduct>) -> DomainSubmission {
        DomainSubmission {
            id: self.id,
            supplier: self.supplier,
            email: self.email,
            phone: self.phone,
            company: self.company,
            website: self.website,
            product_id: self.product_id,
            quantity: self.quantity,
            price: self.price,
            quality: self.quality,
            origin: self.origin,
            message: self.message,
            certifications: self.certifications,
            status: self.status.as_str().into(),
            product,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl From<Submission> for DomainSubmission {
    fn from(value: Submission) -> Self {
        value.into_domain(None)
    }
}

impl<'a> From<&'a DomainNewSubmission> for NewSubmission<'a> {
    fn from(value: &'a DomainNewSubmission) -> Self {
        Self {
            supplier: value.supplier.as_str(),
            email: value.email.as_str(),
            phone: value.phone.as_deref(),
            company: value.company.as_deref(),
            website: value.website.as_deref(),
            product_id: value.product_id,
            quantity: value.quantity.as_str(),
            price: value.price.as_deref(),
            quality: value.quality.as_deref(),
            origin: value.origin.as_str(),
            message: value.message.as_str(),
            certifications: value.certifications.as_deref(),
            status: crate::domain::submission::SubmissionStatus::Pending.as_str(),
            updated_at: value.updated_at,
        }
    }
}
