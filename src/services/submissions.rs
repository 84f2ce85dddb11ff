use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::submission::{Submission, SubmissionListQuery, SubmissionStatus};
use crate::forms::submissions::SubmissionForm;
use crate::forms::validation_details;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, PageInfo, Pagination};
use crate::repository::{ProductReader, SubmissionReader, SubmissionWriter};
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted by the submissions list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct SubmissionsQuery {
    /// Optional status filter (`PENDING`, `ACCEPTED`, `REJECTED`).
    pub status: Option<String>,
    /// Page requested by the client (1-based).
    pub page: Option<usize>,
    /// Page size requested by the client.
    pub limit: Option<usize>,
}

/// One page of submissions plus pagination metadata, serialized as the list
/// endpoint's response body.
#[derive(Debug, Serialize)]
pub struct SubmissionsPage {
    pub submissions: Vec<Submission>,
    pub pagination: PageInfo,
}

/// Validate a supplier lead and persist it.
///
/// The referenced product must exist; the stored status is always PENDING,
/// whatever the client sent.
pub fn create_submission<R>(repo: &R, form: SubmissionForm) -> ServiceResult<Submission>
where
    R: ProductReader + SubmissionWriter + ?Sized,
{
    if let Err(errors) = form.validate() {
        return Err(ServiceError::Validation(validation_details(&errors)));
    }

    let product_id = form.product_id.unwrap_or(0);
    if repo
        .get_product_by_id(product_id)
        .map_err(ServiceError::from)?
        .is_none()
    {
        return Err(ServiceError::NotFound);
    }

    let created = repo
        .create_submission(&form.into_new_submission())
        .map_err(ServiceError::from)?;

    // TODO: notify the sourcing team and confirm to the supplier by email
    // once an SMTP relay is provisioned.

    Ok(created)
}

/// Load a page of submissions, newest first, optionally filtered by status.
///
/// Unknown status values are ignored rather than rejected, matching the
/// permissive filter the endpoint has always exposed.
pub fn list_submissions<R>(repo: &R, query: SubmissionsQuery) -> ServiceResult<SubmissionsPage>
where
    R: SubmissionReader + ?Sized,
{
    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(DEFAULT_ITEMS_PER_PAGE).max(1);

    let mut list_query = SubmissionListQuery::new().paginate(page, limit);
    if let Some(status) = query.status.as_deref().and_then(SubmissionStatus::parse) {
        list_query = list_query.status(status);
    }

    let (total, submissions) = repo
        .list_submissions(list_query)
        .map_err(ServiceError::from)?;

    Ok(SubmissionsPage {
        submissions,
        pagination: PageInfo::new(
            Pagination {
                page,
                per_page: limit,
            },
            total,
        ),
    })
}
