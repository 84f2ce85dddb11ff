use diesel::prelude::*;

use crate::domain::submission::{
    NewSubmission as DomainNewSubmission, Submission as DomainSubmission, SubmissionListQuery,
    SubmissionProduct,
};
use crate::models::submission::{NewSubmission as DbNewSubmission, Submission as DbSubmission};
use crate::repository::{
    DieselRepository, RepositoryResult, SubmissionReader, SubmissionWriter,
};

impl SubmissionReader for DieselRepository {
    fn get_submission_by_id(&self, id: i32) -> RepositoryResult<Option<DomainSubmission>> {
        use crate::schema::{products, submissions};

        let mut conn = self.conn()?;
        let row = submissions::table
            .inner_join(products::table)
            .filter(submissions::id.eq(id))
            .select((
                DbSubmission::as_select(),
                (products::name, products::slug),
            ))
            .first::<(DbSubmission, (String, String))>(&mut conn)
            .optional()?;

        Ok(row.map(|(submission, (name, slug))| {
            submission.into_domain(Some(SubmissionProduct { name, slug }))
        }))
    }

    fn list_submissions(
        &self,
        query: SubmissionListQuery,
    ) -> RepositoryResult<(usize, Vec<DomainSubmission>)> {
        use crate::schema::{products, submissions};

        let mut conn = self.conn()?;

        let mut count_query = submissions::table.into_boxed::<diesel::sqlite::Sqlite>();
        if let Some(status) = query.status {
            count_query = count_query.filter(submissions::status.eq(status.as_str()));
        }
        let total = count_query.count().get_result::<i64>(&mut conn)? as usize;

        let mut items = submissions::table
            .inner_join(products::table)
            .select((
                DbSubmission::as_select(),
                (products::name, products::slug),
            ))
            .into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(status) = query.status {
            items = items.filter(submissions::status.eq(status.as_str()));
        }

        items = items.order(submissions::created_at.desc());

        if let Some(pagination) = &query.pagination {
            items = items
                .offset(pagination.offset() as i64)
                .limit(pagination.per_page as i64);
        }

        let rows = items.load::<(DbSubmission, (String, String))>(&mut conn)?;

        let submissions = rows
            .into_iter()
            .map(|(submission, (name, slug))| {
                submission.into_domain(Some(SubmissionProduct { name, slug }))
            })
            .collect();

        Ok((total, submissions))
    }
}

impl SubmissionWriter for DieselRepository {
    fn create_submission(
        &self,
        new_submission: &DomainNewSubmission,
    ) -> RepositoryResult<DomainSubmission> {
        use crate::schema::submissions;

        let mut conn = self.conn()?;
        let db_new = DbNewSubmission::from(new_submission);

        let created = diesel::insert_into(submissions::table)
            .values(&db_new)
            .get_result::<DbSubmission>(&mut conn)?;

        Ok(created.into())
    }
}
