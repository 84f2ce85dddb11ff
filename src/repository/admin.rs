use diesel::prelude::*;

use crate::domain::admin::{Admin as DomainAdmin, NewAdmin as DomainNewAdmin};
use crate::models::admin::{Admin as DbAdmin, NewAdmin as DbNewAdmin};
use crate::repository::{AdminReader, AdminWriter, DieselRepository, RepositoryResult};

impl AdminReader for DieselRepository {
    fn get_admin_by_email(&self, email: &str) -> RepositoryResult<Option<DomainAdmin>> {
        use crate::schema::admins;

        let mut conn = self.conn()?;
        let admin = admins::table
            .filter(admins::email.eq(email))
            .first::<DbAdmin>(&mut conn)
            .optional()?;

        Ok(admin.map(Into::into))
    }
}

impl AdminWriter for DieselRepository {
    fn create_admin(&self, new_admin: &DomainNewAdmin) -> RepositoryResult<DomainAdmin> {
        use crate::schema::admins;

        let mut conn = self.conn()?;
        let db_new = DbNewAdmin::from(new_admin);

        let created = diesel::insert_into(admins::table)
            .values(&db_new)
            .get_result::<DbAdmin>(&mut conn)?;

        Ok(created.into())
    }
}
