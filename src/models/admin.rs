use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::admin::{Admin as DomainAdmin, NewAdmin as DomainNewAdmin};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::admins)]
pub struct Admin {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::admins)]
pub struct NewAdmin<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub role: &'a str,
    pub updated_at: NaiveDateTime,
}

impl From<Admin> for DomainAdmin {
    fn from(value: Admin) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
            password: value.password,
            role: value.role,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewAdmin> for NewAdmin<'a> {
    fn from(value: &'a DomainNewAdmin) -> Self {
        Self {
            name: value.name.as_str(),
            email: value.email.as_str(),
            password: value.password.as_str(),
            role: value.role.as_str(),
            updated_at: value.updated_at,
        }
    }
}
