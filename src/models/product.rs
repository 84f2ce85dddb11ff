use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{NewProduct as DomainNewProduct, Product as DomainProduct};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub short_desc: Option<String>,
    pub specs: Option<String>,
    pub meta_title: Option<String>,
    pub meta_desc: Option<String>,
    pub keywords: Option<String>,
    pub image: Option<String>,
    pub min_quantity: Option<i32>,
    pub max_quantity: Option<i32>,
    pub price_range: Option<String>,
    pub quality: Option<String>,
    pub origin: Option<String>,
    pub is_active: bool,
    pub featured: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct<'a> {
    pub name: &'a str,
    pub slug: &'a str,
    pub description: &'a str,
    pub short_desc: Option<&'a str>,
    pub specs: Option<&'a str>,
    pub meta_title: Option<&'a str>,
    pub meta_desc: Option<&'a str>,
    pub keywords: Option<&'a str>,
    pub image: Option<&'a str>,
    pub min_quantity: Option<i32>,
    pub max_quantity: Option<i32>,
    pub price_range: Option<&'a str>,
    pub quality: Option<&'a str>,
    pub origin: Option<&'a str>,
    pub is_active: bool,
    pub featured: bool,
    pub updated_at: NaiveDateTime,
}

impl From<Product> for DomainProduct {
    fn from(value: Product) -> Self {
        Self {
            id: value.id,
            name: value.name,
            slug: value.slug,
            description: value.description,
            short_desc: value.short_desc,
            specs: value.specs,
            meta_title: value.meta_title,
            meta_desc: value.meta_desc,
            keywords: value.keywords,
            image: value.image,
            min_quantity: value.min_quantity,
            max_quantity: value.max_quantity,
            price_range: value.price_range,
            quality: value.quality,
            origin: value.origin,
            is_active: value.is_active,
            featured: value.featured,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewProduct> for NewProduct<'a> {
    fn from(value: &'a DomainNewProduct) -> Self {
        Self {
            name: value.name.as_str(),
            slug: value.slug.as_str(),
            description: value.description.as_str(),
            short_desc: value.short_desc.as_deref(),
            specs: value.specs.as_deref(),
            meta_title: value.meta_title.as_deref(),
            meta_desc: value.meta_desc.as_deref(),
            keywords: value.keywords.as_deref(),
            image: value.image.as_deref(),
            min_quantity: value.min_quantity,
            max_quantity: value.max_quantity,
            price_range: value.price_range.as_deref(),
            quality: value.quality.as_deref(),
            origin: value.origin.as_deref(),
            is_active: value.is_active,
            featured: value.featured,
            updated_at: value.updated_at,
        }
    }
}
