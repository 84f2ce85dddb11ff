use diesel::prelude::*;

use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct, ProductListQuery,
};
use crate::models::category::ProductCategory;
use crate::models::product::{NewProduct as DbNewProduct, Product as DbProduct};
use crate::repository::{DieselRepository, ProductReader, ProductWriter, RepositoryResult};

impl ProductReader for DieselRepository {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<DomainProduct>> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let product = products::table
            .filter(products::id.eq(id))
            .first::<DbProduct>(&mut conn)
            .optional()?;

        Ok(product.map(Into::into))
    }

    fn get_product_by_slug(&self, slug: &str) -> RepositoryResult<Option<DomainProduct>> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let product = products::table
            .filter(products::slug.eq(slug))
            .first::<DbProduct>(&mut conn)
            .optional()?;

        Ok(product.map(Into::into))
    }

    fn list_products(
        &self,
        query: ProductListQuery,
    ) -> RepositoryResult<(usize, Vec<DomainProduct>)> {
        use crate::schema::{categories, product_categories, products};

        let mut conn = self.conn()?;

        let build = |query: &ProductListQuery| {
            let mut items = products::table.into_boxed::<diesel::sqlite::Sqlite>();

            if !query.include_inactive {
                items = items.filter(products::is_active.eq(true));
            }

            if query.featured_only {
                items = items.filter(products::featured.eq(true));
            }

            if let Some(term) = query.search.as_ref() {
                let pattern = format!("%{term}%");
                items = items.filter(
                    products::name
                        .like(pattern.clone())
                        .or(products::description.like(pattern)),
                );
            }

            if let Some(slug) = query.category_slug.as_ref() {
                let linked_ids = product_categories::table
                    .inner_join(categories::table)
                    .filter(categories::slug.eq(slug.clone()))
                    .select(product_categories::product_id);
                items = items.filter(products::id.eq_any(linked_ids));
            }

            items
        };

        let total = build(&query).count().get_result::<i64>(&mut conn)? as usize;

        let mut items = build(&query).order((products::featured.desc(), products::name.asc()));

        if let Some(pagination) = &query.pagination {
            items = items
                .offset(pagination.offset() as i64)
                .limit(pagination.per_page as i64);
        }

        let db_products = items.load::<DbProduct>(&mut conn)?;

        Ok((total, db_products.into_iter().map(Into::into).collect()))
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, new_product: &DomainNewProduct) -> RepositoryResult<DomainProduct> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let db_new = DbNewProduct::from(new_product);

        let created = diesel::insert_into(products::table)
            .values(&db_new)
            .get_result::<DbProduct>(&mut conn)?;

        Ok(created.into())
    }

    fn assign_category(&self, product_id: i32, category_id: i32) -> RepositoryResult<()> {
        use crate::schema::product_categories;

        let mut conn = self.conn()?;
        diesel::insert_into(product_categories::table)
            .values(&ProductCategory {
                product_id,
                category_id,
            })
            .execute(&mut conn)?;

        Ok(())
    }
}
