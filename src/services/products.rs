use serde::Deserialize;

use crate::domain::category::Category;
use crate::domain::product::{Product, ProductListQuery};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{CategoryReader, ProductReader};
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted by the catalog index page.
#[derive(Debug, Default, Deserialize)]
pub struct ProductsQuery {
    /// Optional search string entered by the user.
    pub search: Option<String>,
    /// Optional category slug filter.
    pub category: Option<String>,
    /// Page requested by the UI (1-based).
    pub page: Option<usize>,
}

/// Data required to render the catalog index template.
pub struct ProductsPageData {
    /// Paginated list of active products.
    pub products: Paginated<Product>,
    /// All categories, for the filter bar.
    pub categories: Vec<Category>,
    /// Search query echoed back to the view when present.
    pub search: Option<String>,
    /// Selected category echoed back to the view when present.
    pub category: Option<String>,
}

/// Loads the catalog overview page.
pub fn load_products_page<R>(repo: &R, query: ProductsQuery) -> ServiceResult<ProductsPageData>
where
    R: ProductReader + CategoryReader + ?Sized,
{
    let ProductsQuery {
        search,
        category,
        page,
    } = query;

    let page = page.unwrap_or(1).max(1);
    let mut list_query = ProductListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);

    if let Some(term) = search.as_ref() {
        list_query = list_query.search(term);
    }

    if let Some(slug) = category.as_ref() {
        list_query = list_query.category(slug);
    }

    let (total, items) = repo.list_products(list_query).map_err(ServiceError::from)?;
    let categories = repo.list_categories().map_err(ServiceError::from)?;

    let total_pages = total.div_ceil(DEFAULT_ITEMS_PER_PAGE);
    let products = Paginated::new(items, page, total_pages);

    Ok(ProductsPageData {
        products,
        categories,
        search,
        category,
    })
}

/// Loads one product for its detail page.
///
/// Inactive products are hidden from the public site, so they answer the
/// same way a missing slug does.
pub fn load_product_page<R>(repo: &R, slug: &str) -> ServiceResult<Product>
where
    R: ProductReader + ?Sized,
{
    let product = repo
        .get_product_by_slug(slug)
        .map_err(ServiceError::from)?
        .filter(|product| product.is_active)
        .ok_or(ServiceError::NotFound)?;

    Ok(product)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    use crate::repository::RepositoryResult;
    use crate::repository::mock::{MockCategoryReader, MockProductReader};

    fn datetime() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .unwrap_or_default()
    }

    fn sample_product(id: i32, slug: &str, is_active: bool) -> Product {
        Product {
            id,
            name: "Holothuria Edulis Premium".to_string(),
            slug: slug.to_string(),
            description: "<p>Premium</p>".to_string(),
            short_desc: None,
            specs: None,
            meta_title: None,
            meta_desc: None,
            keywords: None,
            image: None,
            min_quantity: None,
            max_quantity: None,
            price_range: None,
            quality: None,
            origin: None,
            is_active,
            featured: false,
            created_at: datetime(),
            updated_at: datetime(),
        }
    }

    struct FakeRepo {
        products: MockProductReader,
        categories: MockCategoryReader,
    }

    impl FakeRepo {
        fn new() -> Self {
            Self {
                products: MockProductReader::new(),
                categories: MockCategoryReader::new(),
            }
        }
    }

    impl ProductReader for FakeRepo {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>> {
            self.products.get_product_by_id(id)
        }

        fn get_product_by_slug(&self, slug: &str) -> RepositoryResult<Option<Product>> {
            self.products.get_product_by_slug(slug)
        }

        fn list_products(
            &self,
            query: ProductListQuery,
        ) -> RepositoryResult<(usize, Vec<Product>)> {
            self.products.list_products(query)
        }
    }

    impl CategoryReader for FakeRepo {
        fn get_category_by_slug(&self, slug: &str) -> RepositoryResult<Option<Category>> {
            self.categories.get_category_by_slug(slug)
        }

        fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
            self.categories.list_categories()
        }
    }

    #[test]
    fn catalog_page_forwards_filters() {
        let mut repo = FakeRepo::new();
        repo.products
            .expect_list_products()
            .times(1)
            .withf(|query| {
                assert_eq!(query.search.as_deref(), Some("scabra"));
                assert_eq!(query.category_slug.as_deref(), Some("holothurie-sechee"));
                assert!(!query.include_inactive);
                true
            })
            .returning(|_| Ok((1, vec![sample_product(1, "holothuria-scabra-grade-a", true)])));
        repo.categories
            .expect_list_categories()
            .times(1)
            .returning(|| Ok(Vec::new()));

        let query = ProductsQuery {
            search: Some("scabra".to_string()),
            category: Some("holothurie-sechee".to_string()),
            page: None,
        };

        let data = load_products_page(&repo, query).expect("expected success");
        assert_eq!(data.products.items.len(), 1);
        assert_eq!(data.search.as_deref(), Some("scabra"));
    }

    #[test]
    fn inactive_product_detail_is_not_found() {
        let mut repo = MockProductReader::new();
        repo.expect_get_product_by_slug()
            .times(1)
            .returning(|slug| Ok(Some(sample_product(1, slug, false))));

        let result = load_product_page(&repo, "holothuria-edulis-premium");

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn missing_product_detail_is_not_found() {
        let mut repo = MockProductReader::new();
        repo.expect_get_product_by_slug()
            .times(1)
            .returning(|_| Ok(None));

        let result = load_product_page(&repo, "no-such-slug");

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }
}
