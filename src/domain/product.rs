use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::pagination::Pagination;

/// Domain representation of a catalog product.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Product {
    /// Unique identifier of the product.
    pub id: i32,
    /// Human-readable name of the product.
    pub name: String,
    /// Unique URL-safe identifier used in `/produits/{slug}`.
    pub slug: String,
    /// Long-form HTML description shown on the detail page.
    pub description: String,
    /// Short description shown in listing cards.
    pub short_desc: Option<String>,
    /// Free-text technical specifications block.
    pub specs: Option<String>,
    /// SEO title override.
    pub meta_title: Option<String>,
    /// SEO description override.
    pub meta_desc: Option<String>,
    /// SEO keyword list.
    pub keywords: Option<String>,
    /// Path to the product image under the static assets root.
    pub image: Option<String>,
    /// Minimum order quantity in kilograms.
    pub min_quantity: Option<i32>,
    /// Maximum order quantity in kilograms.
    pub max_quantity: Option<i32>,
    /// Indicative price range, free text (for example `850-1200 EUR/kg`).
    pub price_range: Option<String>,
    /// Quality grade, free text.
    pub quality: Option<String>,
    /// Region of origin, free text.
    pub origin: Option<String>,
    /// Whether the product is visible on the public site.
    pub is_active: bool,
    /// Whether the product is highlighted on the home page.
    pub featured: bool,
    /// Timestamp for when the product record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the product record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new product.
#[derive(Debug, Clone)]
pub struct NewProduct {
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
    pub updated_at: NaiveDateTime,
}

impl NewProduct {
    /// Build a new product payload with the supplied name, slug and
    /// description; the product starts active and not featured.
    pub fn new(
        name: impl Into<String>,
        slug: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let now = chrono::Local::now().naive_utc();
        Self {
            name: name.into(),
            slug: slug.into(),
            description: description.into(),
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
            is_active: true,
            featured: false,
            updated_at: now,
        }
    }

    pub fn with_short_desc(mut self, short_desc: impl Into<String>) -> Self {
        self.short_desc = Some(short_desc.into());
        self
    }

    pub fn with_specs(mut self, specs: impl Into<String>) -> Self {
        self.specs = Some(specs.into());
        self
    }

    pub fn with_seo(
        mut self,
        meta_title: impl Into<String>,
        meta_desc: impl Into<String>,
        keywords: impl Into<String>,
    ) -> Self {
        self.meta_title = Some(meta_title.into());
        self.meta_desc = Some(meta_desc.into());
        self.keywords = Some(keywords.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_quantity_bounds(mut self, min: i32, max: i32) -> Self {
        self.min_quantity = Some(min);
        self.max_quantity = Some(max);
        self
    }

    pub fn with_price_range(mut self, price_range: impl Into<String>) -> Self {
        self.price_range = Some(price_range.into());
        self
    }

    pub fn with_quality(mut self, quality: impl Into<String>) -> Self {
        self.quality = Some(quality.into());
        self
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    /// Insert the product hidden from the public site.
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
}

/// Query definition used to list catalog products.
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    /// Optional name or description search term.
    pub search: Option<String>,
    /// Restrict to products linked to the category with this slug.
    pub category_slug: Option<String>,
    /// Whether inactive products should be included in the results.
    pub include_inactive: bool,
    /// Restrict to featured products.
    pub featured_only: bool,
    /// Optional pagination options applied to the query.
    pub pagination: Option<Pagination>,
}

impl ProductListQuery {
    /// Construct a query matching all active products.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter the results by a search term applied to the name or description.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Filter the results to products linked to the category slug.
    pub fn category(mut self, slug: impl Into<String>) -> Self {
        self.category_slug = Some(slug.into());
        self
    }

    /// Include inactive products in the results.
    pub fn include_inactive(mut self) -> Self {
        self.include_inactive = true;
        self
    }

    /// Restrict the results to featured products.
    pub fn featured_only(mut self) -> Self {
        self.featured_only = true;
        self
    }

    /// Apply pagination to the query with the given page number and page size.
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}
