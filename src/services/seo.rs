//! Sitemap and robots payloads for crawler discovery.

use std::fmt::Write;

use crate::domain::blog_post::BlogPostListQuery;
use crate::domain::product::ProductListQuery;
use crate::repository::{BlogPostReader, CategoryReader, ProductReader};
use crate::services::{ServiceError, ServiceResult};

/// Static public pages listed ahead of the dynamic slugs.
const STATIC_PAGES: &[(&str, &str, &str)] = &[
    ("", "daily", "1.0"),
    ("/produits", "daily", "0.9"),
    ("/soumissions", "monthly", "0.8"),
    ("/contact", "monthly", "0.7"),
    ("/about", "monthly", "0.6"),
    ("/blog", "daily", "0.8"),
];

/// Build the sitemap XML: static pages, active product slugs, published
/// article slugs and category filter links.
pub fn build_sitemap<R>(repo: &R, base_url: &str) -> ServiceResult<String>
where
    R: ProductReader + BlogPostReader + CategoryReader + ?Sized,
{
    let (_, products) = repo
        .list_products(ProductListQuery::new())
        .map_err(ServiceError::from)?;
    let (_, posts) = repo
        .list_blog_posts(BlogPostListQuery::new())
        .map_err(ServiceError::from)?;
    let categories = repo.list_categories().map_err(ServiceError::from)?;

    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );

    for (path, changefreq, priority) in STATIC_PAGES {
        write_url(&mut xml, &format!("{base_url}{path}"), None, changefreq, priority);
    }

    for product in &products {
        write_url(
            &mut xml,
            &format!("{base_url}/produits/{}", product.slug),
            Some(product.updated_at.format("%Y-%m-%d").to_string()),
            "weekly",
            "0.8",
        );
    }

    for post in &posts {
        write_url(
            &mut xml,
            &format!("{base_url}/blog/{}", post.slug),
            Some(post.updated_at.format("%Y-%m-%d").to_string()),
            "monthly",
            "0.7",
        );
    }

    for category in &categories {
        write_url(
            &mut xml,
            &format!("{base_url}/produits?category={}", category.slug),
            None,
            "weekly",
            "0.7",
        );
    }

    xml.push_str("</urlset>\n");
    Ok(xml)
}

fn write_url(xml: &mut String, loc: &str, lastmod: Option<String>, changefreq: &str, priority: &str) {
    // Writing to a String cannot fail; ignore the fmt::Result.
    let _ = write!(xml, "  <url>\n    <loc>{}</loc>\n", escape_xml(loc));
    if let Some(lastmod) = lastmod {
        let _ = write!(xml, "    <lastmod>{lastmod}</lastmod>\n");
    }
    let _ = write!(
        xml,
        "    <changefreq>{changefreq}</changefreq>\n    <priority>{priority}</priority>\n  </url>\n"
    );
}

fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Build the robots.txt body: everything public except the admin and API
/// surfaces, plus the sitemap link.
pub fn build_robots(base_url: &str) -> String {
    format!(
        "User-agent: *\nAllow: /\nDisallow: /admin/\nDisallow: /api/\n\nSitemap: {base_url}/sitemap.xml\n"
    )
}
