/// Runtime configuration assembled from environment variables in `main`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Public origin of the site, used for sitemap and robots links.
    pub base_url: String,
}
