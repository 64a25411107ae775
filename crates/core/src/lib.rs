pub mod catalog;
pub mod config;
pub mod sitemap;

pub use catalog::{Catalog, CatalogError, Segment, VideoRecord, DEFAULT_PAGE_LIMIT};
pub use config::{
    load_config, load_config_from_str, validate_config, CatalogConfig, Config, ConfigError,
    ServerConfig, SitemapConfig,
};
pub use sitemap::build_sitemap;
