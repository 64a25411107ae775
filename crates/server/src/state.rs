use viewdiful_core::{Catalog, Config};

/// Shared application state
///
/// Holds the configuration and the immutable catalog for the lifetime of
/// the process; handlers receive it behind an `Arc` and only ever read it.
pub struct AppState {
    config: Config,
    catalog: Catalog,
}

impl AppState {
    pub fn new(config: Config, catalog: Catalog) -> Self {
        Self { config, catalog }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
