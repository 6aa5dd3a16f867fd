//! Catalog and settings baked into the site

use std::sync::{Arc, OnceLock};

use ptk_app::Settings;
use ptk_core::Catalog;
use ptk_html::Links;

const CATALOG_JSON: &str = include_str!("../../catalog/tools.json");

/// Shipped catalog, parsed once per page load
pub fn catalog() -> Arc<Catalog> {
    static CATALOG: OnceLock<Arc<Catalog>> = OnceLock::new();
    CATALOG
        .get_or_init(|| match Catalog::from_json_str(CATALOG_JSON) {
            Ok(catalog) => Arc::new(catalog),
            Err(e) => {
                log::error!("Shipped catalog is invalid: {}", e);
                Arc::new(Catalog::default())
            }
        })
        .clone()
}

/// Client-side routes of the site
pub fn links() -> Links {
    Links::new("/", "/tool")
}

pub fn settings() -> Settings {
    Settings {
        links: links(),
        ..Settings::default()
    }
}
