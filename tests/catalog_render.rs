use std::rc::Rc;

use app_showcase::loader::{CatalogLoader, CatalogSource, LoadError};
use app_showcase::markup::{self, CardStyle};
use app_showcase::models::Catalog;

const CATALOG_JSON: &str = r#"{
    "studio": {"name": "Naseer Studio"},
    "apps": [
        {
            "id": "x",
            "name": "X",
            "status": "published",
            "rating": 4.5,
            "downloads": "10K+",
            "size": "20MB",
            "features": ["a", "b"],
            "playStoreUrl": "https://play/x"
        }
    ]
}"#;

struct JsonSource {
    body: &'static str,
}

impl CatalogSource for JsonSource {
    async fn fetch_catalog(&self) -> Result<Catalog, LoadError> {
        serde_json::from_str(self.body).map_err(|err| LoadError::Malformed(err.to_string()))
    }
}

#[tokio::test]
async fn grid_renders_published_card_from_wire_json() {
    let loader = CatalogLoader::new(JsonSource { body: CATALOG_JSON });
    let catalog = loader.load().await.expect("catalog");

    let grid = markup::grid_markup(&catalog, CardStyle::App);
    assert!(grid.contains("<h3>X</h3>"));
    assert!(grid.contains("<li>a</li>"));
    assert!(grid.contains("<li>b</li>"));
    assert!(grid.contains("⭐ 4.5"));
    assert!(grid.contains(r#"href="https://play/x""#));
    assert!(grid.contains(r#"rel="noopener noreferrer""#));
    assert!(grid.contains(r#"href="/naseerstudio/apps/x/""#));
}

#[tokio::test]
async fn detail_of_cached_catalog_shows_single_store_action() {
    let loader = CatalogLoader::new(JsonSource { body: CATALOG_JSON });
    let catalog = loader.load().await.expect("catalog");
    let cached = loader.load().await.expect("cached catalog");
    assert!(Rc::ptr_eq(&catalog, &cached));

    let app = catalog.find("x").expect("app x");
    let detail = markup::app_detail(app, "January 1, 2024");
    assert!(detail.contains("Get it on Google Play"));
    assert!(!detail.contains("Download on App Store"));
}

#[tokio::test]
async fn malformed_catalog_yields_no_result() {
    let loader = CatalogLoader::new(JsonSource { body: "{not json" });
    assert!(loader.load().await.is_none());
}
