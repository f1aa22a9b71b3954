use serde::{Deserialize, Serialize};

/// Root of the catalog document served at the data path. The studio block is
/// carried through untouched for page scripts listening on the loaded event;
/// rendering never reads it.
#[derive(Clone, Default, Deserialize, Serialize)]
pub struct Catalog {
    #[serde(default)]
    pub studio: serde_json::Value,
    #[serde(default)]
    pub apps: Vec<Application>,
}

impl Catalog {
    pub fn find(&self, id: &str) -> Option<&Application> {
        self.apps.iter().find(|app| app.id == id)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AppStatus {
    Published,
    ComingSoon,
    /// Anything the catalog ships that we do not recognize. Rendered the same
    /// as coming_soon: no store actions, no metadata.
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub status: AppStatus,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub downloads: String,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub content_rating: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub in_app_purchases: bool,
    #[serde(default)]
    pub contains_ads: bool,
    #[serde(default)]
    pub play_store_url: Option<String>,
    #[serde(default)]
    pub app_store_url: Option<String>,
}

impl Application {
    pub fn is_published(&self) -> bool {
        self.status == AppStatus::Published
    }
}
