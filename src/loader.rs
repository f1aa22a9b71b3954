use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;

use crate::models::Catalog;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("catalog request failed: {0}")]
    Transport(String),
    #[error("catalog response malformed: {0}")]
    Malformed(String),
}

/// Where the catalog document comes from. The page build uses a fetch-backed
/// source; tests inject canned ones.
pub trait CatalogSource {
    #[allow(async_fn_in_trait)]
    async fn fetch_catalog(&self) -> Result<Catalog, LoadError>;
}

/// Fetches the catalog at most once and hands out the cached copy afterwards.
/// Failures are logged and swallowed here; callers only see presence/absence.
pub struct CatalogLoader<S> {
    source: S,
    cache: RefCell<Option<Rc<Catalog>>>,
}

impl<S: CatalogSource> CatalogLoader<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: RefCell::new(None),
        }
    }

    pub async fn load(&self) -> Option<Rc<Catalog>> {
        if let Some(catalog) = self.cache.borrow().as_ref() {
            return Some(Rc::clone(catalog));
        }

        match self.source.fetch_catalog().await {
            Ok(catalog) => {
                let catalog = Rc::new(catalog);
                *self.cache.borrow_mut() = Some(Rc::clone(&catalog));
                Some(catalog)
            }
            Err(err) => {
                log_error(&format!("Error loading apps: {}", err));
                None
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn log_error(message: &str) {
    web_sys::console::error_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
fn log_error(message: &str) {
    tracing::error!("{}", message);
}
