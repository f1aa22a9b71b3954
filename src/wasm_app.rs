use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{CustomEvent, CustomEventInit, Document, Element};

use crate::loader::{CatalogLoader, CatalogSource, LoadError};
use crate::markup::{self, CardStyle};
use crate::models::Catalog;

const CATALOG_URL: &str = "/naseerstudio/data/apps.json";
const DEFAULT_GRID_SELECTOR: &str = "#appsGrid";
const LOADED_EVENT: &str = "appsLoaded";

thread_local! {
    // One loader per page; render entry points all borrow this instance so
    // the catalog is fetched at most once per page lifetime.
    static LOADER: Rc<CatalogLoader<FetchCatalogSource>> = Rc::new(CatalogLoader::new(
        FetchCatalogSource {
            url: CATALOG_URL.to_string(),
        },
    ));
}

struct FetchCatalogSource {
    url: String,
}

impl CatalogSource for FetchCatalogSource {
    async fn fetch_catalog(&self) -> Result<Catalog, LoadError> {
        let value = fetch_json(&self.url)
            .await
            .map_err(|err| LoadError::Transport(js_error_message(err, "request failed")))?;
        serde_wasm_bindgen::from_value(value).map_err(|err| LoadError::Malformed(err.to_string()))
    }
}

fn window() -> web_sys::Window {
    web_sys::window().expect("window")
}

fn document() -> Document {
    window().document().expect("document")
}

async fn fetch_json(url: &str) -> Result<JsValue, JsValue> {
    let response = JsFuture::from(window().fetch_with_str(url)).await?;
    let response: web_sys::Response = response.dyn_into()?;
    if !response.ok() {
        let text = JsFuture::from(response.text()?).await?;
        let message = text.as_string().unwrap_or_else(|| "Request failed".to_string());
        return Err(JsValue::from_str(&message));
    }
    JsFuture::from(response.json()?).await
}

fn js_error_message(err: JsValue, fallback: &str) -> String {
    if let Some(message) = err.as_string() {
        return message;
    }
    if let Ok(error) = err.dyn_into::<js_sys::Error>() {
        return error.message().into();
    }
    fallback.to_string()
}

fn query_container(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

fn parse_card_style(style: Option<String>) -> CardStyle {
    match style.as_deref() {
        Some("game") => CardStyle::Game,
        _ => CardStyle::App,
    }
}

fn dispatch_loaded_event(document: &Document, catalog: &Catalog) {
    let detail = match serde_wasm_bindgen::to_value(catalog) {
        Ok(detail) => detail,
        Err(_) => JsValue::NULL,
    };
    let init = CustomEventInit::new();
    init.set_detail(&detail);
    if let Ok(event) = CustomEvent::new_with_event_init_dict(LOADED_EVENT, &init) {
        let _ = document.dispatch_event(&event);
    }
}

async fn render_grid(
    loader: Rc<CatalogLoader<FetchCatalogSource>>,
    selector: String,
    style: CardStyle,
) {
    let document = document();
    let container = match query_container(&document, &selector) {
        Some(container) => container,
        None => {
            web_sys::console::error_1(&format!("Container {} not found", selector).into());
            return;
        }
    };

    let catalog = match loader.load().await {
        Some(catalog) => catalog,
        None => {
            container.set_inner_html(markup::load_error_message());
            return;
        }
    };

    container.set_inner_html(&markup::grid_markup(&catalog, style));
    dispatch_loaded_event(&document, &catalog);
}

async fn render_detail(
    loader: Rc<CatalogLoader<FetchCatalogSource>>,
    app_id: String,
    selector: String,
) {
    let document = document();
    let container = match query_container(&document, &selector) {
        Some(container) => container,
        None => {
            web_sys::console::error_1(&format!("Container {} not found", selector).into());
            return;
        }
    };

    // A failed load stays silent here; the loader already wrote the console
    // line and the grid is the surface that shows the user-facing message.
    let catalog = match loader.load().await {
        Some(catalog) => catalog,
        None => return,
    };

    let app = match catalog.find(&app_id) {
        Some(app) => app,
        None => {
            container.set_inner_html(markup::not_found_message());
            return;
        }
    };

    let release_date = format_release_date(&app.release_date);
    container.set_inner_html(&markup::app_detail(app, &release_date));
}

fn format_release_date(raw: &str) -> String {
    let date = js_sys::Date::new(&JsValue::from_str(raw));
    if date.get_time().is_nan() {
        return raw.to_string();
    }
    date.to_locale_date_string("default", &JsValue::UNDEFINED)
        .into()
}

/// Render the summary-card grid into the container named by `selector`.
/// `style` picks the template variant ("game" for the games page).
#[wasm_bindgen(js_name = renderApps)]
pub fn render_apps(selector: String, style: Option<String>) {
    let style = parse_card_style(style);
    let loader = LOADER.with(Rc::clone);
    spawn_local(async move {
        render_grid(loader, selector, style).await;
    });
}

/// Render one app's detail view into the container named by `selector`.
/// Detail pages call this from their own bootstrap script.
#[wasm_bindgen(js_name = renderAppDetail)]
pub fn render_app_detail(app_id: String, selector: String) {
    let loader = LOADER.with(Rc::clone);
    spawn_local(async move {
        render_detail(loader, app_id, selector).await;
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let document = document();
    if document.ready_state() == "loading" {
        let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            render_apps(DEFAULT_GRID_SELECTOR.to_string(), None);
        }) as Box<dyn FnMut(web_sys::Event)>);
        document
            .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())?;
        closure.forget();
    } else {
        render_apps(DEFAULT_GRID_SELECTOR.to_string(), None);
    }
    Ok(())
}
