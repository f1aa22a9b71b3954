//! DOM-free fragment building. Everything here maps catalog data to markup
//! strings so the templates stay testable without a browser.

use crate::models::{Application, Catalog};

const DETAIL_PATH_PREFIX: &str = "/naseerstudio/apps/";
const CARD_FEATURE_LIMIT: usize = 3;

/// The grid and the games page share one template; only the class prefix
/// differs between them.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub enum CardStyle {
    #[default]
    App,
    Game,
}

impl CardStyle {
    fn prefix(self) -> &'static str {
        match self {
            CardStyle::App => "app",
            CardStyle::Game => "game",
        }
    }
}

pub fn load_error_message() -> &'static str {
    r#"<p class="error">Failed to load apps. Please refresh the page.</p>"#
}

pub fn not_found_message() -> &'static str {
    r#"<p class="error">App not found.</p>"#
}

pub fn detail_path(app_id: &str) -> String {
    format!("{}{}/", DETAIL_PATH_PREFIX, app_id)
}

/// All cards in catalog order, joined into one assignment-ready fragment.
/// An empty catalog yields an empty string.
pub fn grid_markup(catalog: &Catalog, style: CardStyle) -> String {
    catalog
        .apps
        .iter()
        .map(|app| app_card(app, style))
        .collect()
}

pub fn app_card(app: &Application, style: CardStyle) -> String {
    let p = style.prefix();
    let modifier = if app.is_published() { "" } else { " coming-soon" };
    let icon_attr = if app.is_published() {
        String::new()
    } else {
        r#" style="background: var(--text-muted);""#.to_string()
    };
    let category_tag = if app.is_published() {
        app.category.as_str()
    } else {
        "Coming Soon"
    };

    let body = if app.is_published() {
        let features = feature_items(&app.features, Some(CARD_FEATURE_LIMIT));
        let actions = card_actions(app, p);
        format!(
            r#"<ul class="{p}-features">{features}</ul>
<div class="{p}-meta">
    <span class="{p}-meta-item">⭐ {rating}</span>
    <span class="{p}-meta-item">⬇️ {downloads}</span>
    <span class="{p}-meta-item">📱 {size}</span>
</div>
{actions}"#,
            p = p,
            features = features,
            rating = app.rating,
            downloads = app.downloads,
            size = app.size,
            actions = actions,
        )
    } else {
        r#"<p class="coming-soon-note">Coming soon to mobile devices.</p>"#.to_string()
    };

    format!(
        r#"<div class="{p}-card{modifier}" data-category="{category}" data-id="{id}">
    <div class="{p}-card-header">
        <div class="{p}-icon"{icon_attr}>{icon}</div>
        <div class="{p}-title">
            <h3>{name}</h3>
            <span class="{p}-category">{category_tag}</span>
        </div>
    </div>
    <p class="{p}-description">{tagline}</p>
    {body}
</div>"#,
        p = p,
        modifier = modifier,
        category = app.category,
        id = app.id,
        icon_attr = icon_attr,
        icon = app.icon,
        name = app.name,
        category_tag = category_tag,
        tagline = app.tagline,
        body = body,
    )
}

fn card_actions(app: &Application, p: &str) -> String {
    // Play Store wins when both stores are listed; cards with neither URL get
    // no primary action. The label follows whichever store the link targets.
    let primary = match (app.play_store_url.as_deref(), app.app_store_url.as_deref()) {
        (Some(url), _) => primary_action(url, "Download on Google Play"),
        (None, Some(url)) => primary_action(url, "Download on App Store"),
        (None, None) => String::new(),
    };
    format!(
        r#"<div class="{p}-actions">
    {primary}
    <a href="{detail}" class="btn btn-secondary">View Details</a>
</div>"#,
        p = p,
        primary = primary,
        detail = detail_path(&app.id),
    )
}

fn primary_action(url: &str, label: &str) -> String {
    format!(
        r#"<a href="{}" class="btn btn-primary" target="_blank" rel="noopener noreferrer">{}</a>"#,
        url, label
    )
}

fn feature_items(features: &[String], limit: Option<usize>) -> String {
    let shown = match limit {
        Some(limit) => &features[..features.len().min(limit)],
        None => features,
    };
    shown
        .iter()
        .map(|feature| format!("<li>{}</li>", feature))
        .collect()
}

/// Full detail-page fragment: hero, store actions, complete feature list and
/// the fixed seven-field information grid. The release date arrives already
/// localized because date formatting needs the host environment.
pub fn app_detail(app: &Application, release_date_display: &str) -> String {
    let mut actions = String::new();
    if let Some(url) = app.play_store_url.as_deref() {
        actions.push_str(&format!(
            r#"<a href="{}" class="btn btn-primary" target="_blank" rel="noopener noreferrer">Get it on Google Play</a>"#,
            url
        ));
    }
    if let Some(url) = app.app_store_url.as_deref() {
        actions.push_str(&format!(
            r#"<a href="{}" class="btn btn-secondary" target="_blank" rel="noopener noreferrer">Download on App Store</a>"#,
            url
        ));
    }

    format!(
        r#"<div class="app-detail">
    <div class="app-detail-hero">
        <div class="container">
            <div class="app-detail-content">
                <div class="app-icon-large">{icon}</div>
                <div class="app-detail-info">
                    <h1>{name}</h1>
                    <p class="app-detail-tagline">{tagline}</p>
                    <div class="app-stats">
                        <div class="app-stat">
                            <span class="app-stat-value">⭐ {rating}</span>
                            <span class="app-stat-label">Rating</span>
                        </div>
                        <div class="app-stat">
                            <span class="app-stat-value">⬇️ {downloads}</span>
                            <span class="app-stat-label">Downloads</span>
                        </div>
                        <div class="app-stat">
                            <span class="app-stat-value">📱 {size}</span>
                            <span class="app-stat-label">Size</span>
                        </div>
                    </div>
                    <div class="app-actions-row">{actions}</div>
                </div>
            </div>
        </div>
    </div>
    <div class="container">
        <div class="app-content">
            <section class="features-section">
                <div class="section-header">
                    <span class="section-tag">Features</span>
                    <h2 class="section-title">What Makes It Special</h2>
                </div>
                <ul class="app-features detailed">{features}</ul>
            </section>
            <section class="info-section">
                <div class="section-header">
                    <span class="section-tag">Details</span>
                    <h2 class="section-title">App Information</h2>
                </div>
                <div class="info-grid">
                    {info_items}
                </div>
            </section>
        </div>
    </div>
</div>"#,
        icon = app.icon,
        name = app.name,
        tagline = app.tagline,
        rating = app.rating,
        downloads = app.downloads,
        size = app.size,
        actions = actions,
        features = feature_items(&app.features, None),
        info_items = info_items(app, release_date_display),
    )
}

fn info_items(app: &Application, release_date_display: &str) -> String {
    let yes_no = |flag: bool| if flag { "Yes" } else { "No" };
    [
        ("Version", app.version.as_str()),
        ("Category", app.category.as_str()),
        ("Content Rating", app.content_rating.as_str()),
        ("Released", release_date_display),
        ("Price", app.price.as_str()),
        ("In-app Purchases", yes_no(app.in_app_purchases)),
        ("Contains Ads", yes_no(app.contains_ads)),
    ]
    .iter()
    .map(|(label, value)| {
        format!(
            r#"<div class="info-item">
    <span class="info-label">{}</span>
    <span class="info-value">{}</span>
</div>"#,
            label, value
        )
    })
    .collect()
}
