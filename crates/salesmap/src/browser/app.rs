//! WASM entry points: bootstrap, fetch and render.

use super::dom::{find_anchor, js_message, DomSurface, DomTooltip};
use super::logger;
use crate::{render_document, ChartConfig, ChartError, RenderSummary};
use log::LevelFilter;
use salesmap_widgets::{SharedTooltip, SurfaceError};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, Document, Response};

thread_local! {
    // Last surface rendered into each anchor id; keeps its hover closures alive.
    static MOUNTED: RefCell<HashMap<String, DomSurface>> = RefCell::new(HashMap::new());
}

fn to_js(err: &ChartError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

fn document() -> Result<Document, ChartError> {
    window()
        .and_then(|w| w.document())
        .ok_or_else(|| SurfaceError::MissingAnchor("document".to_string()).into())
}

/// Module start: panic hook, console logger, then fetch and render the
/// default dataset.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logger::init();

    let config = ChartConfig::default();
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) = load(&config).await {
            report(&config, &err);
        }
    });
}

#[allow(clippy::future_not_send)]
async fn load(config: &ChartConfig) -> Result<RenderSummary, ChartError> {
    log::info!("fetching dataset from {}", config.data.url);
    let json = fetch_text(&config.data.url).await?;
    mount(config, &json)
}

#[allow(clippy::future_not_send)]
async fn fetch_text(url: &str) -> Result<String, ChartError> {
    let window = window().ok_or_else(|| ChartError::Fetch("no window".to_string()))?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| ChartError::Fetch(js_message(&e)))?
        .dyn_into::<Response>()
        .map_err(|_| ChartError::Fetch("fetch did not return a Response".to_string()))?;
    if !response.ok() {
        return Err(ChartError::Fetch(format!(
            "HTTP {} for {url}",
            response.status()
        )));
    }
    let body = response
        .text()
        .map_err(|e| ChartError::Fetch(js_message(&e)))?;
    JsFuture::from(body)
        .await
        .map_err(|e| ChartError::Fetch(js_message(&e)))?
        .as_string()
        .ok_or_else(|| ChartError::Fetch("response body is not text".to_string()))
}

fn mount(config: &ChartConfig, json: &str) -> Result<RenderSummary, ChartError> {
    let document = document()?;
    let target = find_anchor(&document, &config.anchors.surface)?;
    let tooltip: SharedTooltip = Rc::new(RefCell::new(DomTooltip::from_anchors(
        &document,
        &config.anchors,
    )?));
    let mut surface = DomSurface::new(document);
    let result = render_document(config, json, &mut surface, &target, tooltip);
    if result.is_ok() {
        if let Err(e) = target.remove_attribute("data-error") {
            log::warn!("failed to clear data-error: {}", js_message(&e));
        }
    }
    // A failed decode draws nothing, so the previous chart keeps its listeners.
    if result.is_ok() || surface.listener_count() > 0 {
        MOUNTED.with(|mounted| {
            mounted
                .borrow_mut()
                .insert(config.anchors.surface.clone(), surface);
        });
    }
    result
}

fn report(config: &ChartConfig, err: &ChartError) {
    log::error!("{err}");
    let target = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(&config.anchors.surface));
    if let Some(target) = target {
        if let Err(e) = target.set_attribute("data-error", &err.to_string()) {
            log::warn!("failed to set data-error: {}", js_message(&e));
        }
    }
}

/// Number of surfaces whose hover listeners are currently kept alive.
pub fn mounted_surfaces() -> usize {
    MOUNTED.with(|mounted| mounted.borrow().len())
}

fn render_with(config: &ChartConfig, json: &str) -> Result<(), JsValue> {
    mount(config, json).map(|_| ()).map_err(|err| {
        report(config, &err);
        to_js(&err)
    })
}

/// Render a dataset supplied by the page with the default configuration.
#[wasm_bindgen]
pub fn render_json(json: &str) -> Result<(), JsValue> {
    render_with(&ChartConfig::default(), json)
}

/// Render a dataset with a YAML chart configuration.
#[wasm_bindgen]
pub fn render_json_with_config(json: &str, config_yaml: &str) -> Result<(), JsValue> {
    let config = ChartConfig::from_yaml(config_yaml).map_err(|e| to_js(&e.into()))?;
    render_with(&config, json)
}

/// Change the console log level (`error`, `warn`, `info`, `debug`, `trace`, `off`).
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> Result<(), JsValue> {
    let filter: LevelFilter = level
        .parse()
        .map_err(|_| JsValue::from_str(&format!("unknown log level '{level}'")))?;
    log::set_max_level(filter);
    Ok(())
}
