use htoc_core::{Heading, TocOptions};
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;

// ============================================================================
// Config
// ============================================================================

/// Options accepted by `buildToc` and `extractHeadings`.
///
/// Accepts both camelCase (JavaScript) and snake_case keys; missing keys
/// fall back to the core defaults.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct WasmTocConfig {
    #[serde(default, alias = "minLevel")]
    pub min_level: Option<u8>,
    #[serde(default, alias = "maxLevel")]
    pub max_level: Option<u8>,
    #[serde(default)]
    pub ordered: Option<bool>,
}

impl WasmTocConfig {
    fn to_options(&self) -> TocOptions {
        let defaults = TocOptions::default();
        TocOptions {
            min_level: self.min_level.unwrap_or(defaults.min_level),
            max_level: self.max_level.unwrap_or(defaults.max_level),
            ordered: self.ordered.unwrap_or(defaults.ordered),
        }
    }
}

fn parse_config(config: JsValue) -> Result<TocOptions, JsError> {
    if config.is_undefined() || config.is_null() {
        return Ok(TocOptions::default());
    }
    let cfg: WasmTocConfig = serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))?;
    Ok(cfg.to_options())
}

// ============================================================================
// Table of Contents API
// ============================================================================

/// Builds table of contents markup for the headings in `html`.
///
/// # Arguments
///
/// * `html` - Rendered HTML to scan for headings
/// * `config` - Optional object: `{ minLevel, maxLevel, ordered }`
///
/// # Returns
///
/// Nested `<ul>`/`<ol>` markup, or an empty string when no heading matches.
///
/// # Example (JavaScript)
///
/// ```javascript
/// import { buildToc } from './htoc_wasm';
///
/// const toc = buildToc('<h2>Intro</h2><h3>Details</h3>', { ordered: true });
/// // '<ol><li><a href="#intro">Intro</a><ol><li><a href="#details">Details</a></li></ol></li></ol>'
/// ```
#[wasm_bindgen(js_name = buildToc)]
pub fn build_toc(html: &str, config: JsValue) -> Result<String, JsError> {
    let options = parse_config(config)?;
    htoc_core::build_toc(html, &options).map_err(|e| JsError::new(&e.to_string()))
}

/// Returns `html` with a unique `id` set on every `h1`..`h6` element.
///
/// Level options do not apply; every heading receives an id. Empty or
/// whitespace-only input returns an empty string.
#[wasm_bindgen(js_name = addHeadingIds)]
pub fn add_heading_ids(html: &str) -> Result<String, JsError> {
    htoc_core::add_heading_ids(html).map_err(|e| JsError::new(&e.to_string()))
}

/// Returns the headings that `buildToc` would link, as
/// `{ level, text, slug }` objects in document order.
#[wasm_bindgen(js_name = extractHeadings)]
pub fn extract_headings(html: &str, config: JsValue) -> Result<JsValue, JsError> {
    let options = parse_config(config)?;
    let headings: Vec<Heading> =
        htoc_core::extract_headings(html, options.min_level, options.max_level)
            .map_err(|e| JsError::new(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&headings)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}
