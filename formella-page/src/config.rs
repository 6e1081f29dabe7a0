// config.rs - Page configuration
//
// Every field has a default, so an empty JS object (or an empty TOML file)
// yields the stock page.

use serde::Deserialize;

use crate::error::{PageError, Result};

pub const DEFAULT_THRESHOLD: f64 = 0.1;
pub const DEFAULT_ROOT_MARGIN: &str = "0px";
pub const DEFAULT_MODEL_SRC: &str = "/formella.glb";

/// Options handed to the intersection facility.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevealConfig {
    /// Fraction of a section's area that must be visible before it counts.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default = "default_root_margin")]
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            root_margin: DEFAULT_ROOT_MARGIN.to_string(),
        }
    }
}

impl RevealConfig {
    pub fn validate(&self) -> Result<()> {
        // NaN fails both comparisons
        if !(self.threshold > 0.0 && self.threshold <= 1.0) {
            return Err(PageError::InvalidThreshold(self.threshold));
        }
        if !valid_root_margin(&self.root_margin) {
            return Err(PageError::Config(format!(
                "rootMargin must be 1 to 4 `<n>px` or `<n>%` values, got {:?}",
                self.root_margin
            )));
        }
        Ok(())
    }
}

/// CSS-margin shorthand accepted by IntersectionObserver: 1-4 lengths in
/// `px` or `%`.
fn valid_root_margin(margin: &str) -> bool {
    let tokens: Vec<&str> = margin.split_whitespace().collect();
    if tokens.is_empty() || tokens.len() > 4 {
        return false;
    }
    tokens.iter().all(|t| {
        let number = t.strip_suffix("px").or_else(|| t.strip_suffix('%'));
        number
            .and_then(|n| n.parse::<f64>().ok())
            .is_some_and(f64::is_finite)
    })
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageConfig {
    #[serde(default)]
    pub reveal: RevealConfig,
    /// Path of the glTF asset handed to the model viewer.
    #[serde(default = "default_model_src")]
    pub model_src: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            reveal: RevealConfig::default(),
            model_src: DEFAULT_MODEL_SRC.to_string(),
        }
    }
}

impl PageConfig {
    pub fn validate(&self) -> Result<()> {
        self.reveal.validate()?;
        if self.model_src.trim().is_empty() {
            return Err(PageError::Config("modelSrc must not be empty".into()));
        }
        Ok(())
    }

    /// Parse from a JS value. `undefined` and `null` give the defaults.
    pub fn from_js(value: wasm_bindgen::JsValue) -> Result<Self> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        let config: Self = serde_wasm_bindgen::from_value(value)
            .map_err(|e| PageError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}
fn default_root_margin() -> String {
    DEFAULT_ROOT_MARGIN.to_string()
}
fn default_model_src() -> String {
    DEFAULT_MODEL_SRC.to_string()
}
