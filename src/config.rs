use serde::Deserialize;
use wasm_bindgen::prelude::*;

/// Names the controller binds to on the page. A page can override any of them
/// with a global `themeConfig` object.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub storage_key: String,
    pub attribute: String,
    pub toggle_id: String,
    pub media_query: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            storage_key: "theme".to_string(),
            attribute: "data-theme".to_string(),
            toggle_id: "theme-toggle".to_string(),
            media_query: "(prefers-color-scheme: dark)".to_string(),
        }
    }
}

impl Config {
    pub fn from_json(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }

    pub fn from_window(window: &web_sys::Window) -> Self {
        let obj = match js_sys::Reflect::get(window, &JsValue::from_str("themeConfig")) {
            Ok(obj) if !obj.is_undefined() && !obj.is_null() => obj,
            _ => return Config::default(),
        };
        let json = match js_sys::JSON::stringify(&obj) {
            Ok(json) => String::from(json),
            Err(e) => {
                tracing::warn!("themeConfig is not serializable: {e:?}");
                return Config::default();
            }
        };
        Config::from_json(&json).unwrap_or_else(|e| {
            tracing::warn!("invalid themeConfig {json}: {e}");
            Config::default()
        })
    }
}

#[test]
fn test_config_defaults() {
    assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    assert_eq!(Config::default().storage_key, "theme");
    assert_eq!(Config::default().attribute, "data-theme");
}

#[test]
fn test_config_partial() {
    let config = Config::from_json(r#"{ "storageKey": "site-theme", "toggleId": "mode" }"#).unwrap();
    assert_eq!(
        config,
        Config {
            storage_key: "site-theme".to_string(),
            toggle_id: "mode".to_string(),
            ..Config::default()
        }
    );
}

#[test]
fn test_config_invalid() {
    assert!(Config::from_json(r#"{ "storageKey": 3 }"#).is_err());
    assert!(Config::from_json(r#""dark""#).is_err());
}
