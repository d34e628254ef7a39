//! Browser-side collaborators: preference storage, colour-scheme hint and the
//! optional host-supplied config object. Off wasm they degrade to in-memory
//! storage and defaults.

#[cfg(not(target_arch = "wasm32"))]
use dashboard_core::MemoryStore;
use dashboard_core::{ConfigError, DashboardConfig};

#[cfg(target_arch = "wasm32")]
use dashboard_core::{PreferenceStore, StoreError};
#[cfg(target_arch = "wasm32")]
use js_sys::Reflect;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;
#[cfg(target_arch = "wasm32")]
use web_sys::Storage;

#[cfg(target_arch = "wasm32")]
const CONFIG_GLOBAL: &str = "__DASHBOARD_CONFIG__";

#[cfg(target_arch = "wasm32")]
const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<Storage, StoreError> {
    let window =
        web_sys::window().ok_or_else(|| StoreError::Unavailable("window not available".into()))?;
    window
        .local_storage()
        .map_err(|e| StoreError::Unavailable(format!("{e:?}")))?
        .ok_or_else(|| StoreError::Unavailable("localStorage unavailable".into()))
}

/// `window.localStorage` backed preferences.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for BrowserStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        local_storage()?
            .get_item(key)
            .map_err(|e| StoreError::Read {
                key: key.to_string(),
                reason: format!("{e:?}"),
            })
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Write {
                key: key.to_string(),
                reason: format!("{e:?}"),
            })
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub type BrowserStore = MemoryStore;

#[cfg(target_arch = "wasm32")]
pub fn prefers_dark() -> Option<bool> {
    let window = web_sys::window()?;
    let query = window.match_media(DARK_SCHEME_QUERY).ok().flatten()?;
    Some(query.matches())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn prefers_dark() -> Option<bool> {
    None
}

/// Reads `window.__DASHBOARD_CONFIG__`. Absent means defaults.
#[cfg(target_arch = "wasm32")]
pub fn load_config() -> Result<DashboardConfig, ConfigError> {
    let window =
        web_sys::window().ok_or_else(|| ConfigError::Host("window not available".into()))?;
    let raw = Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
        .map_err(|_| ConfigError::Host(format!("failed to access {CONFIG_GLOBAL}")))?;
    if raw.is_undefined() || raw.is_null() {
        return Ok(DashboardConfig::default());
    }
    let config: DashboardConfig =
        serde_wasm_bindgen::from_value(raw).map_err(|e| ConfigError::Host(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_config() -> Result<DashboardConfig, ConfigError> {
    Ok(DashboardConfig::default())
}
