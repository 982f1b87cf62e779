//! Browser `localStorage` / `sessionStorage` adapters for the content store.
//!
//! SYSTEM CONTEXT
//! ==============
//! These adapters implement [`StoragePort`] over the Web Storage API so the
//! `content` crate never touches `web_sys` directly. Outside `hydrate` builds
//! reads return nothing and writes are dropped, which keeps server rendering
//! deterministic.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use content::{ContentStore, StoragePort, StoreError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Area {
    Local,
    Session,
}

/// Handle to one of the browser's Web Storage areas.
///
/// Zero-sized apart from the area tag; the `web_sys::Storage` object is looked
/// up on every call so the handle can live inside signals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrowserStorage {
    area: Area,
}

impl BrowserStorage {
    /// Per-origin storage that survives reloads; holds the collections.
    #[must_use]
    pub const fn local() -> Self {
        Self { area: Area::Local }
    }

    /// Per-tab storage cleared when the tab closes; holds the admin flag.
    #[must_use]
    pub const fn session() -> Self {
        Self { area: Area::Session }
    }

    #[cfg(feature = "hydrate")]
    fn handle(self) -> Result<web_sys::Storage, StoreError> {
        let window = web_sys::window().ok_or_else(|| StoreError::Backend("no window".to_owned()))?;
        let storage = match self.area {
            Area::Local => window.local_storage(),
            Area::Session => window.session_storage(),
        };
        storage
            .map_err(js_error)?
            .ok_or_else(|| StoreError::Backend(format!("{:?} storage unavailable", self.area)))
    }
}

/// Content store over `localStorage`.
#[must_use]
pub fn content_store() -> ContentStore<BrowserStorage> {
    ContentStore::new(BrowserStorage::local())
}

impl StoragePort for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        #[cfg(feature = "hydrate")]
        {
            self.handle()?.get_item(key).map_err(js_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            self.handle()?.set_item(key, value).map_err(js_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            self.handle()?.remove_item(key).map_err(js_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(())
        }
    }
}

/// Convert a thrown JS value (usually a `DOMException` such as
/// `QuotaExceededError`) into a backend error.
#[cfg(feature = "hydrate")]
fn js_error(err: wasm_bindgen::JsValue) -> StoreError {
    use wasm_bindgen::JsCast as _;

    let message = err
        .dyn_ref::<js_sys::Error>()
        .map(|e| format!("{}: {}", String::from(e.name()), String::from(e.message())))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{err:?}"));
    log::warn!("storage: {message}");
    StoreError::Backend(message)
}
