use anyhow::{anyhow, Result};
use gloo::storage::{LocalStorage, Storage};
use student_portal::backend::KeyValueStore;
use wasm_bindgen::JsValue;

/// Browser `localStorage`, holding the raw serialized records
#[derive(Clone, Copy, Default)]
pub struct LocalStorageStore;

fn js_error(action: &str, key: &str, err: JsValue) -> anyhow::Error {
    anyhow!("localStorage {} '{}' failed: {:?}", action, key, err)
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|e| js_error("get", key, e))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| js_error("set", key, e))
    }

    fn remove(&self, key: &str) -> Result<()> {
        LocalStorage::raw()
            .remove_item(key)
            .map_err(|e| js_error("remove", key, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_set_get_remove() {
        let store = LocalStorageStore;
        store.set("portalTestKey", "{\"a\":1}").unwrap();
        assert_eq!(store.get("portalTestKey").unwrap().as_deref(), Some("{\"a\":1}"));

        store.remove("portalTestKey").unwrap();
        assert_eq!(store.get("portalTestKey").unwrap(), None);
    }
}
