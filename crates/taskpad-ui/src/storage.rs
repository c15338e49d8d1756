use taskpad_core::TaskStore;

const TASKS_STORAGE_KEY: &str = "tasks";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

/// Reads the persisted snapshot once at startup. A missing key, an
/// unavailable storage area, or malformed data all start the session with an
/// empty store.
pub fn load_store() -> TaskStore {
    let stored =
        local_storage().and_then(|storage| storage.get_item(TASKS_STORAGE_KEY).ok().flatten());

    match stored {
        Some(raw) => TaskStore::from_json(&raw),
        None => TaskStore::new(),
    }
}

/// Overwrites the snapshot wholesale. Fire-and-forget: a full or unavailable
/// storage area only leaves a log line behind.
pub fn save_store(store: &TaskStore) {
    let Some(storage) = local_storage() else {
        return;
    };

    match store.to_json() {
        Ok(raw) => {
            let _ = storage.set_item(TASKS_STORAGE_KEY, &raw);
        }
        Err(error) => {
            tracing::error!(%error, "failed encoding tasks for local storage");
        }
    }
}
