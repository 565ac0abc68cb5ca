use std::sync::Arc;

use tokio::sync::Mutex;

use crate::store::ContentStore;

/// Shared handler state. The mutex serializes load-mutate-save cycles on the
/// content store so concurrent requests cannot interleave their writes.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<ContentStore>>,
}

impl AppState {
    pub fn new(store: ContentStore) -> Self {
        AppState {
            store: Arc::new(Mutex::new(store)),
        }
    }
}
