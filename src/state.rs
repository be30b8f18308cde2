use crate::{config::AppConfig, store::Store};

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub config: AppConfig,
}
