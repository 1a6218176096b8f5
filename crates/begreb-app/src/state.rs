use std::sync::Arc;

use begreb_config::Config;
use begreb_core::TextField;

pub struct AppState {
    pub config: Config,
    /// Live value of the search field, written by the UI thread
    pub field: Arc<TextField>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            field: Arc::new(TextField::new()),
        }
    }
}
