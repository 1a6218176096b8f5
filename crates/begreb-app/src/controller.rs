use std::sync::Arc;

use begreb_client::{HttpLookupClient, LookupService};
use begreb_core::{SearchSettings, SearchWidget};
use begreb_types::AppEvent;
use begreb_ui::{ChannelContainer, UiBridge};
use kanal::{AsyncReceiver, AsyncSender, Receiver, Sender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::state::AppState;

/// Centralized channel management
pub struct ChannelSet {
    /// Results commands must never be dropped, so this one is unbounded
    pub app_to_ui: (Sender<AppEvent>, Receiver<AppEvent>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            app_to_ui: kanal::unbounded(),
            ui_to_app: kanal::bounded_async(64), // edits
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    pub(crate) channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    /// UI-thread end of the channels
    pub fn ui_bridge(&self) -> UiBridge {
        UiBridge::new(
            self.channels.app_to_ui.1.clone(),
            self.channels.ui_to_app.0.clone_sync(),
        )
    }

    /// Spawn the backend against the configured lookup endpoint
    pub fn spawn_tasks(&self) -> JoinSet<anyhow::Result<()>> {
        let endpoint = self.state.config.network.endpoint.clone();
        tracing::info!("Lookup endpoint: {}", endpoint);
        self.spawn_tasks_with(Arc::new(HttpLookupClient::new(endpoint)))
    }

    pub fn spawn_tasks_with(&self, service: Arc<dyn LookupService>) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        let widget = SearchWidget::new(
            self.state.field.clone(),
            Arc::new(ChannelContainer::new(self.channels.app_to_ui.0.clone())),
            service,
            SearchSettings::from(&self.state.config.search),
        );
        tracing::debug!("Widget settings: {:?}", widget.settings());

        // Event loop
        tasks.spawn(event_loop(
            widget,
            self.channels.ui_to_app.1.clone(),
            self.cancel_token.child_token(),
        ));

        if let Err(e) = self.channels.app_to_ui.0.send(AppEvent::BackendReady) {
            tracing::warn!("Failed to announce backend: {}", e);
        }

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
