use kanal::{Receiver, Sender};
use begreb_types::AppEvent;

/// UI-thread end of the channels shared with the async backend
pub struct UiBridge {
    to_ui_rx: Receiver<AppEvent>,
    from_ui_tx: Sender<AppEvent>,
}

impl UiBridge {
    pub fn new(to_ui_rx: Receiver<AppEvent>, from_ui_tx: Sender<AppEvent>) -> Self {
        Self {
            to_ui_rx,
            from_ui_tx,
        }
    }

    /// Tell the backend the search field changed. Never blocks the UI thread.
    pub fn notify_input(&self) {
        // A full queue already holds an InputChanged that will read the live value
        match self.from_ui_tx.try_send(AppEvent::InputChanged) {
            Ok(true) => {}
            Ok(false) => tracing::debug!("[UI] Backend queue full, edit coalesced"),
            Err(e) => tracing::error!("[UI] Failed to notify backend: {}", e),
        }
    }

    /// Hand every queued backend event to `apply`, returns how many were drained
    pub fn drain(&self, mut apply: impl FnMut(AppEvent)) -> usize {
        let mut count = 0;
        while let Ok(Some(event)) = self.to_ui_rx.try_recv() {
            apply(event);
            count += 1;
        }
        count
    }
}
