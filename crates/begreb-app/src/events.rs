use begreb_core::SearchWidget;
use begreb_types::AppEvent;
use kanal::AsyncReceiver;
use tokio_util::sync::CancellationToken;

/// App's main loop
pub async fn event_loop(
    widget: SearchWidget,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("[EVENT_LOOP] Cancelled");
                break;
            }
            event = ui_to_app_rx.recv() => event?,
        };

        handle_events(&widget, event);
    }

    widget.cancel();
    Ok(())
}

fn handle_events(widget: &SearchWidget, event: AppEvent) {
    match event {
        AppEvent::InputChanged => {
            tracing::debug!("[EVENT_LOOP] Input changed");
            widget.on_input();
        }
        AppEvent::Ui(_) | AppEvent::BackendReady => {
            // UI-only events, ignore in backend
        }
    }
}
