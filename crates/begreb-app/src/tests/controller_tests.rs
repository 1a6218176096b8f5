use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use begreb_client::{LookupError, LookupService};
use begreb_config::Config;
use begreb_types::{AppEvent, Node, SearchPost, UiEvent};
use kanal::Receiver;
use tokio::time::{Instant, timeout};

use crate::controller::AppController;
use crate::state::AppState;

#[derive(Default)]
struct RecordingService {
    calls: Mutex<Vec<String>>,
}

#[async_trait]
impl LookupService for RecordingService {
    async fn lookup(&self, query: &str) -> Result<Vec<SearchPost>, LookupError> {
        self.calls.lock().unwrap().push(query.to_string());
        if query == "cat" {
            Ok(vec![SearchPost {
                english: "cat".into(),
                danish: "kat".into(),
                source: "X".into(),
            }])
        } else {
            Ok(vec![])
        }
    }

    fn endpoint(&self) -> &str {
        "recording://"
    }
}

/// Poll the UI end of the channel until an event shows up
async fn next_ui_event(rx: &Receiver<AppEvent>) -> AppEvent {
    let deadline = Instant::now() + Duration::from_secs(2);
    loop {
        if let Ok(Some(event)) = rx.try_recv() {
            return event;
        }
        assert!(Instant::now() < deadline, "Timeout - no event reached the UI");
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}

fn setup() -> (Arc<AppState>, AppController, Arc<RecordingService>) {
    let state = Arc::new(AppState::new(Config::default()));
    let controller = AppController::new(state.clone());
    let service = Arc::new(RecordingService::default());
    (state, controller, service)
}

#[tokio::test]
async fn backend_announces_itself() {
    let (_state, controller, service) = setup();
    let _tasks = controller.spawn_tasks_with(service);

    let event = next_ui_event(&controller.channels.app_to_ui.1).await;
    assert!(matches!(event, AppEvent::BackendReady));

    controller.shutdown();
}

#[tokio::test]
async fn edit_flows_from_ui_to_rendered_card() {
    let (state, controller, service) = setup();
    let _tasks = controller.spawn_tasks_with(service.clone());
    let ui_rx = &controller.channels.app_to_ui.1;
    assert!(matches!(next_ui_event(ui_rx).await, AppEvent::BackendReady));

    state.field.set("cat");
    controller.ui_bridge().notify_input();

    // Synchronous clear, then the re-clear and the card once the lookup returns
    assert!(matches!(next_ui_event(ui_rx).await, AppEvent::Ui(UiEvent::Clear)));
    assert!(matches!(next_ui_event(ui_rx).await, AppEvent::Ui(UiEvent::Clear)));
    match next_ui_event(ui_rx).await {
        AppEvent::Ui(UiEvent::Append(Node::Card(card))) => {
            assert_eq!(card.texts(), ["cat", "kat", "X"]);
        }
        other => panic!("Wrong event: {:?}", other),
    }

    assert_eq!(*service.calls.lock().unwrap(), vec!["cat".to_string()]);
    controller.shutdown();
}

#[tokio::test]
async fn short_edit_only_clears() {
    let (state, controller, service) = setup();
    let _tasks = controller.spawn_tasks_with(service.clone());
    let ui_rx = &controller.channels.app_to_ui.1;
    next_ui_event(ui_rx).await;

    state.field.set("ca");
    controller.ui_bridge().notify_input();

    assert!(matches!(next_ui_event(ui_rx).await, AppEvent::Ui(UiEvent::Clear)));
    tokio::time::sleep(Duration::from_millis(200)).await;

    assert!(matches!(ui_rx.try_recv(), Ok(None)));
    assert!(service.calls.lock().unwrap().is_empty());
    controller.shutdown();
}

#[tokio::test]
async fn shutdown_stops_event_loop() {
    let (_state, controller, service) = setup();
    let mut tasks = controller.spawn_tasks_with(service);

    controller.shutdown();

    let result = timeout(Duration::from_secs(2), tasks.join_next())
        .await
        .expect("Timeout - event loop ignored cancellation");
    assert!(matches!(result, Some(Ok(Ok(())))));
}
