use begreb_core::ResultsContainer;
use begreb_types::{AppEvent, Node, UiEvent};
use kanal::Sender;

/// Results container living on the UI thread, fed through a channel
#[derive(Clone)]
pub struct ChannelContainer {
    to_ui_tx: Sender<AppEvent>,
}

impl ChannelContainer {
    pub fn new(to_ui_tx: Sender<AppEvent>) -> Self {
        Self { to_ui_tx }
    }

    fn forward(&self, event: UiEvent) {
        if let Err(e) = self.to_ui_tx.send(AppEvent::Ui(event)) {
            tracing::warn!("UI channel closed, dropping results update: {}", e);
        }
    }
}

impl ResultsContainer for ChannelContainer {
    fn clear(&self) {
        self.forward(UiEvent::Clear);
    }

    fn append(&self, node: Node) {
        self.forward(UiEvent::Append(node));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forwards_clear_and_append() {
        let (tx, rx) = kanal::unbounded();
        let container = ChannelContainer::new(tx);

        container.clear();
        container.append(Node::placeholder());

        assert!(matches!(rx.try_recv(), Ok(Some(AppEvent::Ui(UiEvent::Clear)))));
        match rx.try_recv() {
            Ok(Some(AppEvent::Ui(UiEvent::Append(node)))) => {
                assert_eq!(node, Node::Text("Intet resultat.".into()))
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn closed_channel_is_not_fatal() {
        let (tx, rx) = kanal::unbounded::<AppEvent>();
        drop(rx);

        ChannelContainer::new(tx).clear();
    }
}
