use std::sync::{Mutex, PoisonError};

use begreb_types::Node;

/// The text control the widget reads its query from
pub trait SearchField: Send + Sync {
    /// Live value of the control
    fn value(&self) -> String;
}

/// The element results are rendered into
pub trait ResultsContainer: Send + Sync {
    fn clear(&self);

    fn append(&self, node: Node);
}

/// Shared mirror of an input control, written by the UI on every edit
#[derive(Default)]
pub struct TextField {
    value: Mutex<String>,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, value: impl Into<String>) {
        *self.value.lock().unwrap_or_else(PoisonError::into_inner) = value.into();
    }
}

impl SearchField for TextField {
    fn value(&self) -> String {
        self.value
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// Results container kept in memory
#[derive(Default)]
pub struct MemoryContainer {
    nodes: Mutex<Vec<Node>>,
}

impl MemoryContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current children
    pub fn nodes(&self) -> Vec<Node> {
        self.nodes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ResultsContainer for MemoryContainer {
    fn clear(&self) {
        self.nodes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn append(&self, node: Node) {
        self.nodes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(node);
    }
}
