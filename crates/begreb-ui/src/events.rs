use begreb_types::{AppEvent, Node, UiEvent};
use slint::{Model, VecModel, Weak};

use crate::{ResultRow, SearchWindow};

pub fn to_row(node: Node) -> ResultRow {
    match node {
        Node::Text(text) => ResultRow {
            is_card: false,
            text: text.into(),
            ..Default::default()
        },
        Node::Card(card) => ResultRow {
            is_card: true,
            english: card.english.into(),
            danish: card.danish.into(),
            source: card.source.into(),
            ..Default::default()
        },
    }
}

/// Apply a container command to the results model
pub fn apply_to_model(model: &VecModel<ResultRow>, event: UiEvent) {
    match event {
        UiEvent::Clear => {
            if model.row_count() > 0 {
                model.set_vec(Vec::new());
            }
        }
        UiEvent::Append(node) => model.push(to_row(node)),
    }
}

pub fn handle_events(event: AppEvent, window_weak: &Weak<SearchWindow>, model: &VecModel<ResultRow>) {
    match event {
        AppEvent::Ui(ui_event) => apply_to_model(model, ui_event),
        AppEvent::BackendReady => {
            if let Some(w) = window_weak.upgrade() {
                tracing::debug!("[SLINT] Backend ready");
                w.set_status("Klar".into());
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use begreb_types::Card;

    use super::*;

    fn card(english: &str) -> Node {
        Node::Card(Card {
            english: english.into(),
            danish: format!("{english}-da"),
            source: "X".into(),
        })
    }

    #[test]
    fn cards_map_to_three_text_rows() {
        let row = to_row(card("cat"));

        assert!(row.is_card);
        assert_eq!(row.english.as_str(), "cat");
        assert_eq!(row.danish.as_str(), "cat-da");
        assert_eq!(row.source.as_str(), "X");
        assert!(row.text.is_empty());
    }

    #[test]
    fn placeholder_maps_to_text_row() {
        let row = to_row(Node::placeholder());

        assert!(!row.is_card);
        assert_eq!(row.text.as_str(), "Intet resultat.");
    }

    #[test]
    fn clear_then_append_rebuilds_model() {
        let model = VecModel::<ResultRow>::default();
        apply_to_model(&model, UiEvent::Append(card("old")));

        apply_to_model(&model, UiEvent::Clear);
        assert_eq!(model.row_count(), 0);

        apply_to_model(&model, UiEvent::Append(card("a")));
        apply_to_model(&model, UiEvent::Append(card("b")));

        let english: Vec<_> = model.iter().map(|row| row.english.to_string()).collect();
        assert_eq!(english, ["a", "b"]);
    }
}
