use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Text shown in place of cards when the lookup service finds nothing
pub const NO_RESULT_TEXT: &str = "Intet resultat.";

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The search field was edited; its live value sits in the shared field
    InputChanged,
    Ui(UiEvent),
    BackendReady,
}

/// Commands applied by the UI thread to the on-screen results list
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    Clear,
    Append(Node),
}

/// One term pair as returned by the lookup service.
///
/// Decoding never fails: missing or `null` fields become empty text, any other
/// non-string value becomes its JSON text, and an element that is not an
/// object at all becomes a post with empty fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchPost {
    pub english: String,
    pub danish: String,
    pub source: String,
}

impl From<Value> for SearchPost {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(mut fields) => {
                let mut take = |key: &str| fields.remove(key).map(lenient_text).unwrap_or_default();
                SearchPost {
                    english: take("english"),
                    danish: take("danish"),
                    source: take("source"),
                }
            }
            _ => SearchPost::default(),
        }
    }
}

impl<'de> Deserialize<'de> for SearchPost {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(SearchPost::from)
    }
}

fn lenient_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text,
        other => other.to_string(),
    }
}

/// A rendered result box with three text lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Card {
    pub english: String,
    pub danish: String,
    pub source: String,
}

impl Card {
    /// Child text elements in display order
    pub fn texts(&self) -> [&str; 3] {
        [&self.english, &self.danish, &self.source]
    }
}

/// Node appended to the results container
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(String),
    Card(Card),
}

impl Node {
    pub fn placeholder() -> Self {
        Node::Text(NO_RESULT_TEXT.to_string())
    }

    pub fn as_card(&self) -> Option<&Card> {
        match self {
            Node::Card(card) => Some(card),
            Node::Text(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_complete_post() {
        let posts: Vec<SearchPost> =
            serde_json::from_str(r#"[{"english":"cat","danish":"kat","source":"X"}]"#).unwrap();

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].english, "cat");
        assert_eq!(posts[0].danish, "kat");
        assert_eq!(posts[0].source, "X");
    }

    #[test]
    fn missing_and_null_fields_become_empty() {
        let posts: Vec<SearchPost> =
            serde_json::from_str(r#"[{"english":"cache"},{"danish":null,"source":"sdu.dk"}]"#)
                .unwrap();

        assert_eq!(posts[0].danish, "");
        assert_eq!(posts[0].source, "");
        assert_eq!(posts[1].english, "");
        assert_eq!(posts[1].danish, "");
        assert_eq!(posts[1].source, "sdu.dk");
    }

    #[test]
    fn non_string_fields_render_as_json_text() {
        let posts: Vec<SearchPost> =
            serde_json::from_str(r#"[{"english":42,"danish":true,"source":["a"]}]"#).unwrap();

        assert_eq!(posts[0].english, "42");
        assert_eq!(posts[0].danish, "true");
        assert_eq!(posts[0].source, r#"["a"]"#);
    }

    #[test]
    fn non_object_entries_become_empty_posts() {
        let posts: Vec<SearchPost> = serde_json::from_str(
            r#"[{"english":"cat","danish":"kat","source":"X"}, 1, "x", [], null]"#,
        )
        .unwrap();

        assert_eq!(posts.len(), 5);
        assert_eq!(posts[0].english, "cat");
        assert!(posts[1..].iter().all(|post| *post == SearchPost::default()));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let post: SearchPost =
            serde_json::from_str(r#"{"english":"bit","danish":"bit","source":"klid.dk","id":7}"#)
                .unwrap();

        assert_eq!(post.source, "klid.dk");
    }

    #[test]
    fn card_texts_keep_display_order() {
        let card = Card {
            english: "file".into(),
            danish: "fil".into(),
            source: "topdatamat.dk".into(),
        };

        assert_eq!(card.texts(), ["file", "fil", "topdatamat.dk"]);
        assert_eq!(Node::Card(card.clone()).as_card(), Some(&card));
        assert_eq!(Node::placeholder(), Node::Text("Intet resultat.".into()));
    }
}
