pub mod host;
pub mod render;
pub mod widget;

pub use host::{MemoryContainer, ResultsContainer, SearchField, TextField};
pub use render::{render_card, render_posts};
pub use widget::{SearchSettings, SearchWidget};
