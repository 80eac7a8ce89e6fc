pub mod adapter;
pub mod document;
pub mod html;

pub use adapter::{EditorCommand, RichTextEditor, Selection};
pub use document::{Block, Document, Inline, ListKind, Mark};

/// The HTML the editor would emit for `html`. Stored blog content always
/// goes through this so what the API keeps is what the editor produces.
pub fn canonical_content(html: &str) -> String {
    html::serialize(&html::parse(html))
}

/// True when `html` has no visible text, e.g. `<p></p>` or `<p> </p>`.
pub fn is_blank(html: &str) -> bool {
    html::parse(html).is_empty()
}
