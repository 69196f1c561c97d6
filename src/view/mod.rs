//! View layer: immutable view-state snapshots and the pure HTML renderer.
//!
//! Rendering is deterministic: the same snapshot always produces
//! byte-identical output. Nothing here performs I/O.

mod card;
mod page;

pub use card::{project_cards, Card};
pub use page::render_page;

use crate::datasets::{FieldProjection, Record};

/// What a column has to show: its records, or the fact that its dataset
/// could not be loaded.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Loaded(Vec<Record>),
    Failed,
}

/// Everything one column needs to render: header link metadata, the field
/// table, and the dataset outcome.
#[derive(Debug, Clone)]
pub struct ColumnView {
    pub label: &'static str,
    pub source_url: String,
    pub fields: &'static [FieldProjection],
    pub data: ColumnData,
}

/// Snapshot handed to the renderer; one column per source, in source order.
#[derive(Debug, Clone)]
pub struct PageView {
    pub columns: Vec<ColumnView>,
}

/// Escape text for safe interpolation into HTML element and attribute
/// content.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
