use super::escape_html;
use crate::datasets::{FieldProjection, Record};

/// One rendered card: a title line plus one detail line per projection
/// entry, in table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub details: Vec<String>,
}

impl Card {
    /// Project a record through a field table.
    ///
    /// Iteration is driven by the table, not the record: a missing key
    /// still yields its detail line, with empty text after the title.
    pub fn project(record: &Record, fields: &[FieldProjection]) -> Self {
        Self {
            title: record.display_name(),
            details: fields
                .iter()
                .map(|field| format!("{}: {}", field.title, record.field_text(field.key)))
                .collect(),
        }
    }

    /// Render the card as an `<li>` list item.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        html.push_str("<li class=\"item\">\n");
        html.push_str(&format!(
            "<h2 class=\"item-title\">{}</h2>\n",
            escape_html(&self.title)
        ));
        html.push_str("<div class=\"item-content\">\n");
        for detail in &self.details {
            html.push_str(&format!(
                "<p class=\"item-detail\">{}</p>\n",
                escape_html(detail)
            ));
        }
        html.push_str("</div>\n</li>\n");
        html
    }
}

/// Project a whole dataset, one card per record, in record order.
pub fn project_cards(records: &[Record], fields: &[FieldProjection]) -> Vec<Card> {
    records
        .iter()
        .map(|record| Card::project(record, fields))
        .collect()
}
