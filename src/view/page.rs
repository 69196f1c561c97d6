use super::card::project_cards;
use super::{escape_html, ColumnData, ColumnView, PageView};

/// Page styling: flex container, half-width columns, bordered rounded
/// cards with a teal title bar and grey detail text.
const STYLE: &str = "\
body { margin: 0; }
.container { display: flex; font-family: \"Open Sans\", sans-serif; padding: 10px; }
.column { margin: 0 5px; width: 50%; }
.data-list { margin: 0; padding: 0; }
.link { display: block; text-align: center; text-decoration: none; color: #000; }
.item { border: 1px solid grey; border-radius: 7px; list-style: none; margin-bottom: 10px; }
.item-title { background-color: teal; color: #fff; margin: 0; padding: 15px; }
.item-content { padding: 0 15px; }
.item-detail { color: grey; }
.column-error { color: grey; text-align: center; }
";

/// Render the full two-column page as an HTML document.
pub fn render_page(view: &PageView) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str("<title>dualist</title>\n");
    html.push_str("<style>\n");
    html.push_str(STYLE);
    html.push_str("</style>\n</head>\n<body>\n<main class=\"container\">\n");

    for column in &view.columns {
        html.push_str(&render_column(column));
    }

    html.push_str("</main>\n</body>\n</html>\n");
    html
}

/// Render one column: a header linking to the source (opened in a new
/// browsing context), then the card list or a failure notice.
fn render_column(column: &ColumnView) -> String {
    let mut html = String::new();
    html.push_str("<div class=\"column\">\n");
    html.push_str(&format!(
        "<h2><a class=\"link\" href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a></h2>\n",
        escape_html(&column.source_url),
        escape_html(column.label)
    ));

    match &column.data {
        ColumnData::Loaded(records) => {
            html.push_str("<ul class=\"data-list\">\n");
            for card in project_cards(records, column.fields) {
                html.push_str(&card.to_html());
            }
            html.push_str("</ul>\n");
        }
        ColumnData::Failed => {
            html.push_str("<p class=\"column-error\">Failed to load this dataset.</p>\n");
        }
    }

    html.push_str("</div>\n");
    html
}
