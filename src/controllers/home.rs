use std::sync::Arc;

use crate::app::AppContext;
use crate::datasets::{self, Endpoint};
use crate::fetch::DatasetResult;
use crate::http::{HttpResponse, Request, Response};
use crate::view::{render_page, ColumnData, ColumnView, PageView};

/// GET `/` — fetch both sources concurrently and render the two-column
/// page.
pub async fn index(_req: Request, ctx: Arc<AppContext>) -> Response {
    let view = load_page(&ctx).await;
    Ok(HttpResponse::html(render_page(&view)))
}

/// Fetch, decode, and assemble the page snapshot.
///
/// One column per source, in source order. A source that fails to fetch or
/// decode degrades to a failed column; it never takes the page down.
pub async fn load_page(ctx: &AppContext) -> PageView {
    let endpoints = ctx.sources.endpoints();
    let outcomes = ctx.fetcher.fetch_all(&endpoints).await;

    let columns = endpoints
        .iter()
        .zip(outcomes)
        .map(|(endpoint, outcome)| build_column(endpoint, outcome))
        .collect();

    PageView { columns }
}

fn build_column(endpoint: &Endpoint, outcome: DatasetResult) -> ColumnView {
    let data = match outcome {
        Ok(value) => match datasets::decode(endpoint, &value) {
            Ok(records) => ColumnData::Loaded(records),
            Err(err) => {
                eprintln!("decode failed for {}: {}", endpoint.label, err);
                ColumnData::Failed
            }
        },
        // Fetch failures were already logged by the fetcher
        Err(_) => ColumnData::Failed,
    };

    ColumnView {
        label: endpoint.label,
        source_url: endpoint.url.to_string(),
        fields: endpoint.fields(),
        data,
    }
}
