use std::sync::Arc;

use serde_json::{json, Value};

use crate::app::AppContext;
use crate::datasets::{self, Endpoint};
use crate::error::AppError;
use crate::fetch::DatasetResult;
use crate::http::{HttpResponse, Request, Response};

/// GET `/api/datasets` — both decoded datasets with per-dataset status.
pub async fn datasets(_req: Request, ctx: Arc<AppContext>) -> Response {
    let endpoints = ctx.sources.endpoints();
    let outcomes = ctx.fetcher.fetch_all(&endpoints).await;

    let datasets: Vec<Value> = endpoints
        .iter()
        .zip(outcomes)
        .map(|(endpoint, outcome)| dataset_json(endpoint, outcome))
        .collect();

    Ok(HttpResponse::json(json!({ "datasets": datasets })))
}

/// GET `/api/datasets/{name}` — one dataset by name (`people` or `users`).
pub async fn dataset(req: Request, ctx: Arc<AppContext>) -> Response {
    let name = req.param("name")?;

    let endpoint = match name {
        "people" => ctx.sources.people.clone(),
        "users" => ctx.sources.users.clone(),
        other => {
            return Err(AppError::not_found(format!("unknown dataset '{}'", other)).into());
        }
    };

    let outcome = ctx.fetcher.fetch_one(&endpoint).await;
    if let Err(err) = &outcome {
        eprintln!("fetch failed for {}: {}", endpoint.label, err);
    }

    Ok(HttpResponse::json(dataset_json(&endpoint, outcome)))
}

/// Serialize one dataset outcome: decoded records on success, the error
/// message on fetch or decode failure.
fn dataset_json(endpoint: &Endpoint, outcome: DatasetResult) -> Value {
    let decoded = outcome.map_err(|e| e.to_string()).and_then(|value| {
        datasets::decode(endpoint, &value).map_err(|e| e.to_string())
    });

    match decoded {
        Ok(records) => json!({
            "label": endpoint.label,
            "source": endpoint.url.as_str(),
            "status": "loaded",
            "records": records,
        }),
        Err(error) => json!({
            "label": endpoint.label,
            "source": endpoint.url.as_str(),
            "status": "failed",
            "error": error,
        }),
    }
}
