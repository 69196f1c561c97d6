use crate::http::{Request, Response};
use matchit::Router as MatchitRouter;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Type alias for route handlers.
pub type BoxedHandler =
    Box<dyn Fn(Request) -> Pin<Box<dyn Future<Output = Response> + Send>> + Send + Sync>;

/// GET router over matchit. The app serves only GET routes (a page and a
/// small JSON API), so other methods fall through to the 404 path.
pub struct Router {
    get_routes: MatchitRouter<Arc<BoxedHandler>>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            get_routes: MatchitRouter::new(),
        }
    }

    /// Register a GET route. Chainable.
    pub fn get<H, Fut>(mut self, path: &str, handler: H) -> Self
    where
        H: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        let handler: BoxedHandler = Box::new(move |req| Box::pin(handler(req)));
        self.get_routes.insert(path, Arc::new(handler)).ok();
        self
    }

    /// Match a request and return the handler with extracted params.
    pub fn match_route(
        &self,
        method: &hyper::Method,
        path: &str,
    ) -> Option<(Arc<BoxedHandler>, HashMap<String, String>)> {
        if *method != hyper::Method::GET {
            return None;
        }

        self.get_routes.at(path).ok().map(|matched| {
            let params: HashMap<String, String> = matched
                .params
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            (matched.value.clone(), params)
        })
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpResponse;

    fn sample_router() -> Router {
        Router::new()
            .get("/", |_req| async { Ok(HttpResponse::text("home")) })
            .get("/api/datasets/{name}", |_req| async {
                Ok(HttpResponse::text("dataset"))
            })
    }

    #[test]
    fn matches_registered_get_routes() {
        let router = sample_router();
        assert!(router.match_route(&hyper::Method::GET, "/").is_some());
        assert!(router.match_route(&hyper::Method::GET, "/nope").is_none());
    }

    #[test]
    fn extracts_path_params() {
        let router = sample_router();
        let (_, params) = router
            .match_route(&hyper::Method::GET, "/api/datasets/people")
            .unwrap();
        assert_eq!(params.get("name").map(String::as_str), Some("people"));
    }

    #[test]
    fn non_get_methods_do_not_match() {
        let router = sample_router();
        assert!(router.match_route(&hyper::Method::POST, "/").is_none());
    }
}
