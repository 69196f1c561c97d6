use std::path::Path;
use std::sync::Arc;

use dualist::controllers::{api, home};
use dualist::{config, AppContext, Router, Server};

#[tokio::main]
async fn main() {
    config::load_dotenv(Path::new("."));

    let ctx = Arc::new(AppContext::from_env().expect("Failed to build HTTP client"));

    let router = Router::new()
        .get("/", {
            let ctx = ctx.clone();
            move |req| home::index(req, ctx.clone())
        })
        .get("/api/datasets", {
            let ctx = ctx.clone();
            move |req| api::datasets(req, ctx.clone())
        })
        .get("/api/datasets/{name}", {
            let ctx = ctx.clone();
            move |req| api::dataset(req, ctx.clone())
        });

    Server::from_config(router)
        .run()
        .await
        .expect("Failed to start server");
}
