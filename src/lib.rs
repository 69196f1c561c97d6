pub mod app;
pub mod config;
pub mod controllers;
pub mod datasets;
pub mod error;
pub mod fetch;
pub mod http;
pub mod routing;
pub mod server;
pub mod view;

pub use app::AppContext;
pub use http::{HttpResponse, Request, Response};
pub use routing::Router;
pub use server::Server;
