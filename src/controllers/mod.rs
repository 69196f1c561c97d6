//! Request handlers.
//!
//! Each handler takes the wrapped request plus the shared `AppContext`
//! (captured by the route closures in `main.rs`).

pub mod api;
pub mod home;
