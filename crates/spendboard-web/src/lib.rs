//! spendboard-web - Browser front end for spendboard using Leptos
//!
//! The Leptos app compiles to WASM with Trunk (`--features csr`). With the
//! default `server` feature the crate also provides the Axum host that serves
//! the compiled bundle.

#![recursion_limit = "1024"]

pub mod api;
pub mod app;
pub mod components;
pub mod pages;
pub mod prompt;
#[cfg(feature = "server")]
pub mod server;

pub use app::App;
#[cfg(feature = "server")]
pub use server::{create_router, run};
