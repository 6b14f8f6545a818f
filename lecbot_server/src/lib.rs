#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! HTTP front end for the lecture resolver.
//!
//! - `POST /request` answers a chat message with a [`lecbot_core::ResponsePayload`]
//! - `GET /file/:filename` streams a catalog file back as a download

mod error;
mod handler;
mod server;

pub use error::{Error, Result};
pub use handler::RequestBody;
pub use server::{AppState, Server};
