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

//! Lecture lookup from free-text chat messages.
//!
//! A message is normalized, a subject and a lecture number are pulled out
//! of it with keyword tables, and the lecture directory is searched for a
//! file named `<subject>_lecture_<n>`. [`Resolver::resolve`] wraps the whole
//! pipeline and always answers with a [`ResponsePayload`].

pub mod catalog;
mod error;
pub mod extract;
mod normalize;
mod resolver;
mod response;
pub mod tables;

pub use catalog::{DirectoryStore, FileMatcher, FileStore};
pub use error::BuildError;
pub use extract::{DEFAULT_MAX_LECTURE, LectureExtractor, SubjectExtractor};
pub use normalize::normalize;
pub use resolver::{DEFAULT_DOWNLOAD_PREFIX, Extraction, Resolver, ResolverOptions};
pub use response::{ResolveError, ResponsePayload};
pub use tables::{KeywordTables, OrdinalEntry, SubjectEntry};
