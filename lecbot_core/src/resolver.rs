//! Message to lecture file resolution.

use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

use crate::catalog::{FileMatcher, FileStore};
use crate::error::BuildError;
use crate::extract::{DEFAULT_MAX_LECTURE, LectureExtractor, SubjectExtractor};
use crate::normalize::normalize;
use crate::response::{ResolveError, ResponsePayload};
use crate::tables::KeywordTables;

/// Default URL prefix under which matched files are served.
pub const DEFAULT_DOWNLOAD_PREFIX: &str = "/file";

/// Tunables for a [`Resolver`].
#[derive(Debug, Clone)]
pub struct ResolverOptions {
    /// Largest lecture number accepted from text.
    pub max_lecture: u32,
    /// URL prefix prepended to the matched file name.
    pub download_prefix: String,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            max_lecture: DEFAULT_MAX_LECTURE,
            download_prefix: DEFAULT_DOWNLOAD_PREFIX.to_string(),
        }
    }
}

/// What was understood from a single message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Extraction {
    pub normalized: String,
    pub subject: Option<String>,
    pub lecture: Option<u32>,
    pub file: Option<String>,
}

impl Extraction {
    /// Turn the extraction into the first failure in precedence order, or the matched parts.
    ///
    /// # Errors
    /// Subject first, then lecture number, then the file lookup.
    pub fn into_match(self) -> Result<(String, u32, String), ResolveError> {
        let subject = self.subject.ok_or(ResolveError::SubjectNotRecognized)?;
        let lecture = self
            .lecture
            .ok_or(ResolveError::LectureNumberNotRecognized)?;
        let file = self
            .file
            .ok_or_else(|| ResolveError::ResourceNotFound {
                subject: subject.clone(),
                lecture,
            })?;
        Ok((subject, lecture, file))
    }
}

/// Maps a free-text message to a lecture file in the store.
///
/// Holds only immutable state; share it behind an `Arc` across requests.
pub struct Resolver<S> {
    tables: Arc<KeywordTables>,
    subjects: SubjectExtractor,
    lectures: LectureExtractor,
    matcher: FileMatcher<S>,
    download_prefix: String,
}

impl<S: FileStore> Resolver<S> {
    /// Validate `tables` and compile the extractors.
    ///
    /// # Errors
    /// Returns an error if the tables break an invariant or a pattern fails to compile.
    pub fn new(
        tables: Arc<KeywordTables>,
        store: S,
        options: ResolverOptions,
    ) -> Result<Self, BuildError> {
        tables.validate(options.max_lecture)?;

        let subjects = SubjectExtractor::new(&tables);
        let lectures = LectureExtractor::new(&tables.ordinals, options.max_lecture)?;

        info!(
            "Resolver ready: {} subjects, {} ordinals, lectures 1..={}",
            tables.subjects.len(),
            tables.ordinals.len(),
            options.max_lecture
        );

        Ok(Self {
            tables,
            subjects,
            lectures,
            matcher: FileMatcher::new(store),
            download_prefix: options.download_prefix,
        })
    }

    /// Resolver over the compiled-in tables with default options.
    ///
    /// # Errors
    /// Only if the default tables are inconsistent.
    pub fn with_defaults(store: S) -> Result<Self, BuildError> {
        Self::new(
            Arc::new(KeywordTables::default()),
            store,
            ResolverOptions::default(),
        )
    }

    #[must_use]
    pub fn tables(&self) -> &KeywordTables {
        &self.tables
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        self.matcher.store()
    }

    /// Run normalization, both extractors and, when both succeeded, the file lookup.
    #[must_use]
    pub fn extract(&self, message: &str) -> Extraction {
        let normalized = normalize(message);
        let subject = self.subjects.extract(&normalized).map(str::to_string);
        let lecture = self.lectures.extract(&normalized);
        let file = self.matcher.find(subject.as_deref(), lecture);

        debug!("Extracted subject={subject:?} lecture={lecture:?} file={file:?} from {normalized:?}");

        Extraction {
            normalized,
            subject,
            lecture,
            file,
        }
    }

    /// Answer a chat message with a download link or an error payload.
    #[must_use]
    pub fn resolve(&self, message: &str) -> ResponsePayload {
        match self.extract(message).into_match() {
            Ok((subject, lecture, file)) => {
                info!("Resolved {subject} lecture {lecture} -> {file}");
                ResponsePayload::file(&subject, lecture, &file, &self.download_prefix)
            }
            Err(e) => {
                info!("Unresolved message: {e:?}");
                e.into()
            }
        }
    }
}
