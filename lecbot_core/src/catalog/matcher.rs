use tracing::{debug, warn};

use super::FileStore;

/// Finds the catalog file for a subject and lecture number.
///
/// A file matches when its lowercased name contains `<subject>_lecture_<n>`
/// with the subject at the start of the name or after a non-alphanumeric
/// character, and the number not followed by another digit. This keeps
/// `algorithm_lecture_1` from matching `algorithm_lecture_10.pdf`.
#[derive(Debug, Clone)]
pub struct FileMatcher<S> {
    store: S,
}

impl<S: FileStore> FileMatcher<S> {
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Return the first file name encoding both `subject` and `lecture`.
    ///
    /// Fails closed: a missing input or an unreadable store yields `None`.
    pub fn find(&self, subject: Option<&str>, lecture: Option<u32>) -> Option<String> {
        let (subject, lecture) = (subject?, lecture?);

        let names = match self.store.list_names() {
            Ok(names) => names,
            Err(e) => {
                warn!("Failed to list lecture files: {e}");
                return None;
            }
        };

        let token = format!("{}_lecture_{lecture}", subject.to_lowercase());
        let found = names
            .into_iter()
            .find(|name| contains_token(&name.to_lowercase(), &token));

        debug!(
            "File lookup for {token}: {}",
            found.as_deref().unwrap_or("<none>")
        );
        found
    }
}

fn contains_token(name: &str, token: &str) -> bool {
    name.match_indices(token).any(|(start, _)| {
        let before = name[..start].chars().next_back();
        let after = name[start + token.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(|c| c.is_ascii_digit())
    })
}
