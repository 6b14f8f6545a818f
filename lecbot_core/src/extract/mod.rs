//! Extraction of the subject and lecture number from normalized text.
//!
//! Both extractors expect input that already went through
//! [`crate::normalize`]; they never fail, they just return `None`.

mod lecture;
mod subject;

pub use lecture::{DEFAULT_MAX_LECTURE, LectureExtractor};
pub use subject::SubjectExtractor;
