//! File-backed persistence split across logical submodules.

mod error;
mod records;
mod source;

pub use error::{StoreError, ValidationError};
pub use records::{Extremes, RecordStore, SortKey, StudentDraft, Summary};
pub use source::default_marks_path;
