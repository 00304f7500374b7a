//! Library surface for the Student Marks Manager TUI application.
//!
//! The crate splits into three layers: `models` holds the student record and
//! its derived figures, `store` owns the flat marks file, and `ui` puts both
//! on the terminal. The re-exports below cover what `main.rs` and any outside
//! tooling actually reach for, so neither needs to know the module layout.
pub mod models;
pub mod store;
pub mod ui;

/// Persistence entry points: locating the marks file and the store that
/// wraps it.
pub use store::{default_marks_path, RecordStore, SortKey, StoreError, StudentDraft};

/// The domain types every other layer passes around.
pub use models::{Grade, StudentRecord};

/// Terminal front end: the application state and the loop that drives it.
pub use ui::{run_app, App};
