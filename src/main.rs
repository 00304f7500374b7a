//! Binary entry point wiring the flat-file record store to the TUI.

use student_marks_manager::{default_marks_path, run_app, App, RecordStore, StoreError};

/// Resolve the marks file, load it, and hand control to the event loop.
///
/// A missing marks file is not fatal: the manager starts with an empty list,
/// shows a footer warning, and writes the file on the first add. Anything
/// else that goes wrong while opening (an unreadable home directory, say)
/// bubbles up as an error instead of being papered over.
fn main() -> anyhow::Result<()> {
    let path = default_marks_path()?;
    let (store, warning) = match RecordStore::open(&path) {
        Ok(store) => (store, None),
        Err(err @ StoreError::Unavailable { .. }) => {
            (RecordStore::empty(&path), Some(err.to_string()))
        }
        Err(err) => return Err(err.into()),
    };

    let mut app = App::new(store, warning);
    run_app(&mut app)
}
