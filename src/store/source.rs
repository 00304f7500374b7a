use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::BaseDirs;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".student-marks-manager";
/// Marks file name stored inside the application data directory.
const MARKS_FILE_NAME: &str = "studentMarks.txt";

/// Resolve the absolute path to the marks file inside the user's home and
/// make sure its parent directory exists. The file itself is never created
/// here: a missing marks file is a condition the store reports to the user,
/// not something to paper over at startup.
pub fn default_marks_path() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
    let path = base_dirs
        .home_dir()
        .join(DATA_DIR_NAME)
        .join(MARKS_FILE_NAME);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("failed to create data directory")?;
    }

    Ok(path)
}

/// Replace `path` with `contents` in one observable step: write a sibling
/// temporary file, then rename it over the original. A crash mid-write
/// leaves the old file intact instead of a truncated one.
pub(crate) fn replace_file(path: &Path, contents: &str) -> io::Result<()> {
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)
}
