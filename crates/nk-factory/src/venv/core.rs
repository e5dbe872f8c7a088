use crate::supervisor::run_capture;
use anyhow::{bail, Result};
use nk_core::{flags, venv_python};
use std::path::{Path, PathBuf};

/// Checks that a venv root actually contains an interpreter and returns
/// its path.
pub fn validate_venv(root: &Path) -> Result<PathBuf> {
    let python = venv_python(root);
    if !python.exists() {
        bail!("No Python interpreter found at {:?}", python);
    }
    Ok(python)
}

/// Interpreter for an optional venv selection: the validated venv
/// interpreter, or the bare system one.
pub fn resolve_interpreter(venv_root: Option<&Path>) -> Result<PathBuf> {
    match venv_root {
        Some(root) => validate_venv(root),
        None => Ok(PathBuf::from(flags::SYSTEM_PYTHON)),
    }
}

/// Version string reported by an interpreter, e.g. "Python 3.12.1".
/// Older interpreters print it on stderr, so both streams are checked.
/// Failure here is a warning condition for callers, never fatal.
pub fn python_version(python: &Path) -> Result<String> {
    let output = run_capture(python, &["--version"])?;
    if !output.success {
        bail!("Interpreter at {:?} did not report a version", python);
    }
    let text = if output.stdout.trim().is_empty() {
        output.stderr
    } else {
        output.stdout
    };
    Ok(text.trim().to_string())
}
