use super::types::InstallStatus;
use crate::supervisor::{run_capture, run_shell, SinkEvent};
use anyhow::{bail, Result};
use std::path::Path;

/// Fixed install sequence. Each step goes through the supervisor so its
/// output reaches the display sink live.
const INSTALL_STEPS: &[(&str, &[&str])] = &[
    ("Upgrading pip", &["-m", "pip", "install", "--upgrade", "pip"]),
    (
        "Upgrading packaging tools",
        &["-m", "pip", "install", "--upgrade", "setuptools", "wheel"],
    ),
    (
        "Installing Nuitka",
        &["-m", "pip", "install", "nuitka", "ordered-set"],
    ),
];

/// Detects an installed Nuitka for the given interpreter and returns its
/// version. Tries `pip list` first, then falls back to invoking the
/// module directly.
pub fn check_installed(python: &Path) -> Result<Option<String>> {
    let listing = run_capture(python, &["-m", "pip", "list"])?;
    if listing.success {
        for line in listing.stdout.lines() {
            let mut columns = line.split_whitespace();
            let is_nuitka = columns
                .next()
                .map(|name| name.eq_ignore_ascii_case("nuitka"))
                .unwrap_or(false);
            if is_nuitka {
                if let Some(version) = columns.next() {
                    return Ok(Some(version.to_string()));
                }
            }
        }
    }

    let probe = run_capture(python, &["-m", "nuitka", "--version"])?;
    if probe.success {
        if let Some(version) = probe.stdout.lines().next() {
            return Ok(Some(version.trim().to_string()));
        }
    }
    Ok(None)
}

/// Runs the full install sequence, then re-verifies the package.
pub fn process_install<F>(python: &Path, callback: F) -> Result<()>
where
    F: Fn(InstallStatus),
{
    for (label, args) in INSTALL_STEPS {
        callback(InstallStatus::Step((*label).to_string()));
        let command = python_command(python, args);
        let ok = run_shell(&command, None, |event| match event {
            SinkEvent::Output(_, text) => callback(InstallStatus::Output(text)),
            SinkEvent::Error(text) => callback(InstallStatus::Output(text)),
        });
        if !ok {
            bail!("{} failed", label);
        }
    }

    match check_installed(python)? {
        Some(version) => {
            callback(InstallStatus::Installed(version));
            Ok(())
        }
        None => bail!("Nuitka did not verify after installation"),
    }
}

/// Removes the package from the interpreter's environment.
pub fn process_uninstall<F>(python: &Path, callback: F) -> Result<()>
where
    F: Fn(InstallStatus),
{
    callback(InstallStatus::Step("Uninstalling Nuitka".to_string()));
    let command = python_command(python, &["-m", "pip", "uninstall", "nuitka", "-y"]);
    let ok = run_shell(&command, None, |event| match event {
        SinkEvent::Output(_, text) => callback(InstallStatus::Output(text)),
        SinkEvent::Error(text) => callback(InstallStatus::Output(text)),
    });
    if !ok {
        bail!("Failed to uninstall Nuitka");
    }
    callback(InstallStatus::Removed);
    Ok(())
}

/// Shell-ready `"<python>" <args...>` string, interpreter path quoted the
/// way the supervisor's shell expects.
fn python_command(python: &Path, args: &[&str]) -> String {
    let mut command = format!("\"{}\"", python.display());
    for arg in args {
        command.push(' ');
        command.push_str(arg);
    }
    command
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn python_command_quotes_interpreter() {
        let python = PathBuf::from("/envs/my env/bin/python");
        let command = python_command(&python, &["-m", "pip", "list"]);
        assert_eq!(command, "\"/envs/my env/bin/python\" -m pip list");
    }
}
