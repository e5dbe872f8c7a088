use super::{
    core::{process_install, process_uninstall},
    types::{InstallAction, InstallStatus},
};
use anyhow::Result;
use std::{path::PathBuf, sync::mpsc::Sender, thread};

/// Runs an install/uninstall on a worker thread, reporting progress over
/// the channel. Terminal failures arrive as `InstallStatus::Error`.
pub fn run_async(python: PathBuf, action: InstallAction, sender: Sender<InstallStatus>) -> Result<()> {
    thread::spawn(move || {
        let result = match action {
            InstallAction::Install => process_install(&python, |status| {
                let _ = sender.send(status);
            }),
            InstallAction::Uninstall => process_uninstall(&python, |status| {
                let _ = sender.send(status);
            }),
        };
        if let Err(e) = result {
            let _ = sender.send(InstallStatus::Error(e.to_string()));
        }
    });
    Ok(())
}
