use super::{
    core::process_compile,
    types::{CompileJob, CompileStatus},
};
use anyhow::{bail, Result};
use std::{sync::mpsc::Sender, thread};

/// Validates the obvious preconditions up front, then runs the compile on
/// a worker thread. Everything else is reported over the channel,
/// terminal failures included.
pub fn run_async(job: CompileJob, sender: Sender<CompileStatus>) -> Result<()> {
    if job.options.script.as_os_str().is_empty() {
        bail!("No script selected");
    }

    thread::spawn(move || {
        let result = process_compile(&job, |status| {
            let _ = sender.send(status);
        });
        if let Err(e) = result {
            let _ = sender.send(CompileStatus::Error(e.to_string()));
        }
    });
    Ok(())
}
