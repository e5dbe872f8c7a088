use super::types::{CompileJob, CompileStatus};
use super::utils::{cleanup_artifacts, spawn_detached};
use crate::supervisor::{run_shell, SinkEvent, StreamKind};
use crate::venv::validate_venv;
use anyhow::{bail, Result};
use nk_core::CommandLine;
use std::path::{Path, PathBuf};

/// Validates the job, assembles the command, and runs it to completion,
/// relaying output through `callback`. Managed runs block until the child
/// exits; detached runs return as soon as the terminal window is spawned.
pub fn process_compile<F>(job: &CompileJob, callback: F) -> Result<()>
where
    F: Fn(CompileStatus),
{
    let options = &job.options;

    // Precondition checks, before anything is spawned.
    if options.script.as_os_str().is_empty() {
        bail!("No script selected");
    }
    if !options.script.exists() {
        bail!("Script not found at {:?}", options.script);
    }
    if let Some(root) = &options.venv_root {
        validate_venv(root)?;
    }

    let command = CommandLine::assemble(options).shell_string();
    callback(CompileStatus::Command(command.clone()));

    let work_dir = options.script_dir().map(Path::to_path_buf);

    if job.detach {
        let status_file = spawn_detached(
            &command,
            work_dir.as_deref(),
            options.venv_root.as_deref(),
        )?;
        callback(CompileStatus::Detached(status_file));
        return Ok(());
    }

    callback(CompileStatus::Starting);
    let ok = run_shell(&command, work_dir.as_deref(), |event| match event {
        SinkEvent::Output(stream, text) => callback(CompileStatus::Output(stream, text)),
        SinkEvent::Error(text) => callback(CompileStatus::Output(StreamKind::Stderr, text)),
    });

    if !ok {
        bail!("Compilation failed");
    }

    let output_dir = work_dir.unwrap_or_else(|| PathBuf::from("."));
    cleanup_artifacts(&output_dir);
    callback(CompileStatus::Finished(output_dir));
    Ok(())
}
