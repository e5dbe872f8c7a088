use super::types::{CaptureOutput, SinkEvent, StreamKind};
use anyhow::{Context, Result};
use crossbeam_channel::{bounded, Sender};
use std::ffi::OsStr;
use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;

const CHUNK_SIZE: usize = 4096;
const QUEUE_SIZE: usize = 256;

/// Runs one command through the platform shell, relaying both output
/// streams to `sink` until the child exits.
///
/// One reader thread per pipe feeds a bounded channel in buffered chunks;
/// the calling thread drains the channel, waits on the child, then joins
/// the readers. Returns whether the child exited with status zero. Every
/// failure mode is converted into a sink line plus `false`.
pub fn run_shell<F>(command: &str, cwd: Option<&Path>, sink: F) -> bool
where
    F: Fn(SinkEvent),
{
    let mut cmd = shell_command(command);
    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(e) => {
            sink(SinkEvent::Error(format!("Failed to start command: {}\n", e)));
            return false;
        }
    };

    let (tx, rx) = bounded::<(StreamKind, String)>(QUEUE_SIZE);
    let mut readers = Vec::new();

    if let Some(stdout) = child.stdout.take() {
        let tx = tx.clone();
        readers.push(thread::spawn(move || {
            relay_pipe(stdout, StreamKind::Stdout, tx)
        }));
    }
    if let Some(stderr) = child.stderr.take() {
        let tx = tx.clone();
        readers.push(thread::spawn(move || {
            relay_pipe(stderr, StreamKind::Stderr, tx)
        }));
    }
    drop(tx);

    // Drains until both readers observe end-of-stream and drop their senders.
    for (stream, text) in rx {
        sink(SinkEvent::Output(stream, text));
    }

    let success = match child.wait() {
        Ok(status) => status.success(),
        Err(e) => {
            sink(SinkEvent::Error(format!(
                "Failed to wait on command: {}\n",
                e
            )));
            false
        }
    };

    for reader in readers {
        let _ = reader.join();
    }
    success
}

/// Runs a short probe command to completion and captures its output.
/// Meant for quick one-shot checks (version queries, package listings).
pub fn run_capture(program: impl AsRef<OsStr>, args: &[&str]) -> Result<CaptureOutput> {
    let program = program.as_ref();
    let mut cmd = Command::new(program);
    cmd.args(args).stdin(Stdio::null());
    hide_console(&mut cmd);

    let output = cmd
        .output()
        .with_context(|| format!("Failed to run {:?}", program))?;

    Ok(CaptureOutput {
        success: output.status.success(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

fn relay_pipe<R: Read>(mut pipe: R, stream: StreamKind, tx: Sender<(StreamKind, String)>) {
    let mut buffer = [0u8; CHUNK_SIZE];
    loop {
        match pipe.read(&mut buffer) {
            Ok(0) | Err(_) => break,
            Ok(n) => {
                let text = String::from_utf8_lossy(&buffer[..n]).into_owned();
                if tx.send((stream, text)).is_err() {
                    break;
                }
            }
        }
    }
}

fn shell_command(command: &str) -> Command {
    #[cfg(windows)]
    {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg(command);
        cmd
    }
    #[cfg(not(windows))]
    {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(command);
        cmd
    }
}

#[cfg(windows)]
fn hide_console(cmd: &mut Command) {
    use std::os::windows::process::CommandExt;
    const CREATE_NO_WINDOW: u32 = 0x0800_0000;
    cmd.creation_flags(CREATE_NO_WINDOW);
}

#[cfg(not(windows))]
fn hide_console(_cmd: &mut Command) {}
