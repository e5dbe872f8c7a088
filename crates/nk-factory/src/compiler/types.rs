use crate::supervisor::StreamKind;
use nk_core::BuildOptions;
use std::path::PathBuf;

/// One compilation request: a full option snapshot plus execution mode.
#[derive(Debug, Clone)]
pub struct CompileJob {
    pub options: BuildOptions,
    /// Hand off to a detached terminal window instead of a managed child.
    /// The window reports back through a status file in the temp directory.
    pub detach: bool,
}

/// Status updates sent from the compile logic to the CLI or GUI.
#[derive(Debug, Clone)]
pub enum CompileStatus {
    /// The assembled command line, echoed before execution.
    Command(String),
    Starting,
    Output(StreamKind, String),
    /// Detached hand-off accepted; carries the status file to poll.
    Detached(PathBuf),
    /// Build succeeded; carries the output directory.
    Finished(PathBuf),
    Error(String),
}

/// CLI arguments for the compile and preview commands. Covers the basic
/// option surface; the GUI exposes the advanced groups as well.
pub struct CompileArgs {
    pub script: PathBuf,
    pub standalone: bool,
    pub onefile: bool,
    pub remove_output: bool,
    pub no_console: bool,
    pub follow_imports: bool,
    pub lto: bool,
    pub tkinter: bool,
    pub pyqt6: bool,
    pub jobs: u8,
    pub opt_level: u8,
    pub venv: Option<PathBuf>,
    pub icon: Option<PathBuf>,
    pub resources: Vec<PathBuf>,
    pub detach: bool,
    pub assume_yes: bool,
}

impl CompileArgs {
    /// Folds the argument surface into one option snapshot.
    pub fn into_options(self) -> BuildOptions {
        let mut options = BuildOptions {
            script: self.script,
            standalone: self.standalone,
            onefile: self.onefile,
            remove_output: self.remove_output,
            no_console: self.no_console,
            follow_imports: self.follow_imports,
            lto: self.lto,
            tkinter_plugin: self.tkinter,
            pyqt6_plugin: self.pyqt6,
            jobs: self.jobs.clamp(1, 16),
            opt_level: self.opt_level.min(3),
            venv_root: self.venv,
            icon: self.icon,
            ..BuildOptions::default()
        };
        for resource in self.resources {
            options.add_resource(resource);
        }
        options
    }
}
