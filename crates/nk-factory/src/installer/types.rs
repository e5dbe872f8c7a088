use std::path::PathBuf;

/// CLI arguments shared by the check/install/uninstall commands.
pub struct InstallArgs {
    pub venv: Option<PathBuf>,
    /// Skip the interactive confirmation.
    pub assume_yes: bool,
}

/// Which package operation a worker should perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallAction {
    Install,
    Uninstall,
}

/// Status updates sent from the install logic to the CLI or GUI.
#[derive(Debug, Clone)]
pub enum InstallStatus {
    /// A named step of the fixed install sequence has started.
    Step(String),
    /// Raw child output, relayed for the display sink.
    Output(String),
    /// Install finished and the package re-verified; carries the version.
    Installed(String),
    Removed,
    Error(String),
}
