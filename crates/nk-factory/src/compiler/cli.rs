use super::{
    core::process_compile,
    types::{CompileArgs, CompileJob, CompileStatus},
};
use crate::installer::{check_installed, process_install, InstallStatus};
use crate::venv::resolve_interpreter;
use anyhow::{bail, Result};
use dialoguer::{theme::ColorfulTheme, Confirm};
use indicatif::{ProgressBar, ProgressStyle};
use nk_core::CommandLine;
use std::time::Duration;

/// Prints the assembled command without executing anything.
pub fn run_preview_cli(args: CompileArgs) -> Result<()> {
    let options = args.into_options();
    if options.script.as_os_str().is_empty() {
        bail!("No script selected");
    }
    println!("{}", CommandLine::assemble(&options).shell_string());
    Ok(())
}

pub fn run_cli(args: CompileArgs) -> Result<()> {
    let assume_yes = args.assume_yes;
    let detach = args.detach;
    let options = args.into_options();

    if options.script.as_os_str().is_empty() {
        bail!("No script selected");
    }

    // Dependency check before spawning the real build.
    let python = resolve_interpreter(options.venv_root.as_deref())?;
    if check_installed(&python)?.is_none() {
        if options.venv_root.is_none() {
            bail!(
                "Nuitka is not installed for the system interpreter. \
                 Run the install command or select a venv."
            );
        }
        let proceed = assume_yes
            || Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt("Nuitka is not installed in this environment. Install it now?")
                .default(true)
                .interact()?;
        if !proceed {
            bail!("Compilation cancelled - Nuitka not installed");
        }
        let spinner = progress_spinner();
        process_install(&python, |status| match status {
            InstallStatus::Step(label) => spinner.set_message(label),
            InstallStatus::Output(text) => spinner.suspend(|| print!("{}", text)),
            InstallStatus::Installed(version) => {
                spinner.finish_with_message(format!("Nuitka {} installed", version))
            }
            _ => {}
        })?;
    }

    let job = CompileJob { options, detach };
    let spinner = progress_spinner();
    let result = process_compile(&job, |status| match status {
        CompileStatus::Command(command) => spinner.suspend(|| println!("> {}", command)),
        CompileStatus::Starting => spinner.set_message("Compiling..."),
        CompileStatus::Output(_, text) => spinner.suspend(|| print!("{}", text)),
        CompileStatus::Detached(_) => {
            spinner.finish_with_message("Handed off to a terminal window")
        }
        CompileStatus::Finished(dir) => {
            spinner.finish_with_message(format!("Build complete: {}", dir.display()))
        }
        CompileStatus::Error(e) => spinner.abandon_with_message(format!("Error: {}", e)),
    });
    if let Err(e) = result {
        spinner.abandon_with_message(format!("Error: {}", e));
        return Err(e);
    }
    Ok(())
}

fn progress_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner:.green} {msg}").unwrap());
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}
