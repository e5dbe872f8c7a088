use super::{
    core::{check_installed, process_install, process_uninstall},
    types::{InstallArgs, InstallStatus},
};
use crate::venv::{python_version, resolve_interpreter};
use anyhow::{bail, Result};
use dialoguer::{theme::ColorfulTheme, Confirm};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub fn run_check_cli(args: InstallArgs) -> Result<()> {
    let python = resolve_interpreter(args.venv.as_deref())?;

    match python_version(&python) {
        Ok(version) => println!("Interpreter: {}", version),
        Err(_) => println!("Interpreter version could not be confirmed."),
    }

    match check_installed(&python)? {
        Some(version) => println!("Found Nuitka {}", version),
        None => println!("Nuitka is not installed for this interpreter."),
    }
    Ok(())
}

pub fn run_install_cli(args: InstallArgs) -> Result<()> {
    let python = resolve_interpreter(args.venv.as_deref())?;

    if let Some(version) = check_installed(&python)? {
        println!("Nuitka {} is already installed.", version);
        return Ok(());
    }

    if !args.assume_yes {
        let proceed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Nuitka is not installed for this interpreter. Install it now?")
            .default(true)
            .interact()?;
        if !proceed {
            bail!("Installation cancelled");
        }
    }

    let spinner = progress_spinner();
    let result = process_install(&python, |status| match status {
        InstallStatus::Step(label) => spinner.set_message(label),
        InstallStatus::Output(text) => spinner.suspend(|| print!("{}", text)),
        InstallStatus::Installed(version) => {
            spinner.finish_with_message(format!("Nuitka {} installed", version))
        }
        _ => {}
    });
    if let Err(e) = result {
        spinner.abandon_with_message(format!("Error: {}", e));
        return Err(e);
    }
    Ok(())
}

pub fn run_uninstall_cli(args: InstallArgs) -> Result<()> {
    let python = resolve_interpreter(args.venv.as_deref())?;

    if check_installed(&python)?.is_none() {
        println!("Nuitka is not installed for this interpreter.");
        return Ok(());
    }

    if !args.assume_yes {
        let proceed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Uninstall Nuitka from this environment?")
            .default(false)
            .interact()?;
        if !proceed {
            bail!("Uninstall cancelled");
        }
    }

    let spinner = progress_spinner();
    let result = process_uninstall(&python, |status| match status {
        InstallStatus::Step(label) => spinner.set_message(label),
        InstallStatus::Output(text) => spinner.suspend(|| print!("{}", text)),
        InstallStatus::Removed => spinner.finish_with_message("Nuitka has been uninstalled"),
        _ => {}
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
