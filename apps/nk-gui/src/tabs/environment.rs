use crate::{
    app::{ForgeApp, Modal, ModalKind, UiEvent},
    theme,
};
use eframe::egui;
use nk_factory::{
    installer::{self, InstallAction, InstallStatus},
    venv,
};
use std::{path::PathBuf, sync::mpsc, thread};

pub fn show(app: &mut ForgeApp, ui: &mut egui::Ui) {
    ui.heading("Python Environment");
    ui.label("Pick the interpreter used for compiling and manage its Nuitka install.");
    ui.add_space(12.0);

    theme::card(ui, "Virtual Environment (venv)", None, |ui| {
        ui.checkbox(&mut app.use_venv, "Use venv");
        ui.add_enabled_ui(app.use_venv, |ui| {
            ui.horizontal(|ui| {
                if ui.button("📂 Browse...").clicked() {
                    if let Some(dir) = rfd::FileDialog::new().pick_folder() {
                        app.venv_input = dir.display().to_string();
                        app.options.venv_root = Some(dir);
                        start_env_check(app);
                    }
                }
            });
            theme::text_input(ui, &mut app.venv_input, "Path to the venv root directory");
        });
        ui.label(
            egui::RichText::new(
                "With no venv selected, the bare system interpreter is used instead.",
            )
            .small()
            .weak(),
        );
    });

    ui.add_space(12.0);

    let (_, check_clicked) = theme::card(
        ui,
        "Nuitka",
        Some(("🔄 Check", theme::ButtonVariant::Secondary)),
        |ui| {
            let interpreter_label = app
                .python_version
                .clone()
                .unwrap_or_else(|| "not checked".to_string());
            ui.label(format!("Interpreter: {}", interpreter_label));

            let nuitka_label = match &app.nuitka_version {
                Some(version) => format!("Nuitka: {}", version),
                None => "Nuitka: not detected".to_string(),
            };
            ui.label(nuitka_label);

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.add_enabled_ui(!app.is_busy, |ui| {
                    if theme::styled_button(
                        ui,
                        "⬇ Install Nuitka",
                        theme::ButtonVariant::Primary,
                    )
                    .clicked()
                    {
                        start_install(app);
                    }
                    if theme::styled_button(
                        ui,
                        "🗑 Uninstall Nuitka",
                        theme::ButtonVariant::Destructive,
                    )
                    .clicked()
                    {
                        app.modal = Some(Modal {
                            title: "Confirm Uninstall".to_string(),
                            message: "Are you sure you want to uninstall Nuitka \
                                      from this environment?"
                                .to_string(),
                            kind: ModalKind::ConfirmUninstall,
                        });
                    }
                });
            });
        },
    );
    if check_clicked {
        start_env_check(app);
    }
}

/// Probes the selected interpreter on a worker thread: version string plus
/// Nuitka presence. A missing version is a warning, never fatal.
pub fn start_env_check(app: &mut ForgeApp) {
    app.current_task = "Checking environment...".into();
    let tx = app.event_tx.clone();
    let root = app.options.venv_root.clone();

    thread::spawn(move || {
        let python = match venv::resolve_interpreter(root.as_deref()) {
            Ok(python) => python,
            Err(e) => {
                let _ = tx.send(UiEvent::Log(format!("Error: {}", e)));
                let _ = tx.send(UiEvent::EnvironmentInfo {
                    python_version: None,
                    nuitka_version: None,
                });
                return;
            }
        };
        let python_version = venv::python_version(&python).ok();
        let nuitka_version = installer::check_installed(&python).ok().flatten();
        match &nuitka_version {
            Some(version) => {
                let _ = tx.send(UiEvent::Log(format!("Found Nuitka {}", version)));
            }
            None => {
                let _ = tx.send(UiEvent::Log("Nuitka not found in environment.".into()));
            }
        }
        let _ = tx.send(UiEvent::EnvironmentInfo {
            python_version,
            nuitka_version,
        });
    });
}

pub fn start_install(app: &mut ForgeApp) {
    run_install_action(app, InstallAction::Install, "Installing Nuitka...");
}

pub fn start_uninstall(app: &mut ForgeApp) {
    run_install_action(app, InstallAction::Uninstall, "Uninstalling Nuitka...");
}

fn run_install_action(app: &mut ForgeApp, action: InstallAction, task: &str) {
    app.is_busy = true;
    app.current_task = task.to_string();
    let tx = app.event_tx.clone();
    let root = app.options.venv_root.clone();

    thread::spawn(move || {
        let python: PathBuf = match venv::resolve_interpreter(root.as_deref()) {
            Ok(python) => python,
            Err(e) => {
                let _ = tx.send(UiEvent::InstallFinished {
                    ok: false,
                    message: e.to_string(),
                });
                return;
            }
        };

        let (worker_tx, worker_rx) = mpsc::channel();
        if let Err(e) = installer::run_async(python, action, worker_tx) {
            let _ = tx.send(UiEvent::InstallFinished {
                ok: false,
                message: e.to_string(),
            });
            return;
        }

        for status in worker_rx {
            match status {
                InstallStatus::Step(label) => {
                    let _ = tx.send(UiEvent::Task(label.clone()));
                    let _ = tx.send(UiEvent::Log(format!(">> {}", label)));
                }
                InstallStatus::Output(text) => {
                    let _ = tx.send(UiEvent::Output(text));
                }
                InstallStatus::Installed(version) => {
                    let _ = tx.send(UiEvent::InstallFinished {
                        ok: true,
                        message: format!("Nuitka {} has been installed.", version),
                    });
                }
                InstallStatus::Removed => {
                    let _ = tx.send(UiEvent::InstallFinished {
                        ok: true,
                        message: "Nuitka has been uninstalled.".to_string(),
                    });
                }
                InstallStatus::Error(e) => {
                    let _ = tx.send(UiEvent::InstallFinished {
                        ok: false,
                        message: e,
                    });
                }
            }
        }
    });
}
