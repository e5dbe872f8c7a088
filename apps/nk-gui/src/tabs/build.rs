use crate::{
    app::{ForgeApp, UiEvent},
    theme, utils,
};
use eframe::egui;
use nk_core::{BuildOptions, CommandLine};
use nk_factory::{compiler, installer, venv};
use std::{sync::mpsc, thread};

pub fn show(app: &mut ForgeApp, ui: &mut egui::Ui) {
    ui.heading("Build");
    ui.label("Configure and run a Nuitka compilation for one Python script.");
    ui.add_space(12.0);

    // CARD 1: SCRIPT
    theme::card(ui, "1. Python Script", None, |ui| {
        ui.horizontal(|ui| {
            if ui.button("📂 Browse...").clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("Python files", &["py", "pyw"])
                    .pick_file()
                {
                    app.script_input = path.display().to_string();
                }
            }
            if !app.script_input.is_empty() && ui.small_button("❌ Clear").clicked() {
                app.script_input.clear();
            }
        });
        theme::text_input(ui, &mut app.script_input, "Path to the script to compile");
    });

    ui.add_space(12.0);

    // CARD 2: OPTIONS
    theme::card(ui, "2. Options", None, |ui| {
        egui::Grid::new("basic_options_grid")
            .spacing([36.0, 8.0])
            .show(ui, |ui| {
                // Standalone is forced on (and locked) while onefile is active.
                let mut standalone = app.options.effective_standalone();
                ui.add_enabled_ui(!app.options.onefile, |ui| {
                    if ui.checkbox(&mut standalone, "Standalone").changed() {
                        app.options.standalone = standalone;
                    }
                });
                if ui.checkbox(&mut app.options.onefile, "One File").changed()
                    && app.options.onefile
                {
                    app.options.standalone = true;
                    app.options.follow_imports = false;
                }
                ui.checkbox(&mut app.options.remove_output, "Remove Output");
                ui.end_row();

                ui.checkbox(&mut app.options.no_console, "No Console");
                ui.add_enabled_ui(!app.options.onefile, |ui| {
                    ui.checkbox(&mut app.options.follow_imports, "Follow Imports");
                });
                ui.checkbox(&mut app.options.lto, "LTO (Link Time Optimization)");
                ui.end_row();

                ui.checkbox(&mut app.options.tkinter_plugin, "Enable Tkinter Support");
                ui.checkbox(&mut app.options.pyqt6_plugin, "Enable PyQt6 Support");
                ui.horizontal(|ui| {
                    ui.label("Jobs:");
                    ui.add(egui::DragValue::new(&mut app.options.jobs).clamp_range(1..=16));
                });
                ui.end_row();
            });
    });

    ui.add_space(12.0);

    // CARD 3: ICON
    theme::card(ui, "3. Application Icon", None, |ui| {
        ui.horizontal(|ui| {
            let label = app
                .options
                .icon
                .as_deref()
                .map(utils::file_label)
                .unwrap_or_else(|| "No icon selected".to_string());
            ui.label(label);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Select Icon").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("Icon files", &["ico"])
                        .pick_file()
                    {
                        app.options.icon = Some(path);
                    }
                }
                if app.options.icon.is_some() && ui.button("Clear").clicked() {
                    app.options.icon = None;
                }
            });
        });
        ui.label(
            egui::RichText::new(
                "The icon is embedded both as the executable icon and as a readable asset.",
            )
            .small()
            .weak(),
        );
    });

    ui.add_space(12.0);

    // CARD 4: RESOURCES
    let (_, add_clicked) = theme::card(
        ui,
        "4. Resource Files",
        Some(("➕ Add", theme::ButtonVariant::Secondary)),
        |ui| {
            if app.options.resources.is_empty() {
                ui.label(
                    egui::RichText::new("No resource files registered.")
                        .small()
                        .weak(),
                );
            } else {
                let resources = app.options.resources.clone();
                for (i, path) in resources.iter().enumerate() {
                    let selected = app.resource_selected == Some(i);
                    if ui.selectable_label(selected, utils::file_label(path)).clicked() {
                        app.resource_selected = Some(i);
                    }
                }
                ui.add_space(4.0);
                if app.resource_selected.is_some() && ui.small_button("Remove Selected").clicked()
                {
                    if let Some(i) = app.resource_selected.take() {
                        app.options.remove_resource(i);
                    }
                }
            }
        },
    );
    if add_clicked {
        if let Some(files) = rfd::FileDialog::new().pick_files() {
            for file in files {
                app.options.add_resource(file);
            }
        }
    }

    ui.add_space(8.0);
    ui.checkbox(&mut app.detach_mode, "Run in a detached terminal window");

    ui.add_space(14.0);

    // ACTION ROW
    let has_script = !app.script_input.trim().is_empty();
    ui.horizontal(|ui| {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add_enabled_ui(!app.is_busy && has_script, |ui| {
                if theme::styled_button(ui, "🔨 Compile", theme::ButtonVariant::Primary).clicked()
                {
                    start_compile(app);
                }
            });
            ui.add_enabled_ui(has_script, |ui| {
                if theme::styled_button(ui, "📋 Copy Command", theme::ButtonVariant::Secondary)
                    .clicked()
                {
                    copy_command(app, ui);
                }
            });
            ui.add_enabled_ui(app.output_folder.is_some(), |ui| {
                if theme::styled_button(
                    ui,
                    "📁 Open Output Folder",
                    theme::ButtonVariant::Secondary,
                )
                .clicked()
                {
                    if let Some(dir) = app.output_folder.clone() {
                        if let Err(e) = compiler::open_output_folder(&dir) {
                            app.notify_error("Error", &e.to_string());
                        }
                    }
                }
            });
            ui.add_enabled_ui(!app.is_busy, |ui| {
                if theme::styled_button(ui, "Clear All", theme::ButtonVariant::Secondary).clicked()
                {
                    clear_all(app);
                }
            });
        });
    });
}

/// Assembles the current snapshot and copies the command to the clipboard,
/// independent of execution.
fn copy_command(app: &mut ForgeApp, ui: &mut egui::Ui) {
    let command = CommandLine::assemble(&app.options).shell_string();
    ui.ctx().output_mut(|o| o.copied_text = command.clone());
    app.logs.push(format!("> {}", command));
    app.current_task = "Command copied".into();
    app.notify_info(
        "Command Created",
        &format!("Command copied to clipboard:\n\n{}", command),
    );
}

fn clear_all(app: &mut ForgeApp) {
    app.options = BuildOptions::default();
    app.script_input.clear();
    app.venv_input.clear();
    app.use_venv = false;
    app.detach_mode = false;
    app.resource_selected = None;
    app.output_folder = None;
    app.current_task = "Idle".into();
    app.logs.push("Ready.".into());
}

fn start_compile(app: &mut ForgeApp) {
    // Precondition gates: blocking notification, nothing spawned.
    if app.options.script.as_os_str().is_empty() {
        app.notify_error("Script Required", "Please select a Python script to compile.");
        return;
    }
    if app.use_venv && app.options.venv_root.is_none() {
        app.notify_error(
            "Virtual Environment Required",
            "Please select a valid virtual environment directory.",
        );
        return;
    }

    app.is_busy = true;
    app.current_task = "Preparing...".into();
    app.output_folder = None;
    // The terminal panel is only ever cleared here, before a new run.
    app.logs.clear();

    let tx = app.event_tx.clone();
    let job = compiler::CompileJob {
        options: app.options.clone(),
        detach: app.detach_mode,
    };

    thread::spawn(move || {
        // Dependency probe before the real build.
        let python = match venv::resolve_interpreter(job.options.venv_root.as_deref()) {
            Ok(python) => python,
            Err(e) => {
                let _ = tx.send(UiEvent::CompileFinished {
                    ok: false,
                    output_dir: None,
                    message: e.to_string(),
                });
                return;
            }
        };
        match installer::check_installed(&python) {
            Ok(Some(_)) => {}
            Ok(None) => {
                let _ = tx.send(UiEvent::CompileFinished {
                    ok: false,
                    output_dir: None,
                    message: "Nuitka is not installed for this interpreter. \
                              Install it from the Environment tab."
                        .into(),
                });
                return;
            }
            Err(e) => {
                let _ = tx.send(UiEvent::CompileFinished {
                    ok: false,
                    output_dir: None,
                    message: e.to_string(),
                });
                return;
            }
        }

        let (worker_tx, worker_rx) = mpsc::channel();
        if let Err(e) = compiler::run_async(job, worker_tx) {
            let _ = tx.send(UiEvent::CompileFinished {
                ok: false,
                output_dir: None,
                message: e.to_string(),
            });
            return;
        }

        for status in worker_rx {
            let event = match status {
                compiler::CompileStatus::Command(command) => {
                    UiEvent::Log(format!("> {}", command))
                }
                compiler::CompileStatus::Starting => UiEvent::Task("Compiling...".into()),
                compiler::CompileStatus::Output(_, text) => UiEvent::Output(text),
                compiler::CompileStatus::Detached(path) => UiEvent::DetachStarted(path),
                compiler::CompileStatus::Finished(dir) => UiEvent::CompileFinished {
                    ok: true,
                    output_dir: Some(dir),
                    message: "Compilation successful!".into(),
                },
                compiler::CompileStatus::Error(e) => UiEvent::CompileFinished {
                    ok: false,
                    output_dir: None,
                    message: e,
                },
            };
            let _ = tx.send(event);
        }
    });
}
