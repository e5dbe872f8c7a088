use crate::{tabs, theme};
use eframe::egui;
use nk_core::BuildOptions;
use nk_factory::compiler;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::time::{Duration, Instant};

#[derive(PartialEq)]
pub enum Tab {
    Build,
    Advanced,
    Environment,
}

/// Messages workers send back to the UI thread. Drained once per frame;
/// widgets are only ever touched from here.
pub enum UiEvent {
    /// One finished line for the terminal panel.
    Log(String),
    /// Raw child output; may end mid-line.
    Output(String),
    /// Status label text.
    Task(String),
    CompileFinished {
        ok: bool,
        output_dir: Option<PathBuf>,
        message: String,
    },
    /// Detached hand-off accepted; carries the status file to poll.
    DetachStarted(PathBuf),
    InstallFinished {
        ok: bool,
        message: String,
    },
    EnvironmentInfo {
        python_version: Option<String>,
        nuitka_version: Option<String>,
    },
}

#[derive(Clone, PartialEq)]
pub enum ModalKind {
    Info,
    Error,
    ConfirmUninstall,
}

#[derive(Clone)]
pub struct Modal {
    pub title: String,
    pub message: String,
    pub kind: ModalKind,
}

pub struct ForgeApp {
    pub current_tab: Tab,
    pub theme_preference: theme::Theme,

    /// The one option snapshot every action reads from.
    pub options: BuildOptions,
    pub script_input: String,
    pub use_venv: bool,
    pub venv_input: String,
    pub detach_mode: bool,

    pub logs: Vec<String>,
    pending_output: String,
    pub event_rx: Receiver<UiEvent>,
    pub event_tx: Sender<UiEvent>,

    pub is_busy: bool,
    pub current_task: String,

    pub resource_selected: Option<usize>,
    pub output_folder: Option<PathBuf>,

    pub python_version: Option<String>,
    pub nuitka_version: Option<String>,

    pub detached_status: Option<PathBuf>,
    last_poll: Instant,

    pub modal: Option<Modal>,
}

impl Default for ForgeApp {
    fn default() -> Self {
        let (tx, rx) = channel::<UiEvent>();

        Self {
            current_tab: Tab::Build,
            theme_preference: theme::Theme::Dark,

            options: BuildOptions::default(),
            script_input: String::new(),
            use_venv: false,
            venv_input: String::new(),
            detach_mode: false,

            logs: vec!["Ready.".into()],
            pending_output: String::new(),
            event_rx: rx,
            event_tx: tx,

            is_busy: false,
            current_task: "Idle".into(),

            resource_selected: None,
            output_folder: None,

            python_version: None,
            nuitka_version: None,

            detached_status: None,
            last_poll: Instant::now(),

            modal: None,
        }
    }
}

impl eframe::App for ForgeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let is_dark = match self.theme_preference {
            theme::Theme::Dark => true,
            theme::Theme::Light => false,
            theme::Theme::System => match _frame.info().system_theme {
                Some(eframe::Theme::Light) => false,
                _ => true,
            },
        };
        theme::apply_settings(ctx, is_dark);

        self.handle_messages();
        self.sync_options();
        self.poll_detached(ctx);

        // ORDER MATTERS: Side -> Bottom -> Central (fill)
        self.render_sidebar(ctx);
        self.render_bottom_panel(ctx);
        self.render_content(ctx);
        self.render_modal(ctx);

        if self.is_busy {
            ctx.request_repaint();
        }
    }
}

impl ForgeApp {
    /// Keeps the text-editable paths mirrored into the option snapshot.
    fn sync_options(&mut self) {
        self.options.script = PathBuf::from(self.script_input.trim());
        let venv = self.venv_input.trim();
        self.options.venv_root = if self.use_venv && !venv.is_empty() {
            Some(PathBuf::from(venv))
        } else {
            None
        };
    }

    fn handle_messages(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            match event {
                UiEvent::Log(line) => self.logs.push(line),
                UiEvent::Output(text) => self.push_output(&text),
                UiEvent::Task(label) => self.current_task = label,
                UiEvent::CompileFinished {
                    ok,
                    output_dir,
                    message,
                } => {
                    self.flush_output();
                    self.is_busy = false;
                    if ok {
                        self.current_task = "Done".into();
                        self.output_folder = output_dir;
                        self.notify_info("Compilation", &message);
                    } else {
                        self.current_task = "Error".into();
                        self.logs.push(format!("Error: {}", message));
                        self.notify_error("Compilation Failed", &message);
                    }
                }
                UiEvent::DetachStarted(path) => {
                    self.detached_status = Some(path);
                    self.last_poll = Instant::now();
                    self.current_task = "Compiling in terminal window...".into();
                    self.logs
                        .push("Compilation handed off to a terminal window.".into());
                }
                UiEvent::InstallFinished { ok, message } => {
                    self.flush_output();
                    self.is_busy = false;
                    self.current_task = if ok { "Done" } else { "Error" }.into();
                    if ok {
                        self.notify_info("Nuitka", &message);
                        tabs::environment::start_env_check(self);
                    } else {
                        self.notify_error("Nuitka", &message);
                    }
                }
                UiEvent::EnvironmentInfo {
                    python_version,
                    nuitka_version,
                } => {
                    if python_version.is_none() {
                        self.logs
                            .push("Could not confirm the interpreter version.".into());
                    }
                    self.python_version = python_version;
                    self.nuitka_version = nuitka_version;
                }
            }
        }
    }

    /// The terminal panel is append-only; chunks accumulate until a full
    /// line is available.
    fn push_output(&mut self, text: &str) {
        self.pending_output.push_str(text);
        while let Some(pos) = self.pending_output.find('\n') {
            let line: String = self.pending_output.drain(..=pos).collect();
            let line = line.trim_end_matches(['\r', '\n']);
            if !line.is_empty() {
                self.logs.push(line.to_string());
            }
        }
    }

    fn flush_output(&mut self) {
        if !self.pending_output.is_empty() {
            let line = std::mem::take(&mut self.pending_output);
            self.logs.push(line);
        }
    }

    /// Detached runs report back through a status file, checked on a
    /// ~1-second cadence.
    fn poll_detached(&mut self, ctx: &egui::Context) {
        let Some(path) = self.detached_status.clone() else {
            return;
        };

        if self.last_poll.elapsed() >= Duration::from_secs(1) {
            self.last_poll = Instant::now();
            if let Some(ok) = compiler::poll_status_file(&path) {
                self.detached_status = None;
                self.is_busy = false;
                let output_dir = self.options.script_dir().map(|d| d.to_path_buf());
                if ok {
                    if let Some(dir) = &output_dir {
                        compiler::cleanup_artifacts(dir);
                    }
                    self.output_folder = output_dir;
                    self.current_task = "Done".into();
                    self.notify_info("Compilation", "Compilation successful!");
                } else {
                    self.current_task = "Error".into();
                    self.notify_error(
                        "Compilation Failed",
                        "The detached compilation reported a failure.",
                    );
                }
            }
        }

        if self.detached_status.is_some() {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }

    pub fn notify_info(&mut self, title: &str, message: &str) {
        self.modal = Some(Modal {
            title: title.to_string(),
            message: message.to_string(),
            kind: ModalKind::Info,
        });
    }

    pub fn notify_error(&mut self, title: &str, message: &str) {
        self.modal = Some(Modal {
            title: title.to_string(),
            message: message.to_string(),
            kind: ModalKind::Error,
        });
    }

    fn render_sidebar(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("sidebar")
            .exact_width(200.0)
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(20.0);
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new("NUITKA")
                            .strong()
                            .size(18.0)
                            .color(theme::ACCENT),
                    );
                    ui.label(egui::RichText::new("FORGE").weak().size(10.0));
                });
                ui.add_space(30.0);

                let nav_btn = |ui: &mut egui::Ui, label: &str, tab: Tab, current: &Tab| {
                    let selected = *current == tab;
                    let text = if selected {
                        egui::RichText::new(label)
                            .strong()
                            .color(egui::Color32::WHITE)
                    } else {
                        egui::RichText::new(label)
                    };

                    let btn = egui::Button::new(text)
                        .min_size(egui::vec2(ui.available_width(), 38.0))
                        .rounding(6.0)
                        .fill(if selected {
                            theme::ACCENT
                        } else {
                            egui::Color32::TRANSPARENT
                        });

                    if ui.add(btn).clicked() {
                        return Some(tab);
                    }
                    None
                };

                if let Some(t) = nav_btn(ui, "🔨  Build", Tab::Build, &self.current_tab) {
                    self.current_tab = t;
                }
                if let Some(t) = nav_btn(ui, "⚙  Advanced", Tab::Advanced, &self.current_tab) {
                    self.current_tab = t;
                }
                if let Some(t) =
                    nav_btn(ui, "🐍  Environment", Tab::Environment, &self.current_tab)
                {
                    self.current_tab = t;
                }

                // THEME SELECTOR
                ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
                    ui.add_space(20.0);

                    let theme_text = match self.theme_preference {
                        theme::Theme::Light => "☀ Light",
                        theme::Theme::Dark => "🌙 Dark",
                        theme::Theme::System => "💻 System",
                    };

                    theme::combo_box(ui, "theme_select", theme_text, |ui| {
                        ui.selectable_value(
                            &mut self.theme_preference,
                            theme::Theme::Light,
                            "☀ Light",
                        );
                        ui.selectable_value(
                            &mut self.theme_preference,
                            theme::Theme::Dark,
                            "🌙 Dark",
                        );
                        ui.selectable_value(
                            &mut self.theme_preference,
                            theme::Theme::System,
                            "💻 System",
                        );
                    });

                    ui.add_space(5.0);
                    ui.separator();
                });
            });
    }

    fn render_bottom_panel(&mut self, ctx: &egui::Context) {
        let is_dark = ctx.style().visuals.dark_mode;
        let bg = if is_dark {
            egui::Color32::from_rgb(18, 18, 21)
        } else {
            egui::Color32::from_rgb(238, 238, 243)
        };

        let panel_frame = egui::Frame::none().fill(bg).inner_margin(12.0);

        egui::TopBottomPanel::bottom("terminal_panel")
            .resizable(false)
            .min_height(150.0)
            .frame(panel_frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("TERMINAL").strong().small());

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if self.is_busy {
                            ui.spinner();
                            ui.label(
                                egui::RichText::new(&self.current_task)
                                    .strong()
                                    .color(theme::ACCENT),
                            );
                        } else {
                            let status_color = if self.current_task == "Error" {
                                egui::Color32::RED
                            } else {
                                egui::Color32::from_gray(110)
                            };
                            ui.label(
                                egui::RichText::new(&self.current_task)
                                    .strong()
                                    .color(status_color),
                            );
                        }
                    });
                });

                ui.add_space(4.0);
                ui.separator();
                ui.add_space(4.0);

                egui::ScrollArea::vertical()
                    .stick_to_bottom(true)
                    .max_height(110.0)
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        for log in self.logs.iter().rev().take(400).rev() {
                            ui.label(
                                egui::RichText::new(log)
                                    .font(egui::FontId::monospace(12.0))
                                    .color(ui.visuals().weak_text_color()),
                            );
                        }
                    });
            });
    }

    fn render_content(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                egui::Frame::none()
                    .inner_margin(egui::Margin {
                        left: 5.0,
                        right: 16.0,
                        top: 16.0,
                        bottom: 1.0,
                    })
                    .show(ui, |ui| match self.current_tab {
                        Tab::Build => tabs::build::show(self, ui),
                        Tab::Advanced => tabs::advanced::show(self, ui),
                        Tab::Environment => tabs::environment::show(self, ui),
                    });
            });
        });
    }

    fn render_modal(&mut self, ctx: &egui::Context) {
        let Some(modal) = self.modal.clone() else {
            return;
        };

        let mut close = false;
        let mut confirm_uninstall = false;

        egui::Window::new(&modal.title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.set_max_width(380.0);
                ui.label(&modal.message);
                ui.add_space(10.0);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    match modal.kind {
                        ModalKind::Info | ModalKind::Error => {
                            if theme::styled_button(ui, "OK", theme::ButtonVariant::Primary)
                                .clicked()
                            {
                                close = true;
                            }
                        }
                        ModalKind::ConfirmUninstall => {
                            if theme::styled_button(
                                ui,
                                "Uninstall",
                                theme::ButtonVariant::Destructive,
                            )
                            .clicked()
                            {
                                confirm_uninstall = true;
                                close = true;
                            }
                            if theme::styled_button(ui, "Cancel", theme::ButtonVariant::Secondary)
                                .clicked()
                            {
                                close = true;
                            }
                        }
                    }
                });
            });

        if close {
            self.modal = None;
        }
        if confirm_uninstall {
            tabs::environment::start_uninstall(self);
        }
    }
}
