use crate::{app::ForgeApp, theme};
use eframe::egui;

pub fn show(app: &mut ForgeApp, ui: &mut egui::Ui) {
    ui.heading("Advanced Options");
    ui.label("Less common compiler switches, grouped the way Nuitka documents them.");
    ui.add_space(12.0);

    theme::card(ui, "Compilation", None, |ui| {
        egui::Grid::new("adv_compilation")
            .spacing([36.0, 8.0])
            .show(ui, |ui| {
                let c = &mut app.options.compilation;
                ui.checkbox(&mut c.clang, "Clang");
                ui.checkbox(&mut c.mingw64, "MinGW64");
                ui.end_row();
                ui.checkbox(
                    &mut c.disable_console_ctrl_handler,
                    "Disable Console Ctrl Handler",
                );
                ui.checkbox(&mut c.full_compat, "Full CPython Compatibility");
                ui.end_row();
                ui.checkbox(&mut c.static_libpython, "Static Libpython");
                ui.end_row();
            });
    });

    ui.add_space(12.0);

    theme::card(ui, "Module Handling", None, |ui| {
        egui::Grid::new("adv_module")
            .spacing([36.0, 8.0])
            .show(ui, |ui| {
                let m = &mut app.options.module;
                ui.checkbox(&mut m.follow_stdlib, "Follow Stdlib");
                ui.checkbox(&mut m.prefer_source, "Prefer Source Code");
                ui.end_row();
                ui.checkbox(&mut m.include_package_data, "Include Package Data");
                ui.checkbox(&mut m.python_flag_nosite, "Python Flag: nosite");
                ui.end_row();
                ui.checkbox(&mut m.remove_embedded, "Remove Embedded");
                ui.end_row();
            });
    });

    ui.add_space(12.0);

    theme::card(ui, "Performance", None, |ui| {
        egui::Grid::new("adv_perf")
            .spacing([36.0, 8.0])
            .show(ui, |ui| {
                let p = &mut app.options.perf;
                ui.checkbox(&mut p.disable_ccache, "Disable Ccache");
                ui.checkbox(&mut p.high_memory, "High Memory (jobs=maximum)");
                ui.end_row();
                ui.checkbox(&mut p.linux_onefile_icon, "Linux Onefile Icon");
                ui.checkbox(&mut p.macos_create_app_bundle, "macOS App Bundle");
                ui.end_row();
            });
    });

    ui.add_space(12.0);

    theme::card(ui, "Debug", None, |ui| {
        egui::Grid::new("adv_debug")
            .spacing([36.0, 8.0])
            .show(ui, |ui| {
                let d = &mut app.options.debug;
                ui.checkbox(&mut d.debug, "Debug");
                ui.checkbox(&mut d.unstriped, "Unstriped");
                ui.end_row();
                ui.checkbox(&mut d.trace_execution, "Trace Execution");
                ui.checkbox(
                    &mut d.disable_dll_dependency_cache,
                    "Disable DLL Dependency Cache",
                );
                ui.end_row();
                ui.checkbox(&mut d.experimental, "Experimental");
                ui.checkbox(&mut d.show_memory, "Show Memory");
                ui.end_row();
                ui.checkbox(&mut d.show_progress, "Show Progress");
                ui.checkbox(&mut d.verbose, "Verbose");
                ui.end_row();
            });
    });

    ui.add_space(12.0);

    theme::card(ui, "Optimization", None, |ui| {
        ui.horizontal(|ui| {
            ui.label("Optimization Level:");
            ui.add(egui::DragValue::new(&mut app.options.opt_level).clamp_range(0..=3));
        });
        ui.label(
            egui::RichText::new("Folded into the interpreter invocation (-O / -OO).")
                .small()
                .weak(),
        );
    });
}
