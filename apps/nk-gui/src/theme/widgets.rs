use super::palette::{self, Palette};
use eframe::egui;

// ============================================================================
// BUTTONS
// ============================================================================

#[derive(PartialEq, Clone, Copy)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Destructive,
}

impl ButtonVariant {
    fn get_colors(&self, colors: &Palette) -> (egui::Color32, egui::Color32) {
        match self {
            ButtonVariant::Primary => (colors.accent, egui::Color32::WHITE),
            ButtonVariant::Secondary => (colors.bg_input, colors.text_strong),
            ButtonVariant::Destructive => {
                (egui::Color32::from_rgb(190, 54, 54), egui::Color32::WHITE)
            }
        }
    }
}

pub fn styled_button(ui: &mut egui::Ui, text: &str, variant: ButtonVariant) -> egui::Response {
    let colors = palette::get_colors(ui.visuals().dark_mode);
    let (bg_color, text_color) = variant.get_colors(&colors);

    ui.add(
        egui::Button::new(egui::RichText::new(text).color(text_color).strong())
            .fill(bg_color)
            .rounding(6.0)
            .min_size(egui::vec2(0.0, 30.0)),
    )
}

// ============================================================================
// CARD COMPONENT
// ============================================================================

/// A titled section frame: header strip, separator, padded body.
/// Returns the body result plus whether the optional header action fired.
pub fn card<R>(
    ui: &mut egui::Ui,
    title: &str,
    action: Option<(&str, ButtonVariant)>,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> (R, bool) {
    let colors = palette::get_colors(ui.visuals().dark_mode);
    let mut action_clicked = false;

    let inner_result = egui::Frame::none()
        .fill(colors.bg_base)
        .rounding(8.0)
        .stroke(egui::Stroke::new(1.0, colors.border))
        .show(ui, |ui| {
            ui.spacing_mut().item_spacing.y = 0.0;

            // --- HEADER ---
            egui::Frame::none()
                .fill(colors.bg_header)
                .rounding(egui::Rounding {
                    nw: 8.0,
                    ne: 8.0,
                    sw: 0.0,
                    se: 0.0,
                })
                .inner_margin(egui::Margin::symmetric(14.0, 8.0))
                .show(ui, |ui| {
                    ui.set_min_width(ui.available_width());

                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(title)
                                .strong()
                                .size(13.0)
                                .color(colors.text_strong),
                        );

                        if let Some((label, variant)) = action {
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    let (bg, fg) = variant.get_colors(&colors);
                                    let clicked = ui
                                        .add(
                                            egui::Button::new(
                                                egui::RichText::new(label).size(12.0).color(fg),
                                            )
                                            .fill(bg)
                                            .rounding(4.0)
                                            .min_size(egui::vec2(56.0, 22.0)),
                                        )
                                        .clicked();
                                    if clicked {
                                        action_clicked = true;
                                    }
                                },
                            );
                        }
                    });
                });

            // --- SEPARATOR ---
            let (rect, _) =
                ui.allocate_exact_size(egui::vec2(ui.available_width(), 1.0), egui::Sense::hover());
            ui.painter().rect_filled(rect, 0.0, colors.border);

            // --- BODY ---
            egui::Frame::none()
                .inner_margin(14.0)
                .show(ui, |ui| {
                    ui.spacing_mut().item_spacing = egui::vec2(8.0, 8.0);
                    add_contents(ui)
                })
                .inner
        })
        .inner;

    (inner_result, action_clicked)
}

// ============================================================================
// COMBO BOX
// ============================================================================

pub fn combo_box(
    ui: &mut egui::Ui,
    id: &str,
    selected_text: &str,
    add_contents: impl FnOnce(&mut egui::Ui),
) {
    let colors = palette::get_colors(ui.visuals().dark_mode);

    ui.scope(|ui| {
        ui.spacing_mut().button_padding = egui::vec2(10.0, 6.0);
        let v = ui.visuals_mut();

        v.widgets.inactive.rounding = 6.0.into();
        v.widgets.inactive.weak_bg_fill = colors.bg_input;
        v.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, colors.border);
        v.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, colors.text_strong);

        v.widgets.hovered = v.widgets.inactive;
        v.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, colors.accent);

        v.widgets.open = v.widgets.inactive;
        v.widgets.open.bg_stroke = egui::Stroke::new(1.5, colors.accent);

        egui::ComboBox::from_id_source(id)
            .selected_text(selected_text)
            .width(ui.available_width())
            .show_ui(ui, |ui| {
                ui.spacing_mut().button_padding = egui::vec2(10.0, 7.0);

                let lv = ui.visuals_mut();
                lv.widgets.active.rounding = 6.0.into();
                lv.widgets.active.weak_bg_fill = colors.accent;
                lv.widgets.active.bg_fill = colors.accent;
                lv.widgets.active.fg_stroke = egui::Stroke::new(1.0, egui::Color32::WHITE);

                lv.widgets.hovered.rounding = 6.0.into();
                lv.widgets.hovered.weak_bg_fill = colors.overlay_hover;
                lv.widgets.hovered.bg_stroke = egui::Stroke::NONE;
                lv.widgets.hovered.fg_stroke = egui::Stroke::new(1.0, colors.text_strong);

                lv.widgets.inactive.weak_bg_fill = egui::Color32::TRANSPARENT;
                lv.widgets.inactive.bg_stroke = egui::Stroke::NONE;
                lv.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, colors.text_strong);

                add_contents(ui);
            });
    });
}

// ============================================================================
// TEXT INPUT
// ============================================================================

pub fn text_input(ui: &mut egui::Ui, value: &mut String, hint: &str) -> egui::Response {
    let colors = palette::get_colors(ui.visuals().dark_mode);
    let padding = egui::Margin::symmetric(10.0, 8.0);
    let rounding = egui::Rounding::same(6.0);

    let response = egui::Frame::none()
        .inner_margin(padding)
        .fill(colors.bg_input)
        .rounding(rounding)
        .stroke(egui::Stroke::new(1.0, colors.border))
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::singleline(value)
                    .hint_text(hint)
                    .desired_width(f32::INFINITY)
                    .frame(false)
                    .text_color(colors.text_strong)
                    .vertical_align(egui::Align::Center),
            )
        })
        .inner;

    if response.has_focus() {
        let visual_rect = response.rect.expand2(egui::vec2(10.0, 8.0));
        ui.painter()
            .rect_stroke(visual_rect, rounding, egui::Stroke::new(1.5, colors.accent));
    }

    response
}
