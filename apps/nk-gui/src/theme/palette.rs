use eframe::egui::Color32;

// --- GLOBAL ACCENT ---
pub const ACCENT: Color32 = Color32::from_rgb(226, 120, 42);

// --- DARK MODE CONSTANTS ---
pub const DARK_BG_BASE: Color32 = Color32::from_rgb(28, 28, 32);
pub const DARK_BG_HEADER: Color32 = Color32::from_rgb(36, 36, 42);
pub const DARK_BG_INPUT: Color32 = Color32::from_rgb(42, 42, 48);
pub const DARK_BORDER: Color32 = Color32::from_gray(62);
pub const DARK_TEXT_STRONG: Color32 = Color32::from_gray(235);
pub const DARK_OVERLAY_HOVER: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 80);

// --- LIGHT MODE CONSTANTS ---
pub const LIGHT_BG_BASE: Color32 = Color32::from_rgb(252, 252, 253);
pub const LIGHT_BG_HEADER: Color32 = Color32::from_gray(246);
pub const LIGHT_BG_INPUT: Color32 = Color32::from_rgb(238, 238, 242);
pub const LIGHT_BORDER: Color32 = Color32::from_gray(215);
pub const LIGHT_TEXT_STRONG: Color32 = Color32::from_gray(35);
pub const LIGHT_OVERLAY_HOVER: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 14);

/// The single source of truth for widget colors.
#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_base: Color32,
    pub bg_header: Color32,
    pub bg_input: Color32,
    pub border: Color32,
    pub text_strong: Color32,
    pub accent: Color32,
    pub overlay_hover: Color32,
}

pub fn get_colors(is_dark: bool) -> Palette {
    if is_dark {
        Palette {
            bg_base: DARK_BG_BASE,
            bg_header: DARK_BG_HEADER,
            bg_input: DARK_BG_INPUT,
            border: DARK_BORDER,
            text_strong: DARK_TEXT_STRONG,
            accent: ACCENT,
            overlay_hover: DARK_OVERLAY_HOVER,
        }
    } else {
        Palette {
            bg_base: LIGHT_BG_BASE,
            bg_header: LIGHT_BG_HEADER,
            bg_input: LIGHT_BG_INPUT,
            border: LIGHT_BORDER,
            text_strong: LIGHT_TEXT_STRONG,
            accent: ACCENT,
            overlay_hover: LIGHT_OVERLAY_HOVER,
        }
    }
}
