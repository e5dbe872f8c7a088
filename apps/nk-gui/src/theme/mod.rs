pub mod palette;
pub mod style;
pub mod widgets;

// --- RE-EXPORTS ---
pub use palette::ACCENT;
pub use style::apply_settings;
pub use widgets::{card, combo_box, styled_button, text_input, ButtonVariant};

#[derive(PartialEq, Clone, Copy)]
pub enum Theme {
    Dark,
    Light,
    System,
}
