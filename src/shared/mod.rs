//! Geteilte Typen zwischen App, UI und Export:
//! Laufzeit-Optionen und die festen Darstellungs-Themes.

pub mod options;
mod theme;

pub use options::EditorOptions;
pub use options::{CAPTURE_TIMEOUT_FRAMES, PAGE_WIDTH_MM, SETTLE_FRAMES};
pub use theme::Theme;
