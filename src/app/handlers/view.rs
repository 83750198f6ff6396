//! Handler für Darstellungs-Operationen.

use crate::app::AppState;
use crate::shared::{EditorOptions, Theme};

/// Wechselt das Theme, markiert es zur Anwendung beim nächsten Frame und
/// persistiert die Auswahl in den Optionen.
pub fn set_theme(state: &mut AppState, theme: Theme) -> anyhow::Result<()> {
    state.options.theme = theme;
    state.view.theme_dirty = true;
    log::info!("Theme gewechselt: {}", theme.label());

    state.options.save_to_file(&EditorOptions::config_path())
}
