//! Feste Auswahl visueller Themes für die Portfolio-Seite.

use serde::{Deserialize, Serialize};

/// Darstellungs-Theme der Portfolio-Seite.
/// Reiner Render-Parameter ohne weitere Invarianten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    /// Helles Standard-Theme mit blauem Akzent
    #[default]
    Classic,
    /// Warmes Gelb-Theme
    Dandelion,
    /// Dunkles Theme
    Midnight,
}

impl Theme {
    /// Alle Themes in Anzeigereihenfolge.
    pub const ALL: [Theme; 3] = [Theme::Classic, Theme::Dandelion, Theme::Midnight];

    /// Anzeigename für die Theme-Auswahl.
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Classic => "Classic",
            Theme::Dandelion => "Dandelion",
            Theme::Midnight => "Midnight",
        }
    }

    /// Theme per Index (None außerhalb des gültigen Bereichs — die UI
    /// bietet nur gültige Indizes an).
    pub fn from_index(index: usize) -> Option<Theme> {
        Theme::ALL.get(index).copied()
    }

    /// Positionsindex in [`Theme::ALL`].
    pub fn index(&self) -> usize {
        Theme::ALL
            .iter()
            .position(|t| t == self)
            .unwrap_or_default()
    }

    /// Wendet das Theme global an (tauscht die egui-Visuals).
    pub fn apply(&self, ctx: &egui::Context) {
        ctx.set_visuals(self.visuals());
    }

    /// egui-Visuals dieses Themes.
    pub fn visuals(&self) -> egui::Visuals {
        match self {
            Theme::Classic => {
                let mut visuals = egui::Visuals::light();
                visuals.selection.bg_fill = egui::Color32::from_rgb(0x3a, 0x6e, 0xa5);
                visuals.hyperlink_color = egui::Color32::from_rgb(0x3a, 0x6e, 0xa5);
                visuals
            }
            Theme::Dandelion => {
                let mut visuals = egui::Visuals::light();
                visuals.panel_fill = egui::Color32::from_rgb(0xfd, 0xf6, 0xdd);
                visuals.window_fill = egui::Color32::from_rgb(0xfd, 0xf6, 0xdd);
                visuals.selection.bg_fill = egui::Color32::from_rgb(0xd9, 0xa4, 0x04);
                visuals.hyperlink_color = egui::Color32::from_rgb(0xb8, 0x86, 0x00);
                visuals
            }
            Theme::Midnight => {
                let mut visuals = egui::Visuals::dark();
                visuals.panel_fill = egui::Color32::from_rgb(0x14, 0x17, 0x22);
                visuals.window_fill = egui::Color32::from_rgb(0x1b, 0x1f, 0x2d);
                visuals.selection.bg_fill = egui::Color32::from_rgb(0x5a, 0x7b, 0xd0);
                visuals
            }
        }
    }

    /// Hintergrundfarbe der Seitenleiste auf der Portfolio-Seite.
    pub fn sidebar_fill(&self) -> egui::Color32 {
        match self {
            Theme::Classic => egui::Color32::from_rgb(0xe8, 0xed, 0xf2),
            Theme::Dandelion => egui::Color32::from_rgb(0xf7, 0xe8, 0xb5),
            Theme::Midnight => egui::Color32::from_rgb(0x1e, 0x24, 0x36),
        }
    }

    /// Hintergrundfarbe des Inhaltsbereichs auf der Portfolio-Seite.
    pub fn page_fill(&self) -> egui::Color32 {
        match self {
            Theme::Classic => egui::Color32::WHITE,
            Theme::Dandelion => egui::Color32::from_rgb(0xff, 0xfb, 0xec),
            Theme::Midnight => egui::Color32::from_rgb(0x23, 0x29, 0x3e),
        }
    }

    /// Akzentfarbe für Überschrift und aktiven Nav-Button.
    pub fn accent(&self) -> egui::Color32 {
        match self {
            Theme::Classic => egui::Color32::from_rgb(0x3a, 0x6e, 0xa5),
            Theme::Dandelion => egui::Color32::from_rgb(0xb8, 0x86, 0x00),
            Theme::Midnight => egui::Color32::from_rgb(0x8f, 0xaa, 0xf0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_index_roundtrip() {
        for (i, theme) in Theme::ALL.iter().enumerate() {
            assert_eq!(Theme::from_index(i), Some(*theme));
            assert_eq!(theme.index(), i);
        }
    }

    #[test]
    fn test_from_index_out_of_range_is_none() {
        assert_eq!(Theme::from_index(Theme::ALL.len()), None);
    }
}
