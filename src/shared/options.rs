//! Zentrale Konfiguration für Portfolio Studio.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::shared::Theme;
use serde::{Deserialize, Serialize};

// ── Export ──────────────────────────────────────────────────────────

/// Feste Seitenbreite des exportierten PDFs in Millimetern (A4-Breite).
pub const PAGE_WIDTH_MM: f32 = 210.0;
/// Frames Wartezeit nach einem Cursor-Wechsel, bevor der Snapshot
/// angefordert wird (jeder Frame ist ein abgeschlossener Render).
pub const SETTLE_FRAMES: u8 = 2;
/// Frames, nach denen ein ausstehender Snapshot als fehlgeschlagen gilt.
pub const CAPTURE_TIMEOUT_FRAMES: u32 = 180;

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `portfolio_studio.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Export ──────────────────────────────────────────────────
    /// Seitenbreite des PDF-Exports in Millimetern
    pub page_width_mm: f32,
    /// Render-Wartebudget nach Cursor-Wechsel (Frames)
    #[serde(default = "default_settle_frames")]
    pub settle_frames: u8,
    /// Timeout für ausstehende Snapshots (Frames)
    #[serde(default = "default_capture_timeout_frames")]
    pub capture_timeout_frames: u32,

    // ── Darstellung ─────────────────────────────────────────────
    /// Zuletzt gewähltes Theme
    #[serde(default)]
    pub theme: Theme,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            page_width_mm: PAGE_WIDTH_MM,
            settle_frames: SETTLE_FRAMES,
            capture_timeout_frames: CAPTURE_TIMEOUT_FRAMES,
            theme: Theme::default(),
        }
    }
}

/// Serde-Default für `settle_frames` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_settle_frames() -> u8 {
    SETTLE_FRAMES
}

/// Serde-Default für `capture_timeout_frames` (Abwärtskompatibilität).
fn default_capture_timeout_frames() -> u32 {
    CAPTURE_TIMEOUT_FRAMES
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("portfolio_studio"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("portfolio_studio.toml")
    }
}
