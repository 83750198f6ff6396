use crate::app::CommandLog;
use crate::core::{Profile, SectionRegistry};
use crate::export::ExportJob;
use crate::shared::EditorOptions;

use super::{UiState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Abschnitts-Registry inklusive aktivem Cursor
    pub registry: SectionRegistry,
    /// Anzeigename und Profilfoto
    pub profile: Profile,
    /// UI-State (Dialoge, Statusmeldungen)
    pub ui: UiState,
    /// View-State (Theme-Flag, erfasster Seitenbereich)
    pub view: ViewState,
    /// Laufender Export-Job (None = kein Export aktiv)
    pub export_job: Option<ExportJob>,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Seitenbreite, Theme, Capture-Budgets)
    pub options: EditorOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State mit Standard-Abschnitten.
    pub fn new() -> Self {
        Self {
            registry: SectionRegistry::new(),
            profile: Profile::new(),
            ui: UiState::new(),
            view: ViewState::new(),
            export_job: None,
            command_log: CommandLog::new(),
            options: EditorOptions::default(),
            should_exit: false,
        }
    }

    /// Gibt zurück, ob gerade ein Export läuft.
    pub fn is_exporting(&self) -> bool {
        self.export_job.is_some()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
