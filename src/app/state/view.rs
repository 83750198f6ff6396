/// Darstellungsbezogener Anwendungszustand.
pub struct ViewState {
    /// Theme wurde gewechselt und muss auf den egui-Context angewendet werden
    pub theme_dirty: bool,
    /// Bildschirmbereich der Portfolio-Seite (Points), jeden Frame von der
    /// UI aktualisiert; Zuschnitt-Referenz für den Snapshot-Capturer
    pub page_rect: Option<egui::Rect>,
}

impl ViewState {
    /// Erstellt den Start-View-State (Theme-Anwendung beim ersten Frame).
    pub fn new() -> Self {
        Self {
            theme_dirty: true,
            page_rect: None,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
