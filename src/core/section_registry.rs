//! Registry aller Portfolio-Abschnitte (Tabs) inklusive aktivem Cursor.
//!
//! Die Reihenfolge ist tragend: sie bestimmt sowohl das Navigations-Layout
//! als auch die Seitenreihenfolge beim PDF-Export. Deshalb eine `IndexMap`
//! statt Vec + HashMap — Eindeutigkeit und Reihenfolge in einer Struktur.
//!
//! Invarianten:
//! - Namen sind eindeutig, nicht leer, case-sensitiv.
//! - Die Registry ist nie leer (der letzte Abschnitt ist unlöschbar).
//! - Der aktive Cursor zeigt immer auf einen existierenden Abschnitt.

use indexmap::IndexMap;
use thiserror::Error;

/// Validierungsfehler bei Registry-Mutationen.
/// Wird dem Benutzer wortwörtlich im jeweiligen Dialog angezeigt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SectionError {
    /// Leerer (oder nur aus Whitespace bestehender) Name
    #[error("Abschnittsname darf nicht leer sein")]
    EmptyName,
    /// Name bereits vergeben
    #[error("Abschnitt '{0}' existiert bereits")]
    DuplicateName(String),
    /// Abschnitt nicht vorhanden
    #[error("Abschnitt '{0}' existiert nicht")]
    UnknownSection(String),
    /// Der letzte verbleibende Abschnitt kann nicht gelöscht werden
    #[error("Der letzte Abschnitt kann nicht gelöscht werden")]
    LastSection,
}

/// Geordnete Abschnitts-Registry mit aktivem Cursor.
#[derive(Debug, Clone)]
pub struct SectionRegistry {
    /// Abschnittsname → Inhalt, in Anzeige- und Exportreihenfolge
    sections: IndexMap<String, String>,
    /// Name des aktuell dargestellten Abschnitts
    active: String,
}

impl SectionRegistry {
    /// Erstellt die Registry mit den Standard-Abschnitten des Portfolios.
    pub fn new() -> Self {
        let mut sections = IndexMap::new();
        for name in ["Home", "About", "Education", "Hobbies", "Contact"] {
            sections.insert(name.to_string(), String::new());
        }
        Self {
            sections,
            active: "Home".to_string(),
        }
    }

    /// Baut eine Registry aus vorgegebenen Namen (leerer Inhalt, Cursor auf
    /// dem ersten Eintrag). Doppelte oder leere Namen werden ignoriert;
    /// mindestens ein gültiger Name ist Aufrufer-Kontrakt.
    pub fn with_sections<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut sections = IndexMap::new();
        for name in names {
            let name = name.into();
            if !name.is_empty() {
                sections.entry(name).or_insert_with(String::new);
            }
        }
        debug_assert!(!sections.is_empty(), "Registry darf nicht leer starten");
        let active = sections
            .keys()
            .next()
            .cloned()
            .unwrap_or_else(|| "Home".to_string());
        Self { sections, active }
    }

    // ── Mutationen ──────────────────────────────────────────────────

    /// Fügt einen neuen Abschnitt mit leerem Inhalt am Ende an.
    pub fn add(&mut self, name: &str) -> Result<(), SectionError> {
        if name.is_empty() {
            return Err(SectionError::EmptyName);
        }
        if self.sections.contains_key(name) {
            return Err(SectionError::DuplicateName(name.to_string()));
        }
        self.sections.insert(name.to_string(), String::new());
        Ok(())
    }

    /// Benennt einen Abschnitt um. Inhalt und Positionsindex bleiben
    /// erhalten; zeigt der Cursor auf `old`, folgt er auf `new`.
    /// Umbenennen auf den eigenen Namen ist ein No-op-Erfolg.
    pub fn rename(&mut self, old: &str, new: &str) -> Result<(), SectionError> {
        let Some(index) = self.sections.get_index_of(old) else {
            return Err(SectionError::UnknownSection(old.to_string()));
        };
        if new == old {
            return Ok(());
        }
        if new.is_empty() {
            return Err(SectionError::EmptyName);
        }
        if self.sections.contains_key(new) {
            return Err(SectionError::DuplicateName(new.to_string()));
        }

        // Verschieben statt Löschen+Neuanlegen: der Inhalt wandert unter dem
        // neuen Schlüssel zurück an die alte Position.
        let content = self
            .sections
            .shift_remove(old)
            .unwrap_or_default();
        self.sections.insert(new.to_string(), content);
        let last = self.sections.len() - 1;
        self.sections.move_index(last, index);

        if self.active == old {
            self.active = new.to_string();
        }
        Ok(())
    }

    /// Löscht einen Abschnitt samt Inhalt. Zeigte der Cursor darauf, wird er
    /// deterministisch auf das neue erste Element gesetzt.
    pub fn delete(&mut self, name: &str) -> Result<(), SectionError> {
        if !self.sections.contains_key(name) {
            return Err(SectionError::UnknownSection(name.to_string()));
        }
        if self.sections.len() == 1 {
            return Err(SectionError::LastSection);
        }
        self.sections.shift_remove(name);
        if self.active == name {
            // Registry ist nie leer, ein erstes Element existiert immer
            self.active = self
                .sections
                .keys()
                .next()
                .cloned()
                .unwrap_or_default();
        }
        Ok(())
    }

    /// Verschiebt den Abschnitt an Position `from` nach `to`; dazwischen
    /// liegende Einträge rücken nach. Indizes außerhalb des gültigen
    /// Bereichs sind Aufrufer-Kontraktverletzung (UI prüft die Grenzen).
    pub fn reorder(&mut self, from: usize, to: usize) {
        if from == to {
            return;
        }
        self.sections.move_index(from, to);
    }

    /// Überschreibt den Inhalt eines existierenden Abschnitts.
    /// Ein unbekannter Name ist Kontraktverletzung (die Editierfläche
    /// adressiert immer den aktiven, damit gültigen Abschnitt).
    pub fn set_content(&mut self, name: &str, text: String) {
        match self.sections.get_mut(name) {
            Some(slot) => *slot = text,
            None => {
                debug_assert!(false, "set_content auf unbekanntem Abschnitt");
                log::warn!("set_content ignoriert: Abschnitt '{}' unbekannt", name);
            }
        }
    }

    /// Setzt den aktiven Cursor auf einen existierenden Abschnitt.
    pub fn set_active(&mut self, name: &str) -> Result<(), SectionError> {
        if !self.sections.contains_key(name) {
            return Err(SectionError::UnknownSection(name.to_string()));
        }
        self.active = name.to_string();
        Ok(())
    }

    // ── Lesezugriffe ────────────────────────────────────────────────

    /// Name des aktiven Abschnitts.
    pub fn active(&self) -> &str {
        &self.active
    }

    /// Inhalt des aktiven Abschnitts.
    pub fn active_content(&self) -> &str {
        self.sections
            .get(&self.active)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Inhalt eines Abschnitts (None bei unbekanntem Namen).
    pub fn content(&self, name: &str) -> Option<&str> {
        self.sections.get(name).map(String::as_str)
    }

    /// Alle Abschnittsnamen in Reihenfolge.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Momentaufnahme der Reihenfolge (für den Export-Job).
    pub fn order_snapshot(&self) -> Vec<String> {
        self.sections.keys().cloned().collect()
    }

    /// Positionsindex eines Abschnitts.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.sections.get_index_of(name)
    }

    /// Gibt `true` zurück, wenn der Abschnitt existiert.
    pub fn contains(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Anzahl der Abschnitte (immer >= 1).
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Die Registry ist per Invariante nie leer.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl Default for SectionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
