//! Profil-Identität: Anzeigename und optionales Profilfoto.

use std::sync::Arc;

/// Dateiendung des exportierten Dokuments.
const EXPORT_SUFFIX: &str = "_portfolio.pdf";

/// Validiertes Profilfoto (dekodierbare PNG/JPEG-Bytes).
///
/// Die Bytes bleiben im Originalformat; egui dekodiert sie über den
/// `bytes://`-Loader. `generation` fließt in die Loader-URI ein, damit ein
/// ersetztes Foto nicht aus dem Bild-Cache bedient wird.
#[derive(Debug, Clone)]
pub struct ProfilePhoto {
    /// Encodierte Bilddaten (PNG oder JPEG)
    pub bytes: Arc<[u8]>,
    /// Breite in Pixeln
    pub width: u32,
    /// Höhe in Pixeln
    pub height: u32,
    /// Upload-Zähler für die Cache-eindeutige URI
    pub generation: u64,
}

impl ProfilePhoto {
    /// Cache-eindeutige egui-Loader-URI dieses Fotos.
    pub fn uri(&self) -> String {
        format!("bytes://profile-photo-{}", self.generation)
    }
}

/// Anzeigename plus optionales Foto. Höchstens ein Foto; ein erneuter
/// Upload ersetzt das vorhandene.
#[derive(Debug, Clone)]
pub struct Profile {
    /// Frei editierbarer Anzeigename
    pub display_name: String,
    /// Aktuelles Profilfoto (None = keines hochgeladen)
    pub photo: Option<ProfilePhoto>,
}

impl Profile {
    /// Erstellt das Standard-Profil ohne Foto.
    pub fn new() -> Self {
        Self {
            display_name: "Your Name".to_string(),
            photo: None,
        }
    }

    /// Ersetzt das Foto und zählt die Generation weiter.
    pub fn replace_photo(&mut self, bytes: Arc<[u8]>, width: u32, height: u32) {
        let generation = self.photo.as_ref().map_or(1, |p| p.generation + 1);
        self.photo = Some(ProfilePhoto {
            bytes,
            width,
            height,
            generation,
        });
    }

    /// Dateiname des PDF-Exports, abgeleitet aus dem Anzeigenamen.
    pub fn export_file_name(&self) -> String {
        export_file_name(&self.display_name)
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::new()
    }
}

/// Leitet den Export-Dateinamen deterministisch aus dem Anzeigenamen ab:
/// Whitespace-Läufe werden zu je einem Unterstrich zusammengezogen.
pub fn export_file_name(display_name: &str) -> String {
    let collapsed: Vec<&str> = display_name.split_whitespace().collect();
    format!("{}{}", collapsed.join("_"), EXPORT_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_file_name_replaces_whitespace_with_underscores() {
        assert_eq!(export_file_name("Jane Doe"), "Jane_Doe_portfolio.pdf");
    }

    #[test]
    fn test_export_file_name_collapses_whitespace_runs() {
        assert_eq!(
            export_file_name("  Jane   van\tDoe "),
            "Jane_van_Doe_portfolio.pdf"
        );
    }

    #[test]
    fn test_export_file_name_single_word() {
        assert_eq!(export_file_name("Jane"), "Jane_portfolio.pdf");
    }

    #[test]
    fn test_replace_photo_increments_generation_and_uri() {
        let mut profile = Profile::new();
        assert!(profile.photo.is_none());

        profile.replace_photo(Arc::from(vec![1u8, 2, 3].into_boxed_slice()), 2, 3);
        let first = profile.photo.clone().expect("Foto sollte gesetzt sein");
        assert_eq!(first.generation, 1);

        profile.replace_photo(Arc::from(vec![4u8].into_boxed_slice()), 1, 1);
        let second = profile.photo.expect("Foto sollte ersetzt sein");
        assert_eq!(second.generation, 2);
        assert_ne!(first.uri(), second.uri());
    }
}
