//! Domänen-Modell: Abschnitts-Registry und Profil.

pub mod profile;
pub mod section_registry;

pub use profile::{export_file_name, Profile, ProfilePhoto};
pub use section_registry::{SectionError, SectionRegistry};
