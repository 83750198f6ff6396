//! Use-Case-Funktionen: die eigentliche Mutationslogik hinter den Handlern.

pub mod export;
pub mod profile;
pub mod sections;
