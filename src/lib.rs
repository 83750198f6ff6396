//! Portfolio Studio Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod export;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, CommandLog, UiState};
pub use core::{Profile, ProfilePhoto, SectionError, SectionRegistry};
pub use export::{CapturedFrame, ExportJob, ExportOutcome, PageAssembler};
pub use shared::{EditorOptions, Theme};
