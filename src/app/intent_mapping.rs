//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Hier wird auch serialisiert: solange ein Export läuft oder ein modaler
//! Dialog offen ist, werden strukturelle Mutationen nicht interleaved,
//! sondern verworfen (die zugehörigen Controls sind zusätzlich in der UI
//! deaktiviert).

use super::{AppCommand, AppIntent, AppState};
use crate::shared::Theme;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    if state.is_exporting() && !allowed_during_export(&intent) {
        log::warn!("Intent während laufendem Export verworfen: {:?}", intent);
        return Vec::new();
    }
    if state.ui.modal_dialog_open() && !allowed_while_dialog_open(&intent) {
        return Vec::new();
    }

    match intent {
        AppIntent::SectionSelected { name } => vec![AppCommand::SetActiveSection { name }],
        AppIntent::SectionReorderRequested { from, to } => {
            // Grenzprüfung ist Aufrufer-Kontrakt der Registry — hier ist der Aufrufer.
            let len = state.registry.len();
            if from >= len || to >= len {
                log::warn!("Reorder mit ungültigen Indizes verworfen: {} -> {}", from, to);
                return Vec::new();
            }
            vec![AppCommand::ReorderSection { from, to }]
        }
        AppIntent::ContentEdited { text } => vec![AppCommand::SetSectionContent {
            name: state.registry.active().to_string(),
            text,
        }],
        AppIntent::DisplayNameEdited { name } => vec![AppCommand::SetDisplayName { name }],

        AppIntent::AddSectionRequested => vec![AppCommand::OpenAddSectionDialog],
        AppIntent::AddSectionConfirmed { name } => vec![AppCommand::AddSection { name }],
        AppIntent::AddSectionCancelled => vec![AppCommand::CloseAddSectionDialog],
        AppIntent::RenameSectionRequested { name } => {
            vec![AppCommand::OpenRenameSectionDialog { name }]
        }
        AppIntent::RenameSectionConfirmed { old, new } => {
            vec![AppCommand::RenameSection { old, new }]
        }
        AppIntent::RenameSectionCancelled => vec![AppCommand::CloseRenameSectionDialog],
        AppIntent::DeleteSectionRequested { name } => {
            vec![AppCommand::OpenDeleteConfirmDialog { name }]
        }
        AppIntent::DeleteSectionConfirmed { name } => vec![AppCommand::DeleteSection { name }],
        AppIntent::DeleteSectionCancelled => vec![AppCommand::CloseDeleteConfirmDialog],

        AppIntent::ThemeSelected { index } => match Theme::from_index(index) {
            Some(theme) => vec![AppCommand::SetTheme { theme }],
            None => {
                log::warn!("Theme-Index außerhalb des gültigen Bereichs: {}", index);
                Vec::new()
            }
        },

        AppIntent::PhotoUploadRequested => vec![AppCommand::RequestPhotoDialog],
        AppIntent::PhotoFileSelected { path } => vec![AppCommand::LoadPhoto { path }],

        AppIntent::ExportRequested => vec![AppCommand::RequestExportDialog],
        AppIntent::ExportPathSelected { path } => vec![AppCommand::BeginExport { path }],
        AppIntent::ExportCancelRequested => vec![AppCommand::CancelExport],

        AppIntent::ErrorNoticeDismissed => vec![AppCommand::DismissErrorNotice],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

/// Intents, die während eines laufenden Exports zulässig bleiben.
/// Alles andere würde Registry, Cursor oder Darstellung unter dem
/// iterierenden Job wegmutieren.
fn allowed_during_export(intent: &AppIntent) -> bool {
    matches!(
        intent,
        AppIntent::ExportCancelRequested
            | AppIntent::ErrorNoticeDismissed
            | AppIntent::ExitRequested
    )
}

/// Intents, die bei offenem modalem Dialog zulässig bleiben
/// (die Dialog-eigenen Antworten plus Beenden).
fn allowed_while_dialog_open(intent: &AppIntent) -> bool {
    matches!(
        intent,
        AppIntent::AddSectionConfirmed { .. }
            | AppIntent::AddSectionCancelled
            | AppIntent::RenameSectionConfirmed { .. }
            | AppIntent::RenameSectionCancelled
            | AppIntent::DeleteSectionConfirmed { .. }
            | AppIntent::DeleteSectionCancelled
            | AppIntent::ErrorNoticeDismissed
            | AppIntent::ExitRequested
    )
}
