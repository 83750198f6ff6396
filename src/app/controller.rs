//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Abschnitte ===
            AppCommand::SetActiveSection { name } => handlers::sections::set_active(state, &name),
            AppCommand::ReorderSection { from, to } => handlers::sections::reorder(state, from, to),
            AppCommand::SetSectionContent { name, text } => {
                handlers::sections::set_content(state, &name, text)
            }
            AppCommand::AddSection { name } => handlers::sections::add(state, &name),
            AppCommand::RenameSection { old, new } => handlers::sections::rename(state, &old, &new),
            AppCommand::DeleteSection { name } => handlers::sections::delete(state, &name),

            // === Profil ===
            AppCommand::SetDisplayName { name } => handlers::profile::set_display_name(state, name),
            AppCommand::RequestPhotoDialog => handlers::profile::request_photo_dialog(state),
            AppCommand::LoadPhoto { path } => handlers::profile::load_photo(state, &path),

            // === Darstellung ===
            AppCommand::SetTheme { theme } => handlers::view::set_theme(state, theme)?,

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::OpenAddSectionDialog => handlers::dialog::open_add_dialog(state),
            AppCommand::CloseAddSectionDialog => handlers::dialog::close_add_dialog(state),
            AppCommand::OpenRenameSectionDialog { name } => {
                handlers::dialog::open_rename_dialog(state, &name)
            }
            AppCommand::CloseRenameSectionDialog => handlers::dialog::close_rename_dialog(state),
            AppCommand::OpenDeleteConfirmDialog { name } => {
                handlers::dialog::open_delete_dialog(state, &name)
            }
            AppCommand::CloseDeleteConfirmDialog => handlers::dialog::close_delete_dialog(state),
            AppCommand::DismissErrorNotice => handlers::dialog::dismiss_error_notice(state),
            AppCommand::RequestExit => handlers::dialog::request_exit(state),

            // === Export ===
            AppCommand::RequestExportDialog => handlers::export::request_export_dialog(state),
            AppCommand::BeginExport { path } => handlers::export::begin(state, path),
            AppCommand::CancelExport => handlers::export::cancel(state),
        }

        Ok(())
    }
}
