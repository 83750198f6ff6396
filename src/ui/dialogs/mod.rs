//! Modale Dialoge und ausstehende Datei-Dialoge.

mod add_section_dialog;
mod delete_confirm_dialog;
mod error_notice;
mod export_progress;
mod file_dialogs;
mod rename_section_dialog;

pub use add_section_dialog::show_add_section_dialog;
pub use delete_confirm_dialog::show_delete_confirm_dialog;
pub use error_notice::show_error_notice;
pub use export_progress::show_export_progress;
pub use file_dialogs::handle_file_dialogs;
pub use rename_section_dialog::show_rename_section_dialog;
