//! UI-Schicht: Panels, Dialoge und die Portfolio-Seite selbst.
//! Alle Render-Funktionen geben erzeugte `AppIntent`s zurück.

pub mod dialogs;
pub mod menu;
pub mod page;
pub mod status;
pub mod toolbar;

pub use dialogs::{
    handle_file_dialogs, show_add_section_dialog, show_delete_confirm_dialog, show_error_notice,
    show_export_progress, show_rename_section_dialog,
};
pub use menu::render_menu;
pub use page::render_page;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
