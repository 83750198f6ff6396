//! Portfolio Studio.
//!
//! Rust-basierter Editor für persönliche Portfolio-Seiten: benannte
//! Abschnitte mit Freitext, Profilfoto und Theme, exportierbar als
//! mehrseitiges PDF (eine Seite pro Abschnitt).

use eframe::egui;
use portfolio_studio::{export, ui, AppController, AppState, EditorOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Portfolio Studio v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1100.0, 760.0])
                .with_title("Portfolio Studio"),
            ..Default::default()
        };

        eframe::run_native(
            "Portfolio Studio",
            options,
            Box::new(|cc| {
                // Loader für das Profilfoto (bytes://-URIs)
                egui_extras::install_image_loaders(&cc.egui_ctx);
                Ok(Box::new(StudioApp::new()))
            }),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct StudioApp {
    state: AppState,
    controller: AppController,
}

impl StudioApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let mut state = AppState::new();
        state.options = editor_options;

        Self {
            state,
            controller: AppController::new(),
        }
    }
}

impl eframe::App for StudioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        // Screenshot-Events dieses Frames einsammeln, bevor die UI rendert
        let captures = export::capture::drain_captures(ctx);

        self.apply_theme_if_dirty(ctx);

        let events = self.collect_ui_events(ctx);
        self.process_events(events);

        // Export-Job genau einmal pro gerendertem Frame vorantreiben
        export::job::drive(&mut self.state, ctx, &captures);

        self.maybe_request_repaint(ctx);
    }
}

impl StudioApp {
    fn apply_theme_if_dirty(&mut self, ctx: &egui::Context) {
        if !self.state.view.theme_dirty {
            return;
        }
        self.state.view.theme_dirty = false;
        self.state.options.theme.apply(ctx);
    }

    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<portfolio_studio::AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_toolbar(ctx, &self.state));
        events.extend(ui::render_page(ctx, &mut self.state));
        events.extend(ui::handle_file_dialogs(
            &mut self.state.ui,
            &self.state.profile,
        ));
        events.extend(ui::show_add_section_dialog(ctx, &mut self.state.ui));
        events.extend(ui::show_rename_section_dialog(ctx, &mut self.state.ui));
        events.extend(ui::show_delete_confirm_dialog(ctx, &self.state.ui));
        events.extend(ui::show_error_notice(ctx, &self.state.ui));
        events.extend(ui::show_export_progress(ctx, &self.state));

        events
    }

    fn process_events(&mut self, events: Vec<portfolio_studio::AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context) {
        if self.state.is_exporting()
            || self.state.ui.modal_dialog_open()
            || ctx.input(|i| i.pointer.is_moving())
        {
            ctx.request_repaint();
        }
    }
}
