//! Die Portfolio-Seite selbst: Profil-Seitenleiste (Foto, Name,
//! Navigation mit Drag-to-Reorder) und Inhaltsbereich des aktiven
//! Abschnitts.
//!
//! Der umschließende Rahmen wird jeden Frame in `view.page_rect`
//! festgehalten — das ist der Bereich, den der Snapshot-Capturer beim
//! Export zuschneidet. Während eines Exports bleiben die Widgets deshalb
//! optisch unverändert (kein Ausgrauen); Mutationen werden stattdessen im
//! Intent-Mapping verworfen.

use crate::app::{AppIntent, AppState};

const SIDEBAR_WIDTH: f32 = 190.0;
const NAV_BUTTON_WIDTH: f32 = 160.0;
const PHOTO_SIZE: f32 = 96.0;

/// Drag&Drop-Payload: Ursprungsindex des gezogenen Nav-Buttons.
#[derive(Clone, Copy)]
struct DragSection(usize);

/// Rendert die Portfolio-Seite und gibt erzeugte Events zurück.
pub fn render_page(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let theme = state.options.theme;
    let busy = state.is_exporting() || state.ui.modal_dialog_open();
    let active = state.registry.active().to_string();
    let order = state.registry.order_snapshot();
    let section_count = order.len();
    let mut display_name = state.profile.display_name.clone();
    let photo = state.profile.photo.clone();
    let mut content = state.registry.active_content().to_owned();

    egui::CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            let page = egui::Frame::NONE
                .fill(theme.page_fill())
                .inner_margin(egui::Margin::same(16))
                .show(ui, |ui| {
                    ui.set_min_size(ui.available_size());
                    ui.horizontal_top(|ui| {
                        egui::Frame::NONE
                            .fill(theme.sidebar_fill())
                            .inner_margin(egui::Margin::same(12))
                            .corner_radius(egui::CornerRadius::same(6))
                            .show(ui, |ui| {
                                ui.set_width(SIDEBAR_WIDTH);
                                ui.set_min_height(ui.available_height());
                                ui.vertical_centered(|ui| {
                                    render_photo(ui, &photo, theme);
                                    ui.add_space(8.0);

                                    let name_edit = ui.add(
                                        egui::TextEdit::singleline(&mut display_name)
                                            .interactive(!busy)
                                            .hint_text("Your Name")
                                            .desired_width(NAV_BUTTON_WIDTH),
                                    );
                                    if name_edit.changed() {
                                        events.push(AppIntent::DisplayNameEdited {
                                            name: display_name.clone(),
                                        });
                                    }
                                });

                                ui.add_space(12.0);
                                render_nav_buttons(
                                    ui,
                                    &order,
                                    &active,
                                    section_count,
                                    busy,
                                    theme,
                                    &mut events,
                                );
                            });

                        ui.add_space(12.0);

                        ui.vertical(|ui| {
                            ui.heading(
                                egui::RichText::new(&active).color(theme.accent()).strong(),
                            );
                            ui.add_space(8.0);

                            let content_edit = ui.add_sized(
                                ui.available_size(),
                                egui::TextEdit::multiline(&mut content)
                                    .id_salt(("section_content", active.clone()))
                                    .interactive(!busy)
                                    .frame(false)
                                    .hint_text(format!("Enter content for {}", active)),
                            );
                            if content_edit.changed() {
                                events.push(AppIntent::ContentEdited {
                                    text: content.clone(),
                                });
                            }
                        });
                    });
                });

            state.view.page_rect = Some(page.response.rect);
        });

    events
}

/// Profilfoto oder Platzhalter-Kreis.
fn render_photo(
    ui: &mut egui::Ui,
    photo: &Option<crate::core::ProfilePhoto>,
    theme: crate::shared::Theme,
) {
    match photo {
        Some(photo) => {
            ui.add(
                egui::Image::from_bytes(
                    photo.uri(),
                    egui::load::Bytes::from(photo.bytes.clone()),
                )
                .fit_to_exact_size(egui::vec2(PHOTO_SIZE, PHOTO_SIZE)),
            );
        }
        None => {
            let (rect, _) =
                ui.allocate_exact_size(egui::vec2(PHOTO_SIZE, PHOTO_SIZE), egui::Sense::hover());
            ui.painter()
                .circle_filled(rect.center(), PHOTO_SIZE / 2.0, theme.page_fill());
            ui.painter().circle_stroke(
                rect.center(),
                PHOTO_SIZE / 2.0,
                egui::Stroke::new(2.0, theme.accent()),
            );
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "👤",
                egui::FontId::proportional(40.0),
                theme.accent(),
            );
        }
    }
}

/// Nav-Buttons in Registry-Reihenfolge. Klick wählt den Abschnitt,
/// Rechtsklick öffnet Umbenennen/Löschen, Ziehen auf einen anderen Button
/// verschiebt den Abschnitt an dessen Position.
fn render_nav_buttons(
    ui: &mut egui::Ui,
    order: &[String],
    active: &str,
    section_count: usize,
    busy: bool,
    theme: crate::shared::Theme,
    events: &mut Vec<AppIntent>,
) {
    for (index, section) in order.iter().enumerate() {
        let is_active = section == active;
        let source_id = egui::Id::new("nav_section").with(index);

        let inner = ui.dnd_drag_source(source_id, DragSection(index), |ui| {
            let label = if is_active {
                egui::RichText::new(section).strong().color(theme.accent())
            } else {
                egui::RichText::new(section)
            };
            ui.add_sized([NAV_BUTTON_WIDTH, 26.0], egui::Button::new(label))
        });
        let button = inner.inner;
        let source = inner.response;

        if button.clicked() {
            events.push(AppIntent::SectionSelected {
                name: section.clone(),
            });
        }

        button.context_menu(|ui| {
            if ui
                .add_enabled(!busy, egui::Button::new("Rename..."))
                .clicked()
            {
                events.push(AppIntent::RenameSectionRequested {
                    name: section.clone(),
                });
                ui.close();
            }

            let can_delete = !busy && section_count > 1;
            if ui
                .add_enabled(can_delete, egui::Button::new("Delete..."))
                .clicked()
            {
                events.push(AppIntent::DeleteSectionRequested {
                    name: section.clone(),
                });
                ui.close();
            }
        });

        // Ablegen auf einem Button verschiebt den gezogenen Abschnitt an
        // dessen Position
        if let Some(dragged) = source.dnd_release_payload::<DragSection>() {
            if dragged.0 != index {
                events.push(AppIntent::SectionReorderRequested {
                    from: dragged.0,
                    to: index,
                });
            }
        }

        // Einfüge-Indikator während des Ziehens
        if source.dnd_hover_payload::<DragSection>().is_some() {
            let rect = source.rect;
            ui.painter().hline(
                rect.x_range(),
                rect.top(),
                egui::Stroke::new(2.0, theme.accent()),
            );
        }

        ui.add_space(2.0);
    }
}
