//! Frame-getriebener Export-Job: erfasst jeden Abschnitt in
//! Registry-Reihenfolge und baut daraus das mehrseitige PDF.
//!
//! Der Job wird genau einmal pro gerendertem Frame per [`drive`]
//! vorangetrieben — jeder Aufruf ist damit ein abgeschlossener Render des
//! zuletzt gesetzten Cursors. Pro Abschnitt: Cursor setzen → Settle-Frames
//! abwarten → Screenshot anfordern → auf das getaggte Event warten →
//! Seite anhängen. Der Cursor wird auf **jedem** Austrittspfad
//! wiederhergestellt; geschrieben wird erst nach der letzten Seite.

use crate::app::AppState;
use crate::core::SectionRegistry;
use crate::export::capture::{self, CapturedFrame};
use crate::export::pdf::PageAssembler;
use crate::shared::EditorOptions;
use std::path::{Path, PathBuf};

/// Phase des Export-Jobs für den aktuellen Abschnitt.
#[derive(Debug, Clone, Copy)]
enum ExportPhase {
    /// Cursor auf den aktuellen Abschnitt setzen
    Switch,
    /// Auf das Durchrendern des Cursor-Wechsels warten
    Settle { frames_left: u8 },
    /// Screenshot angefordert, Event steht aus
    AwaitCapture { frames_waited: u32 },
}

/// Endergebnis eines Export-Jobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Dokument vollständig geschrieben
    Completed { path: PathBuf, pages: usize },
    /// Auf Benutzerwunsch abgebrochen, nichts geschrieben
    Cancelled,
    /// Abgebrochen wegen Fehler, nichts geschrieben
    Failed { reason: String },
}

/// Ergebnis eines einzelnen Frame-Schritts.
enum StepResult {
    InProgress,
    Done(ExportOutcome),
}

/// Laufender Export: Reihenfolgen-Momentaufnahme, Phase und wachsendes
/// Dokument.
pub struct ExportJob {
    /// Abschnitte in Export-Reihenfolge (Momentaufnahme beim Start)
    order: Vec<String>,
    /// Index des aktuell bearbeiteten Abschnitts
    index: usize,
    /// Aktuelle Phase
    phase: ExportPhase,
    /// Wachsendes Dokument (None erst nach Finalisierung)
    assembler: Option<PageAssembler>,
    /// Aktiver Abschnitt vor Export-Beginn (wird wiederhergestellt)
    restore_active: String,
    /// Zieldatei
    output_path: PathBuf,
    /// Render-Wartebudget nach Cursor-Wechsel
    settle_frames: u8,
    /// Timeout für ausstehende Screenshots
    capture_timeout_frames: u32,
    /// Abbruch angefordert — wird an jedem Suspendierungspunkt honoriert
    cancel_requested: bool,
}

impl ExportJob {
    /// Erstellt einen Job über alle Abschnitte in aktueller Reihenfolge.
    pub fn new(
        registry: &SectionRegistry,
        document_title: &str,
        output_path: PathBuf,
        options: &EditorOptions,
    ) -> Self {
        Self {
            order: registry.order_snapshot(),
            index: 0,
            phase: ExportPhase::Switch,
            assembler: Some(PageAssembler::new(document_title, options.page_width_mm)),
            restore_active: registry.active().to_string(),
            output_path,
            settle_frames: options.settle_frames,
            capture_timeout_frames: options.capture_timeout_frames,
            cancel_requested: false,
        }
    }

    /// Merkt einen Abbruchwunsch vor.
    pub fn request_cancel(&mut self) {
        self.cancel_requested = true;
    }

    /// Zieldatei des Exports.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Geplante Seitenreihenfolge (Momentaufnahme beim Start).
    pub fn planned_order(&self) -> &[String] {
        &self.order
    }

    /// Fortschritt als (erledigte Abschnitte, Gesamtzahl).
    pub fn progress(&self) -> (usize, usize) {
        (self.index, self.order.len())
    }

    /// Abschnitt, der gerade erfasst wird.
    pub fn current_section(&self) -> Option<&str> {
        self.order.get(self.index).map(String::as_str)
    }

    /// Index des Abschnitts, der gerade erfasst wird.
    pub fn current_index(&self) -> usize {
        self.index
    }

    /// Gibt zurück, ob gerade auf ein Screenshot-Event gewartet wird.
    pub fn awaiting_capture(&self) -> bool {
        matches!(self.phase, ExportPhase::AwaitCapture { .. })
    }

    fn step(
        &mut self,
        state: &mut AppState,
        ctx: &egui::Context,
        captures: &[CapturedFrame],
    ) -> StepResult {
        if self.cancel_requested {
            return StepResult::Done(ExportOutcome::Cancelled);
        }

        match self.phase {
            ExportPhase::Switch => {
                let name = self.order[self.index].clone();
                if state.registry.set_active(&name).is_err() {
                    // Kann nur passieren, wenn die Mutations-Sperre umgangen wurde
                    return fail(format!("Abschnitt '{}' nicht mehr vorhanden", name));
                }
                log::info!(
                    "Export: erfasse Abschnitt '{}' ({}/{})",
                    name,
                    self.index + 1,
                    self.order.len()
                );
                self.phase = ExportPhase::Settle {
                    frames_left: self.settle_frames,
                };
                StepResult::InProgress
            }
            ExportPhase::Settle { frames_left } => {
                if frames_left == 0 {
                    capture::request_capture(ctx, self.index);
                    self.phase = ExportPhase::AwaitCapture { frames_waited: 0 };
                } else {
                    self.phase = ExportPhase::Settle {
                        frames_left: frames_left - 1,
                    };
                }
                StepResult::InProgress
            }
            ExportPhase::AwaitCapture { frames_waited } => {
                if let Some(frame) = captures
                    .iter()
                    .find(|frame| frame.section_index == self.index)
                {
                    self.append_page(state, frame)
                } else if frames_waited >= self.capture_timeout_frames {
                    fail("Zeitüberschreitung beim Erfassen des Snapshots".to_string())
                } else {
                    self.phase = ExportPhase::AwaitCapture {
                        frames_waited: frames_waited + 1,
                    };
                    StepResult::InProgress
                }
            }
        }
    }

    /// Schneidet den Screenshot zu, hängt ihn als Seite an und schaltet
    /// zum nächsten Abschnitt bzw. finalisiert das Dokument.
    fn append_page(&mut self, state: &AppState, frame: &CapturedFrame) -> StepResult {
        let Some(page_rect) = state.view.page_rect else {
            return fail("Seitenbereich unbekannt".to_string());
        };

        let png = match capture::crop_and_encode(&frame.image, page_rect, frame.pixels_per_point)
        {
            Ok(png) => png,
            Err(e) => return fail(format!("{:#}", e)),
        };
        let Some(assembler) = self.assembler.as_mut() else {
            return fail("Dokument bereits finalisiert".to_string());
        };
        if let Err(e) = assembler.push_page(&png) {
            return fail(format!("{:#}", e));
        }

        self.index += 1;
        if self.index < self.order.len() {
            self.phase = ExportPhase::Switch;
            StepResult::InProgress
        } else {
            self.finalize_document()
        }
    }

    fn finalize_document(&mut self) -> StepResult {
        let Some(assembler) = self.assembler.take() else {
            return fail("Dokument bereits finalisiert".to_string());
        };
        let pages = assembler.page_count();
        match assembler.finalize(&self.output_path) {
            Ok(()) => StepResult::Done(ExportOutcome::Completed {
                path: self.output_path.clone(),
                pages,
            }),
            Err(e) => fail(format!("{:#}", e)),
        }
    }

    /// Stellt den vor Export-Beginn aktiven Abschnitt wieder her.
    fn restore_cursor(&self, state: &mut AppState) {
        if state.registry.set_active(&self.restore_active).is_err() {
            log::warn!(
                "Cursor-Wiederherstellung fehlgeschlagen: '{}' existiert nicht mehr",
                self.restore_active
            );
        }
    }
}

fn fail(reason: String) -> StepResult {
    StepResult::Done(ExportOutcome::Failed { reason })
}

/// Treibt einen laufenden Export-Job um einen Frame voran.
/// Ohne aktiven Job ein No-op.
pub fn drive(state: &mut AppState, ctx: &egui::Context, captures: &[CapturedFrame]) {
    // Job temporär herausnehmen, damit Registry und Job gleichzeitig
    // mutierbar sind.
    let Some(mut job) = state.export_job.take() else {
        return;
    };

    match job.step(state, ctx, captures) {
        StepResult::InProgress => {
            state.export_job = Some(job);
            // Der Job lebt von kontinuierlichen Frames
            ctx.request_repaint();
        }
        StepResult::Done(outcome) => {
            job.restore_cursor(state);
            report(state, outcome);
            // Ergebnis und wiederhergestellter Cursor sollen sofort sichtbar sein
            ctx.request_repaint();
        }
    }
}

/// Meldet das Endergebnis an Log und UI.
fn report(state: &mut AppState, outcome: ExportOutcome) {
    match outcome {
        ExportOutcome::Completed { path, pages } => {
            log::info!("Export abgeschlossen: {} ({} Seiten)", path.display(), pages);
            state.ui.status_message = Some(format!(
                "Export abgeschlossen: {} ({} Seiten)",
                path.display(),
                pages
            ));
        }
        ExportOutcome::Cancelled => {
            log::info!("Export abgebrochen, keine Datei geschrieben");
            state.ui.status_message = Some("Export abgebrochen".to_string());
        }
        ExportOutcome::Failed { reason } => {
            log::error!("Export fehlgeschlagen: {}", reason);
            state.ui.error_message = Some(format!("Export fehlgeschlagen: {}", reason));
        }
    }
}

#[cfg(test)]
mod tests;
