use super::*;
use crate::app::use_cases;
use std::sync::Arc;

const PAGE_W: usize = 40;
const PAGE_H: usize = 30;

fn test_state(path: &Path) -> (AppState, egui::Context) {
    let mut state = AppState::new();
    state.view.page_rect = Some(egui::Rect::from_min_max(
        egui::pos2(0.0, 0.0),
        egui::pos2(PAGE_W as f32, PAGE_H as f32),
    ));
    use_cases::export::begin_export(&mut state, path.to_string_lossy().into_owned());
    (state, egui::Context::default())
}

fn temp_pdf(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("portfolio_studio_{}.pdf", name))
}

fn synthetic_capture(section_index: usize) -> CapturedFrame {
    let rgba = vec![200u8; PAGE_W * PAGE_H * 4];
    CapturedFrame {
        section_index,
        image: Arc::new(egui::ColorImage::from_rgba_unmultiplied(
            [PAGE_W, PAGE_H],
            &rgba,
        )),
        pixels_per_point: 1.0,
    }
}

/// Treibt den Job frameweise voran und beantwortet jede wartende
/// Capture-Anfrage mit einem synthetischen Screenshot.
fn run_to_completion(state: &mut AppState, ctx: &egui::Context, max_frames: usize) {
    for _ in 0..max_frames {
        if state.export_job.is_none() {
            return;
        }
        let captures = match state.export_job.as_ref() {
            Some(job) if job.awaiting_capture() => vec![synthetic_capture(job.current_index())],
            _ => Vec::new(),
        };
        drive(state, ctx, &captures);
    }
    panic!("Export sollte innerhalb von {} Frames enden", max_frames);
}

#[test]
fn test_export_emits_one_page_per_section_and_restores_cursor() {
    let path = temp_pdf("full_run");
    let _ = std::fs::remove_file(&path);
    let mut state = AppState::new();
    state
        .registry
        .set_active("Contact")
        .expect("Contact existiert");
    state.view.page_rect = Some(egui::Rect::from_min_max(
        egui::pos2(0.0, 0.0),
        egui::pos2(PAGE_W as f32, PAGE_H as f32),
    ));
    use_cases::export::begin_export(&mut state, path.to_string_lossy().into_owned());
    let ctx = egui::Context::default();

    run_to_completion(&mut state, &ctx, 200);

    assert!(state.export_job.is_none());
    assert_eq!(state.registry.active(), "Contact");
    let status = state.ui.status_message.expect("Statusmeldung erwartet");
    assert!(status.contains("abgeschlossen"), "Status war: {}", status);
    assert!(status.contains("5 Seiten"), "Status war: {}", status);

    let bytes = std::fs::read(&path).expect("PDF sollte geschrieben sein");
    assert!(bytes.starts_with(b"%PDF"));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_two_section_export_produces_two_pages() {
    let path = temp_pdf("two_sections");
    let _ = std::fs::remove_file(&path);
    let mut state = AppState::new();
    state.registry = crate::core::SectionRegistry::with_sections(["Home", "About"]);
    state.view.page_rect = Some(egui::Rect::from_min_max(
        egui::pos2(0.0, 0.0),
        egui::pos2(PAGE_W as f32, PAGE_H as f32),
    ));
    use_cases::export::begin_export(&mut state, path.to_string_lossy().into_owned());
    let ctx = egui::Context::default();

    run_to_completion(&mut state, &ctx, 100);

    let status = state.ui.status_message.expect("Statusmeldung erwartet");
    assert!(status.contains("2 Seiten"), "Status war: {}", status);
    assert!(path.exists());
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_export_order_snapshot_follows_reordered_registry() {
    let path = temp_pdf("reordered");
    let _ = std::fs::remove_file(&path);
    let mut state = AppState::new();
    state.registry.reorder(0, 2);
    let expected = state.registry.order_snapshot();

    use_cases::export::begin_export(&mut state, path.to_string_lossy().into_owned());

    let job = state.export_job.as_ref().expect("Job sollte laufen");
    // Seite i entsteht aus planned_order[i] — die Momentaufnahme muss der
    // umsortierten Registry entsprechen
    assert_eq!(job.planned_order(), expected.as_slice());
}

#[test]
fn test_switch_phase_moves_cursor_to_first_section() {
    let path = temp_pdf("switch_phase");
    let _ = std::fs::remove_file(&path);
    let mut state = AppState::new();
    state
        .registry
        .set_active("Contact")
        .expect("Contact existiert");
    state.view.page_rect = Some(egui::Rect::from_min_max(
        egui::pos2(0.0, 0.0),
        egui::pos2(PAGE_W as f32, PAGE_H as f32),
    ));
    use_cases::export::begin_export(&mut state, path.to_string_lossy().into_owned());
    let ctx = egui::Context::default();

    // Erster Frame: Switch auf den ersten Abschnitt der Reihenfolge
    drive(&mut state, &ctx, &[]);

    assert_eq!(state.registry.active(), "Home");
    assert!(state.export_job.is_some());
}

#[test]
fn test_cancel_aborts_without_writing_and_restores_cursor() {
    let path = temp_pdf("cancelled");
    let _ = std::fs::remove_file(&path);
    let (mut state, ctx) = test_state(&path);

    drive(&mut state, &ctx, &[]);
    use_cases::export::cancel_export(&mut state);
    drive(&mut state, &ctx, &[]);

    assert!(state.export_job.is_none());
    assert_eq!(state.registry.active(), "Home");
    assert!(!path.exists(), "Abbruch darf keine Datei hinterlassen");
    let status = state.ui.status_message.expect("Statusmeldung erwartet");
    assert!(status.contains("abgebrochen"), "Status war: {}", status);
}

#[test]
fn test_capture_timeout_fails_export_without_writing() {
    let path = temp_pdf("timeout");
    let _ = std::fs::remove_file(&path);
    let mut state = AppState::new();
    state.options.settle_frames = 0;
    state.options.capture_timeout_frames = 3;
    state.view.page_rect = Some(egui::Rect::from_min_max(
        egui::pos2(0.0, 0.0),
        egui::pos2(PAGE_W as f32, PAGE_H as f32),
    ));
    use_cases::export::begin_export(&mut state, path.to_string_lossy().into_owned());
    let ctx = egui::Context::default();

    // Switch + Settle + Request, danach verstreicht das Timeout ohne Event
    for _ in 0..10 {
        if state.export_job.is_none() {
            break;
        }
        drive(&mut state, &ctx, &[]);
    }

    assert!(state.export_job.is_none());
    assert!(!path.exists(), "Fehlschlag darf keine Datei hinterlassen");
    assert_eq!(state.registry.active(), "Home");
    let error = state.ui.error_message.expect("Fehlerhinweis erwartet");
    assert!(error.contains("fehlgeschlagen"), "Hinweis war: {}", error);
}

#[test]
fn test_mismatched_capture_tag_is_ignored() {
    let path = temp_pdf("wrong_tag");
    let _ = std::fs::remove_file(&path);
    let (mut state, ctx) = test_state(&path);

    // Bis in die AwaitCapture-Phase treiben
    for _ in 0..20 {
        let awaiting = state
            .export_job
            .as_ref()
            .is_some_and(|job| job.awaiting_capture());
        if awaiting {
            break;
        }
        assert!(state.export_job.is_some(), "Job endete unerwartet");
        drive(&mut state, &ctx, &[]);
    }

    // Screenshot mit fremdem Tag darf nicht als Seite landen
    drive(&mut state, &ctx, &[synthetic_capture(7)]);

    let job = state.export_job.as_ref().expect("Job sollte weiterlaufen");
    assert!(job.awaiting_capture());
    assert_eq!(job.progress().0, 0);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_second_begin_export_is_rejected() {
    let path = temp_pdf("single_flight");
    let _ = std::fs::remove_file(&path);
    let (mut state, _ctx) = test_state(&path);

    let other = temp_pdf("single_flight_other");
    use_cases::export::begin_export(&mut state, other.to_string_lossy().into_owned());

    let job = state.export_job.as_ref().expect("Erster Job läuft weiter");
    assert_eq!(job.output_path(), path.as_path());
    let status = state.ui.status_message.expect("Statusmeldung erwartet");
    assert!(status.contains("läuft bereits"), "Status war: {}", status);
}

#[test]
fn test_missing_page_rect_fails_export() {
    let path = temp_pdf("no_rect");
    let _ = std::fs::remove_file(&path);
    let mut state = AppState::new();
    state.options.settle_frames = 0;
    state.view.page_rect = None;
    use_cases::export::begin_export(&mut state, path.to_string_lossy().into_owned());
    let ctx = egui::Context::default();

    for _ in 0..10 {
        if state.export_job.is_none() {
            break;
        }
        let captures = match state.export_job.as_ref() {
            Some(job) if job.awaiting_capture() => vec![synthetic_capture(job.current_index())],
            _ => Vec::new(),
        };
        drive(&mut state, &ctx, &captures);
    }

    assert!(state.export_job.is_none());
    assert!(state.ui.error_message.is_some());
    assert!(!path.exists());
}
