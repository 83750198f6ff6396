use portfolio_studio::{AppCommand, AppController, AppIntent, AppState};

fn handle(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent sollte ohne Fehler durchlaufen");
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);

    handle(&mut controller, &mut state, AppIntent::ExitRequested);

    assert!(state.should_exit);

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");

    match last {
        AppCommand::RequestExit => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_add_section_flow_via_dialog() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    handle(&mut controller, &mut state, AppIntent::AddSectionRequested);
    assert!(state.ui.add_dialog.visible);

    handle(
        &mut controller,
        &mut state,
        AppIntent::AddSectionConfirmed {
            name: "Projects".to_string(),
        },
    );

    assert!(!state.ui.add_dialog.visible);
    assert!(state.registry.contains("Projects"));
    assert_eq!(
        state.registry.position("Projects"),
        Some(state.registry.len() - 1)
    );
}

#[test]
fn test_add_duplicate_keeps_dialog_open_with_error() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    handle(&mut controller, &mut state, AppIntent::AddSectionRequested);
    handle(
        &mut controller,
        &mut state,
        AppIntent::AddSectionConfirmed {
            name: "About".to_string(),
        },
    );

    assert!(state.ui.add_dialog.visible, "Dialog sollte offen bleiben");
    assert!(state.ui.add_dialog.error.is_some());
    assert_eq!(state.registry.len(), 5, "Registry sollte unverändert sein");
}

#[test]
fn test_structural_intents_are_blocked_while_prompt_open() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    handle(&mut controller, &mut state, AppIntent::AddSectionRequested);
    handle(
        &mut controller,
        &mut state,
        AppIntent::SectionSelected {
            name: "Contact".to_string(),
        },
    );

    // Der modale Prompt blockiert Registry-Mutationen bis zur Antwort
    assert_eq!(state.registry.active(), "Home");

    handle(&mut controller, &mut state, AppIntent::AddSectionCancelled);
    handle(
        &mut controller,
        &mut state,
        AppIntent::SectionSelected {
            name: "Contact".to_string(),
        },
    );

    assert_eq!(state.registry.active(), "Contact");
}

#[test]
fn test_rename_flow_preserves_content_and_follows_cursor() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    handle(
        &mut controller,
        &mut state,
        AppIntent::SectionSelected {
            name: "Hobbies".to_string(),
        },
    );
    handle(
        &mut controller,
        &mut state,
        AppIntent::ContentEdited {
            text: "Klettern".to_string(),
        },
    );
    handle(
        &mut controller,
        &mut state,
        AppIntent::RenameSectionRequested {
            name: "Hobbies".to_string(),
        },
    );
    handle(
        &mut controller,
        &mut state,
        AppIntent::RenameSectionConfirmed {
            old: "Hobbies".to_string(),
            new: "Freizeit".to_string(),
        },
    );

    assert!(!state.ui.rename_dialog.visible);
    assert_eq!(state.registry.active(), "Freizeit");
    assert_eq!(state.registry.content("Freizeit"), Some("Klettern"));
    assert_eq!(state.registry.position("Freizeit"), Some(3));
}

#[test]
fn test_rename_to_existing_name_keeps_dialog_open_with_error() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    handle(
        &mut controller,
        &mut state,
        AppIntent::RenameSectionRequested {
            name: "About".to_string(),
        },
    );
    handle(
        &mut controller,
        &mut state,
        AppIntent::RenameSectionConfirmed {
            old: "About".to_string(),
            new: "Home".to_string(),
        },
    );

    assert!(state.ui.rename_dialog.visible);
    assert!(state.ui.rename_dialog.error.is_some());
    assert!(state.registry.contains("About"));
}

#[test]
fn test_delete_active_section_reassigns_cursor() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    assert_eq!(state.registry.active(), "Home");

    handle(
        &mut controller,
        &mut state,
        AppIntent::DeleteSectionRequested {
            name: "Home".to_string(),
        },
    );
    assert!(state.ui.delete_dialog.visible);

    handle(
        &mut controller,
        &mut state,
        AppIntent::DeleteSectionConfirmed {
            name: "Home".to_string(),
        },
    );

    assert!(!state.ui.delete_dialog.visible);
    assert!(!state.registry.contains("Home"));
    assert_eq!(state.registry.active(), "About");
}

#[test]
fn test_delete_last_section_shows_error_notice() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    for name in ["About", "Education", "Hobbies", "Contact"] {
        controller
            .handle_command(
                &mut state,
                AppCommand::DeleteSection {
                    name: name.to_string(),
                },
            )
            .expect("Delete sollte ohne Fehler durchlaufen");
        state.ui.error_message = None;
    }
    assert_eq!(state.registry.len(), 1);

    controller
        .handle_command(
            &mut state,
            AppCommand::DeleteSection {
                name: "Home".to_string(),
            },
        )
        .expect("Delete sollte ohne Fehler durchlaufen");

    assert_eq!(state.registry.len(), 1, "Letzter Abschnitt bleibt bestehen");
    assert!(state.ui.error_message.is_some());
}

#[test]
fn test_content_roundtrip_on_active_section() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    handle(
        &mut controller,
        &mut state,
        AppIntent::ContentEdited {
            text: "Willkommen!".to_string(),
        },
    );

    assert_eq!(state.registry.content("Home"), Some("Willkommen!"));
    assert_eq!(state.registry.active_content(), "Willkommen!");
}

#[test]
fn test_reorder_intent_moves_section() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    handle(
        &mut controller,
        &mut state,
        AppIntent::SectionReorderRequested { from: 4, to: 0 },
    );

    assert_eq!(
        state.registry.order_snapshot(),
        vec!["Contact", "Home", "About", "Education", "Hobbies"]
    );
}

#[test]
fn test_display_name_edit_updates_profile() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    handle(
        &mut controller,
        &mut state,
        AppIntent::DisplayNameEdited {
            name: "Jane Doe".to_string(),
        },
    );

    assert_eq!(state.profile.display_name, "Jane Doe");
    assert_eq!(state.profile.export_file_name(), "Jane_Doe_portfolio.pdf");
}

#[test]
fn test_begin_export_is_single_flight() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let first = std::env::temp_dir().join("portfolio_studio_flow_first.pdf");
    let second = std::env::temp_dir().join("portfolio_studio_flow_second.pdf");

    controller
        .handle_command(
            &mut state,
            AppCommand::BeginExport {
                path: first.to_string_lossy().into_owned(),
            },
        )
        .expect("BeginExport sollte ohne Fehler durchlaufen");
    assert!(state.is_exporting());

    controller
        .handle_command(
            &mut state,
            AppCommand::BeginExport {
                path: second.to_string_lossy().into_owned(),
            },
        )
        .expect("BeginExport sollte ohne Fehler durchlaufen");

    let job = state.export_job.as_ref().expect("Erster Job läuft weiter");
    assert_eq!(job.output_path(), first.as_path());
}

#[test]
fn test_cursor_mutations_are_blocked_while_exporting() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let path = std::env::temp_dir().join("portfolio_studio_flow_blocked.pdf");

    controller
        .handle_command(
            &mut state,
            AppCommand::BeginExport {
                path: path.to_string_lossy().into_owned(),
            },
        )
        .expect("BeginExport sollte ohne Fehler durchlaufen");

    handle(
        &mut controller,
        &mut state,
        AppIntent::SectionSelected {
            name: "Contact".to_string(),
        },
    );
    handle(
        &mut controller,
        &mut state,
        AppIntent::SectionReorderRequested { from: 0, to: 1 },
    );

    assert_eq!(state.registry.active(), "Home");
    assert_eq!(
        state.registry.order_snapshot(),
        vec!["Home", "About", "Education", "Hobbies", "Contact"]
    );
}

#[test]
fn test_command_log_records_section_commands() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    handle(&mut controller, &mut state, AppIntent::AddSectionRequested);
    handle(
        &mut controller,
        &mut state,
        AppIntent::AddSectionConfirmed {
            name: "Projects".to_string(),
        },
    );

    let commands = state.command_log.entries();
    assert!(commands.contains(&AppCommand::OpenAddSectionDialog));
    assert!(commands.contains(&AppCommand::AddSection {
        name: "Projects".to_string()
    }));
}
