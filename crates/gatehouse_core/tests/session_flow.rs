use gatehouse_core::{Notice, PortalConfig, PortalView, Route, Session};
use std::fs;
use tempfile::TempDir;

const SECRET: &str = "open-sesame";

fn portal_fixture() -> (TempDir, PortalConfig) {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("schedule.csv"),
        "Date,Event\n09/12/2025,Opening\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("members.csv"),
        "Name,Contact\nAda,1234567890\nGrace,555-867-5309\n",
    )
    .unwrap();
    let config = PortalConfig::new(
        SECRET,
        dir.path().join("schedule.csv"),
        dir.path().join("members.csv"),
        dir.path().join("submission_records"),
    );
    (dir, config)
}

#[test]
fn session_starts_logged_out_on_schedule_view() {
    let (_dir, config) = portal_fixture();
    let session = Session::open(config);

    assert!(!session.is_authenticated());
    assert!(!session.auth_error());
    assert_eq!(session.active_view(), PortalView::Schedule);
    assert!(!session.schedule().is_loaded());
    assert!(!session.members().is_loaded());
    assert_eq!(session.draft_submission(), "");
}

#[test]
fn correct_secret_logs_in_and_redirects_home() {
    let (_dir, config) = portal_fixture();
    let mut session = Session::open(config);

    session.set_password(SECRET);
    let redirect = session.submit_password();

    assert_eq!(redirect, Some(Route::Home));
    assert!(session.is_authenticated());
    assert!(!session.auth_error());
}

#[test]
fn wrong_secret_stays_logged_out_and_flags_error() {
    let (_dir, config) = portal_fixture();
    let mut session = Session::open(config);

    session.set_password("not-it");
    let redirect = session.submit_password();

    assert_eq!(redirect, None);
    assert!(!session.is_authenticated());
    assert!(session.auth_error());
    // The candidate is kept so the user can see what they typed.
    session.submit_password();
    assert!(session.auth_error());
}

#[test]
fn retyping_clears_the_mismatch_flag_regardless_of_value() {
    let (_dir, config) = portal_fixture();
    let mut session = Session::open(config);

    session.set_password("wrong");
    session.submit_password();
    assert!(session.auth_error());

    session.set_password("still wrong");
    assert!(!session.auth_error());
}

#[test]
fn login_after_mismatch_clears_the_flag() {
    let (_dir, config) = portal_fixture();
    let mut session = Session::open(config);

    session.set_password("wrong");
    session.submit_password();
    session.set_password(SECRET);
    let redirect = session.submit_password();

    assert_eq!(redirect, Some(Route::Home));
    assert!(!session.auth_error());
}

#[test]
fn enter_key_commits_the_candidate_other_keys_do_nothing() {
    let (_dir, config) = portal_fixture();
    let mut session = Session::open(config);

    session.set_password(SECRET);
    assert_eq!(session.handle_keypress("Tab"), None);
    assert!(!session.is_authenticated());

    assert_eq!(session.handle_keypress("Enter"), Some(Route::Home));
    assert!(session.is_authenticated());
}

#[test]
fn access_guard_redirects_only_when_logged_out() {
    let (_dir, config) = portal_fixture();
    let mut session = Session::open(config);

    assert_eq!(session.check_access_or_redirect(), Some(Route::Login));

    session.set_password(SECRET);
    session.submit_password();
    assert_eq!(session.check_access_or_redirect(), None);
}

#[test]
fn toggling_views_keeps_exactly_one_active() {
    let (_dir, config) = portal_fixture();
    let mut session = Session::open(config);

    session.toggle_view(PortalView::Members);
    assert_eq!(session.active_view(), PortalView::Members);

    session.toggle_view(PortalView::Schedule);
    assert_eq!(session.active_view(), PortalView::Schedule);
}

#[test]
fn ensure_data_loaded_populates_both_datasets() {
    let (_dir, config) = portal_fixture();
    let mut session = Session::open(config);

    session.ensure_data_loaded();

    assert_eq!(session.schedule().headers, vec!["Date", "Event"]);
    assert_eq!(session.schedule().row_count(), 1);
    assert_eq!(session.members_count(), 2);
    // Contact formatting is applied during ingestion.
    assert_eq!(session.members().rows[0][1], "(123) 456-7890");
}

#[test]
fn ensure_data_loaded_is_idempotent_within_a_session() {
    let (dir, config) = portal_fixture();
    let mut session = Session::open(config);

    session.ensure_data_loaded();
    let first_schedule = session.schedule().clone();

    // A second call after the source changes must not re-read it.
    fs::write(
        dir.path().join("schedule.csv"),
        "Date,Event\n10/01/2025,Changed\n10/02/2025,Extra\n",
    )
    .unwrap();
    session.ensure_data_loaded();

    assert_eq!(session.schedule(), &first_schedule);
}

#[test]
fn missing_sources_degrade_to_fallback_datasets() {
    let dir = TempDir::new().unwrap();
    let config = PortalConfig::new(
        SECRET,
        dir.path().join("no_schedule.csv"),
        dir.path().join("no_members.csv"),
        dir.path().join("submission_records"),
    );
    let mut session = Session::open(config);

    session.ensure_data_loaded();

    assert_eq!(session.schedule().headers, vec!["Date", "Event"]);
    let marker_row = session.schedule().rows.last().unwrap();
    assert_eq!(marker_row[0], "Error");
    assert_eq!(session.members().headers, vec!["Name", "Role"]);
    assert_eq!(session.members_count(), 0);
}

#[test]
fn submitting_a_draft_persists_trimmed_text_and_clears_it() {
    let (dir, config) = portal_fixture();
    let mut session = Session::open(config);

    session.set_draft_submission("  please remember the gathering  \n");
    let notice = session.submit_draft_submission();

    assert!(matches!(notice, Notice::Success(_)));
    assert_eq!(session.draft_submission(), "");

    let records_dir = dir.path().join("submission_records");
    let records: Vec<_> = fs::read_dir(&records_dir).unwrap().collect();
    assert_eq!(records.len(), 1);
    let contents = fs::read_to_string(records[0].as_ref().unwrap().path()).unwrap();
    assert_eq!(contents, "please remember the gathering");
}

#[test]
fn blank_draft_fails_validation_without_touching_storage() {
    let (dir, config) = portal_fixture();
    let mut session = Session::open(config);

    session.set_draft_submission("   \n\t");
    let notice = session.submit_draft_submission();

    assert!(matches!(notice, Notice::Error(_)));
    // The store directory is created lazily, so no write means no dir.
    assert!(!dir.path().join("submission_records").exists());
    // A failed submission does not clear the draft.
    assert_eq!(session.draft_submission(), "   \n\t");
}

#[test]
fn logout_clears_credentials_but_retains_view_and_datasets() {
    let (_dir, config) = portal_fixture();
    let mut session = Session::open(config);

    session.set_password(SECRET);
    session.submit_password();
    session.ensure_data_loaded();
    session.toggle_view(PortalView::Members);

    let redirect = session.logout();

    assert_eq!(redirect, Route::Login);
    assert!(!session.is_authenticated());
    assert!(!session.auth_error());
    assert_eq!(session.check_access_or_redirect(), Some(Route::Login));
    // Retention policy: view and datasets survive a logout.
    assert_eq!(session.active_view(), PortalView::Members);
    assert!(session.schedule().is_loaded());
    assert_eq!(session.members_count(), 2);

    // Re-login succeeds with a freshly typed secret.
    session.set_password(SECRET);
    assert_eq!(session.submit_password(), Some(Route::Home));
}

#[test]
fn notices_serialize_for_the_boundary_layer() {
    let notice = Notice::Success("Submission saved.".to_string());
    let value = serde_json::to_value(&notice).unwrap();
    assert_eq!(value["kind"], "success");
    assert_eq!(value["message"], "Submission saved.");
}
