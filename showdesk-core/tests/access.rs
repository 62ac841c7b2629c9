use showdesk_core::*;

#[test]
fn correct_secret_unlocks_exactly_once() {
    let mut gate = AccessGate::default();
    gate.code = ADMIN_ACCESS_CODE.to_string();

    let mut unlocks = 0;
    gate.submit(|| unlocks += 1).unwrap();
    assert_eq!(unlocks, 1);
    assert_eq!(gate.error(), None);
}

#[test]
fn incorrect_secrets_never_unlock() {
    let attempts = ["", "0000", "1988", "1987\n", "abcd", "19 87"];
    for attempt in attempts {
        let mut gate = AccessGate::default();
        gate.code = attempt.to_string();
        let mut unlocks = 0;
        let result = gate.submit(|| unlocks += 1);
        assert_eq!(result, Err(AccessError::IncorrectCode), "attempt {:?}", attempt);
        assert_eq!(unlocks, 0, "attempt {:?} must not unlock", attempt);
        assert_eq!(gate.error(), Some("Code incorrect"));
    }
}

#[test]
fn retry_after_mistake_clears_error() {
    let mut panel = AdminPanel::new(ShowListEditor::with_sample_shows().unwrap());

    panel.gate.code = "1789".to_string();
    assert!(panel.submit_code().is_err());
    assert_eq!(panel.gate.code, "1789");
    assert!(panel.editor_mut().is_none());

    panel.gate.code = ADMIN_ACCESS_CODE.to_string();
    assert!(panel.submit_code().is_ok());
    assert!(panel.is_unlocked());
    assert_eq!(panel.gate.error(), None);

    let editor = panel.editor_mut().expect("unlocked panel exposes the editor");
    assert_eq!(editor.len(), 3);
}

#[test]
fn unlocked_panel_stays_unlocked_after_bad_code() {
    let mut panel = AdminPanel::default();
    panel.gate.code = ADMIN_ACCESS_CODE.to_string();
    panel.submit_code().unwrap();

    panel.gate.code = "wrong".to_string();
    let _ = panel.submit_code();
    assert!(panel.is_unlocked());
}
