use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let first = state.push("uno", Severity::Info);
    let second = state.push("dos", Severity::Warning);
    assert!(second > first);
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[1].severity, Severity::Warning);
}

#[test]
fn push_evicts_oldest_beyond_limit() {
    let mut state = ToastState::default();
    for i in 0..6 {
        state.push(&format!("t{i}"), Severity::Info);
    }
    assert_eq!(state.toasts.len(), MAX_VISIBLE);
    assert_eq!(state.toasts[0].message, "t2");
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let keep = state.push("keep", Severity::Info);
    let drop = state.push("drop", Severity::Error);
    state.dismiss(drop);
    assert_eq!(state.toasts.iter().map(|t| t.id).collect::<Vec<_>>(), vec![keep]);
}

#[test]
fn toast_class_uses_severity_modifier() {
    assert_eq!(toast_class(Severity::Warning), "toast toast--warning");
    assert_eq!(toast_class(Severity::Error), "toast toast--error");
}
