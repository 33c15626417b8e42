use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    state.push(ToastLevel::Error, "first");
    state.push(ToastLevel::Success, "second");
    assert_eq!(state.toasts.len(), 2);
    assert!(state.toasts[0].id < state.toasts[1].id);
}

#[test]
fn dismiss_removes_only_the_matching_toast() {
    let mut state = ToastState::default();
    state.push(ToastLevel::Error, "keep");
    state.push(ToastLevel::Error, "drop");
    let drop_id = state.toasts[1].id;

    state.dismiss(drop_id);

    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].text, "keep");
}

#[test]
fn notifier_impl_records_level_and_text() {
    let sink: Arc<Mutex<ToastState>> = Arc::new(Mutex::new(ToastState::default()));
    sink.error("boom");
    sink.success("ok");

    let state = sink.lock().unwrap();
    assert_eq!(state.toasts[0].level, ToastLevel::Error);
    assert_eq!(state.toasts[0].text, "boom");
    assert_eq!(state.toasts[1].level, ToastLevel::Success);
}
