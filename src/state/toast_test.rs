use super::*;

#[test]
fn push_queues_in_order_with_monotonic_ids() {
    let mut state = ToastState::default();
    let first = state.push("خطأ", "حدث خطأ أثناء تسجيل الدخول", ToastVariant::Destructive);
    let second = state.push("تم تسجيل الدخول بنجاح", "مرحباً بك", ToastVariant::Default);
    assert!(second > first);
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[0].id, first);
    assert_eq!(state.toasts[0].variant, ToastVariant::Destructive);
    assert_eq!(state.toasts[1].variant, ToastVariant::Default);
}

#[test]
fn dismiss_removes_only_the_matching_toast() {
    let mut state = ToastState::default();
    let first = state.push("a", "1", ToastVariant::Default);
    let second = state.push("b", "2", ToastVariant::Default);
    state.dismiss(first);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, second);
}

#[test]
fn dismiss_ignores_unknown_ids() {
    let mut state = ToastState::default();
    state.push("a", "1", ToastVariant::Default);
    state.dismiss(999);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismissal() {
    let mut state = ToastState::default();
    let first = state.push("a", "1", ToastVariant::Default);
    state.dismiss(first);
    let second = state.push("b", "2", ToastVariant::Default);
    assert!(second > first);
}
