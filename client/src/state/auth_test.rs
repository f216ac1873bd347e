use super::*;

#[test]
fn default_state_is_signed_out_and_idle() {
    let state = AuthState::default();
    assert!(!state.signed_in());
    assert!(!state.loading);
}

#[test]
fn signed_in_reflects_user_presence() {
    let state = AuthState {
        user: Some(User { id: "u1".to_owned(), email: "a@b.c".to_owned() }),
        loading: false,
    };
    assert!(state.signed_in());
}
