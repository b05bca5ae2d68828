use super::*;

fn user(id: &str) -> User {
    User {
        id: id.to_owned(),
        username: "demo".to_owned(),
        email: "demo@example.com".to_owned(),
        avatar_url: None,
    }
}

fn start_failure_pairs() -> Vec<(SessionEvent, SessionEvent)> {
    vec![
        (
            SessionEvent::SignInStart,
            SessionEvent::SignInFailure("boom".to_owned()),
        ),
        (
            SessionEvent::UpdateUserStart,
            SessionEvent::UpdateUserFailure("boom".to_owned()),
        ),
        (
            SessionEvent::DeleteUserStart,
            SessionEvent::DeleteUserFailure("boom".to_owned()),
        ),
        (
            SessionEvent::SignOutStart,
            SessionEvent::SignOutFailure("boom".to_owned()),
        ),
    ]
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn session_state_default_is_signed_out_and_idle() {
    let state = SessionState::default();
    assert!(state.current_user.is_none());
    assert!(!state.loading);
    assert!(state.error.is_none());
}

// =============================================================
// Start transitions
// =============================================================

#[test]
fn start_raises_loading_without_clearing_a_stale_error() {
    for (start, _) in start_failure_pairs() {
        let mut state = SessionState {
            current_user: Some(user("u-1")),
            loading: false,
            error: Some("stale".to_owned()),
        };
        state.apply(start);
        assert!(state.loading);
        assert_eq!(state.error.as_deref(), Some("stale"));
        assert!(state.current_user.is_some());
    }
}

#[test]
fn double_start_without_resolution_keeps_loading() {
    let mut state = SessionState::default();
    state.apply(SessionEvent::SignInStart);
    state.apply(SessionEvent::SignInStart);
    assert!(state.loading);
}

// =============================================================
// Guarded starts
// =============================================================

#[test]
fn start_for_current_user_signed_out_leaves_state_untouched() {
    let mut state = SessionState::default();
    let started = state.start_for_current_user(SessionEvent::UpdateUserStart);
    assert!(started.is_none());
    assert_eq!(state, SessionState::default());
    assert!(!state.loading);
}

#[test]
fn start_for_current_user_signed_in_raises_loading_and_returns_the_user() {
    let mut state = SessionState {
        current_user: Some(user("u-1")),
        ..SessionState::default()
    };
    let started = state.start_for_current_user(SessionEvent::DeleteUserStart);
    assert_eq!(started, Some(user("u-1")));
    assert!(state.loading);
}

// =============================================================
// Failure transitions
// =============================================================

#[test]
fn failure_after_start_drops_loading_for_every_family() {
    for (start, failure) in start_failure_pairs() {
        let mut state = SessionState {
            error: Some("stale".to_owned()),
            ..SessionState::default()
        };
        state.apply(start);
        state.apply(failure);
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("boom"));
    }
}

#[test]
fn failure_leaves_current_user_untouched() {
    for (start, failure) in start_failure_pairs() {
        let mut state = SessionState {
            current_user: Some(user("u-1")),
            ..SessionState::default()
        };
        state.apply(start);
        state.apply(failure);
        assert_eq!(state.current_user, Some(user("u-1")));
    }
}

// =============================================================
// Success transitions
// =============================================================

#[test]
fn sign_in_success_replaces_user_and_clears_stale_error() {
    let mut state = SessionState {
        current_user: Some(user("old")),
        loading: true,
        error: Some("stale".to_owned()),
    };
    state.apply(SessionEvent::SignInSuccess(user("new")));
    assert_eq!(state.current_user, Some(user("new")));
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn update_success_sets_user_independent_of_prior_loading() {
    // The store never verifies that a start preceded the result.
    let mut state = SessionState {
        error: Some("stale".to_owned()),
        ..SessionState::default()
    };
    assert!(!state.loading);
    state.apply(SessionEvent::UpdateUserSuccess(user("updated")));
    assert_eq!(state.current_user, Some(user("updated")));
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn delete_success_clears_user_regardless_of_prior_value() {
    let mut state = SessionState {
        current_user: Some(user("u-1")),
        loading: true,
        error: Some("stale".to_owned()),
    };
    state.apply(SessionEvent::DeleteUserSuccess);
    assert!(state.current_user.is_none());
    assert!(!state.loading);
    assert!(state.error.is_none());

    let mut already_out = SessionState::default();
    already_out.apply(SessionEvent::DeleteUserSuccess);
    assert!(already_out.current_user.is_none());
}

#[test]
fn sign_out_success_clears_user_regardless_of_prior_value() {
    let mut state = SessionState {
        current_user: Some(user("u-1")),
        loading: true,
        ..SessionState::default()
    };
    state.apply(SessionEvent::SignOutSuccess);
    assert!(state.current_user.is_none());
    assert!(!state.loading);
    assert!(state.error.is_none());
}

// =============================================================
// End-to-end scenarios
// =============================================================

#[test]
fn rejected_sign_in_ends_signed_out_with_server_message() {
    // Backend answered {success:false, message:"bad credentials"}.
    let mut state = SessionState::default();
    state.apply(SessionEvent::SignInStart);
    state.apply(SessionEvent::SignInFailure("bad credentials".to_owned()));
    assert_eq!(
        state,
        SessionState {
            current_user: None,
            loading: false,
            error: Some("bad credentials".to_owned()),
        }
    );
}

#[test]
fn full_profile_update_cycle() {
    let mut state = SessionState {
        current_user: Some(user("u-1")),
        ..SessionState::default()
    };
    state.apply(SessionEvent::UpdateUserStart);
    assert!(state.loading);
    state.apply(SessionEvent::UpdateUserSuccess(user("u-1-updated")));
    assert_eq!(
        state,
        SessionState {
            current_user: Some(user("u-1-updated")),
            loading: false,
            error: None,
        }
    );
}
