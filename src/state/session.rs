#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

/// Session store: the single source of truth for who is signed in and the
/// outcome of the most recent auth/profile operation.
///
/// Provided app-wide as an `RwSignal<SessionState>` via context — an
/// explicitly owned, injectable object, not a process-wide singleton.
/// Transitions are pure state updates keyed by [`SessionEvent`], so the store
/// unit-tests without a UI harness.
///
/// Known weakness, kept on purpose: nothing checks that a start event
/// actually preceded its success/failure. Callers follow the
/// start -> request -> success/failure protocol by discipline, and a second
/// start before the first resolves silently overwrites `loading` — whichever
/// response lands last wins.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub current_user: Option<User>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Session transitions: four action families (sign-in, profile update,
/// account delete, sign-out), each with a start/success/failure triple.
#[derive(Clone, Debug)]
pub enum SessionEvent {
    SignInStart,
    SignInSuccess(User),
    SignInFailure(String),

    UpdateUserStart,
    UpdateUserSuccess(User),
    UpdateUserFailure(String),

    DeleteUserStart,
    DeleteUserSuccess,
    DeleteUserFailure(String),

    SignOutStart,
    SignOutSuccess,
    SignOutFailure(String),
}

impl SessionState {
    /// Apply one transition.
    ///
    /// The contract is identical across families: start raises `loading` and
    /// leaves everything else alone; success drops `loading`, clears any
    /// stale error, and replaces or clears `current_user` depending on the
    /// family; failure drops `loading` and records the message without
    /// touching `current_user`.
    pub fn apply(&mut self, event: SessionEvent) {
        use SessionEvent::{
            DeleteUserFailure, DeleteUserStart, DeleteUserSuccess, SignInFailure, SignInStart,
            SignInSuccess, SignOutFailure, SignOutStart, SignOutSuccess, UpdateUserFailure,
            UpdateUserStart, UpdateUserSuccess,
        };

        match event {
            SignInStart | UpdateUserStart | DeleteUserStart | SignOutStart => {
                self.loading = true;
            }
            SignInSuccess(user) | UpdateUserSuccess(user) => {
                self.current_user = Some(user);
                self.loading = false;
                self.error = None;
            }
            DeleteUserSuccess | SignOutSuccess => {
                self.current_user = None;
                self.loading = false;
                self.error = None;
            }
            SignInFailure(message)
            | UpdateUserFailure(message)
            | DeleteUserFailure(message)
            | SignOutFailure(message) => {
                self.error = Some(message);
                self.loading = false;
            }
        }
    }

    /// Raise `loading` for a mutation that needs a signed-in user.
    ///
    /// Returns the user when one is present. When nobody is signed in the
    /// state is left untouched: raising `loading` with no request in flight
    /// would wedge it, since only a success/failure event drops it again.
    pub fn start_for_current_user(&mut self, start: SessionEvent) -> Option<User> {
        let user = self.current_user.clone()?;
        self.apply(start);
        Some(user)
    }
}
