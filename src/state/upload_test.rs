use super::*;

#[test]
fn upload_state_default_is_idle() {
    let state = UploadState::default();
    assert!(!state.uploading);
    assert!(state.error.is_none());
}

#[test]
fn start_clears_a_previous_error() {
    let mut state = UploadState {
        error: Some("old failure".to_owned()),
        ..UploadState::default()
    };
    state.start();
    assert!(state.uploading);
    assert!(state.error.is_none());
}

#[test]
fn fail_sets_the_error_flag_and_stops_uploading() {
    let mut state = UploadState::default();
    state.start();
    state.fail("Upload failed. Try again.");
    assert!(!state.uploading);
    assert_eq!(state.error.as_deref(), Some("Upload failed. Try again."));
}

#[test]
fn finish_only_drops_the_uploading_flag() {
    let mut state = UploadState::default();
    state.start();
    state.finish();
    assert!(!state.uploading);
    assert!(state.error.is_none());
}
