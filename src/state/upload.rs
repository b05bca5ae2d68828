#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

/// Avatar upload status, local to the profile form.
///
/// Upload outcomes never reach the session store: a successful upload only
/// merges its public URL into the pending form fields, and a failed one only
/// sets the error flag here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadState {
    pub uploading: bool,
    pub error: Option<String>,
}

impl UploadState {
    pub fn start(&mut self) {
        self.uploading = true;
        self.error = None;
    }

    pub fn finish(&mut self) {
        self.uploading = false;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.uploading = false;
        self.error = Some(message.into());
    }
}
