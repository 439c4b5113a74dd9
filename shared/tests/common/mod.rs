//! Recording transport used by the submit-flow tests.

use std::cell::RefCell;
use std::fmt;

use deepfake_shared::{AnalysisTransport, MediaRole, RawResponse, UploadForm};

/// Stand-in for a user-picked file.
#[derive(Debug, Clone, PartialEq)]
pub struct FakeFile {
    pub name: String,
}

impl FakeFile {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

#[derive(Debug)]
pub struct ConnectionRefused;

impl fmt::Display for ConnectionRefused {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("connection refused")
    }
}

/// Answers every request with a canned reply and remembers what was sent.
pub struct RecordingTransport {
    reply: Option<RawResponse>,
    sent: RefCell<Vec<Vec<(MediaRole, String)>>>,
}

impl RecordingTransport {
    pub fn replying(status: u16, body: &str) -> Self {
        Self {
            reply: Some(RawResponse::new(status, body)),
            sent: RefCell::new(Vec::new()),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            reply: None,
            sent: RefCell::new(Vec::new()),
        }
    }

    pub fn request_count(&self) -> usize {
        self.sent.borrow().len()
    }

    /// Parts of every request, as `(field, filename)` pairs.
    pub fn sent(&self) -> Vec<Vec<(MediaRole, String)>> {
        self.sent.borrow().clone()
    }
}

impl AnalysisTransport for RecordingTransport {
    type File = FakeFile;
    type Error = ConnectionRefused;

    async fn post_form(&self, form: &UploadForm<FakeFile>) -> Result<RawResponse, ConnectionRefused> {
        self.sent.borrow_mut().push(
            form.parts()
                .iter()
                .map(|part| (part.role, part.file.name.clone()))
                .collect(),
        );
        self.reply.clone().ok_or(ConnectionRefused)
    }
}

#[allow(dead_code)]
pub const IMAGE_ONLY_SUCCESS: &str = r#"{"components":{"vision_score":0.91,"temporal_score":0,"audio_score":0,"metadata_score":0.5},"deepfake_score":0.2,"classification":"authentic","risk_level":"low","confidence":0.95}"#;
