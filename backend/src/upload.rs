use actix_multipart::{Multipart, MultipartError};
use deepfake_shared::{MediaRole, MediaSelection};
use futures::TryStreamExt;

pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

const BLOCKED_EXTENSIONS: [&str; 3] = [".exe", ".dll", ".bat"];

/// One media part, fully buffered.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub filename: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("At least one modality required")]
    NoModality,
    #[error("Filename is required")]
    MissingFilename,
    #[error("Unsupported file type")]
    BlockedExtension,
    #[error("File too large")]
    TooLarge,
    #[error("Invalid multipart payload")]
    Multipart(#[source] MultipartError),
}

#[derive(Debug, Clone, Copy)]
pub struct UploadPolicy {
    pub max_part_bytes: usize,
}

impl UploadPolicy {
    pub fn new(max_part_bytes: usize) -> Self {
        Self { max_part_bytes }
    }

    /// Reads the `image`, `video` and `audio` parts of a multipart body.
    ///
    /// Other fields and repeated roles are drained and dropped. Each accepted
    /// part is checked as soon as its headers arrive, and its size while it
    /// streams in.
    pub async fn read_media(
        &self,
        mut payload: Multipart,
    ) -> Result<MediaSelection<UploadedFile>, UploadError> {
        let mut selection = MediaSelection::new();

        while let Some(mut field) = payload.try_next().await.map_err(UploadError::Multipart)? {
            let role = field.name().and_then(MediaRole::from_field_name);
            let role = match role {
                Some(role) if !selection.contains(role) => role,
                _ => {
                    log::debug!("Skipping multipart field {:?}", field.name());
                    while field.try_next().await.map_err(UploadError::Multipart)?.is_some() {}
                    continue;
                }
            };

            let filename = field
                .content_disposition()
                .and_then(|cd| cd.get_filename())
                .map(str::to_owned);
            let filename = validate_filename(filename.as_deref())?.to_owned();
            let content_type = field.content_type().map(|mime| mime.to_string());

            let mut bytes = Vec::new();
            while let Some(chunk) = field.try_next().await.map_err(UploadError::Multipart)? {
                if bytes.len() + chunk.len() > self.max_part_bytes {
                    log::warn!(
                        "{} part {:?} exceeds {} bytes",
                        role,
                        filename,
                        self.max_part_bytes
                    );
                    return Err(UploadError::TooLarge);
                }
                bytes.extend_from_slice(&chunk);
            }

            log::debug!("Accepted {} part {:?} ({} bytes)", role, filename, bytes.len());
            selection.set(
                role,
                Some(UploadedFile {
                    filename,
                    content_type,
                    bytes,
                }),
            );
        }

        Ok(selection)
    }
}

/// Rejects missing filenames and executable extensions.
pub fn validate_filename(filename: Option<&str>) -> Result<&str, UploadError> {
    let filename = match filename {
        Some(name) if !name.is_empty() => name,
        _ => return Err(UploadError::MissingFilename),
    };

    let lowered = filename.to_lowercase();
    if BLOCKED_EXTENSIONS.iter().any(|ext| lowered.ends_with(ext)) {
        log::warn!("Blocked file upload attempt: {}", filename);
        return Err(UploadError::BlockedExtension);
    }

    Ok(filename)
}
