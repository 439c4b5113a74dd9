use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, IntoStaticStr};

use crate::error::AnalyzeError;

/// The three media slots an analysis request can carry.
///
/// The lowercase variant name doubles as the multipart field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum MediaRole {
    Image,
    Video,
    Audio,
}

impl MediaRole {
    pub fn field_name(self) -> &'static str {
        self.into()
    }

    pub fn from_field_name(name: &str) -> Option<Self> {
        MediaRole::iter().find(|role| role.field_name() == name)
    }

    /// Value for the `accept` attribute of a file picker.
    pub fn accept(self) -> &'static str {
        match self {
            MediaRole::Image => "image/*",
            MediaRole::Video => "video/*",
            MediaRole::Audio => "audio/*",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MediaRole::Image => "Image",
            MediaRole::Video => "Video",
            MediaRole::Audio => "Audio",
        }
    }
}

/// Up to one file per role, as picked by the user.
///
/// `F` is whatever the caller uses to represent a file: a browser file handle
/// in the dashboard, buffered bytes in the gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaSelection<F> {
    image: Option<F>,
    video: Option<F>,
    audio: Option<F>,
}

impl<F> Default for MediaSelection<F> {
    fn default() -> Self {
        Self {
            image: None,
            video: None,
            audio: None,
        }
    }
}

impl<F> MediaSelection<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, role: MediaRole, file: F) -> Self {
        self.set(role, Some(file));
        self
    }

    /// Replaces the file for `role`, returning the previous one.
    pub fn set(&mut self, role: MediaRole, file: Option<F>) -> Option<F> {
        std::mem::replace(self.slot_mut(role), file)
    }

    pub fn get(&self, role: MediaRole) -> Option<&F> {
        match role {
            MediaRole::Image => self.image.as_ref(),
            MediaRole::Video => self.video.as_ref(),
            MediaRole::Audio => self.audio.as_ref(),
        }
    }

    pub fn contains(&self, role: MediaRole) -> bool {
        self.get(role).is_some()
    }

    /// Turns the selection into a request body plan.
    ///
    /// Fails with [`AnalyzeError::NoMedia`] when no role has a file, so an
    /// empty request can never be built.
    pub fn into_form(self) -> Result<UploadForm<F>, AnalyzeError> {
        let Self {
            image,
            video,
            audio,
        } = self;

        let parts: Vec<UploadPart<F>> = [
            (MediaRole::Image, image),
            (MediaRole::Video, video),
            (MediaRole::Audio, audio),
        ]
        .into_iter()
        .filter_map(|(role, file)| file.map(|file| UploadPart { role, file }))
        .collect();

        if parts.is_empty() {
            return Err(AnalyzeError::NoMedia);
        }

        log::debug!(
            "built upload form with {} part(s): {:?}",
            parts.len(),
            parts.iter().map(|part| part.role).collect::<Vec<_>>()
        );
        Ok(UploadForm { parts })
    }

    pub fn to_form(&self) -> Result<UploadForm<F>, AnalyzeError>
    where
        F: Clone,
    {
        self.clone().into_form()
    }

    fn slot_mut(&mut self, role: MediaRole) -> &mut Option<F> {
        match role {
            MediaRole::Image => &mut self.image,
            MediaRole::Video => &mut self.video,
            MediaRole::Audio => &mut self.audio,
        }
    }
}

/// One named part of the multipart body.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadPart<F> {
    pub role: MediaRole,
    pub file: F,
}

/// A non-empty set of parts, ordered image, video, audio.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadForm<F> {
    parts: Vec<UploadPart<F>>,
}

impl<F> UploadForm<F> {
    pub fn parts(&self) -> &[UploadPart<F>] {
        &self.parts
    }

    pub fn into_parts(self) -> Vec<UploadPart<F>> {
        self.parts
    }

    pub fn roles(&self) -> Vec<MediaRole> {
        self.parts.iter().map(|part| part.role).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection_from_mask(mask: u8) -> MediaSelection<&'static str> {
        let mut selection = MediaSelection::new();
        if mask & 0b001 != 0 {
            selection.set(MediaRole::Image, Some("face.png"));
        }
        if mask & 0b010 != 0 {
            selection.set(MediaRole::Video, Some("clip.mp4"));
        }
        if mask & 0b100 != 0 {
            selection.set(MediaRole::Audio, Some("voice.wav"));
        }
        selection
    }

    #[test]
    fn form_is_refused_only_when_every_role_is_empty() {
        for mask in 0u8..8 {
            let result = selection_from_mask(mask).into_form();
            if mask == 0 {
                assert_eq!(result, Err(AnalyzeError::NoMedia));
            } else {
                assert!(result.is_ok(), "mask {mask:03b} should build a form");
            }
        }
    }

    #[test]
    fn form_contains_exactly_the_selected_roles_in_order() {
        for mask in 1u8..8 {
            let selection = selection_from_mask(mask);
            let expected: Vec<MediaRole> = MediaRole::iter()
                .filter(|role| selection.contains(*role))
                .collect();
            let form = selection.into_form().expect("non-empty selection");
            assert_eq!(form.roles(), expected);
            assert_eq!(form.parts().len(), mask.count_ones() as usize);
        }

        let form = MediaSelection::new()
            .with(MediaRole::Audio, "voice.wav")
            .with(MediaRole::Image, "face.png")
            .into_form()
            .unwrap();
        assert_eq!(form.roles(), vec![MediaRole::Image, MediaRole::Audio]);
    }

    #[test]
    fn set_replaces_and_clears_a_slot() {
        let mut selection = MediaSelection::new().with(MediaRole::Video, "a.mp4");
        assert_eq!(selection.set(MediaRole::Video, Some("b.mp4")), Some("a.mp4"));
        assert_eq!(selection.get(MediaRole::Video), Some(&"b.mp4"));
        assert_eq!(selection.set(MediaRole::Video, None), Some("b.mp4"));
        assert!(MediaRole::iter().all(|role| !selection.contains(role)));
    }

    #[test]
    fn field_names_round_trip() {
        for role in MediaRole::iter() {
            assert_eq!(MediaRole::from_field_name(role.field_name()), Some(role));
            assert_eq!(role.to_string(), role.field_name());
        }
        assert_eq!(MediaRole::from_field_name("Image"), None);
        assert_eq!(MediaRole::from_field_name("file"), None);
    }
}
