//! End-to-end tests of the submit flow against a recording transport.

mod common;

use common::{FakeFile, IMAGE_ONLY_SUCCESS, RecordingTransport};
use deepfake_shared::{
    AnalysisPhase, AnalysisReport, AnalyzeError, MediaRole, MediaSelection, ResultDisplay, submit,
};
use futures::executor::block_on;
use std::future::Future;

fn selection(image: bool, video: bool, audio: bool) -> MediaSelection<FakeFile> {
    let mut selection = MediaSelection::new();
    if image {
        selection.set(MediaRole::Image, Some(FakeFile::named("face.png")));
    }
    if video {
        selection.set(MediaRole::Video, Some(FakeFile::named("clip.mp4")));
    }
    if audio {
        selection.set(MediaRole::Audio, Some(FakeFile::named("voice.wav")));
    }
    selection
}

/// Mirrors the analyze button: claim the phase, then start a submission.
fn trigger<'a>(
    phase: &mut AnalysisPhase,
    transport: &'a RecordingTransport,
    selection: &'a MediaSelection<FakeFile>,
) -> Result<impl Future<Output = Result<AnalysisReport, AnalyzeError>> + use<'a>, AnalyzeError> {
    phase.begin()?;
    Ok(submit(transport, selection))
}

#[test]
fn request_is_sent_iff_a_file_is_selected() {
    for mask in 0u8..8 {
        let (image, video, audio) = (mask & 1 != 0, mask & 2 != 0, mask & 4 != 0);
        let transport = RecordingTransport::replying(200, IMAGE_ONLY_SUCCESS);
        let outcome = block_on(submit(&transport, &selection(image, video, audio)));

        if mask == 0 {
            assert_eq!(outcome, Err(AnalyzeError::NoMedia));
            assert_eq!(transport.request_count(), 0);
        } else {
            assert!(outcome.is_ok(), "mask {mask:03b}");
            assert_eq!(transport.request_count(), 1);
        }
    }
}

#[test]
fn request_carries_only_the_selected_parts() {
    for mask in 1u8..8 {
        let (image, video, audio) = (mask & 1 != 0, mask & 2 != 0, mask & 4 != 0);
        let transport = RecordingTransport::replying(200, IMAGE_ONLY_SUCCESS);
        block_on(submit(&transport, &selection(image, video, audio))).unwrap();

        let roles: Vec<MediaRole> = transport.sent()[0].iter().map(|(role, _)| *role).collect();
        let expected: Vec<MediaRole> = [
            (image, MediaRole::Image),
            (video, MediaRole::Video),
            (audio, MediaRole::Audio),
        ]
        .into_iter()
        .filter_map(|(present, role)| present.then_some(role))
        .collect();
        assert_eq!(roles, expected);
    }
}

#[test]
fn image_only_upload_renders_every_region() {
    let transport = RecordingTransport::replying(200, IMAGE_ONLY_SUCCESS);
    let report = block_on(submit(&transport, &selection(true, false, false))).unwrap();
    let display = ResultDisplay::render(&report);

    assert_eq!(
        transport.sent(),
        vec![vec![(MediaRole::Image, "face.png".to_string())]]
    );
    assert_eq!(display.vision, "Score: 0.91");
    assert_eq!(display.temporal, "Score: 0.00");
    assert_eq!(display.audio, "Score: 0.00");
    assert_eq!(display.metadata, "Score: 0.50");
    assert_eq!(display.deepfake, "Deepfake Score: 0.20");
    assert_eq!(display.classification, "Classification: authentic");
    assert_eq!(display.risk_level, "Risk Level: low");
    assert_eq!(display.confidence, "Confidence: 95.0%");
    assert!(display.explainability.starts_with("{\n  \"components\": {"));
}

#[test]
fn server_detail_becomes_the_notification() {
    let transport = RecordingTransport::replying(400, r#"{"detail": "unsupported format"}"#);
    let err = block_on(submit(&transport, &selection(false, true, false))).unwrap_err();
    assert_eq!(err.user_message(), "Analysis failed: unsupported format");
}

#[test]
fn empty_selection_shows_validation_message_without_requests() {
    let transport = RecordingTransport::replying(200, IMAGE_ONLY_SUCCESS);
    let err = block_on(submit(&transport, &MediaSelection::new())).unwrap_err();
    assert_eq!(err.user_message(), "Please upload at least one media file.");
    assert_eq!(transport.request_count(), 0);
}

#[test]
fn network_failure_is_reported_to_the_user() {
    let transport = RecordingTransport::unreachable();
    let err = block_on(submit(&transport, &selection(false, false, true))).unwrap_err();
    assert_eq!(err, AnalyzeError::Transport("connection refused".into()));
    assert_eq!(
        err.user_message(),
        "Analysis failed: could not reach the analysis service (connection refused)"
    );
}

#[test]
fn success_without_expected_fields_is_reported_to_the_user() {
    let transport = RecordingTransport::replying(200, r#"{"deepfake_score":0.3}"#);
    let err = block_on(submit(&transport, &selection(true, false, false))).unwrap_err();
    assert!(matches!(err, AnalyzeError::MalformedResponse(_)));
    assert_eq!(
        err.user_message(),
        "Analysis failed: unexpected response from the analysis service"
    );
}

#[test]
fn in_flight_phase_rejects_a_second_trigger() {
    let mut phase = AnalysisPhase::default();
    phase.begin().unwrap();

    let err = phase.begin().unwrap_err();
    assert!(err.is_local());
    assert_eq!(err.user_message(), "An analysis is already in progress.");

    phase.finish();
    assert!(phase.begin().is_ok());
}

#[test]
fn trigger_during_an_outstanding_request_sends_nothing() {
    let transport = RecordingTransport::replying(200, IMAGE_ONLY_SUCCESS);
    let picked = selection(true, false, true);
    let mut phase = AnalysisPhase::default();

    let first = trigger(&mut phase, &transport, &picked).expect("idle phase accepts");
    let second = trigger(&mut phase, &transport, &picked);
    assert!(matches!(second, Err(AnalyzeError::Busy)));

    assert!(block_on(first).is_ok());
    phase.finish();
    assert_eq!(transport.request_count(), 1);

    let again = trigger(&mut phase, &transport, &picked).expect("finished phase accepts");
    assert!(block_on(again).is_ok());
    phase.finish();
    assert_eq!(transport.request_count(), 2);
}
