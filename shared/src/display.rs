use crate::response::AnalysisReport;

/// Text for every output region of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultDisplay {
    pub vision: String,
    pub temporal: String,
    pub audio: String,
    pub metadata: String,
    pub deepfake: String,
    pub classification: String,
    pub risk_level: String,
    pub confidence: String,
    pub explainability: String,
}

impl ResultDisplay {
    pub fn render(report: &AnalysisReport) -> Self {
        let result = &report.result;
        let components = &result.components;

        Self {
            vision: score(components.vision_score),
            temporal: score(components.temporal_score),
            audio: score(components.audio_score),
            metadata: score(components.metadata_score),
            deepfake: format!("Deepfake Score: {}", to_fixed(result.deepfake_score, 2)),
            classification: format!("Classification: {}", result.classification),
            risk_level: format!("Risk Level: {}", result.risk_level),
            confidence: format!("Confidence: {}%", to_fixed(result.confidence * 100.0, 1)),
            explainability: serde_json::to_string_pretty(&report.raw)
                .unwrap_or_else(|_| report.raw.to_string()),
        }
    }

    /// Placeholder text shown before the first analysis completes.
    pub fn pending() -> Self {
        Self {
            vision: "Score: --".to_string(),
            temporal: "Score: --".to_string(),
            audio: "Score: --".to_string(),
            metadata: "Score: --".to_string(),
            deepfake: "Deepfake Score: --".to_string(),
            classification: "Classification: --".to_string(),
            risk_level: "Risk Level: --".to_string(),
            confidence: "Confidence: --".to_string(),
            explainability: String::new(),
        }
    }

    /// The four per-modality score rows, labelled.
    pub fn component_rows(&self) -> [(&'static str, &str); 4] {
        [
            ("Vision", self.vision.as_str()),
            ("Temporal", self.temporal.as_str()),
            ("Audio", self.audio.as_str()),
            ("Metadata", self.metadata.as_str()),
        ]
    }
}

fn score(value: f64) -> String {
    format!("Score: {}", to_fixed(value, 2))
}

/// Formats `value` with `digits` decimals, breaking exact ties away from zero.
///
/// `{:.N}` already rounds every other value to the nearest decimal; only a
/// value sitting exactly halfway between two candidates needs correcting,
/// since the formatter sends those to the even digit.
fn to_fixed(value: f64, digits: usize) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    let rounded = format!("{:.*}", digits, value);
    if !value.is_finite() {
        return rounded;
    }

    // A tie needs a terminating expansion of at most digits + 1 places, which
    // in binary means no more than digits + 1 fractional bits.
    let scaled = value * 2f64.powi(digits as i32 + 1);
    if !scaled.is_finite() || scaled.fract() != 0.0 {
        return rounded;
    }

    let exact = format!("{:.*}", digits + 1, value);
    match exact.strip_suffix('5') {
        Some(truncated) => round_up_magnitude(truncated.trim_end_matches('.')),
        None => rounded,
    }
}

/// Adds one unit in the last place to a decimal string, ignoring its sign.
fn round_up_magnitude(truncated: &str) -> String {
    let mut bytes = truncated.as_bytes().to_vec();
    for i in (0..bytes.len()).rev() {
        match bytes[i] {
            b'9' => bytes[i] = b'0',
            b'0'..=b'8' => {
                bytes[i] += 1;
                return String::from_utf8_lossy(&bytes).into_owned();
            }
            _ => {}
        }
    }

    let sign = usize::from(bytes.first() == Some(&b'-'));
    bytes.insert(sign, b'1');
    String::from_utf8_lossy(&bytes).into_owned()
}
