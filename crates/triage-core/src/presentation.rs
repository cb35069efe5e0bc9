//! Sentiment label → presentation tone mapping.

/// Presentation tone derived from a sentiment label.
///
/// Derivation is a case-sensitive substring test against the literal label,
/// checked Positive first, then Negative; everything else (including
/// `"Unknown"`) is Neutral. Total over all label strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
}

impl Tone {
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label.contains("Positive") {
            Tone::Positive
        } else if label.contains("Negative") {
            Tone::Negative
        } else {
            Tone::Neutral
        }
    }

    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            Tone::Positive => "🟢",
            Tone::Negative => "🔴",
            Tone::Neutral => "🟡",
        }
    }

    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Tone::Positive => "green",
            Tone::Negative => "red",
            Tone::Neutral => "#D4AF37",
        }
    }
}
