//! Free-text question classification.
//!
//! A question routes to one or more recognized intents by substring
//! matching. The matcher is a pure function so routing can be tested
//! independently of answer formatting.

/// Recognized question intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Manglik / Mars dosha status.
    Manglik,
    /// Moon sign (rashi).
    MoonSign,
    /// Vimshottari dasha / current mahadasha.
    Dasha,
    /// No keyword matched: general chart summary.
    General,
}

/// Classify a free-text question into intents.
///
/// Matching is case-insensitive substring containment. A question can match
/// several intents; when nothing matches the result is `[General]`, so the
/// output is never empty.
pub fn classify_question(question: &str) -> Vec<Intent> {
    let q = question.to_lowercase();
    let mut intents = Vec::new();

    if q.contains("manglik") || q.contains("dosha") {
        intents.push(Intent::Manglik);
    }
    if q.contains("moon") {
        intents.push(Intent::MoonSign);
    }
    if q.contains("dasha") || q.contains("period") {
        intents.push(Intent::Dasha);
    }
    if intents.is_empty() {
        intents.push(Intent::General);
    }
    intents
}
