use serde::{Deserialize, Serialize};

use super::catalog::{questions, QUESTION_COUNT};

/// Highest raw answer on the 0..=4 response scale.
pub const MAX_ANSWER: u8 = 4;

/// Highest reachable total across all ten items.
pub const MAX_SCORE: u8 = MAX_ANSWER * QUESTION_COUNT as u8;

/// Errors raised while recording answers or computing a score.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    #[error("answer value {value} is outside the 0..=4 response scale")]
    OutOfRange { value: u8 },
    #[error("question {question} has not been answered")]
    Unanswered { question: u8 },
}

/// A single validated answer on the 0..=4 scale.
///
/// Construction is the only way in, so a stored or deserialized value is
/// always within range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct AnswerValue(u8);

impl AnswerValue {
    pub fn new(raw: u8) -> Result<Self, ScoringError> {
        if raw > MAX_ANSWER {
            return Err(ScoringError::OutOfRange { value: raw });
        }
        Ok(Self(raw))
    }

    pub fn raw(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for AnswerValue {
    type Error = ScoringError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<AnswerValue> for u8 {
    fn from(value: AnswerValue) -> Self {
        value.0
    }
}

/// Ten answer slots positionally aligned with the question catalog.
///
/// `None` marks a question the respondent has not answered yet; scoring
/// refuses incomplete sheets instead of producing a garbage total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSheet([Option<AnswerValue>; QUESTION_COUNT]);

impl AnswerSheet {
    /// A sheet with every question still unanswered.
    pub fn empty() -> Self {
        Self([None; QUESTION_COUNT])
    }

    /// Build a fully answered sheet from raw scale values.
    pub fn from_values(values: [u8; QUESTION_COUNT]) -> Result<Self, ScoringError> {
        let mut slots = [None; QUESTION_COUNT];
        for (slot, raw) in slots.iter_mut().zip(values) {
            *slot = Some(AnswerValue::new(raw)?);
        }
        Ok(Self(slots))
    }

    /// Record the answer for the question at `index` (0-based).
    pub fn record(&mut self, index: usize, value: AnswerValue) {
        if let Some(slot) = self.0.get_mut(index) {
            *slot = Some(value);
        }
    }

    pub fn slots(&self) -> &[Option<AnswerValue>; QUESTION_COUNT] {
        &self.0
    }

    pub fn is_complete(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }
}

impl Default for AnswerSheet {
    fn default() -> Self {
        Self::empty()
    }
}

/// Sum the sheet against the catalog: reverse-scored items contribute
/// `4 - answer`, everything else contributes the answer as given.
///
/// Fails on the first unanswered slot; a complete sheet always lands in
/// `0..=MAX_SCORE`.
pub fn calculate_score(answers: &AnswerSheet) -> Result<u8, ScoringError> {
    let catalog = questions();
    let mut total = 0u8;

    for (question, slot) in catalog.iter().zip(answers.slots()) {
        let value = slot.ok_or(ScoringError::Unanswered {
            question: question.id,
        })?;
        total += if question.is_reverse {
            MAX_ANSWER - value.raw()
        } else {
            value.raw()
        };
    }

    Ok(total)
}

/// Stress band for a total score. Band edges are inclusive on the lower
/// bound: 0..=13 low, 14..=26 medium, 27..=40 high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StressCategory {
    Low,
    Medium,
    High,
}

impl StressCategory {
    pub fn from_score(score: u8) -> Self {
        if score <= 13 {
            StressCategory::Low
        } else if score <= 26 {
            StressCategory::Medium
        } else {
            StressCategory::High
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            StressCategory::Low => "Low",
            StressCategory::Medium => "Medium",
            StressCategory::High => "High",
        }
    }

    /// Presentation tag for the excluded UI layer.
    pub const fn color(self) -> &'static str {
        match self {
            StressCategory::Low => "green",
            StressCategory::Medium => "yellow",
            StressCategory::High => "red",
        }
    }
}

impl std::fmt::Display for StressCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Color tag for a stored category label. Records written by older builds
/// may carry labels we no longer produce; those render neutral.
pub fn category_color(label: &str) -> &'static str {
    match label {
        "Low" => StressCategory::Low.color(),
        "Medium" => StressCategory::Medium.color(),
        "High" => StressCategory::High.color(),
        _ => "gray",
    }
}
