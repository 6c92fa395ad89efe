use serde::Serialize;

/// One PSS-10 item: the prompt shown to the respondent plus whether the raw
/// answer is inverted before summation. Reverse-scored items are the
/// positively worded ones, where a high raw answer indicates low stress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    /// 1-based position in the instrument; stable across releases.
    pub id: u8,
    pub text: &'static str,
    pub is_reverse: bool,
}

/// The PSS-10 instrument always has exactly ten items.
pub const QUESTION_COUNT: usize = 10;

// Item order, wording, and the reverse-scored set {4, 5, 7, 8} are fixed by
// the published instrument, not configuration.
const QUESTIONS: [Question; QUESTION_COUNT] = [
    Question {
        id: 1,
        text: "In the last month, how often have you been upset because of something that happened unexpectedly?",
        is_reverse: false,
    },
    Question {
        id: 2,
        text: "In the last month, how often have you felt that you were unable to control the important things in your life?",
        is_reverse: false,
    },
    Question {
        id: 3,
        text: "In the last month, how often have you felt nervous and stressed?",
        is_reverse: false,
    },
    Question {
        id: 4,
        text: "In the last month, how often have you felt confident about your ability to handle your personal problems?",
        is_reverse: true,
    },
    Question {
        id: 5,
        text: "In the last month, how often have you felt that things were going your way?",
        is_reverse: true,
    },
    Question {
        id: 6,
        text: "In the last month, how often have you found that you could not cope with all the things that you had to do?",
        is_reverse: false,
    },
    Question {
        id: 7,
        text: "In the last month, how often have you been able to control irritations in your life?",
        is_reverse: true,
    },
    Question {
        id: 8,
        text: "In the last month, how often have you felt that you were on top of things?",
        is_reverse: true,
    },
    Question {
        id: 9,
        text: "In the last month, how often have you been angered because of things that happened that were outside of your control?",
        is_reverse: false,
    },
    Question {
        id: 10,
        text: "In the last month, how often have you felt difficulties were piling up so high that you could not overcome them?",
        is_reverse: false,
    },
];

const SCALE_LABELS: [&str; 5] = [
    "Never",
    "Almost Never",
    "Sometimes",
    "Fairly Often",
    "Very Often",
];

/// The fixed, ordered item list. Display order doubles as the scoring index.
pub fn questions() -> &'static [Question; QUESTION_COUNT] {
    &QUESTIONS
}

/// Human-readable labels for the answer values 0..=4, in value order.
pub fn scale_labels() -> &'static [&'static str; 5] {
    &SCALE_LABELS
}
