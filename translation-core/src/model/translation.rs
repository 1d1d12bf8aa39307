use serde::{Deserialize, Serialize};

/// State of a translation's answer.
///
/// The empty string is reserved as the raw value of `Unknown`, so
/// `Known("")` cannot survive a trip through the raw form.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    Known(String),
    Unknown,
}

impl Answer {
    pub fn from_raw(raw: &str) -> Self {
        if raw.is_empty() {
            Answer::Unknown
        } else {
            Answer::Known(raw.to_string())
        }
    }

    pub fn raw_value(&self) -> &str {
        match self {
            Answer::Known(text) => text,
            Answer::Unknown => "",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq, Hash)]
pub struct Translation {
    #[serde(default)]
    pub question: Option<String>,

    #[serde(default)]
    pub answer: Option<Answer>,
}

impl Translation {
    pub fn new(question: impl Into<String>, answer: Answer) -> Self {
        Self {
            question: Some(question.into()),
            answer: Some(answer),
        }
    }

    /// A translation is complete once both fields are present, whether or not
    /// the answer is known yet.
    pub fn is_complete(&self) -> bool {
        self.question.is_some() && self.answer.is_some()
    }
}
