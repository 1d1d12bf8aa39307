//! Mapping between a [`Translation`] and the ordered query pairs carried on a
//! message URL.

use tracing::debug;

use crate::model::query::QueryItem;
use crate::model::translation::{Answer, Translation};

pub const QUESTION_QUERY_NAME: &str = "question";
pub const ANSWER_QUERY_NAME: &str = "answer";

pub fn question_query_item(translation: &Translation) -> Option<QueryItem> {
    let question = translation.question.as_ref()?;
    Some(QueryItem::new(QUESTION_QUERY_NAME, question.as_str()))
}

pub fn answer_query_item(translation: &Translation) -> Option<QueryItem> {
    let answer = translation.answer.as_ref()?;
    Some(QueryItem::new(ANSWER_QUERY_NAME, answer.raw_value()))
}

/// Question pair first, then answer pair. Absent fields emit nothing.
pub fn encode(translation: &Translation) -> Vec<QueryItem> {
    let items: Vec<QueryItem> = question_query_item(translation)
        .into_iter()
        .chain(answer_query_item(translation))
        .collect();

    debug!(count = items.len(), "encoded translation into query items");
    items
}

/// Never fails: valueless pairs and unrecognized names are skipped, and a
/// repeated name keeps its last value.
pub fn decode(items: &[QueryItem]) -> Translation {
    let mut question: Option<String> = None;
    let mut answer: Option<Answer> = None;

    for item in items {
        let Some(value) = item.value.as_deref() else {
            debug!(name = %item.name, "skipping valueless query item");
            continue;
        };

        match item.name.as_str() {
            QUESTION_QUERY_NAME => question = Some(value.to_string()),
            ANSWER_QUERY_NAME => answer = Some(Answer::from_raw(value)),
            _ => {}
        }
    }

    Translation { question, answer }
}
