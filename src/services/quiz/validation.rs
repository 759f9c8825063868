//! Parsing and validation of model output

use super::types::{Quiz, QuizQuestion, OPTION_COUNT, QUESTION_COUNT};
use crate::errors::{GatewayError, GatewayResult};
use serde_json::{Map, Value};
use std::collections::HashSet;

const REQUIRED_FIELDS: [&str; 4] = ["id", "question", "options", "correctAnswer"];

/// Returns the slice from the first `{` to the last `}`, or all of `raw`
/// when there is no such pair.
pub fn locate_json_candidate(raw: &str) -> &str {
    match (raw.find('{'), raw.rfind('}')) {
        (Some(start), Some(end)) if start < end => &raw[start..=end],
        _ => raw,
    }
}

/// Parses raw model output into a validated [`Quiz`].
///
/// Checks stop at the first failure; the error message names it.
pub fn parse_quiz(raw: &str) -> GatewayResult<Quiz> {
    let candidate = locate_json_candidate(raw);
    let value: Value =
        serde_json::from_str(candidate).map_err(|e| invalid(format!("invalid JSON: {}", e)))?;

    let questions = value
        .as_object()
        .and_then(|root| root.get("questions"))
        .ok_or_else(|| invalid("expected an object with a \"questions\" field"))?
        .as_array()
        .ok_or_else(|| invalid("\"questions\" is not a list"))?;

    if questions.len() != QUESTION_COUNT {
        return Err(invalid(format!(
            "wrong number of questions: expected {}, got {}",
            QUESTION_COUNT,
            questions.len()
        )));
    }

    let mut seen_ids = HashSet::with_capacity(QUESTION_COUNT);
    let parsed = questions
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let question = parse_question(index + 1, entry)?;
            if !seen_ids.insert(question.id()) {
                return Err(invalid(format!("duplicate question id {}", question.id())));
            }
            Ok(question)
        })
        .collect::<GatewayResult<Vec<_>>>()?;

    Ok(Quiz::new(parsed))
}

fn parse_question(position: usize, entry: &Value) -> GatewayResult<QuizQuestion> {
    let fields = entry
        .as_object()
        .ok_or_else(|| invalid(format!("question at position {} is not an object", position)))?;

    if let Some(missing) = REQUIRED_FIELDS.iter().find(|f| !fields.contains_key(**f)) {
        return Err(invalid(format!(
            "question at position {} is missing \"{}\"",
            position, missing
        )));
    }

    let id = parse_id(position, fields)?;

    let question = fields["question"]
        .as_str()
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| invalid(format!("question {} has no question text", id)))?;

    let options = fields["options"]
        .as_array()
        .ok_or_else(|| invalid(format!("options for question {} are not a list", id)))?;
    if options.len() != OPTION_COUNT {
        return Err(invalid(format!(
            "wrong number of options for question {}: expected {}, got {}",
            id,
            OPTION_COUNT,
            options.len()
        )));
    }
    let options = options
        .iter()
        .map(|option| {
            option
                .as_str()
                .filter(|text| !text.trim().is_empty())
                .map(String::from)
                .ok_or_else(|| invalid(format!("question {} has a non-string or empty option", id)))
        })
        .collect::<GatewayResult<Vec<_>>>()?;

    let correct_answer = fields["correctAnswer"]
        .as_str()
        .ok_or_else(|| invalid(format!("correct answer for question {} is not a string", id)))?;
    if !options.iter().any(|option| option == correct_answer) {
        return Err(invalid(format!(
            "correct answer for question {} is not one of its options",
            id
        )));
    }

    let options: [String; OPTION_COUNT] = options
        .try_into()
        .map_err(|_| invalid(format!("wrong number of options for question {}", id)))?;

    Ok(QuizQuestion::new(
        id,
        question.to_string(),
        options,
        correct_answer.to_string(),
    ))
}

fn parse_id(position: usize, fields: &Map<String, Value>) -> GatewayResult<u32> {
    fields["id"]
        .as_u64()
        .filter(|id| (1..=QUESTION_COUNT as u64).contains(id))
        .map(|id| id as u32)
        .ok_or_else(|| {
            invalid(format!(
                "question at position {} has id {}, expected an integer from 1 to {}",
                position, fields["id"], QUESTION_COUNT
            ))
        })
}

fn invalid(message: impl Into<String>) -> GatewayError {
    GatewayError::QuizFormat {
        message: message.into(),
    }
}
