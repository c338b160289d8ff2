// src/quiz/loader.rs

use std::collections::BTreeSet;

use crate::models::question::{AnswerOption, Question, QuestionRow};

/// Turns raw question bank rows into quiz questions.
///
/// Only the first `limit` rows are considered. Rows without question text or
/// without a single non-empty option are dropped; option text is trimmed.
pub fn load_questions(rows: &[QuestionRow], limit: usize) -> Vec<Question> {
    let questions: Vec<Question> = rows.iter().take(limit).filter_map(normalize_row).collect();

    let skipped = rows.len().min(limit) - questions.len();
    if skipped > 0 {
        tracing::debug!("Skipped {} incomplete question rows", skipped);
    }

    questions
}

fn normalize_row(row: &QuestionRow) -> Option<Question> {
    let text = row.question.as_deref().map(str::trim).unwrap_or_default();
    if text.is_empty() {
        return None;
    }

    let options: Vec<AnswerOption> = row
        .option_cells()
        .into_iter()
        .map(|(key, cell)| AnswerOption {
            key: key.to_string(),
            text: cell.map(str::trim).unwrap_or_default().to_string(),
        })
        .collect();

    if options.iter().all(|opt| opt.text.is_empty()) {
        return None;
    }

    Some(Question {
        id: row.id,
        question: text.to_string(),
        options,
        correct: parse_answer_keys(row.correct.as_deref().unwrap_or_default()),
    })
}

/// Parses a comma-delimited answer cell ("A,C") into a key set.
pub fn parse_answer_keys(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(str::to_string)
        .collect()
}
