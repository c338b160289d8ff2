// src/quiz/scorer.rs

use std::collections::{BTreeSet, HashMap};

use crate::models::question::Question;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuizScore {
    pub score: usize,
    pub total: usize,
    /// score / total * 100, rounded to two decimals.
    pub percentage: f64,
}

/// Exact set match: every correct key selected and nothing else.
/// Order and repeated keys are irrelevant.
pub fn is_correct(selected: &[String], correct: &BTreeSet<String>) -> bool {
    let selected: BTreeSet<&str> = selected.iter().map(|key| key.trim()).collect();
    let correct: BTreeSet<&str> = correct.iter().map(String::as_str).collect();
    selected == correct
}

/// Ids of quiz questions with no selection at all.
pub fn unanswered(questions: &[Question], answers: &HashMap<i64, Vec<String>>) -> Vec<i64> {
    questions
        .iter()
        .filter(|q| answers.get(&q.id).is_none_or(|sel| sel.is_empty()))
        .map(|q| q.id)
        .collect()
}

/// Ids of quiz questions whose selection names a key that is not one of the
/// question's non-empty options.
pub fn invalid_selections(questions: &[Question], answers: &HashMap<i64, Vec<String>>) -> Vec<i64> {
    questions
        .iter()
        .filter(|q| {
            answers.get(&q.id).is_some_and(|sel| {
                sel.iter().any(|key| {
                    !q.options
                        .iter()
                        .any(|opt| !opt.text.is_empty() && opt.key == key.trim())
                })
            })
        })
        .map(|q| q.id)
        .collect()
}

/// Scores the answers for `questions`. Answers to other ids are ignored.
pub fn calculate_score(questions: &[Question], answers: &HashMap<i64, Vec<String>>) -> QuizScore {
    let total = questions.len();
    let score = questions
        .iter()
        .filter(|q| answers.get(&q.id).is_some_and(|sel| is_correct(sel, &q.correct)))
        .count();

    let percentage = if total == 0 {
        0.0
    } else {
        round2(score as f64 / total as f64 * 100.0)
    };

    QuizScore { score, total, percentage }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
