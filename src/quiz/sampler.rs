// src/quiz/sampler.rs

use rand::Rng;
use rand::seq::SliceRandom;

use crate::models::question::{PublicQuestion, Question};

/// Picks `min(count, bank.len())` distinct questions in random order.
pub fn sample_questions<R: Rng + ?Sized>(bank: &[Question], count: usize, rng: &mut R) -> Vec<Question> {
    let mut picked: Vec<&Question> = bank.iter().collect();
    picked.shuffle(rng);
    picked.truncate(count);
    picked.into_iter().cloned().collect()
}

/// Strips the answer key and shuffles the non-empty options.
pub fn present_question<R: Rng + ?Sized>(question: &Question, number: usize, rng: &mut R) -> PublicQuestion {
    let mut options: Vec<_> = question
        .options
        .iter()
        .filter(|opt| !opt.text.is_empty())
        .cloned()
        .collect();
    options.shuffle(rng);

    PublicQuestion {
        id: question.id,
        number,
        question: question.question.clone(),
        options,
    }
}

/// Samples a quiz and renders it for the client, numbering from 1.
///
/// Uses the thread-local generator, so call it outside of any `.await`.
pub fn build_quiz(bank: &[Question], count: usize) -> Vec<PublicQuestion> {
    let mut rng = rand::rng();
    sample_questions(bank, count, &mut rng)
        .iter()
        .enumerate()
        .map(|(i, q)| present_question(q, i + 1, &mut rng))
        .collect()
}
