// src/quiz/leaderboard.rs

use std::collections::BTreeMap;

use crate::{
    models::{leaderboard::LeaderboardEntry, result::ResultRecord},
    quiz::{scorer::round2, username::format_username},
};

#[derive(Default)]
struct Tally {
    sum: f64,
    count: usize,
    best: f64,
}

/// Groups results by email and ranks users by mean percentage, best first.
/// Equal means are ordered by email.
pub fn build_leaderboard(results: &[ResultRecord]) -> Vec<LeaderboardEntry> {
    let mut tallies: BTreeMap<&str, Tally> = BTreeMap::new();
    for record in results {
        let tally = tallies.entry(record.email.as_str()).or_default();
        tally.best = if tally.count == 0 {
            record.percentage
        } else {
            tally.best.max(record.percentage)
        };
        tally.sum += record.percentage;
        tally.count += 1;
    }

    // Ranked on the exact mean; rounding is for display only.
    let mut ranked: Vec<(f64, &str, Tally)> = tallies
        .into_iter()
        .map(|(email, tally)| (tally.sum / tally.count as f64, email, tally))
        .collect();

    // BTreeMap already yields emails in order; a stable sort keeps that for ties.
    ranked.sort_by(|a, b| b.0.total_cmp(&a.0));

    ranked
        .into_iter()
        .enumerate()
        .map(|(i, (mean, email, tally))| LeaderboardEntry {
            rank: i + 1,
            email: email.to_string(),
            username: format_username(email),
            avg_score: round2(mean),
            quizzes: tally.count,
            best_score: tally.best,
        })
        .collect()
}

/// 1-based rank of `email`, if the user has any recorded result.
pub fn rank_of(board: &[LeaderboardEntry], email: &str) -> Option<usize> {
    board.iter().find(|e| e.email == email).map(|e| e.rank)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(email: &str, percentage: f64) -> ResultRecord {
        ResultRecord {
            email: email.to_string(),
            score: 0,
            total: 20,
            percentage,
            date: "2024-05-01 12:00:00".to_string(),
            quiz_id: None,
        }
    }

    #[test]
    fn test_aggregates_mean_count_and_best() {
        let results = vec![
            record("ana@drivesales.com", 50.0),
            record("bo.k@drivesales.com", 90.0),
            record("ana@drivesales.com", 100.0),
            record("ana@drivesales.com", 60.0),
        ];
        let board = build_leaderboard(&results);

        assert_eq!(board.len(), 2);
        assert_eq!(board[0].username, "Bo K.");
        assert_eq!(board[0].avg_score, 90.0);
        assert_eq!(board[0].quizzes, 1);
        assert_eq!(board[0].rank, 1);

        assert_eq!(board[1].username, "Ana");
        assert_eq!(board[1].avg_score, 70.0);
        assert_eq!(board[1].quizzes, 3);
        assert_eq!(board[1].best_score, 100.0);
        assert_eq!(board[1].rank, 2);
    }

    #[test]
    fn test_mean_is_rounded() {
        let results = vec![
            record("ana@drivesales.com", 10.0),
            record("ana@drivesales.com", 10.0),
            record("ana@drivesales.com", 15.0),
        ];
        assert_eq!(build_leaderboard(&results)[0].avg_score, 11.67);
    }

    #[test]
    fn test_ties_ordered_by_email() {
        let results = vec![record("zed@drivesales.com", 80.0), record("amy@drivesales.com", 80.0)];
        let board = build_leaderboard(&results);
        assert_eq!(board[0].email, "amy@drivesales.com");
        assert_eq!(board[1].email, "zed@drivesales.com");
    }

    #[test]
    fn test_ranks_on_unrounded_mean() {
        // amy averages 10.0066.., zed 10.01; both display as 10.01
        let results = vec![
            record("amy@drivesales.com", 10.0),
            record("amy@drivesales.com", 10.01),
            record("amy@drivesales.com", 10.01),
            record("zed@drivesales.com", 10.01),
        ];
        let board = build_leaderboard(&results);
        assert_eq!(board[0].email, "zed@drivesales.com");
        assert_eq!(board[1].email, "amy@drivesales.com");
        assert_eq!(board[0].avg_score, board[1].avg_score);
    }

    #[test]
    fn test_rank_of() {
        let results = vec![record("a@drivesales.com", 10.0), record("b@drivesales.com", 20.0)];
        let board = build_leaderboard(&results);
        assert_eq!(rank_of(&board, "b@drivesales.com"), Some(1));
        assert_eq!(rank_of(&board, "a@drivesales.com"), Some(2));
        assert_eq!(rank_of(&board, "c@drivesales.com"), None);
    }

    #[test]
    fn test_empty_results() {
        assert!(build_leaderboard(&[]).is_empty());
    }
}
