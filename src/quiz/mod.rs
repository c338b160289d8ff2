// src/quiz/mod.rs

//! Quiz rules, free of any I/O: loading rows into questions, sampling a quiz,
//! scoring it, the daily quota and the leaderboard.

pub mod leaderboard;
pub mod loader;
pub mod quota;
pub mod sampler;
pub mod scorer;
pub mod username;
