// src/models/mod.rs

pub mod leaderboard;
pub mod question;
pub mod result;
pub mod user;
