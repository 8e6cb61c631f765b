pub mod auth;
pub mod common;
pub mod form_check;
pub mod gym;
pub mod leaderboard;
pub mod pain_log;
pub mod pr;
pub mod workout;
