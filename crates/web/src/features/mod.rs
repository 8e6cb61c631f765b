pub mod alerts;
pub mod auth;
pub mod form_checks;
pub mod gyms;
pub mod maps;
pub mod pain_logs;
pub mod prs;
pub mod workouts;
