pub mod alert;
pub mod form_check;
pub mod gym;
pub mod pain_log;
pub mod personal_record;
pub mod user;
pub mod workout;

pub use alert::Alert;
pub use form_check::FormCheck;
pub use gym::Gym;
pub use pain_log::{PainEntry, PainLog};
pub use personal_record::PersonalRecord;
pub use user::User;
pub use workout::Workout;
