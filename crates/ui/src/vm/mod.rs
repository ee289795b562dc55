mod catalog_vm;
mod labels;
mod leaderboard_vm;
mod quiz_vm;
mod time_fmt;

pub use catalog_vm::{
    DomainRowVm, FlashcardVm, QuizCardVm, map_domain_rows, map_flashcards, map_quiz_cards,
};
pub use labels::Labels;
pub use leaderboard_vm::{LeaderboardRowVm, map_leaderboard_rows};
pub use quiz_vm::{OptionVm, QuizResultVm, QuizVm, progress_percent};
pub use time_fmt::{format_countdown, format_date, format_minutes};
