mod ids;
mod question;
mod quiz;
mod score;
mod study;

pub use ids::{FlashcardId, ParseIdError, QuestionId, QuizId};
pub use question::{MAX_OPTIONS, MIN_OPTIONS, Question, QuestionError};
pub use quiz::{QuizDefinition, QuizError};
pub use score::{
    CompletionReason, DEFAULT_PLAYER_NAME, DEFAULT_QUIZ_TYPE, QuizResult, ScoreEntry, percentage,
};
pub use study::{DomainInfo, Flashcard, Language, UnknownLanguage};
