mod progress;
mod reporter;
mod service;
mod timer;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use progress::{OptionState, SessionAction, SessionPhase, SessionSnapshot};
pub use reporter::ResultReporter;
pub use service::{Advance, CheckOutcome, QuizSession, TickOutcome};
pub use timer::SessionTimer;
pub use workflow::{ActiveQuiz, AdvanceResult, QuizLoopService};
