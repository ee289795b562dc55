use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error type for parsing an identifier from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    kind: &'static str,
}

impl ParseIdError {
    #[must_use]
    pub fn kind(&self) -> &'static str {
        self.kind
    }
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} cannot be blank", self.kind)
    }
}

impl std::error::Error for ParseIdError {}

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier, trimming surrounding whitespace.
            ///
            /// # Errors
            ///
            /// Returns `ParseIdError` if the value is blank.
            pub fn new(value: impl Into<String>) -> Result<Self, ParseIdError> {
                let value = value.into();
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Err(ParseIdError {
                        kind: stringify!($name),
                    });
                }
                if trimmed.len() == value.len() {
                    Ok(Self(value))
                } else {
                    Ok(Self(trimmed.to_owned()))
                }
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({:?})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ParseIdError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Stable identifier of a quiz in the catalog (e.g. `q1`).
    QuizId
);
string_id!(
    /// Identifier of a question, unique within its quiz.
    QuestionId
);
string_id!(
    /// Identifier of a flashcard.
    FlashcardId
);

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiz_id_display() {
        let id = QuizId::new("q1").unwrap();
        assert_eq!(id.to_string(), "q1");
        assert_eq!(format!("{id:?}"), "QuizId(\"q1\")");
    }

    #[test]
    fn quiz_id_trims_whitespace() {
        let id: QuizId = "  q2 ".parse().unwrap();
        assert_eq!(id.as_str(), "q2");
    }

    #[test]
    fn blank_id_is_rejected() {
        let err = "   ".parse::<QuestionId>().unwrap_err();
        assert_eq!(err.kind(), "QuestionId");
        assert_eq!(err.to_string(), "QuestionId cannot be blank");
    }

    #[test]
    fn id_deserializes_from_plain_string() {
        let id: FlashcardId = serde_json::from_str("\"f1\"").unwrap();
        assert_eq!(id.as_str(), "f1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"f1\"");
    }

    #[test]
    fn blank_id_fails_deserialization() {
        let result = serde_json::from_str::<QuizId>("\"\"");
        assert!(result.is_err());
    }
}
