use dioxus::prelude::*;
use services::{LeaderboardError, SessionError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    UnknownQuiz,
    Storage,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::UnknownQuiz => "That quiz does not exist.",
            ViewError::Storage => "Saved data could not be loaded.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<SessionError> for ViewError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::UnknownQuiz { .. } => ViewError::UnknownQuiz,
            _ => ViewError::Unknown,
        }
    }
}

impl From<LeaderboardError> for ViewError {
    fn from(_: LeaderboardError) -> Self {
        ViewError::Storage
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
