use prep_core::model::{DomainInfo, Flashcard, QuizId};
use services::QuizListItem;

use crate::vm::time_fmt::format_minutes;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizCardVm {
    pub id: QuizId,
    pub title: String,
    pub description: String,
    /// "15 min • 2 MCQ"
    pub meta: String,
}

impl From<&QuizListItem> for QuizCardVm {
    fn from(item: &QuizListItem) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            description: item.description.clone(),
            meta: format!(
                "{} • {} MCQ",
                format_minutes(item.duration_secs),
                item.question_count
            ),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainRowVm {
    pub name: String,
    pub weight: String,
    pub topics: String,
}

impl From<&DomainInfo> for DomainRowVm {
    fn from(domain: &DomainInfo) -> Self {
        Self {
            name: domain.name.clone(),
            weight: domain.weight_label(),
            topics: domain.topics.join(", "),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlashcardVm {
    pub id: String,
    pub term: String,
    pub definition: String,
}

impl From<&Flashcard> for FlashcardVm {
    fn from(card: &Flashcard) -> Self {
        Self {
            id: card.id.to_string(),
            term: card.term.clone(),
            definition: card.definition.clone(),
        }
    }
}

#[must_use]
pub fn map_quiz_cards(items: &[QuizListItem]) -> Vec<QuizCardVm> {
    items.iter().map(QuizCardVm::from).collect()
}

#[must_use]
pub fn map_domain_rows(domains: &[DomainInfo]) -> Vec<DomainRowVm> {
    domains.iter().map(DomainRowVm::from).collect()
}

#[must_use]
pub fn map_flashcards(cards: &[Flashcard]) -> Vec<FlashcardVm> {
    cards.iter().map(FlashcardVm::from).collect()
}
