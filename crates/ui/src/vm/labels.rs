use prep_core::model::Language;

/// Translated UI strings for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub language: Language,
    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,
    pub start_quiz: &'static str,
    pub by: &'static str,
    pub domains_title: &'static str,
    pub domains_header: [&'static str; 3],
    pub practice_exams_title: &'static str,
    pub start: &'static str,
    pub question_bank_title: &'static str,
    pub question_bank_subtitle: &'static str,
    pub flashcards_title: &'static str,
    pub top_scores_title: &'static str,
    pub leaderboard_header: [&'static str; 3],
    pub no_records: &'static str,
    pub question: &'static str,
    pub of: &'static str,
    pub timer_label: &'static str,
    pub score_label: &'static str,
    pub check: &'static str,
    pub next: &'static str,
    pub finish: &'static str,
    pub close: &'static str,
    pub explanation: &'static str,
    pub quiz_completed: &'static str,
    pub time_up: &'static str,
    pub score_not_saved: &'static str,
    pub unknown_quiz: &'static str,
}

const ES: Labels = Labels {
    language: Language::Es,
    hero_title: "Domina el PMP 2026 con PMBOK 8 - Exámenes Gratis",
    hero_subtitle: "Basado en el nuevo ECO de Julio 2026. Preparación avanzada para Gerentes de Proyecto.",
    start_quiz: "Empezar Quiz Gratis",
    by: "Por",
    domains_title: "Dominios PMP 2026 (ECO)",
    domains_header: ["Dominio", "Peso", "Temas Clave"],
    practice_exams_title: "Exámenes de Práctica",
    start: "Iniciar",
    question_bank_title: "Banco de Preguntas por Categoría",
    question_bank_subtitle: "Explora preguntas por áreas de conocimiento específicas.",
    flashcards_title: "Flashcards PMBOK 8",
    top_scores_title: "Mejores Puntuaciones",
    leaderboard_header: ["Usuario", "Puntos", "Fecha"],
    no_records: "No hay registros todavía.",
    question: "Pregunta",
    of: "de",
    timer_label: "Tiempo",
    score_label: "Puntuación",
    check: "Verificar",
    next: "Siguiente",
    finish: "Finalizar",
    close: "Cerrar",
    explanation: "Explicación:",
    quiz_completed: "¡Quiz Completado!",
    time_up: "¡Se acabó el tiempo! Aún puedes terminar el quiz.",
    score_not_saved: "No se pudo guardar la puntuación.",
    unknown_quiz: "Quiz no encontrado.",
};

const EN: Labels = Labels {
    language: Language::En,
    hero_title: "Master PMP 2026 with PMBOK 8 - Free Exams",
    hero_subtitle: "Based on the new July 2026 ECO. Advanced preparation for Project Managers.",
    start_quiz: "Start Free Quiz",
    by: "By",
    domains_title: "PMP 2026 Domains (ECO)",
    domains_header: ["Domain", "Weight", "Key Topics"],
    practice_exams_title: "Practice Exams",
    start: "Start",
    question_bank_title: "Question Bank by Category",
    question_bank_subtitle: "Explore questions by specific knowledge areas.",
    flashcards_title: "PMBOK 8 Flashcards",
    top_scores_title: "Top Scores",
    leaderboard_header: ["User", "Score", "Date"],
    no_records: "No records yet.",
    question: "Question",
    of: "of",
    timer_label: "Time",
    score_label: "Score",
    check: "Check",
    next: "Next",
    finish: "Finish",
    close: "Close",
    explanation: "Explanation:",
    quiz_completed: "Quiz Completed!",
    time_up: "Time is up! You can still finish the quiz.",
    score_not_saved: "Your score could not be saved.",
    unknown_quiz: "Quiz not found.",
};

impl Labels {
    #[must_use]
    pub fn for_language(language: Language) -> &'static Labels {
        match language {
            Language::Es => &ES,
            Language::En => &EN,
        }
    }

    /// "Question 2 of 5".
    #[must_use]
    pub fn question_counter(&self, number: usize, total: usize) -> String {
        format!("{} {number} {} {total}", self.question, self.of)
    }

    /// Sentence under the final percentage.
    #[must_use]
    pub fn result_summary(&self, correct: u32, total: u32) -> String {
        match self.language {
            Language::Es => format!("Has respondido correctamente {correct} de {total} preguntas."),
            Language::En => format!("You answered {correct} out of {total} questions correctly."),
        }
    }

    #[must_use]
    pub fn advance_label(&self, is_last_question: bool) -> &'static str {
        if is_last_question { self.finish } else { self.next }
    }
}
