use crate::model::QuizData;

/// Intentos fallidos antes de revelar la respuesta.
pub const MAX_ATTEMPTS: u32 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    TryAgain,
    /// Se agotaron los intentos y se muestra la respuesta correcta.
    Revealed,
}

/// Resultado de un envío.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// `false` si el quiz ya estaba cerrado y se ignoró el envío.
    pub accepted: bool,
    /// El quiz queda cerrado (acierto o intentos agotados).
    pub terminal: bool,
    /// La opción enviada era la correcta.
    pub correct: bool,
}

impl SubmitOutcome {
    const IGNORED: SubmitOutcome = SubmitOutcome {
        accepted: false,
        terminal: true,
        correct: false,
    };
}

/// Estado transitorio de un quiz visible.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuizState {
    attempts: u32,
    selected: Option<String>,
    feedback: Option<Feedback>,
    finalized: bool,
}

impl QuizState {
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn submit(&mut self, quiz: &QuizData, option: &str) -> SubmitOutcome {
        if self.finalized {
            return SubmitOutcome::IGNORED;
        }

        if option == quiz.answer {
            self.selected = Some(option.to_string());
            self.feedback = Some(Feedback::Correct);
            self.finalized = true;
            return SubmitOutcome {
                accepted: true,
                terminal: true,
                correct: true,
            };
        }

        self.attempts += 1;
        if self.attempts >= MAX_ATTEMPTS {
            self.selected = Some(quiz.answer.clone());
            self.feedback = Some(Feedback::Revealed);
            self.finalized = true;
            SubmitOutcome {
                accepted: true,
                terminal: true,
                correct: false,
            }
        } else {
            self.selected = Some(option.to_string());
            self.feedback = Some(Feedback::TryAgain);
            SubmitOutcome {
                accepted: true,
                terminal: false,
                correct: false,
            }
        }
    }

    /// Atajo de teclado: la tecla `digit` (1..=N) elige la opción N.
    pub fn submit_digit(&mut self, quiz: &QuizData, digit: usize) -> Option<SubmitOutcome> {
        if self.finalized || digit == 0 {
            return None;
        }
        let option = quiz.options.get(digit - 1)?.clone();
        Some(self.submit(quiz, &option))
    }
}
