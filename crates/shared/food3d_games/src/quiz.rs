// ─────────────────────────────────────────────────────────────────────────
// Food quiz: fixed questions, one answer each, score shown at the end.
// ─────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    pub question: &'static str,
    pub answer: &'static str,
    pub options: [&'static str; 4],
}

pub static QUESTIONS: [QuizQuestion; 3] = [
    QuizQuestion {
        question: "What is the main ingredient in pizza?",
        answer: "cheese",
        options: ["cheese", "tomato", "bread", "meat"],
    },
    QuizQuestion {
        question: "Which food is known as \"King of Fast Food\"?",
        answer: "burger",
        options: ["pizza", "burger", "fries", "hotdog"],
    },
    QuizQuestion {
        question: "What color is a ripe banana?",
        answer: "yellow",
        options: ["green", "yellow", "red", "orange"],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizAnswer {
    Correct,
    Wrong,
}

impl QuizAnswer {
    pub fn message(self) -> &'static str {
        match self {
            QuizAnswer::Correct => "Correct! 🎉",
            QuizAnswer::Wrong => "Wrong! 😢",
        }
    }
}

#[derive(Debug, Clone)]
pub struct QuizGame {
    questions: &'static [QuizQuestion],
    current: usize,
    score: u32,
}

impl QuizGame {
    pub fn new() -> Self {
        Self {
            questions: &QUESTIONS,
            current: 0,
            score: 0,
        }
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current)
    }

    /// 1-based position for the "Question n/total" header.
    pub fn position(&self) -> (usize, usize) {
        ((self.current + 1).min(self.total()), self.total())
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_finished(&self) -> bool {
        self.current >= self.questions.len()
    }

    /// Score `option` against the current question and advance.
    /// Returns `None` once every question has been answered.
    pub fn answer(&mut self, option: &str) -> Option<QuizAnswer> {
        let q = self.questions.get(self.current)?;
        let verdict = if option == q.answer {
            self.score += 1;
            QuizAnswer::Correct
        } else {
            QuizAnswer::Wrong
        };
        self.current += 1;
        Some(verdict)
    }

    pub fn final_message(&self) -> Option<String> {
        self.is_finished()
            .then(|| format!("Game Over! Final Score: {}/{}", self.score, self.total()))
    }
}

impl Default for QuizGame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_run_scores_every_question() {
        let mut quiz = QuizGame::new();
        assert_eq!(quiz.position(), (1, 3));
        for q in QUESTIONS.iter() {
            assert_eq!(quiz.answer(q.answer), Some(QuizAnswer::Correct));
        }
        assert!(quiz.is_finished());
        assert_eq!(quiz.score(), 3);
        assert_eq!(
            quiz.final_message().as_deref(),
            Some("Game Over! Final Score: 3/3")
        );
    }

    #[test]
    fn wrong_answers_still_advance() {
        let mut quiz = QuizGame::new();
        assert_eq!(quiz.answer("meat"), Some(QuizAnswer::Wrong));
        assert_eq!(quiz.position(), (2, 3));
        assert_eq!(quiz.score(), 0);
        assert!(quiz.final_message().is_none());
    }

    #[test]
    fn answers_after_the_end_are_ignored() {
        let mut quiz = QuizGame::new();
        for _ in 0..3 {
            quiz.answer("nope");
        }
        assert_eq!(quiz.answer("cheese"), None);
        assert_eq!(quiz.score(), 0);
        assert_eq!(quiz.position(), (3, 3));
    }

    #[test]
    fn every_answer_is_among_its_options() {
        for q in QUESTIONS.iter() {
            assert!(q.options.contains(&q.answer), "{}", q.question);
        }
    }
}
