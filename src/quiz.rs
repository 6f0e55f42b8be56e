/*!
 * Multiple-choice quiz engine.
 *
 * Authored quizzes (plot, grammar, speech) and synthesized vocabulary
 * checks run through the same session state machine: select an option,
 * confirm it to advance, finish after the last question. Scoring is a
 * pure projection over the submitted answers and a run passes at a fixed
 * 70% threshold. Closing a session early is always a non-pass; there is
 * no resumption.
 */

use anyhow::{Result, anyhow};
use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::dictionary::DictionaryEntry;
use crate::errors::QuizError;

/// Share of correct answers required for a passing run
pub const PASS_THRESHOLD: f64 = 0.7;

/// Quiz category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizCategory {
    // @category: Plot comprehension, the milestone quiz for a movie
    Plot,
    // @category: Grammar drills
    Grammar,
    // @category: Speech and conversational context
    Speech,
}

impl QuizCategory {
    // @returns: Capitalized category name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Plot => "Plot",
            Self::Grammar => "Grammar",
            Self::Speech => "Speech",
        }
    }
}

// Implement Display trait for QuizCategory
impl std::fmt::Display for QuizCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name().to_lowercase())
    }
}

// Implement FromStr trait for QuizCategory
impl std::str::FromStr for QuizCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "plot" => Ok(Self::Plot),
            "grammar" => Ok(Self::Grammar),
            "speech" => Ok(Self::Speech),
            _ => Err(anyhow!("Invalid quiz category: {}", s)),
        }
    }
}

/// A single multiple-choice question
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    /// Question identifier within its quiz
    pub id: u32,
    /// Prompt text
    pub prompt: String,
    /// Answer options, two or more
    pub options: Vec<String>,
    /// Index of the correct option
    pub correct: usize,
}

impl Question {
    /// Create a validated question.
    ///
    /// Rejects fewer than two options or a correct index outside the
    /// option list; both are data-load defects, never runtime states.
    pub fn new(id: u32, prompt: &str, options: Vec<String>, correct: usize) -> Result<Self, QuizError> {
        if options.len() < 2 {
            return Err(QuizError::Malformed(format!(
                "question {} has {} options, need at least 2",
                id,
                options.len()
            )));
        }
        if correct >= options.len() {
            return Err(QuizError::Malformed(format!(
                "question {} marks option {} correct but has only {} options",
                id,
                correct,
                options.len()
            )));
        }

        Ok(Question {
            id,
            prompt: prompt.to_string(),
            options,
            correct,
        })
    }
}

/// An authored quiz attached to a movie
#[derive(Debug, Clone)]
pub struct Quiz {
    /// Quiz identifier
    pub id: u32,
    /// Identifier of the movie this quiz belongs to
    pub movie_id: u32,
    /// Title of that movie, for display
    pub movie_title: String,
    /// Category
    pub category: QuizCategory,
    /// Whether a passing run has completed this quiz
    pub completed: bool,
    questions: Vec<Question>,
}

impl Quiz {
    /// Create a validated quiz. A quiz with zero questions is rejected here,
    /// at data-load time.
    pub fn new(
        id: u32,
        movie_id: u32,
        movie_title: &str,
        category: QuizCategory,
        questions: Vec<Question>,
    ) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::Malformed(format!("quiz {} has no questions", id)));
        }

        Ok(Quiz {
            id,
            movie_id,
            movie_title: movie_title.to_string(),
            category,
            completed: false,
            questions,
        })
    }

    /// The ordered question list
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Number of questions
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

/// Runtime state of one attempt at a quiz.
///
/// Lives only for the duration of one run and is discarded on close;
/// a fresh session restarts at question zero.
#[derive(Debug)]
pub struct QuizSession {
    questions: Vec<Question>,
    current: usize,
    answers: Vec<usize>,
    selected: Option<usize>,
    finished: bool,
}

impl QuizSession {
    /// Start a session over a quiz's questions
    pub fn start(quiz: &Quiz) -> Self {
        debug!(
            "Starting {} quiz session for '{}' ({} questions)",
            quiz.category,
            quiz.movie_title,
            quiz.question_count()
        );
        Self::from_questions(quiz.questions.clone())
    }

    fn from_questions(questions: Vec<Question>) -> Self {
        QuizSession {
            questions,
            current: 0,
            answers: Vec::new(),
            selected: None,
            finished: false,
        }
    }

    /// The question currently presented, None once finished
    pub fn current_question(&self) -> Option<&Question> {
        if self.finished {
            return None;
        }
        self.questions.get(self.current)
    }

    /// Zero-based index of the current question
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Total number of questions in this session
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// The tentative, not yet confirmed option for the current question
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Answers submitted so far, in question order
    pub fn answers(&self) -> &[usize] {
        &self.answers
    }

    /// Whether every question has been answered
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Record a tentative choice for the current question.
    ///
    /// Selecting again before confirmation overwrites the previous choice.
    pub fn select_option(&mut self, index: usize) -> Result<(), QuizError> {
        if self.finished {
            return Err(QuizError::SessionFinished);
        }

        let option_count = self.questions[self.current].options.len();
        if index >= option_count {
            return Err(QuizError::OptionOutOfRange { index, option_count });
        }

        self.selected = Some(index);
        Ok(())
    }

    /// Confirm the tentative choice and move to the next question.
    ///
    /// After the last question the session transitions to finished.
    pub fn advance(&mut self) -> Result<(), QuizError> {
        if self.finished {
            return Err(QuizError::SessionFinished);
        }

        let selected = self.selected.take().ok_or(QuizError::NoSelection)?;
        self.answers.push(selected);

        if self.answers.len() == self.questions.len() {
            self.finished = true;
            debug!("Quiz session finished with score {}/{}", self.score(), self.total());
        } else {
            self.current += 1;
        }

        Ok(())
    }

    /// Count of submitted answers matching their question's correct option.
    ///
    /// Defined at any point, computed over whatever prefix of answers exists.
    pub fn score(&self) -> usize {
        self.answers
            .iter()
            .zip(self.questions.iter())
            .filter(|(answer, question)| **answer == question.correct)
            .count()
    }

    /// Whether this run passed. Only a finished session can pass; closing
    /// early is a non-pass.
    pub fn passed(&self) -> bool {
        self.finished && (self.score() as f64) >= (self.total() as f64) * PASS_THRESHOLD
    }
}

/// Synthesize a vocabulary-check session from dictionary entries.
///
/// One question per entry: the correct translation paired with one other
/// entry's translation, drawn uniformly from the remaining pool (entries
/// sharing the target's surface word are excluded), with the pair in
/// random order. Requires at least two distinct entries.
///
/// The generator takes the random source as an argument so callers can
/// inject a seeded RNG and get deterministic sessions.
pub fn vocabulary_check<R: Rng + ?Sized>(
    words: &[&DictionaryEntry],
    rng: &mut R,
) -> Result<QuizSession, QuizError> {
    let mut surfaces: Vec<&str> = words.iter().map(|w| w.word.as_str()).collect();
    surfaces.sort_unstable();
    surfaces.dedup();
    if surfaces.len() < 2 {
        return Err(QuizError::InsufficientData {
            available: surfaces.len(),
        });
    }

    let mut questions = Vec::with_capacity(words.len());
    for (i, word) in words.iter().enumerate() {
        let pool: Vec<&&DictionaryEntry> =
            words.iter().filter(|c| c.word != word.word).collect();
        let distractor = pool
            .choose(rng)
            .ok_or(QuizError::InsufficientData { available: 1 })?;

        // Uniform two-element ordering: place the correct option by coin flip
        let correct = rng.random_range(0..2usize);
        let options = if correct == 0 {
            vec![word.translation.clone(), distractor.translation.clone()]
        } else {
            vec![distractor.translation.clone(), word.translation.clone()]
        };

        questions.push(Question::new(i as u32 + 1, &word.word, options, correct)?);
    }

    debug!("Built vocabulary check with {} questions", questions.len());
    Ok(QuizSession::from_questions(questions))
}
