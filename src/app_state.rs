/*!
 * Session-wide application state.
 *
 * One explicit context object replaces ambient globals: the learner
 * profile, the movie catalog, the dictionary session, and the quiz list
 * all live here, and every mutation goes through a named operation. The
 * profile doubles as the progress tracker the player emits milestones to,
 * so its counters stay consistent with catalog and quiz flags.
 */

use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::{debug, info};
use rand::Rng;
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::dictionary::{DictionaryEntry, DictionarySession};
use crate::errors::{DictionaryError, QuizError};
use crate::player_controller::PlayerController;
use crate::progress::ProgressTracker;
use crate::quiz::{self, Quiz, QuizCategory, QuizSession};
use crate::sample_data;

/// The learner's profile with progress counters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    /// Profile identifier
    pub id: u32,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Consecutive days of activity
    pub streak: u32,
    /// Quizzes completed across all movies
    pub tasks_completed: u32,
    /// Words saved to the dictionary
    pub words_added: u32,
    /// Movies with a passed plot quiz
    pub movies_watched: u32,
    /// Date the profile was created
    pub joined_at: NaiveDate,
}

impl ProgressTracker for UserProfile {
    fn word_added(&mut self, entry: &DictionaryEntry) {
        self.words_added += 1;
        debug!("Profile counter: words added -> {} ('{}')", self.words_added, entry.word);
    }

    fn movie_passed(&mut self, movie_id: u32) {
        self.tasks_completed += 1;
        self.movies_watched += 1;
        debug!("Profile counter: movies watched -> {} (movie {})", self.movies_watched, movie_id);
    }

    fn quiz_completed(&mut self, quiz_id: u32) {
        self.tasks_completed += 1;
        debug!("Profile counter: tasks completed -> {} (quiz {})", self.tasks_completed, quiz_id);
    }
}

/// Root session context for one application run
#[derive(Debug)]
pub struct AppState {
    user: UserProfile,
    catalog: Catalog,
    dictionary: DictionarySession,
    quizzes: Vec<Quiz>,
}

impl AppState {
    /// Create a session from already-validated content
    pub fn new(
        user: UserProfile,
        catalog: Catalog,
        dictionary_entries: Vec<DictionaryEntry>,
        quizzes: Vec<Quiz>,
    ) -> Self {
        AppState {
            user,
            catalog,
            dictionary: DictionarySession::with_entries(dictionary_entries),
            quizzes,
        }
    }

    /// Create a session over the built-in sample content
    pub fn sample() -> Result<Self> {
        let user = sample_data::sample_user().context("Failed to load sample user")?;
        let catalog = sample_data::sample_catalog();
        let dictionary =
            sample_data::sample_dictionary().context("Failed to load sample dictionary")?;
        let quizzes = sample_data::sample_quizzes().context("Failed to load sample quizzes")?;

        info!(
            "Loaded sample content: {} movies, {} dictionary entries, {} quizzes",
            catalog.movies().len(),
            dictionary.len(),
            quizzes.len()
        );

        Ok(Self::new(user, catalog, dictionary, quizzes))
    }

    /// The learner profile
    pub fn user(&self) -> &UserProfile {
        &self.user
    }

    /// The movie catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The dictionary session
    pub fn dictionary(&self) -> &DictionarySession {
        &self.dictionary
    }

    /// All quizzes, locked or not
    pub fn quizzes(&self) -> &[Quiz] {
        &self.quizzes
    }

    // =========================================================================
    // Player session flow
    // =========================================================================

    /// Open a viewing session for a movie, attaching its plot quiz.
    /// Returns None for an unknown movie identifier.
    pub fn open_player(&self, movie_id: u32) -> Option<PlayerController> {
        let movie = self.catalog.get(movie_id)?.clone();
        let plot_quiz = self
            .quizzes
            .iter()
            .find(|q| q.movie_id == movie_id && q.category == QuizCategory::Plot)
            .cloned();

        Some(PlayerController::new(movie, plot_quiz))
    }

    /// Confirm the player's inspected word into the dictionary.
    ///
    /// A fresh word is appended and the words-added counter bumps; a word
    /// already present in the dictionary is absorbed silently and the
    /// counter stays put.
    pub fn confirm_word(&mut self, player: &mut PlayerController) -> Result<(), DictionaryError> {
        let entry = player.confirm_add()?;

        if self.dictionary.add(entry.clone()) {
            self.user.word_added(&entry);
        }
        Ok(())
    }

    /// Close a plot-quiz run from the player and sync its outcome into the
    /// session: catalog flags, the quiz record, and profile counters.
    /// Returns whether the run passed.
    pub fn finish_player_quiz(
        &mut self,
        player: &mut PlayerController,
        session: &QuizSession,
    ) -> bool {
        let AppState {
            user,
            catalog,
            quizzes,
            ..
        } = self;

        let passed = player.finish_plot_quiz(session, user);
        if passed {
            let movie_id = player.movie().id;
            catalog.mark_passed(movie_id);
            if let Some(quiz) = quizzes
                .iter_mut()
                .find(|q| q.movie_id == movie_id && q.category == QuizCategory::Plot)
            {
                quiz.completed = true;
            }
        }
        passed
    }

    // =========================================================================
    // Standalone quizzes
    // =========================================================================

    /// Grammar or speech quizzes unlocked by a passed plot quiz.
    /// Plot quizzes run inside the player and are never listed here.
    pub fn unlocked_quizzes(&self, category: QuizCategory) -> Vec<&Quiz> {
        if category == QuizCategory::Plot {
            return Vec::new();
        }

        let passed = self.catalog.passed_movie_ids();
        self.quizzes
            .iter()
            .filter(|q| q.category == category && passed.contains(&q.movie_id))
            .collect()
    }

    /// Whether a quiz can currently be started
    pub fn is_quiz_unlocked(&self, quiz_id: u32) -> bool {
        self.quizzes
            .iter()
            .any(|q| q.id == quiz_id && self.catalog.passed_movie_ids().contains(&q.movie_id))
    }

    /// Start a run of an unlocked quiz. Returns None for unknown or
    /// still-locked quizzes.
    pub fn start_quiz(&self, quiz_id: u32) -> Option<QuizSession> {
        if !self.is_quiz_unlocked(quiz_id) {
            debug!("Quiz {} is locked or unknown", quiz_id);
            return None;
        }

        self.quizzes
            .iter()
            .find(|q| q.id == quiz_id)
            .map(QuizSession::start)
    }

    /// Close a standalone quiz run. A finished, passing run marks the quiz
    /// completed and bumps the tasks counter. Returns whether it passed.
    pub fn complete_quiz(&mut self, quiz_id: u32, session: &QuizSession) -> bool {
        if !session.passed() {
            return false;
        }

        if let Some(quiz) = self.quizzes.iter_mut().find(|q| q.id == quiz_id) {
            quiz.completed = true;
            self.user.quiz_completed(quiz_id);
            true
        } else {
            false
        }
    }

    // =========================================================================
    // Dictionary flow
    // =========================================================================

    /// Start a vocabulary check over the unlearned dictionary words.
    ///
    /// Requires at least two eligible words; callers gate the action on
    /// `dictionary().unlearned_count()` before offering it.
    pub fn start_vocabulary_check<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<QuizSession, QuizError> {
        let unlearned = self.dictionary.unlearned();
        quiz::vocabulary_check(&unlearned, rng)
    }

    /// Flip the learned flag of a dictionary entry, silently ignoring
    /// unknown identifiers
    pub fn toggle_learned(&mut self, id: Uuid) -> bool {
        self.dictionary.toggle_learned(id)
    }
}
