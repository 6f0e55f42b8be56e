use std::fmt;
use anyhow::{Result, anyhow};
use log::debug;

use crate::subtitle::SubtitleLine;

/// Movie catalog module
/// This module holds the movie records the application learns from: titles
/// in both languages, CEFR difficulty level, genres and topics for
/// browsing, the annotated subtitle track, and the per-movie progress
/// flags the player and quiz flows update.
/// CEFR difficulty level of a movie's language
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CefrLevel {
    /// Beginner
    A1,
    /// Elementary
    A2,
    /// Intermediate
    B1,
    /// Upper intermediate
    B2,
    /// Advanced
    C1,
    /// Proficient
    C2,
}

impl fmt::Display for CefrLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::A1 => "A1",
            Self::A2 => "A2",
            Self::B1 => "B1",
            Self::B2 => "B2",
            Self::C1 => "C1",
            Self::C2 => "C2",
        };
        write!(f, "{}", label)
    }
}

impl std::str::FromStr for CefrLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "A1" => Ok(Self::A1),
            "A2" => Ok(Self::A2),
            "B1" => Ok(Self::B1),
            "B2" => Ok(Self::B2),
            "C1" => Ok(Self::C1),
            "C2" => Ok(Self::C2),
            _ => Err(anyhow!("Invalid CEFR level: {}", s)),
        }
    }
}

/// A catalog entry: one movie with its subtitle track and progress flags
#[derive(Debug, Clone)]
pub struct Movie {
    /// Movie identifier
    pub id: u32,
    /// Title in the learning language
    pub title: String,
    /// Title in the learner's native language
    pub native_title: String,
    /// Release year
    pub year: u16,
    /// Genres for browsing
    pub genres: Vec<String>,
    /// Topics for browsing
    pub topics: Vec<String>,
    /// CEFR difficulty level
    pub level: CefrLevel,
    /// Poster image URL
    pub poster_url: String,
    /// Human-readable duration label, when known
    pub duration: Option<String>,
    /// Short description
    pub description: String,
    /// Annotated subtitle track
    pub subtitles: Vec<SubtitleLine>,
    /// Whether the learner has watched this movie
    pub watched: bool,
    /// Whether the plot quiz for this movie has been passed
    pub quiz_passed: bool,
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.title, self.year, self.level)
    }
}

/// The in-memory movie catalog for this session
#[derive(Debug, Default)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    /// Create a catalog from a list of movies
    pub fn new(movies: Vec<Movie>) -> Self {
        Catalog { movies }
    }

    /// All movies, in catalog order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Look up a movie by identifier
    pub fn get(&self, id: u32) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == id)
    }

    /// Movies at the given difficulty level
    pub fn filter_by_level(&self, level: CefrLevel) -> Vec<&Movie> {
        self.movies.iter().filter(|m| m.level == level).collect()
    }

    /// Movies tagged with the given genre, case-insensitively
    pub fn filter_by_genre(&self, genre: &str) -> Vec<&Movie> {
        self.movies
            .iter()
            .filter(|m| m.genres.iter().any(|g| g.eq_ignore_ascii_case(genre)))
            .collect()
    }

    /// Movies tagged with the given topic, case-insensitively
    pub fn filter_by_topic(&self, topic: &str) -> Vec<&Movie> {
        self.movies
            .iter()
            .filter(|m| m.topics.iter().any(|t| t.eq_ignore_ascii_case(topic)))
            .collect()
    }

    /// Identifiers of movies whose plot quiz has been passed.
    /// Grammar and speech quizzes unlock against this set.
    pub fn passed_movie_ids(&self) -> Vec<u32> {
        self.movies
            .iter()
            .filter(|m| m.quiz_passed)
            .map(|m| m.id)
            .collect()
    }

    /// Mark a movie as watched with its plot quiz passed.
    /// Unknown identifiers are ignored.
    pub fn mark_passed(&mut self, id: u32) {
        if let Some(movie) = self.movies.iter_mut().find(|m| m.id == id) {
            movie.watched = true;
            movie.quiz_passed = true;
            debug!("Movie '{}' marked as passed", movie.title);
        }
    }
}
