/*!
 * Built-in sample content.
 *
 * Learning content is static in-memory data for the session: a small
 * movie catalog with annotated subtitle tracks, a starter dictionary, and
 * authored quizzes for the first movie. Everything is validated on load;
 * a malformed quiz never reaches a running session.
 */

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::app_state::UserProfile;
use crate::catalog::{Catalog, CefrLevel, Movie};
use crate::dictionary::DictionaryEntry;
use crate::quiz::{Question, Quiz, QuizCategory};
use crate::subtitle::{AnnotatedWord, SubtitleLine};

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("Invalid sample date: {}", value))
}

/// The demo learner profile
pub fn sample_user() -> Result<UserProfile> {
    Ok(UserProfile {
        id: 1,
        name: "Александр".to_string(),
        email: "alex@example.com".to_string(),
        streak: 7,
        tasks_completed: 14,
        words_added: 43,
        movies_watched: 3,
        joined_at: parse_date("2025-12-01")?,
    })
}

/// The six-movie demo catalog
pub fn sample_catalog() -> Catalog {
    let movies = vec![
        Movie {
            id: 1,
            title: "The Shawshank Redemption".to_string(),
            native_title: "Побег из Шоушенка".to_string(),
            year: 1992,
            genres: vec!["Drama".to_string()],
            topics: vec!["Prison".to_string(), "Friendship".to_string(), "Hope".to_string()],
            level: CefrLevel::B2,
            poster_url: "https://images.unsplash.com/photo-1489599849927-2ee91cede3ba?w=400&h=600&fit=crop".to_string(),
            duration: None,
            description: "Классическая история о надежде, дружбе и свободе в стенах тюрьмы Шоушенк.".to_string(),
            subtitles: vec![
                SubtitleLine::new(
                    1,
                    0,
                    4,
                    "I have to remind myself that some birds aren't meant to be caged.",
                    vec![
                        AnnotatedWord::new("remind", "напоминать", "v"),
                        AnnotatedWord::new("caged", "в клетке", "adj"),
                    ],
                ),
                SubtitleLine::new(
                    2,
                    5,
                    9,
                    "Their feathers are just too bright.",
                    vec![
                        AnnotatedWord::new("feathers", "перья", "n"),
                        AnnotatedWord::new("bright", "яркий", "adj"),
                    ],
                ),
                SubtitleLine::new(
                    3,
                    10,
                    14,
                    "Hope is a good thing, maybe the best of things.",
                    vec![
                        AnnotatedWord::new("hope", "надежда", "n"),
                        AnnotatedWord::new("maybe", "возможно", "adv"),
                    ],
                ),
            ],
            watched: true,
            quiz_passed: true,
        },
        Movie {
            id: 2,
            title: "Forrest Gump".to_string(),
            native_title: "Форрест Гамп".to_string(),
            year: 1994,
            genres: vec!["Drama".to_string(), "Comedy".to_string()],
            topics: vec!["Life".to_string(), "Love".to_string(), "History".to_string()],
            level: CefrLevel::B1,
            poster_url: "https://images.unsplash.com/photo-1518676590629-3dcbd9c5a5c9?w=400&h=600&fit=crop".to_string(),
            duration: Some("2ч 22мин".to_string()),
            description: "История простого человека с добрым сердцем, чья жизнь стала отражением эпохи.".to_string(),
            subtitles: vec![
                SubtitleLine::new(
                    1,
                    0,
                    4,
                    "Life is like a box of chocolates.",
                    vec![AnnotatedWord::new("chocolates", "шоколадные конфеты", "n")],
                ),
                SubtitleLine::new(
                    2,
                    5,
                    9,
                    "You never know what you're gonna get.",
                    vec![AnnotatedWord::new("gonna", "собираешься", "v")],
                ),
            ],
            watched: false,
            quiz_passed: false,
        },
        Movie {
            id: 3,
            title: "The Pursuit of Happyness".to_string(),
            native_title: "В погоне за счастьем".to_string(),
            year: 2006,
            genres: vec!["Drama".to_string(), "Biography".to_string()],
            topics: vec!["Business".to_string(), "Family".to_string(), "Motivation".to_string()],
            level: CefrLevel::B1,
            poster_url: "https://images.unsplash.com/photo-1574267432553-4b4628081c31?w=400&h=600&fit=crop".to_string(),
            duration: Some("1ч 57мин".to_string()),
            description: "Реальная история отца, который не сдался перед трудностями жизни.".to_string(),
            subtitles: vec![SubtitleLine::new(
                1,
                0,
                4,
                "Don't ever let somebody tell you, you can't do something.",
                vec![
                    AnnotatedWord::new("somebody", "кто-то", "pron"),
                    AnnotatedWord::new("something", "что-то", "pron"),
                ],
            )],
            watched: false,
            quiz_passed: false,
        },
        Movie {
            id: 4,
            title: "Inception".to_string(),
            native_title: "Начало".to_string(),
            year: 2010,
            genres: vec!["Sci-Fi".to_string(), "Thriller".to_string()],
            topics: vec!["Psychology".to_string(), "Dreams".to_string(), "Reality".to_string()],
            level: CefrLevel::C1,
            poster_url: "https://images.unsplash.com/photo-1446776653964-20c1d3a81b06?w=400&h=600&fit=crop".to_string(),
            duration: Some("2ч 28мин".to_string()),
            description: "Профессиональный вор, специализирующийся на похищении секретов из подсознания.".to_string(),
            subtitles: Vec::new(),
            watched: false,
            quiz_passed: false,
        },
        Movie {
            id: 5,
            title: "The Devil Wears Prada".to_string(),
            native_title: "Дьявол носит Prada".to_string(),
            year: 2006,
            genres: vec!["Comedy".to_string(), "Drama".to_string()],
            topics: vec!["Fashion".to_string(), "Work".to_string(), "Career".to_string()],
            level: CefrLevel::B2,
            poster_url: "https://images.unsplash.com/photo-1558171813-9c5b2c6f499d?w=400&h=600&fit=crop".to_string(),
            duration: Some("1ч 49мин".to_string()),
            description: "Молодая журналистка устраивается ассистентом к властной редактору модного журнала.".to_string(),
            subtitles: Vec::new(),
            watched: false,
            quiz_passed: false,
        },
        Movie {
            id: 6,
            title: "Good Will Hunting".to_string(),
            native_title: "Умница Уилл Хантинг".to_string(),
            year: 1997,
            genres: vec!["Drama".to_string()],
            topics: vec!["Intelligence".to_string(), "Psychology".to_string(), "Friendship".to_string()],
            level: CefrLevel::C1,
            poster_url: "https://images.unsplash.com/photo-1481627834876-b7833e8f5570?w=400&h=600&fit=crop".to_string(),
            duration: Some("2ч 06мин".to_string()),
            description: "Гениальный юноша из Бостона и его путь к признанию своего дара.".to_string(),
            subtitles: Vec::new(),
            watched: false,
            quiz_passed: false,
        },
    ];

    Catalog::new(movies)
}

fn starter_entry(
    word: &str,
    translation: &str,
    part_of_speech: &str,
    movie_title: &str,
    added_at: &str,
    learned: bool,
) -> Result<DictionaryEntry> {
    let mut entry = DictionaryEntry::new(
        word,
        translation,
        part_of_speech,
        movie_title,
        parse_date(added_at)?,
    );
    entry.learned = learned;
    Ok(entry)
}

/// The starter dictionary the demo learner begins with.
///
/// Ordered oldest-last so that front insertion in the session reproduces
/// the newest-first display order.
pub fn sample_dictionary() -> Result<Vec<DictionaryEntry>> {
    Ok(vec![
        starter_entry("remind", "напоминать", "v", "The Shawshank Redemption", "2026-02-20", false)?,
        starter_entry("caged", "в клетке", "adj", "The Shawshank Redemption", "2026-02-20", true)?,
        starter_entry("feathers", "перья", "n", "The Shawshank Redemption", "2026-02-19", false)?,
        starter_entry("hope", "надежда", "n", "The Shawshank Redemption", "2026-02-18", true)?,
        starter_entry("pursuit", "погоня, стремление", "n", "The Pursuit of Happyness", "2026-02-17", false)?,
        starter_entry("redemption", "искупление", "n", "The Shawshank Redemption", "2026-02-16", false)?,
    ])
}

/// The authored quizzes for the first movie
pub fn sample_quizzes() -> Result<Vec<Quiz>> {
    let mut plot = Quiz::new(
        1,
        1,
        "The Shawshank Redemption",
        QuizCategory::Plot,
        vec![
            Question::new(
                1,
                "Why was Andy Dufresne sent to Shawshank?",
                vec![
                    "Robbery".to_string(),
                    "Murder of his wife".to_string(),
                    "Fraud".to_string(),
                    "Escape from prison".to_string(),
                ],
                1,
            )?,
            Question::new(
                2,
                "What did Andy smuggle into prison over 19 years?",
                vec![
                    "Food".to_string(),
                    "Money".to_string(),
                    "A small rock hammer".to_string(),
                    "Letters".to_string(),
                ],
                2,
            )?,
        ],
    )?;
    plot.completed = true;

    let grammar = Quiz::new(
        2,
        1,
        "The Shawshank Redemption",
        QuizCategory::Grammar,
        vec![
            Question::new(
                1,
                "\"Some birds aren't meant to be ___.\" (caged/caging/cage)",
                vec![
                    "caged".to_string(),
                    "caging".to_string(),
                    "cage".to_string(),
                    "cages".to_string(),
                ],
                0,
            )?,
            Question::new(
                2,
                "Choose the correct form: \"I have to ___ myself that hope is real.\"",
                vec![
                    "remind".to_string(),
                    "reminded".to_string(),
                    "reminding".to_string(),
                    "reminds".to_string(),
                ],
                0,
            )?,
        ],
    )?;

    let speech = Quiz::new(
        3,
        1,
        "The Shawshank Redemption",
        QuizCategory::Speech,
        vec![Question::new(
            1,
            "How would you describe Andy's relationship with Red in one sentence?",
            vec![
                "They were rivals who eventually made peace".to_string(),
                "They were unlikely friends who gave each other hope".to_string(),
                "They were cellmates who never got along".to_string(),
                "They were enemies who forgave each other".to_string(),
            ],
            1,
        )?],
    )?;

    Ok(vec![plot, grammar, speech])
}
