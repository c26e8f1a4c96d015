//! Server-rendered HTML pages.
//!
//! Every page is a handlebars template under `templates/`, compiled into the
//! binary and registered once at startup. Handlebars HTML-escapes every
//! `{{value}}` it substitutes, so user text is safe to embed as-is.

use axum::response::Html;
use chrono::{DateTime, Utc};
use flashcards_core::types::DbId;
use flashcards_db::models::comment::Comment;
use flashcards_db::models::flashcard::Flashcard;
use flashcards_db::models::flashcard_set::{FlashcardSet, FlashcardSetDetail};
use flashcards_db::models::review::Review;
use handlebars::{Handlebars, RenderError, TemplateError};
use serde::Serialize;

const LAYOUT: &str = include_str!("../templates/layout.hbs");

const TEMPLATES: &[(&str, &str)] = &[
    ("home", include_str!("../templates/home.hbs")),
    ("set_list", include_str!("../templates/set_list.hbs")),
    ("new_set", include_str!("../templates/new_set.hbs")),
    ("set_detail", include_str!("../templates/set_detail.hbs")),
    ("new_card", include_str!("../templates/new_card.hbs")),
    ("comment", include_str!("../templates/comment.hbs")),
    ("review", include_str!("../templates/review.hbs")),
    ("daily_limit", include_str!("../templates/daily_limit.hbs")),
];

pub type PageResult = Result<Html<String>, RenderError>;

/// A set as shown on a page, with its timestamp already formatted.
#[derive(Debug, Serialize)]
struct SetSummary<'a> {
    id: DbId,
    name: &'a str,
    created: String,
}

impl<'a> From<&'a FlashcardSet> for SetSummary<'a> {
    fn from(set: &'a FlashcardSet) -> Self {
        Self {
            id: set.id,
            name: &set.name,
            created: format_timestamp(&set.created_at),
        }
    }
}

#[derive(Serialize)]
struct SetListBindings<'a> {
    title: &'static str,
    sets: Vec<SetSummary<'a>>,
}

#[derive(Serialize)]
struct SetDetailBindings<'a> {
    title: &'a str,
    set: SetSummary<'a>,
    flashcards: &'a [Flashcard],
    comments: &'a [Comment],
    reviews: &'a [Review],
}

/// Bindings shared by the forms that belong to one set.
#[derive(Serialize)]
struct SetFormBindings<'a> {
    title: &'static str,
    set: SetSummary<'a>,
    notice: Option<&'a str>,
}

#[derive(Serialize)]
struct NoticeBindings<'a> {
    title: &'static str,
    notice: Option<&'a str>,
}

#[derive(Serialize)]
struct DailyLimitBindings {
    title: &'static str,
    current: i64,
    default: i64,
}

fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M UTC").to_string()
}

/// Registry of the compiled page templates.
pub struct Pages {
    registry: Handlebars<'static>,
}

impl Pages {
    /// Compile and register every page template.
    pub fn new() -> Result<Self, TemplateError> {
        let mut registry = Handlebars::new();
        registry.register_partial("layout", LAYOUT)?;
        for &(name, source) in TEMPLATES {
            registry.register_template_string(name, source)?;
        }
        Ok(Self { registry })
    }

    fn render<T: Serialize>(&self, name: &str, bindings: &T) -> PageResult {
        self.registry.render(name, bindings).map(Html)
    }

    /// `GET /`
    pub fn home(&self) -> PageResult {
        self.render(
            "home",
            &NoticeBindings {
                title: "Home",
                notice: None,
            },
        )
    }

    /// `GET /sets`
    pub fn set_list(&self, sets: &[FlashcardSet]) -> PageResult {
        self.render(
            "set_list",
            &SetListBindings {
                title: "Sets",
                sets: sets.iter().map(SetSummary::from).collect(),
            },
        )
    }

    /// `GET /sets/new`, also redisplayed when the name is missing.
    pub fn new_set_form(&self, notice: Option<&str>) -> PageResult {
        self.render(
            "new_set",
            &NoticeBindings {
                title: "New set",
                notice,
            },
        )
    }

    /// `GET /sets/{id}`
    ///
    /// Hidden cards list their question; the answer is withheld.
    pub fn set_detail(&self, detail: &FlashcardSetDetail) -> PageResult {
        self.render(
            "set_detail",
            &SetDetailBindings {
                title: &detail.set.name,
                set: SetSummary::from(&detail.set),
                flashcards: &detail.flashcards,
                comments: &detail.comments,
                reviews: &detail.reviews,
            },
        )
    }

    /// `GET /sets/{id}/cards/new`
    pub fn new_card_form(&self, set: &FlashcardSet, notice: Option<&str>) -> PageResult {
        self.render(
            "new_card",
            &SetFormBindings {
                title: "Add card",
                set: set.into(),
                notice,
            },
        )
    }

    /// `GET /sets/{id}/comment`
    pub fn comment_form(&self, set: &FlashcardSet, notice: Option<&str>) -> PageResult {
        self.render(
            "comment",
            &SetFormBindings {
                title: "Comment",
                set: set.into(),
                notice,
            },
        )
    }

    /// `GET /sets/{id}/review`
    pub fn review_form(&self, set: &FlashcardSet) -> PageResult {
        self.render(
            "review",
            &SetFormBindings {
                title: "Review",
                set: set.into(),
                notice: None,
            },
        )
    }

    /// `GET /admin/daily_limit`
    pub fn daily_limit_form(&self, current: i64, default: i64) -> PageResult {
        self.render(
            "daily_limit",
            &DailyLimitBindings {
                title: "Daily limit",
                current,
                default,
            },
        )
    }
}
