//! # Domain models for forum posts
//!
//! Defines the data structures stored by a [`crate::PostStore`] and handed to the
//! page views in the `web` crate.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Post`] | A published post. Carries the title and body, the author's login handle, a display `date`, optional coordinates, and the `created_at` instant used for ordering. |
//! | [`PostDraft`] | The client-supplied part of a post, as submitted by the new-post form. It has no author field: the only way to obtain a [`Post`] is [`PostDraft::publish`], which takes the author from the caller. |
//!
//! ## Dates
//!
//! `date` is rendered with [`DATE_FORMAT`] (`2024-05-01 03:07 PM`) in server local
//! time. That string does not sort chronologically across AM/PM, so listings are
//! ordered by `created_at` instead.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Display format of [`Post::date`].
pub const DATE_FORMAT: &str = "%Y-%m-%d %I:%M %p";

/// A post as persisted in the store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub title: String,
    pub content: String,
    /// Login handle of the authenticated author.
    pub author: String,
    /// Creation time formatted with [`DATE_FORMAT`].
    pub date: String,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    /// Creation instant, used for newest-first ordering.
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Case-insensitive substring match against title or content.
    ///
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.content.to_lowercase().contains(needle)
    }
}

/// Fields of a post supplied by the client.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PostDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

impl PostDraft {
    /// Turn the draft into a post by `author`, stamped with the current time.
    pub fn publish(self, author: &str) -> Post {
        self.publish_at(author, Local::now())
    }

    /// Turn the draft into a post by `author`, stamped with `now`.
    pub fn publish_at(self, author: &str, now: DateTime<Local>) -> Post {
        Post {
            title: self.title,
            content: self.content,
            author: author.to_string(),
            date: now.format(DATE_FORMAT).to_string(),
            latitude: self.latitude,
            longitude: self.longitude,
            created_at: now.with_timezone(&Utc),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDateTime, TimeZone};

    #[test]
    fn test_publish_sets_author_and_date() {
        let now = Local.with_ymd_and_hms(2024, 5, 1, 15, 7, 0).unwrap();
        let draft = PostDraft {
            title: "Hello".to_string(),
            content: "World".to_string(),
            latitude: Some("34.41".to_string()),
            longitude: None,
        };

        let post = draft.publish_at("alice", now);
        assert_eq!(post.author, "alice");
        assert_eq!(post.title, "Hello");
        assert_eq!(post.content, "World");
        assert_eq!(post.date, "2024-05-01 03:07 PM");
        assert_eq!(post.latitude.as_deref(), Some("34.41"));
        assert!(post.longitude.is_none());
        assert_eq!(post.created_at, now.with_timezone(&Utc));
    }

    #[test]
    fn test_publish_date_format_parses_back() {
        let post = PostDraft::default().publish("bob");
        assert!(NaiveDateTime::parse_from_str(&post.date, DATE_FORMAT).is_ok());
    }

    #[test]
    fn test_matches_title_or_content() {
        let post = PostDraft {
            title: "Campus Map".to_string(),
            content: "Meet at the Library".to_string(),
            ..Default::default()
        }
        .publish("carol");

        assert!(post.matches("map"));
        assert!(post.matches("library"));
        assert!(post.matches("at the"));
        assert!(!post.matches("zzz"));
    }
}
