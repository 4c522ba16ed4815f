//! # PostStore: the document store seam
//!
//! Every route that reads or writes posts goes through the [`PostStore`] trait, so the
//! same handlers run against MongoDB in production ([`crate::MongoStore`], feature
//! `mongo`) and against [`crate::MemoryStore`] in tests.
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`ping`](PostStore::ping) | Connectivity check run once at startup. Callers log the outcome and carry on. |
//! | [`list_posts`](PostStore::list_posts) | Every post, newest first. No filtering, no pagination. |
//! | [`insert_post`](PostStore::insert_post) | Stores one post as given. No validation, no uniqueness. |
//! | [`search_posts`](PostStore::search_posts) | Case-insensitive literal substring match on `title` OR `content`, in store order. |

use async_trait::async_trait;
use thiserror::Error;

use crate::models::Post;

/// Errors raised by a [`PostStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("post store lock poisoned")]
    Poisoned,
}

/// Async interface to the post collection.
#[async_trait]
pub trait PostStore: Send + Sync {
    async fn ping(&self) -> Result<(), StoreError>;

    async fn list_posts(&self) -> Result<Vec<Post>, StoreError>;

    async fn insert_post(&self, post: Post) -> Result<(), StoreError>;

    async fn search_posts(&self, query: &str) -> Result<Vec<Post>, StoreError>;
}
