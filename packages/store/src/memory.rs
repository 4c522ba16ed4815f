use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::models::Post;
use crate::repo::{PostStore, StoreError};

/// In-memory PostStore for testing and local runs without a database.
///
/// Search is a linear scan over every post.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    posts: Arc<Mutex<Vec<Post>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn posts(&self) -> Result<std::sync::MutexGuard<'_, Vec<Post>>, StoreError> {
        self.posts.lock().map_err(|_| StoreError::Poisoned)
    }
}

#[async_trait]
impl PostStore for MemoryStore {
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn list_posts(&self) -> Result<Vec<Post>, StoreError> {
        // Reverse first so posts sharing a timestamp still come out newest first.
        let mut posts: Vec<Post> = self.posts()?.iter().rev().cloned().collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    async fn insert_post(&self, post: Post) -> Result<(), StoreError> {
        self.posts()?.push(post);
        Ok(())
    }

    async fn search_posts(&self, query: &str) -> Result<Vec<Post>, StoreError> {
        let needle = query.to_lowercase();
        Ok(self
            .posts()?
            .iter()
            .filter(|post| post.matches(&needle))
            .cloned()
            .collect())
    }
}
