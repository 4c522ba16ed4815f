//! MongoDB-backed [`PostStore`].

use async_trait::async_trait;
use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use futures_util::TryStreamExt;
use mongodb::bson::{doc, DateTime as BsonDateTime, Document};
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};

use crate::models::{Post, DATE_FORMAT};
use crate::repo::{PostStore, StoreError};

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        StoreError::Database(Box::new(err))
    }
}

/// Document shape in the collection. Older documents may lack `created_at` or
/// carry nulls, so every field is optional on the way in.
#[derive(Debug, Serialize, Deserialize)]
struct PostDocument {
    title: Option<String>,
    content: Option<String>,
    author: Option<String>,
    date: Option<String>,
    latitude: Option<String>,
    longitude: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created_at: Option<BsonDateTime>,
}

impl From<Post> for PostDocument {
    fn from(post: Post) -> Self {
        Self {
            title: Some(post.title),
            content: Some(post.content),
            author: Some(post.author),
            date: Some(post.date),
            latitude: post.latitude,
            longitude: post.longitude,
            created_at: Some(BsonDateTime::from_millis(post.created_at.timestamp_millis())),
        }
    }
}

impl From<PostDocument> for Post {
    fn from(doc: PostDocument) -> Self {
        let date = doc.date.unwrap_or_default();
        let created_at = doc
            .created_at
            .and_then(|at| DateTime::<Utc>::from_timestamp_millis(at.timestamp_millis()))
            .or_else(|| parse_display_date(&date))
            .unwrap_or_default();

        Self {
            title: doc.title.unwrap_or_default(),
            content: doc.content.unwrap_or_default(),
            author: doc.author.unwrap_or_default(),
            date,
            latitude: doc.latitude,
            longitude: doc.longitude,
            created_at,
        }
    }
}

fn parse_display_date(date: &str) -> Option<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(date, DATE_FORMAT).ok()?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|at| at.with_timezone(&Utc))
}

/// Case-insensitive literal match on title or content.
fn search_filter(query: &str) -> Document {
    let pattern = regex::escape(query);
    doc! {
        "$or": [
            { "title": { "$regex": pattern.as_str(), "$options": "i" } },
            { "content": { "$regex": pattern.as_str(), "$options": "i" } },
        ]
    }
}

/// One client, one collection handle.
#[derive(Clone, Debug)]
pub struct MongoStore {
    client: Client,
    collection: Collection<PostDocument>,
}

impl MongoStore {
    /// Parse the connection string and open the collection handle.
    ///
    /// This does not talk to the server; use [`PostStore::ping`] for that.
    pub async fn connect(uri: &str, database: &str, collection: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).await?;
        let collection = client.database(database).collection(collection);
        Ok(Self { client, collection })
    }
}

#[async_trait]
impl PostStore for MongoStore {
    async fn ping(&self) -> Result<(), StoreError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }

    async fn list_posts(&self) -> Result<Vec<Post>, StoreError> {
        let docs: Vec<PostDocument> = self
            .collection
            .find(doc! {})
            .sort(doc! { "created_at": -1, "_id": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(docs.into_iter().map(Post::from).collect())
    }

    async fn insert_post(&self, post: Post) -> Result<(), StoreError> {
        let result = self.collection.insert_one(PostDocument::from(post)).await?;
        tracing::debug!(id = %result.inserted_id, "inserted post");
        Ok(())
    }

    async fn search_posts(&self, query: &str) -> Result<Vec<Post>, StoreError> {
        let docs: Vec<PostDocument> = self
            .collection
            .find(search_filter(query))
            .await?
            .try_collect()
            .await?;
        Ok(docs.into_iter().map(Post::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PostDraft;

    #[test]
    fn test_search_filter_escapes_query() {
        let filter = search_filter("a.b(");
        let clauses = filter.get_array("$or").unwrap();
        assert_eq!(clauses.len(), 2);

        let title = clauses[0].as_document().unwrap().get_document("title").unwrap();
        assert_eq!(title.get_str("$regex").unwrap(), r"a\.b\(");
        assert_eq!(title.get_str("$options").unwrap(), "i");

        let content = clauses[1].as_document().unwrap().get_document("content").unwrap();
        assert_eq!(content.get_str("$regex").unwrap(), r"a\.b\(");
    }

    #[test]
    fn test_document_conversion_keeps_fields() {
        let post = PostDraft {
            title: "Hello".to_string(),
            content: "World".to_string(),
            latitude: Some("1.5".to_string()),
            longitude: Some("-2.5".to_string()),
        }
        .publish("alice");

        let back = Post::from(PostDocument::from(post.clone()));
        assert_eq!(back.title, post.title);
        assert_eq!(back.author, "alice");
        assert_eq!(back.latitude, post.latitude);
        assert_eq!(
            back.created_at.timestamp_millis(),
            post.created_at.timestamp_millis()
        );
    }

    #[test]
    fn test_legacy_document_falls_back_to_display_date() {
        let doc = PostDocument {
            title: None,
            content: Some("old".to_string()),
            author: Some("pierce".to_string()),
            date: Some("2023-11-02 09:15 PM".to_string()),
            latitude: None,
            longitude: None,
            created_at: None,
        };

        let post = Post::from(doc);
        assert_eq!(post.title, "");
        let expected = parse_display_date("2023-11-02 09:15 PM").unwrap();
        assert_eq!(post.created_at, expected);
        assert!(post.created_at > DateTime::<Utc>::default());
    }
}
