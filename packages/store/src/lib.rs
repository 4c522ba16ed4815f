//! # Store crate: persistence for forum posts
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`models`] | - | [`Post`] and the client-supplied [`PostDraft`] |
//! | [`repo`] | - | The [`PostStore`] trait and [`StoreError`] |
//! | `memory` | - | [`MemoryStore`], a linear-scan store for tests and local runs |
//! | `mongo` | `mongo` | [`MongoStore`], the production MongoDB backend |

pub mod models;
pub mod repo;

mod memory;
pub use memory::MemoryStore;

#[cfg(feature = "mongo")]
mod mongo;
#[cfg(feature = "mongo")]
pub use mongo::MongoStore;

pub use models::{Post, PostDraft, DATE_FORMAT};
pub use repo::{PostStore, StoreError};
