//! Data models shared by the identity client and the session layer.

mod profile;

pub use profile::{AccessToken, Profile};
