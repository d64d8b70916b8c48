//! Persistence gateway: backend trait, JSON implementation and seed data.
//!
//! The gateway owns nothing but durable bytes. The entity store in
//! [`crate::app`] decides when to read, seed and write; this layer only maps
//! the four persisted keys onto a storage medium.

pub mod backend;
pub mod json;
pub mod seed;

pub use backend::Storage;
pub use json::JsonStorage;
pub use seed::achat_seed;
