//! Media catalog client.
//!
//! The backend serves a small media library next to its status endpoint:
//! `/api/files` lists the available filenames and `/media/{filename}`
//! retrieves one. This module lists the catalog and resolves retrieval
//! URLs; it never fetches media bodies itself.
//!
//! Unlike the status path, listing failures are reported to the caller
//! instead of being masked with substitute data.

pub mod client;
pub mod errors;
pub mod types;
