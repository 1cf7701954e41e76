//! Well-known collections.

use crate::store::domain::CollectionName;

/// Collection holding one record per user, keyed by user email.
pub const USERS_COLLECTION: CollectionName = CollectionName::from_static("users");

/// Collection holding drive token blobs, keyed by user email.
pub const TOKENS_COLLECTION: CollectionName = CollectionName::from_static("user_drive_tokens");
