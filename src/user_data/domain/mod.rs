//! Domain model for user records and token blobs.

mod collections;
mod error;

pub use collections::{TOKENS_COLLECTION, USERS_COLLECTION};
pub use error::{UserDataError, UserDataResult};
