//! Application services for user data access.

mod operations;
mod user_data;

pub use operations::{DeleteDocument, GetDocument, SetDocument, UpdateDocument};
pub use user_data::UserDataService;
