//! Application services for backend bootstrap.

mod bootstrapper;

pub use bootstrapper::{Bootstrapper, open_root};
