pub mod accounts;
pub mod chat;
pub mod directory;
pub mod error;
pub mod reviews;

pub use error::{AppError, AppResult};
