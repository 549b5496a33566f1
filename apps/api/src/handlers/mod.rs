pub mod accounts;
pub mod chat;
pub mod directory;
pub mod error_handler;
pub mod health;
pub mod reviews;
