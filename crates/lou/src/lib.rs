pub mod chat;
pub mod compose;
pub mod errors;
pub mod history;
pub mod models;
pub mod persona;
pub mod providers;
pub mod reply;
pub mod sanitize;
