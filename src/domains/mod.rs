pub mod content;
pub mod conversation;
