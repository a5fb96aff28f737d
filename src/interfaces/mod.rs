pub mod providers;
pub mod responder;
