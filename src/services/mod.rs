pub mod matcher;
pub mod responder;
