pub mod knowledge;
pub mod responder;
pub mod session;
pub mod widget;
