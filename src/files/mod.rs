pub mod mime;
pub mod resolve;
