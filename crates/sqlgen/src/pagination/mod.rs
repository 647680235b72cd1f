pub mod directive;
pub mod page;
pub mod request;
