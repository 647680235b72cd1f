#[macro_use]
mod macros;

pub mod core;
pub mod pagination;
