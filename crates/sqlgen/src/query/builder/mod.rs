pub mod filter;
pub mod insert;
pub mod update;
