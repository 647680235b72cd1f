pub mod cursor;
pub mod settings;
