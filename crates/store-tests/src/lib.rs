pub mod fixtures;
pub mod utils;

#[cfg(test)]
mod paging;
#[cfg(test)]
mod statements;
