#![forbid(unsafe_code)]

pub mod ids;
pub mod interaction;
pub mod paging;
pub mod reputation;
pub mod sort;
pub mod tags;
pub mod vote;

pub use ids::*;
pub use interaction::*;
pub use paging::*;
pub use reputation::*;
pub use sort::*;
pub use tags::*;
pub use vote::*;

#[cfg(test)]
mod tests;
