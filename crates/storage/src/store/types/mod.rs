#![forbid(unsafe_code)]

mod answers;
mod interactions;
mod questions;
mod tags;
mod users;
mod votes;

pub use answers::*;
pub use interactions::*;
pub use questions::*;
pub use tags::*;
pub use users::*;
pub use votes::*;
