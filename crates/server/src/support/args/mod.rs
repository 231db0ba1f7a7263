#![forbid(unsafe_code)]

mod ids;
mod lists;
mod numbers;
mod strings;

pub(crate) use ids::*;
pub(crate) use lists::*;
pub(crate) use numbers::*;
pub(crate) use strings::*;

pub(crate) type Args = serde_json::Map<String, serde_json::Value>;

#[cfg(test)]
mod tests;
