#![forbid(unsafe_code)]

pub(crate) mod args;
mod envelope;
mod jsonrpc;
mod revalidate;
mod time;

pub(crate) use envelope::*;
pub(crate) use jsonrpc::*;
pub(crate) use revalidate::*;
pub(crate) use time::*;
