//! Types shared by the language identification client crates: the static
//! language catalogue, the classification wire protocol and service errors.

pub mod catalog;
pub mod domain;
pub mod error;
pub mod protocol;
