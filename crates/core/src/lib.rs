//! Domain rules for the cinedex movie catalog.
//!
//! Nothing in this crate performs I/O. The database and HTTP layers call
//! into these helpers so the consistency rules live in one place.

pub mod catalog;
pub mod error;
pub mod types;
