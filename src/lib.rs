//! Parking inventory for the residential administration panel: spot records,
//! the in-memory store with its query/toggle/assignment workflows, and the
//! HTML and xlsx projections built on top of it.

pub mod config;
pub mod domain;
pub mod errors;
pub mod inventory;
pub mod seed;
pub mod spreadsheets;
pub mod templates;

#[cfg(test)]
mod tests;
