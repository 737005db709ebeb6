//! Rental charge engine for tool checkouts.
//!
//! This crate turns a rental request (tool code, rental length, discount and
//! checkout date) into a priced rental agreement. Chargeable days are counted
//! against each tool's weekday, weekend and holiday charge policy, with
//! Independence Day and Labor Day observed as holidays.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
