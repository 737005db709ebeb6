//! Core data models for the tool rental engine.
//!
//! This module contains the domain models used throughout the engine:
//! the tool charge policy looked up from the catalog, the incoming rental
//! request, and the immutable rental agreement produced by a checkout.

pub mod display;
mod rental_agreement;
mod rental_request;
mod tool;

pub use rental_agreement::RentalAgreement;
pub use rental_request::RentalRequest;
pub use tool::ToolChargePolicy;
