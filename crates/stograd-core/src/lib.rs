//! # stograd-core
//!
//! Foundational types for the stograd differentiable sampling library.
//!
//! This crate provides the pieces the operator crates build on:
//!
//! - [`backend`]: default compute backend selection ([`CpuBackend`]) and
//!   device initialization
//! - [`config`]: named numeric constants governing probability clamping and
//!   open-interval uniform draws ([`ClampBounds`], [`GEOMETRIC_CLAMP`])
//! - [`error`]: the library error type ([`StogradError`])
//!
//! The operators themselves live in `stograd-estimators`; this crate holds
//! only what they share.

pub mod backend;
pub mod config;
pub mod error;

pub use backend::*;
pub use config::*;
pub use error::*;
