//! Trait definitions for Clickforge model drivers.
//!
//! The studio never talks to a provider directly; it issues
//! [`GenerateRequest`]s through a [`ModelDriver`]. Tests substitute scripted
//! drivers at this seam.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::ModelDriver;

// Re-exported so driver implementors need only this crate.
pub use clickforge_core::{GenerateRequest, GenerateResponse};
