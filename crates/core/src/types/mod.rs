//! Core types for Pawsome.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod preferences;
pub mod status;

pub use email::{Email, EmailError};
pub use id::*;
pub use preferences::{ActivityLevel, ExperienceLevel, HomeType, Personality, Preferences};
pub use status::*;
