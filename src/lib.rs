//! LayerCake - Gender Presentation Layers
//!
//! Configuration records for the gender presentation options of an avatar
//! customization UI:
//! - [`Layer`]: display and pronoun rules for one presentation
//! - [`LayerCake`]: exactly four layers (male, female, non-binary, agender)
//!   plus aggregate pronoun-mode flags
//! - [`UNUSED`]: sentinel for an inactive layer slot
//!
//! Untyped input is validated field by field; every failure is a
//! [`LayerCakeError::Validation`] naming the offending field path.

pub mod cake;
pub mod cli;
pub mod error;
pub mod layer;
pub mod store;
mod validate;

pub use cake::{Category, LayerCake};
pub use error::{LayerCakeError, Result};
pub use layer::{Layer, UNUSED};
