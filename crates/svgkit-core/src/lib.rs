//! # SVGKit Core
//!
//! Core types, constants, and error handling for SVGKit.
//! Provides the fundamental value types shared by the editing core:
//! geometry primitives, editor-wide constants, and the error taxonomy.

pub mod constants;
pub mod error;
pub mod geometry;

pub use error::{EditorError, Result};
pub use geometry::{Offset, Point};
