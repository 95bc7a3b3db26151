//! Golarch Core Types and Definitions
//!
//! This crate provides the drawing primitives used to render the Game of Life
//! architecture diagrams. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Drawable node circles, labels and arrows ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
