//! Strata Core Types and Definitions
//!
//! This crate provides the drawing primitives used to render Strata layered
//! diagrams. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Unsigned pixel geometry ([`geometry`] module)
//! - **Draw**: SVG drawables for bands, cells, labels and connectors ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
