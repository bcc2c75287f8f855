//! Raintrap Core Types and Definitions
//!
//! This crate provides the foundational types for the raintrap water
//! chart pipeline. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Drawable primitives and the layered SVG output system
//!   ([`draw`] module)
//! - **Profile**: The block-height and water-profile data model
//!   ([`profile`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod profile;
