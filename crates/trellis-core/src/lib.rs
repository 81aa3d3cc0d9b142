//! Trellis Core Types and Drawing Primitives
//!
//! This crate provides the scene-composition layer used by the Trellis
//! diagram builders. It includes:
//!
//! - **Colors**: CSS color handling that keeps the authored spelling ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Theme**: The immutable styling configuration ([`theme::Theme`])
//! - **Draw**: Boxes, arrows, labels and the arrowhead marker ([`draw`] module)
//! - **Scene**: The per-document fragment collector ([`scene::Scene`])

pub mod color;
pub mod draw;
pub mod geometry;
pub mod scene;
pub mod theme;
