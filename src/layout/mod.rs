//! Layout reconstruction from extracted text blocks.
//!
//! Two concerns live here:
//!
//! - [`reading_order`]: ordering blocks into the human reading sequence,
//!   using explicit sequence numbers when the model emits them and geometry
//!   otherwise.
//! - [`reconstruct`]: placing every block on a scaled pixel canvas that
//!   mirrors the original page layout.

pub mod reading_order;
pub mod reconstruct;

pub use reading_order::sort_blocks;
pub use reconstruct::{fit_scale, reconstruct, FontWeight, Layout, PlacedBlock};
