//! # doclens
//!
//! Document layout reconstruction and cross-model extraction diffing.
//!
//! Extraction models return the same document as structured JSON with
//! model-specific geometric annotations. This crate reconciles those
//! annotations, rebuilds a faithful scaled layout, linearizes it into
//! reading-ordered text, and renders a side-by-side structural diff
//! between two models' results:
//!
//! ```text
//! Extraction JSON
//!     ↓
//! [ExtractionResult] (wire decode, `data` envelope unwrap)
//!     ↓
//! [BBox::normalize] (two wire schemas → one canonical rect)
//!     ↓
//! [layout::sort_blocks] (explicit reading order or geometry)
//!     ↓                                ↓
//! [layout::reconstruct]       [linearize::linearize]
//! (scaled pixel canvas)       (reading-ordered text)
//!                                      ↓
//!                     [diff::diff] + [render::render_panes]
//!                     (cleaned char diff → escaped dual panes)
//! ```
//!
//! [`cache::ResultCache`] sits beside the pipeline, memoizing results per
//! (model, file identity) so navigation never re-runs extraction.
//!
//! All components are synchronous pure functions over their inputs; the
//! cache is the only mutable state and is plain owned data. Diffing and
//! layout reconstruction run on the calling thread, so very large
//! documents can take a while — a known scalability limit.
//!
//! ## Quick Start
//!
//! ```
//! use doclens::block::ExtractionResult;
//! use doclens::config::LayoutConfig;
//! use doclens::layout::reconstruct;
//! use doclens::linearize::linearize;
//! use doclens::render::render_panes;
//!
//! # fn main() -> doclens::Result<()> {
//! let json = r#"{"content": {"text_blocks": [
//!     {"page": 1, "content": "Hello", "bbox": {"l": 0.0, "t": 0.0, "r": 50.0, "b": 10.0}}
//! ]}}"#;
//! let result = ExtractionResult::from_json_str(json)?;
//!
//! // Visual layout
//! let layout = reconstruct(result.blocks(), &LayoutConfig::default());
//! assert_eq!(layout.blocks().len(), 1);
//!
//! // Text + comparison
//! let text = linearize(result.blocks());
//! let panes = render_panes(&text, "Hello world", "diff-del", "diff-ins");
//! assert!(panes.first.contains("Hello"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Wire shapes and normalization
pub mod bbox;
pub mod block;

// Layout reconstruction
pub mod config;
pub mod layout;

// Text pipeline
pub mod diff;
pub mod linearize;
pub mod render;

// Session state and exports
pub mod cache;
pub mod export;

pub use bbox::{BBox, CanonicalRect};
pub use block::{ExtractionResult, TextBlock};
pub use cache::ResultCache;
pub use config::LayoutConfig;
pub use diff::{diff, DiffOp, DiffSpan};
pub use error::{Error, Result};
pub use layout::{fit_scale, reconstruct, Layout, PlacedBlock};
pub use linearize::linearize;
pub use render::{render_panes, ComparisonPanes};
