//! Scaled canvas placement for extracted text blocks.
//!
//! Reconstruction maps every block's canonical rectangle onto a target pixel
//! canvas. Scaling is anchored to the content's own geometric extent rather
//! than the nominal page size, with independent X and Y factors, so the
//! extracted content always fills the canvas exactly regardless of aspect
//! ratio. A separate uniform viewport-fit transform shrinks the finished
//! canvas into a host container without ever upscaling.

use crate::bbox::CanonicalRect;
use crate::block::TextBlock;
use crate::config::LayoutConfig;

/// CSS-style font weight for a placed block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    /// Regular weight (400)
    #[default]
    Normal,
    /// Bold weight (700)
    Bold,
}

impl FontWeight {
    /// Numeric CSS weight value.
    pub fn css_value(&self) -> u16 {
        match self {
            FontWeight::Normal => 400,
            FontWeight::Bold => 700,
        }
    }
}

/// A text block placed on the target canvas, in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedBlock {
    /// X offset from the canvas origin
    pub left: f32,
    /// Y offset from the canvas origin
    pub top: f32,
    /// Placement width
    pub width: f32,
    /// Placement height
    pub height: f32,
    /// Scaled font size, clamped so text stays inside its box
    pub font_size: f32,
    /// Font weight derived from the block's font info
    pub font_weight: FontWeight,
    /// Italic flag derived from the block's font info
    pub italic: bool,
    /// The block's text content
    pub content: String,
    /// Block type and confidence, as shown in hover tooltips
    pub summary: String,
}

/// Result of layout reconstruction.
///
/// An empty block set produces the explicit [`Layout::Empty`] variant
/// instead of attempting extent computation over no rectangles.
#[derive(Debug, Clone, PartialEq)]
pub enum Layout {
    /// No blocks to place
    Empty,
    /// A reconstructed canvas with every block placed
    Page {
        /// Canvas width in pixels
        page_width: f32,
        /// Canvas height in pixels
        page_height: f32,
        /// Horizontal content-to-canvas scale factor
        scale_x: f32,
        /// Vertical content-to-canvas scale factor
        scale_y: f32,
        /// The placed blocks, in input order
        blocks: Vec<PlacedBlock>,
    },
}

impl Layout {
    /// The placed blocks, empty for [`Layout::Empty`].
    pub fn blocks(&self) -> &[PlacedBlock] {
        match self {
            Layout::Empty => &[],
            Layout::Page { blocks, .. } => blocks,
        }
    }
}

/// Reconstruct a scaled visual layout for a set of blocks.
///
/// The bounding extent over all normalized rects defines the content's own
/// coordinate frame; each block is translated into that frame and scaled by
/// independent X/Y factors onto the configured canvas. Font sizes scale
/// with the Y factor and are clamped to `[min_font_size, height * max_font_fill]`,
/// with the minimum as a hard floor even if it causes overflow.
pub fn reconstruct(blocks: &[TextBlock], config: &LayoutConfig) -> Layout {
    if blocks.is_empty() {
        return Layout::Empty;
    }

    let rects: Vec<CanonicalRect> = blocks.iter().map(block_rect).collect();

    let mut min_left = f32::INFINITY;
    let mut min_top = f32::INFINITY;
    let mut max_right = f32::NEG_INFINITY;
    let mut max_bottom = f32::NEG_INFINITY;
    for rect in &rects {
        min_left = min_left.min(rect.left);
        min_top = min_top.min(rect.top);
        max_right = max_right.max(rect.right());
        max_bottom = max_bottom.max(rect.bottom());
    }

    let original_width = (max_right - min_left).max(1.0);
    let original_height = (max_bottom - min_top).max(1.0);
    let scale_x = config.page_width / original_width;
    let scale_y = config.page_height / original_height;

    log::debug!(
        "reconstructing {} blocks: extent {:.1}x{:.1} -> canvas {:.0}x{:.0} (scale {:.3} x {:.3})",
        blocks.len(),
        original_width,
        original_height,
        config.page_width,
        config.page_height,
        scale_x,
        scale_y
    );

    let placed = blocks
        .iter()
        .zip(&rects)
        .map(|(block, rect)| {
            let height = rect.height * scale_y;
            let target_font = block
                .font_info
                .as_ref()
                .and_then(|f| f.font_size)
                .unwrap_or(config.default_font_size)
                * scale_y;
            let font_size = target_font
                .min(height * config.max_font_fill)
                .max(config.min_font_size);

            let bold = block
                .font_info
                .as_ref()
                .and_then(|f| f.bold)
                .unwrap_or(false);
            let italic = block
                .font_info
                .as_ref()
                .and_then(|f| f.italic)
                .unwrap_or(false);

            PlacedBlock {
                left: (rect.left - min_left) * scale_x,
                top: (rect.top - min_top) * scale_y,
                width: rect.width * scale_x,
                height,
                font_size,
                font_weight: if bold {
                    FontWeight::Bold
                } else {
                    FontWeight::Normal
                },
                italic,
                content: block.content.clone(),
                summary: block_summary(block),
            }
        })
        .collect();

    Layout::Page {
        page_width: config.page_width,
        page_height: config.page_height,
        scale_x,
        scale_y,
        blocks: placed,
    }
}

/// Uniform shrink factor that fits the finished canvas into a host
/// container of the given width. Never upscales past natural size.
pub fn fit_scale(container_width: f32, page_width: f32) -> f32 {
    if container_width <= 0.0 || page_width <= 0.0 {
        return 1.0;
    }
    (container_width / page_width).min(1.0)
}

fn block_rect(block: &TextBlock) -> CanonicalRect {
    match &block.bbox {
        Some(bbox) => bbox.normalize(),
        // Unpositioned blocks collapse to a unit rect at the origin
        None => CanonicalRect::new(0.0, 0.0, 1.0, 1.0),
    }
}

fn block_summary(block: &TextBlock) -> String {
    let block_type = block.block_type.as_deref().unwrap_or("");
    match block.confidence {
        Some(confidence) => format!("{} (conf: {})", block_type, confidence),
        None => format!("{} (conf: -)", block_type),
    }
}
