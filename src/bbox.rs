//! Bounding-box normalization.
//!
//! Extraction models annotate text blocks with one of two incompatible
//! bounding-box schemas: explicit edges (`l`/`t`/`r`/`b`, optionally with
//! precomputed `width`/`height`) or quad corners (`r_x0`/`r_y0`/`r_x2`/`r_y2`,
//! top-left and bottom-right). This module reconciles both into a single
//! canonical rectangle used by every downstream consumer.

use serde::{Deserialize, Serialize};

/// A bounding box in one of the two schemas produced by extraction models.
///
/// Deserialization discriminates by the presence of the `l` field: payloads
/// carrying explicit edges decode as [`BBox::Standard`], quad corners decode
/// as [`BBox::Quad`]. Any other shape is rejected at the boundary with a
/// decode error; it never reaches normalization.
///
/// The `coord_origin` field is carried through unchanged. Layout assumes a
/// top-left origin uniformly and never flips the Y axis, matching the
/// behavior of the extraction viewers this schema comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BBox {
    /// Explicit left/top/right/bottom edges.
    Standard {
        /// Left edge
        l: f32,
        /// Top edge
        t: f32,
        /// Right edge
        r: f32,
        /// Bottom edge
        b: f32,
        /// Precomputed width; wins over `r - l` when present
        #[serde(default, skip_serializing_if = "Option::is_none")]
        width: Option<f32>,
        /// Precomputed height; wins over `b - t` when present
        #[serde(default, skip_serializing_if = "Option::is_none")]
        height: Option<f32>,
        /// Coordinate origin reported by the model (e.g. "TOPLEFT")
        #[serde(default, skip_serializing_if = "Option::is_none")]
        coord_origin: Option<String>,
    },
    /// Quad corners; only the top-left and bottom-right corners are carried.
    Quad {
        /// Top-left corner X
        r_x0: f32,
        /// Top-left corner Y
        r_y0: f32,
        /// Bottom-right corner X
        r_x2: f32,
        /// Bottom-right corner Y
        r_y2: f32,
        /// Coordinate origin reported by the model (e.g. "TOPLEFT")
        #[serde(default, skip_serializing_if = "Option::is_none")]
        coord_origin: Option<String>,
    },
}

/// The canonical rectangle every bounding box reduces to.
///
/// Top-left origin; width and height clamped to a minimum of 1 unit when
/// derived from edges, so degenerate boxes never produce zero-area
/// placements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanonicalRect {
    /// X coordinate of the top-left corner
    pub left: f32,
    /// Y coordinate of the top-left corner
    pub top: f32,
    /// Width of the rectangle
    pub width: f32,
    /// Height of the rectangle
    pub height: f32,
}

impl CanonicalRect {
    /// Create a new canonical rectangle.
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Get the right edge x-coordinate.
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    /// Get the bottom edge y-coordinate.
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

impl BBox {
    /// Reduce this bounding box to the canonical rectangle.
    ///
    /// For the edge schema, explicit `width`/`height` fields are used as-is
    /// when present; otherwise dimensions fall back to `max(1, r - l)` /
    /// `max(1, b - t)`. Quad corners always derive dimensions from the
    /// corner deltas with the same clamp.
    ///
    /// # Examples
    ///
    /// ```
    /// use doclens::bbox::BBox;
    ///
    /// let bbox = BBox::Standard {
    ///     l: 0.0, t: 0.0, r: 10.0, b: 20.0,
    ///     width: None, height: None, coord_origin: None,
    /// };
    /// let rect = bbox.normalize();
    /// assert_eq!(rect.width, 10.0);
    /// assert_eq!(rect.height, 20.0);
    /// ```
    pub fn normalize(&self) -> CanonicalRect {
        match self {
            BBox::Standard {
                l,
                t,
                r,
                b,
                width,
                height,
                ..
            } => CanonicalRect {
                left: *l,
                top: *t,
                width: width.unwrap_or((r - l).max(1.0)),
                height: height.unwrap_or((b - t).max(1.0)),
            },
            BBox::Quad {
                r_x0,
                r_y0,
                r_x2,
                r_y2,
                ..
            } => CanonicalRect {
                left: *r_x0,
                top: *r_y0,
                width: (r_x2 - r_x0).max(1.0),
                height: (r_y2 - r_y0).max(1.0),
            },
        }
    }

    /// Top coordinate in either schema (`t` or `r_y0`).
    pub fn top(&self) -> f32 {
        match self {
            BBox::Standard { t, .. } => *t,
            BBox::Quad { r_y0, .. } => *r_y0,
        }
    }

    /// Left coordinate in either schema (`l` or `r_x0`).
    pub fn left(&self) -> f32 {
        match self {
            BBox::Standard { l, .. } => *l,
            BBox::Quad { r_x0, .. } => *r_x0,
        }
    }

    /// Coordinate origin reported by the model, if any.
    pub fn coord_origin(&self) -> Option<&str> {
        match self {
            BBox::Standard { coord_origin, .. } | BBox::Quad { coord_origin, .. } => {
                coord_origin.as_deref()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard(l: f32, t: f32, r: f32, b: f32) -> BBox {
        BBox::Standard {
            l,
            t,
            r,
            b,
            width: None,
            height: None,
            coord_origin: None,
        }
    }

    fn quad(x0: f32, y0: f32, x2: f32, y2: f32) -> BBox {
        BBox::Quad {
            r_x0: x0,
            r_y0: y0,
            r_x2: x2,
            r_y2: y2,
            coord_origin: None,
        }
    }

    #[test]
    fn test_normalize_standard() {
        let rect = standard(0.0, 0.0, 10.0, 20.0).normalize();
        assert_eq!(rect, CanonicalRect::new(0.0, 0.0, 10.0, 20.0));
    }

    #[test]
    fn test_normalize_quad() {
        let rect = quad(0.0, 0.0, 10.0, 20.0).normalize();
        assert_eq!(rect, CanonicalRect::new(0.0, 0.0, 10.0, 20.0));
    }

    #[test]
    fn test_equivalent_schemas_produce_identical_rects() {
        let a = standard(5.0, 7.0, 105.0, 27.0).normalize();
        let b = quad(5.0, 7.0, 105.0, 27.0).normalize();
        assert_eq!(a, b);
    }

    #[test]
    fn test_explicit_dimensions_win_over_edges() {
        let bbox = BBox::Standard {
            l: 0.0,
            t: 0.0,
            r: 10.0,
            b: 20.0,
            width: Some(42.0),
            height: Some(13.0),
            coord_origin: None,
        };
        let rect = bbox.normalize();
        assert_eq!(rect.width, 42.0);
        assert_eq!(rect.height, 13.0);
    }

    #[test]
    fn test_degenerate_boxes_clamp_to_unit() {
        let rect = standard(50.0, 50.0, 50.0, 50.0).normalize();
        assert_eq!(rect.width, 1.0);
        assert_eq!(rect.height, 1.0);

        // Inverted corners also clamp rather than going negative
        let rect = quad(50.0, 50.0, 40.0, 40.0).normalize();
        assert_eq!(rect.width, 1.0);
        assert_eq!(rect.height, 1.0);
    }

    #[test]
    fn test_rect_edges() {
        let rect = CanonicalRect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(rect.right(), 110.0);
        assert_eq!(rect.bottom(), 70.0);
    }

    #[test]
    fn test_deserialize_discriminates_by_l_field() {
        let standard: BBox =
            serde_json::from_str(r#"{"l": 1.0, "t": 2.0, "r": 3.0, "b": 4.0}"#).unwrap();
        assert!(matches!(standard, BBox::Standard { .. }));

        let quad: BBox =
            serde_json::from_str(r#"{"r_x0": 1.0, "r_y0": 2.0, "r_x2": 3.0, "r_y2": 4.0}"#)
                .unwrap();
        assert!(matches!(quad, BBox::Quad { .. }));
    }

    #[test]
    fn test_deserialize_carries_coord_origin() {
        let bbox: BBox = serde_json::from_str(
            r#"{"r_x0": 0.0, "r_y0": 0.0, "r_x2": 5.0, "r_y2": 5.0, "coord_origin": "BOTTOMLEFT"}"#,
        )
        .unwrap();
        assert_eq!(bbox.coord_origin(), Some("BOTTOMLEFT"));
    }

    #[test]
    fn test_unrecognized_shape_is_rejected() {
        let result: std::result::Result<BBox, _> =
            serde_json::from_str(r#"{"x": 1.0, "y": 2.0, "w": 3.0, "h": 4.0}"#);
        assert!(result.is_err());
    }
}
