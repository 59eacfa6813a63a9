//! Configuration for layout reconstruction and linearization.

/// Layout reconstruction configuration.
///
/// Defaults match a letter-ish preview canvas (800x1120 px) with a 12pt base
/// font, an 8px legibility floor, and text capped at 85% of its box height so
/// it never visually overflows its placement.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Target canvas width in pixels.
    pub page_width: f32,

    /// Target canvas height in pixels.
    pub page_height: f32,

    /// Font size assumed for blocks without font information.
    pub default_font_size: f32,

    /// Hard floor for scaled font sizes, even if it causes overflow.
    pub min_font_size: f32,

    /// Fraction of a block's height its font size may occupy.
    pub max_font_fill: f32,

    /// Marker emitted between pages during linearization.
    pub page_break_marker: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            page_width: 800.0,
            page_height: 1120.0,
            default_font_size: 12.0,
            min_font_size: 8.0,
            max_font_fill: 0.85,
            page_break_marker: "\n\n".to_string(),
        }
    }

    /// Set the target canvas size in pixels.
    pub fn with_canvas(mut self, width: f32, height: f32) -> Self {
        self.page_width = width;
        self.page_height = height;
        self
    }

    /// Set the font size assumed for blocks without font information.
    pub fn with_default_font_size(mut self, size: f32) -> Self {
        self.default_font_size = size;
        self
    }

    /// Set the page-break marker used by linearization.
    pub fn with_page_break_marker(mut self, marker: impl Into<String>) -> Self {
        self.page_break_marker = marker.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LayoutConfig::default();
        assert_eq!(config.page_width, 800.0);
        assert_eq!(config.page_height, 1120.0);
        assert_eq!(config.default_font_size, 12.0);
        assert_eq!(config.page_break_marker, "\n\n");
    }

    #[test]
    fn test_builder_methods() {
        let config = LayoutConfig::new()
            .with_canvas(400.0, 560.0)
            .with_default_font_size(10.0)
            .with_page_break_marker("\n---\n");
        assert_eq!(config.page_width, 400.0);
        assert_eq!(config.page_height, 560.0);
        assert_eq!(config.default_font_size, 10.0);
        assert_eq!(config.page_break_marker, "\n---\n");
    }
}
