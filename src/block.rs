//! Extraction-result wire shapes.
//!
//! These types mirror the JSON the extraction backend returns for one
//! document processed by one model: summary metadata plus a flat list of
//! positioned text blocks. Results are immutable once decoded; the session
//! cache only ever replaces them wholesale.

use serde::{Deserialize, Serialize};

use crate::bbox::BBox;
use crate::error::{Error, Result};

fn default_page() -> u32 {
    1
}

/// Font attributes reported for a text block, all optional.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FontInfo {
    /// Font family name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_name: Option<String>,
    /// Font size in document units
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    /// Bold flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    /// Italic flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    /// Packed RGB color value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<i64>,
}

/// One extracted text block with its position on the page.
///
/// Immutable once produced by extraction. `page` is 1-based and defaults to
/// 1 when the model omits it; `reading_order` is an explicit human-intended
/// sequence number some models emit and others do not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    /// 1-based page number
    #[serde(default = "default_page")]
    pub page: u32,
    /// Extracted text content
    pub content: String,
    /// Position on the page, in one of the two wire schemas
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<BBox>,
    /// Model-reported block classification (paragraph, heading, table, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_type: Option<String>,
    /// Model confidence for this block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
    /// Explicit reading-order sequence number, when the model emits one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading_order: Option<i64>,
    /// Font attributes, when the model emits them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_info: Option<FontInfo>,
}

impl TextBlock {
    /// Create a minimal block with just a page and content.
    pub fn new(page: u32, content: impl Into<String>) -> Self {
        Self {
            page,
            content: content.into(),
            bbox: None,
            block_type: None,
            confidence: None,
            reading_order: None,
            font_info: None,
        }
    }

    /// Attach a bounding box.
    pub fn with_bbox(mut self, bbox: BBox) -> Self {
        self.bbox = Some(bbox);
        self
    }

    /// Attach an explicit reading-order sequence number.
    pub fn with_reading_order(mut self, order: i64) -> Self {
        self.reading_order = Some(order);
        self
    }
}

/// Summary counts reported alongside the extracted blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExtractionMetadata {
    /// Total pages in the source document
    #[serde(default)]
    pub total_pages: u32,
    /// Total text blocks extracted
    #[serde(default)]
    pub total_text_blocks: u32,
    /// Total tables detected
    #[serde(default)]
    pub total_tables: u32,
}

/// The content payload of an extraction result.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExtractionContent {
    /// The extracted text blocks, in wire order
    #[serde(default)]
    pub text_blocks: Vec<TextBlock>,
}

/// The structured output for one document processed by one model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Name of the model that produced this result
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Summary counts
    #[serde(default)]
    pub metadata: ExtractionMetadata,
    /// Extracted content
    #[serde(default)]
    pub content: ExtractionContent,
}

impl ExtractionResult {
    /// Decode an extraction result from its wire JSON.
    ///
    /// Some deployments wrap the payload one level deeper under a `data`
    /// envelope; that envelope is unwrapped here before decoding.
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        let unwrapped = match value {
            serde_json::Value::Object(mut map) if map.contains_key("data") => map
                .remove("data")
                .ok_or_else(|| Error::MalformedResult("empty data envelope".to_string()))?,
            other => other,
        };
        if !unwrapped.is_object() {
            return Err(Error::MalformedResult(format!(
                "expected a JSON object, found {}",
                json_type_name(&unwrapped)
            )));
        }
        Ok(serde_json::from_value(unwrapped)?)
    }

    /// Decode an extraction result from raw JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Self::from_json(serde_json::from_str(text)?)
    }

    /// The extracted text blocks, in wire order.
    pub fn blocks(&self) -> &[TextBlock] {
        &self.content.text_blocks
    }

    /// Blocks belonging to one 1-based page, in wire order.
    pub fn blocks_for_page(&self, page: u32) -> Vec<&TextBlock> {
        self.content
            .text_blocks
            .iter()
            .filter(|b| b.page.max(1) == page)
            .collect()
    }

    /// Total pages, never below 1.
    pub fn total_pages(&self) -> u32 {
        self.metadata.total_pages.max(1)
    }

    /// Whitespace-separated word count over all block contents.
    pub fn word_count(&self) -> usize {
        self.content
            .text_blocks
            .iter()
            .map(|b| b.content.split_whitespace().count())
            .sum()
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
