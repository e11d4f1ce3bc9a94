//! Display options consumed by the ASCII and LaTeX renderers

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DynkinError, Result};

/// Where the special (affine) node gets a distinguished rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MarkSpecialNode {
    #[default]
    None,
    Printing,
    Latex,
    Both,
}

impl MarkSpecialNode {
    /// Whether ASCII art should use `special_node_str` for the affine node.
    pub fn marks_printing(self) -> bool {
        matches!(self, MarkSpecialNode::Printing | MarkSpecialNode::Both)
    }

    /// Whether LaTeX output should fill the affine node black.
    pub fn marks_latex(self) -> bool {
        matches!(self, MarkSpecialNode::Latex | MarkSpecialNode::Both)
    }
}

impl FromStr for MarkSpecialNode {
    type Err = DynkinError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(MarkSpecialNode::None),
            "printing" => Ok(MarkSpecialNode::Printing),
            "latex" => Ok(MarkSpecialNode::Latex),
            "both" => Ok(MarkSpecialNode::Both),
            _ => Err(DynkinError::InvalidOption {
                option: "mark_special_node",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for MarkSpecialNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MarkSpecialNode::None => "none",
            MarkSpecialNode::Printing => "printing",
            MarkSpecialNode::Latex => "latex",
            MarkSpecialNode::Both => "both",
        };
        f.write_str(s)
    }
}

/// Rendering configuration, passed explicitly into every rendering call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayOptions {
    pub mark_special_node: MarkSpecialNode,
    /// Glyph replacing `O` for the affine node in ASCII art.
    pub special_node_str: String,
    /// Suffix marking dual types in printed names.
    pub dual_str: String,
    /// Suffix marking dual types in LaTeX names.
    pub dual_latex: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        DisplayOptions {
            mark_special_node: MarkSpecialNode::None,
            special_node_str: "O".to_string(),
            dual_str: "*".to_string(),
            dual_latex: "\\vee".to_string(),
        }
    }
}

impl DisplayOptions {
    /// Parse options from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let options: DisplayOptions = toml::from_str(content)?;
        options.validate()?;
        Ok(options)
    }

    /// Read options from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let options = Self::from_toml_str(&content)?;
        tracing::debug!("Display options loaded from {}", path.display());
        Ok(options)
    }

    pub fn validate(&self) -> Result<()> {
        if self.special_node_str.is_empty() {
            return Err(DynkinError::InvalidOption {
                option: "special_node_str",
                value: self.special_node_str.clone(),
            });
        }
        Ok(())
    }

    pub fn with_mark_special_node(mut self, mark: MarkSpecialNode) -> Self {
        self.mark_special_node = mark;
        self
    }

    pub fn with_special_node_str(mut self, glyph: impl Into<String>) -> Self {
        self.special_node_str = glyph.into();
        self
    }

    /// Glyph for the affine node in ASCII art.
    pub fn special_glyph(&self) -> &str {
        if self.mark_special_node.marks_printing() {
            &self.special_node_str
        } else {
            "O"
        }
    }

    /// TikZ fill colour for the affine node.
    pub fn special_fill(&self) -> &'static str {
        if self.mark_special_node.marks_latex() {
            "black"
        } else {
            "white"
        }
    }
}
