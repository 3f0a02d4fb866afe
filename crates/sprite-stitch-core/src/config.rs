use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Layout strategies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
    /// Growing binary-tree bin packer over items sorted by descending height.
    Packed,
    /// One row per source directory, items ordered by path within the row.
    DirectoryBased,
    /// Uniform grid with a fixed number of items per row.
    FixedDimension,
}

impl FromStr for LayoutKind {
    type Err = ();
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "packed" => Ok(Self::Packed),
            "directory_based" | "directorybased" | "directory" => Ok(Self::DirectoryBased),
            "fixed_dimension" | "fixeddimension" | "fixed" => Ok(Self::FixedDimension),
            _ => Err(()),
        }
    }
}

/// Sheet layout configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetConfig {
    /// Strategy used to place items.
    #[serde(default = "default_layout")]
    pub layout: LayoutKind,
    /// Items per row for the FixedDimension strategy (>= 1).
    #[serde(default = "default_items_per_row")]
    pub items_per_row: u32,
    /// Trim transparent borders before layout.
    #[serde(default = "default_trim")]
    pub trim: bool,
    /// Alpha value treated as transparent padding when trimming.
    #[serde(default)]
    pub padding_alpha: u8,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            layout: default_layout(),
            items_per_row: default_items_per_row(),
            trim: default_trim(),
            padding_alpha: 0,
        }
    }
}

impl SheetConfig {
    /// Validates the configuration parameters.
    pub fn validate(&self) -> crate::error::Result<()> {
        use crate::error::StitchError;

        if self.items_per_row == 0 {
            return Err(StitchError::InvalidConfig(
                "items_per_row must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Create a fluent builder for `SheetConfig`.
    pub fn builder() -> SheetConfigBuilder {
        SheetConfigBuilder::new()
    }
}

fn default_layout() -> LayoutKind {
    LayoutKind::Packed
}
fn default_items_per_row() -> u32 {
    16
}
fn default_trim() -> bool {
    true
}

/// Builder for `SheetConfig` for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct SheetConfigBuilder {
    cfg: SheetConfig,
}

impl SheetConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: SheetConfig::default(),
        }
    }
    pub fn layout(mut self, v: LayoutKind) -> Self {
        self.cfg.layout = v;
        self
    }
    pub fn items_per_row(mut self, v: u32) -> Self {
        self.cfg.items_per_row = v;
        self
    }
    pub fn trim(mut self, v: bool) -> Self {
        self.cfg.trim = v;
        self
    }
    pub fn padding_alpha(mut self, v: u8) -> Self {
        self.cfg.padding_alpha = v;
        self
    }
    pub fn build(self) -> SheetConfig {
        self.cfg
    }
}
