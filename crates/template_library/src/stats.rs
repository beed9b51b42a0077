//! Summary statistics for an assembled template

use page_model::Page;
use serde::{Deserialize, Serialize};

/// Counts the import flow reports after a template lands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateStats {
    pub block_count: usize,
    /// Blocks with an entry animation
    pub animated: usize,
    /// Blocks with any hover transform
    pub hover_effects: usize,
    /// Blocks with a gradient background
    pub gradients: usize,
}

impl TemplateStats {
    pub fn for_page(page: &Page) -> Self {
        Self {
            block_count: page.block_count(),
            animated: page.blocks.iter().filter(|b| b.styles.is_animated()).count(),
            hover_effects: page
                .blocks
                .iter()
                .filter(|b| b.styles.has_hover_effect())
                .count(),
            gradients: page.blocks.iter().filter(|b| b.styles.has_gradient()).count(),
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "{} blocks ({} animated, {} with hover effects, {} with gradients)",
            self.block_count, self.animated, self.hover_effects, self.gradients
        )
    }
}
