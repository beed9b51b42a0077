//! Style descriptor attached to every block
//!
//! A fixed bag of named presentation tokens drawn from the application's
//! style vocabulary (Tailwind-flavored strings such as `"2xl"`, `"fade-in"`,
//! `"from-primary/5 via-accent/5 to-secondary/5"`). The descriptor is opaque
//! to every transform in this workspace: translation copies it by value and
//! never reads or rewrites a token.

use serde::{Deserialize, Serialize};

/// Presentation property bag for a block.
///
/// Equality is structural; two descriptors are equal when every token
/// matches. All tokens are strings, including numeric-looking ones such as
/// `animation_duration` ("700") and `opacity` ("100"), since the dashboard
/// edits them as raw vocabulary values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleDescriptor {
    /// Background kind ("transparent", "gradient", a color token)
    pub background_color: String,
    /// Gradient stops, meaningful when `background_color` is "gradient"
    pub background_gradient: String,
    pub text_color: String,
    pub padding: String,
    pub margin: String,
    pub border_radius: String,
    pub border_width: String,
    pub border_color: String,
    pub shadow: String,
    /// Entry animation name ("none", "fade-in", "fade-in-up")
    pub animation: String,
    pub animation_duration: String,
    pub animation_delay: String,
    pub hover_scale: String,
    pub hover_rotate: String,
    pub hover_translate_x: String,
    pub hover_translate_y: String,
    pub hover_shadow: String,
    pub text_align: String,
    pub max_width: String,
    pub backdrop_blur: String,
    pub opacity: String,
}

impl StyleDescriptor {
    /// Create a descriptor with the neutral defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the block animates on entry
    pub fn is_animated(&self) -> bool {
        self.animation != "none"
    }

    /// Whether any hover transform is active
    pub fn has_hover_effect(&self) -> bool {
        self.hover_scale != "none"
            || self.hover_rotate != "0"
            || self.hover_translate_x != "0"
            || self.hover_translate_y != "0"
    }

    /// Whether the background is a gradient
    pub fn has_gradient(&self) -> bool {
        self.background_color == "gradient"
    }
}

impl Default for StyleDescriptor {
    fn default() -> Self {
        Self {
            background_color: "transparent".to_string(),
            background_gradient: "none".to_string(),
            text_color: "foreground".to_string(),
            padding: "0".to_string(),
            margin: "0".to_string(),
            border_radius: "none".to_string(),
            border_width: "0".to_string(),
            border_color: "border".to_string(),
            shadow: "none".to_string(),
            animation: "none".to_string(),
            animation_duration: "0".to_string(),
            animation_delay: "0".to_string(),
            hover_scale: "none".to_string(),
            hover_rotate: "0".to_string(),
            hover_translate_x: "0".to_string(),
            hover_translate_y: "0".to_string(),
            hover_shadow: "none".to_string(),
            text_align: "left".to_string(),
            max_width: "full".to_string(),
            backdrop_blur: "none".to_string(),
            opacity: "100".to_string(),
        }
    }
}
