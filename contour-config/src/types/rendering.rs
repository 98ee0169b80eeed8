//! Renderer and inline image settings.

use crate::defaults;
use serde::{Deserialize, Serialize};

/// Rendering backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RenderingBackend {
    /// Let the platform plugin decide
    #[default]
    Default,
    /// Hardware accelerated OpenGL
    OpenGL,
    /// CPU rasterizer
    Software,
}

/// Renderer settings shared by all profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RendererConfig {
    pub backend: RenderingBackend,
    /// Slots in the glyph tile hash table; rounded up to a power of two by the renderer.
    pub tile_hashtable_slots: usize,
    /// Number of glyph tiles kept in the texture atlas.
    pub tile_cache_count: usize,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            backend: RenderingBackend::Default,
            tile_hashtable_slots: defaults::tile_hashtable_slots(),
            tile_cache_count: defaults::tile_cache_count(),
        }
    }
}

/// Sixel and inline image limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImagesConfig {
    /// Scroll the screen when a sixel image reaches the bottom margin.
    pub sixel_scrolling: bool,
    /// Color registers available to a sixel image.
    pub sixel_register_count: usize,
    /// Maximum image width in pixels; 0 uses the screen width.
    pub max_width: u32,
    /// Maximum image height in pixels; 0 uses the screen height.
    pub max_height: u32,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            sixel_scrolling: true,
            sixel_register_count: defaults::sixel_register_count(),
            max_width: 0,
            max_height: 0,
        }
    }
}
