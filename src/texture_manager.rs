use egui::{ColorImage, Context, TextureHandle, TextureId, TextureOptions};
use std::collections::HashMap;
use thiserror::Error;

use crate::error::ImageIntakeError;
use crate::file_handler::decode_data_url;

/// Errors that can occur while turning an image source into pixels
#[derive(Error, Debug)]
pub enum TextureGenerationError {
    #[error("Failed to load image source: {0}")]
    Source(#[from] ImageIntakeError),
    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Caches GPU textures for image sources, evicting the least recently used
pub struct TextureManager {
    /// Decoded textures by source; `None` marks a source that failed
    texture_cache: HashMap<String, Option<TextureHandle>>,
    /// Tracks when each texture was last used
    last_used: HashMap<String, u64>,
    /// Number of textures uploaded so far, used to name them
    uploaded: u64,
    /// Current frame counter for LRU tracking
    current_frame: u64,
    /// Maximum number of textures to cache
    max_cache_size: usize,
}

impl Default for TextureManager {
    fn default() -> Self {
        Self::new(64)
    }
}

/// Decode a data URL (or a file path on native) into an egui image
pub fn decode_image_source(src: &str) -> Result<ColorImage, TextureGenerationError> {
    let bytes = if src.starts_with("data:") {
        decode_data_url(src)?
    } else {
        std::fs::read(src).map_err(ImageIntakeError::from)?
    };
    let rgba = image::load_from_memory(&bytes)?.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

impl TextureManager {
    /// Creates a new texture manager with the specified cache size
    pub fn new(max_cache_size: usize) -> Self {
        Self {
            texture_cache: HashMap::new(),
            last_used: HashMap::new(),
            uploaded: 0,
            current_frame: 0,
            max_cache_size: max_cache_size.max(1),
        }
    }

    /// Increments the frame counter, should be called at the start of each frame
    pub fn begin_frame(&mut self) {
        self.current_frame += 1;
    }

    /// Texture for an image source, decoding it on first use
    pub fn texture_for(&mut self, ctx: &Context, src: &str) -> Option<TextureId> {
        self.get_or_create_texture(ctx, src, || decode_image_source(src))
    }

    /// Gets or creates a texture for the given source using `generator`
    pub fn get_or_create_texture<F>(&mut self, ctx: &Context, src: &str, generator: F) -> Option<TextureId>
    where
        F: FnOnce() -> Result<ColorImage, TextureGenerationError>,
    {
        if let Some(cached) = self.texture_cache.get(src) {
            let id = cached.as_ref().map(TextureHandle::id);
            self.last_used.insert(src.to_owned(), self.current_frame);
            return id;
        }

        self.prune_cache_if_needed();

        let handle = match generator() {
            Ok(image) => {
                self.uploaded += 1;
                let name = format!("slide_image_{}", self.uploaded);
                Some(ctx.load_texture(name, image, TextureOptions::LINEAR))
            }
            Err(err) => {
                log::warn!("Could not build texture for image source: {err}");
                None
            }
        };
        let id = handle.as_ref().map(TextureHandle::id);

        self.texture_cache.insert(src.to_owned(), handle);
        self.last_used.insert(src.to_owned(), self.current_frame);
        id
    }

    /// Makes room for one more entry
    fn prune_cache_if_needed(&mut self) {
        if self.texture_cache.len() < self.max_cache_size {
            return;
        }

        let mut entries: Vec<(String, u64)> = self
            .last_used
            .iter()
            .map(|(src, frame)| (src.clone(), *frame))
            .collect();

        // Oldest first
        entries.sort_by_key(|(_, frame)| *frame);

        let to_remove = entries.len() + 1 - self.max_cache_size;
        for (src, _) in entries.iter().take(to_remove) {
            self.texture_cache.remove(src);
            self.last_used.remove(src);
        }
    }

    /// Clears all textures from the cache
    pub fn clear_cache(&mut self) {
        self.texture_cache.clear();
        self.last_used.clear();
    }

    /// Returns the number of sources currently in the cache
    pub fn cache_size(&self) -> usize {
        self.texture_cache.len()
    }

    #[cfg(test)]
    fn is_cached(&self, src: &str) -> bool {
        self.texture_cache.contains_key(src)
    }
}
