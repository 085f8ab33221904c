//! Decoded image previews
//!
//! Turns [`ImagePreview`] bytes into an egui texture. The texture is cached
//! for the bytes it was built from, so a preview is decoded once rather than
//! every frame.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use eframe::egui;

use crate::error::Result;
use crate::tools::ImagePreview;

/// Largest edge a preview is drawn at
pub const MAX_PREVIEW_EDGE: f32 = 320.0;

/// Decode PNG/JPEG bytes into an egui image
pub fn decode_color_image(bytes: &[u8]) -> Result<egui::ColorImage> {
    let image = image::load_from_memory(bytes)?;
    let rgba = image.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

fn fingerprint(bytes: &[u8]) -> u64 {
    let mut hasher = DefaultHasher::new();
    bytes.hash(&mut hasher);
    hasher.finish()
}

/// Preview size that fits within [`MAX_PREVIEW_EDGE`], keeping aspect ratio
pub fn fit_size(size: egui::Vec2) -> egui::Vec2 {
    let longest = size.x.max(size.y);
    if longest <= MAX_PREVIEW_EDGE || longest <= 0.0 {
        size
    } else {
        size * (MAX_PREVIEW_EDGE / longest)
    }
}

#[derive(Default)]
enum CacheEntry {
    #[default]
    Empty,
    Ready(u64, egui::TextureHandle),
    Failed(u64),
}

/// Texture for the current preview
#[derive(Default)]
pub struct ImagePreviewCache {
    entry: CacheEntry,
}

impl ImagePreviewCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Texture for `preview`, decoding it on first use.
    ///
    /// Returns `None` when the bytes carry an image signature but do not
    /// decode.
    pub fn texture(
        &mut self,
        ctx: &egui::Context,
        preview: &ImagePreview,
    ) -> Option<&egui::TextureHandle> {
        let key = fingerprint(&preview.bytes);

        let cached = match &self.entry {
            CacheEntry::Ready(k, _) | CacheEntry::Failed(k) => *k == key,
            CacheEntry::Empty => false,
        };

        if !cached {
            self.entry = match decode_color_image(&preview.bytes) {
                Ok(image) => {
                    debug!(
                        "Decoded {} preview {}x{}",
                        preview.format.mime(),
                        image.size[0],
                        image.size[1]
                    );
                    let texture =
                        ctx.load_texture("base64-preview", image, egui::TextureOptions::LINEAR);
                    CacheEntry::Ready(key, texture)
                }
                Err(e) => {
                    warn!("Image preview failed: {}", e);
                    CacheEntry::Failed(key)
                }
            };
        }

        match &self.entry {
            CacheEntry::Ready(_, texture) => Some(texture),
            _ => None,
        }
    }

    /// Drop the cached texture
    pub fn clear(&mut self) {
        self.entry = CacheEntry::Empty;
    }
}
