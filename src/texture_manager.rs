use std::collections::HashMap;
use std::sync::Arc;

use egui::{Context, ImageData, TextureHandle, TextureId, TextureOptions};

use crate::document::Document;
use crate::element::{ElementId, ImageSource};

/// Owns the GPU textures of uploaded images, one per image element.
///
/// A texture lives exactly as long as its element: once the element is gone
/// from the document the handle is dropped and egui frees the texture.
#[derive(Default)]
pub struct TextureManager {
    textures: HashMap<ElementId, TextureHandle>,
}

impl std::fmt::Debug for TextureManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextureManager")
            .field("textures", &self.textures.len())
            .finish()
    }
}

impl TextureManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets or uploads the texture for an image element
    pub fn texture_for(&mut self, ctx: &Context, element_id: ElementId, source: &ImageSource) -> TextureId {
        self.textures
            .entry(element_id)
            .or_insert_with(|| {
                log::debug!("Uploading texture for image element {}", element_id);
                ctx.load_texture(
                    format!("upload-{}", source.key()),
                    ImageData::Color(Arc::clone(source.pixels())),
                    TextureOptions::LINEAR,
                )
            })
            .id()
    }

    /// Drop the textures of every element no longer in the document.
    /// Returns how many were released.
    pub fn release_missing(&mut self, document: &Document) -> usize {
        let before = self.textures.len();
        self.textures.retain(|id, _| document.contains(*id));
        let released = before - self.textures.len();
        if released > 0 {
            log::info!("Released {} image texture(s)", released);
        }
        released
    }

    /// Returns the number of textures currently held
    pub fn cache_size(&self) -> usize {
        self.textures.len()
    }
}
