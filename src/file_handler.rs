use std::path::PathBuf;
use std::sync::Arc;

use egui::ColorImage;
use parking_lot::Mutex;

use crate::element::ImageSource;
use crate::error::{WorkspaceError, WorkspaceResult};

/// Extensions accepted by the upload picker and by drag and drop
pub const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// A file chosen by the user but not yet turned into an image element
#[derive(Debug, Clone)]
struct PendingFile {
    name: String,
    bytes: Option<Arc<[u8]>>,
    path: Option<PathBuf>,
}

/// Files waiting to be decoded. Shared with picker tasks that finish after
/// the frame that started them.
type PendingQueue = Arc<Mutex<Vec<PendingFile>>>;

/// Collects image files from the upload picker and from drag and drop.
///
/// The queue is drained every time it is read, so picking the same file
/// twice uploads it twice.
#[derive(Debug, Default)]
pub struct FileHandler {
    pending: PendingQueue,
    /// Woken when a web picker task delivers files
    #[cfg(target_arch = "wasm32")]
    repaint: Option<egui::Context>,
}

impl FileHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.lock().is_empty()
    }

    /// Open the native multi-select image picker and queue whatever was chosen
    #[cfg(not(target_arch = "wasm32"))]
    pub fn pick_images(&mut self) {
        let Some(paths) = rfd::FileDialog::new()
            .set_title("Upload Image")
            .add_filter("Images", &IMAGE_EXTENSIONS)
            .pick_files()
        else {
            log::debug!("Image picker cancelled");
            return;
        };

        let mut pending = self.pending.lock();
        for path in paths {
            pending.push(PendingFile {
                name: path.display().to_string(),
                bytes: None,
                path: Some(path),
            });
        }
    }

    /// Open the browser's file input. The chosen files are read in the
    /// background and show up in the queue on a later frame.
    #[cfg(target_arch = "wasm32")]
    pub fn pick_images(&mut self) {
        let pending = Arc::clone(&self.pending);
        let repaint = self.repaint.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let Some(handles) = rfd::AsyncFileDialog::new()
                .set_title("Upload Image")
                .add_filter("Images", &IMAGE_EXTENSIONS)
                .pick_files()
                .await
            else {
                log::debug!("Image picker cancelled");
                return;
            };

            for handle in handles {
                let name = handle.file_name();
                let bytes = handle.read().await;
                log::debug!("Read {} ({} bytes) from the file input", name, bytes.len());
                pending.lock().push(PendingFile {
                    name,
                    bytes: Some(bytes.into()),
                    path: None,
                });
            }

            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });
    }

    /// Queue any image files dropped on the window this frame.
    /// Returns true if anything was queued.
    pub fn check_for_dropped_files(&mut self, ctx: &egui::Context) -> bool {
        #[cfg(target_arch = "wasm32")]
        if self.repaint.is_none() {
            self.repaint = Some(ctx.clone());
        }

        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        let mut queued = false;

        for file in dropped {
            let name = if let Some(path) = &file.path {
                path.display().to_string()
            } else if !file.name.is_empty() {
                file.name.clone()
            } else {
                "unknown".to_owned()
            };

            if !is_image_file(&file) {
                log::warn!("Dropped file is not a supported type: {}", name);
                continue;
            }

            self.pending.lock().push(PendingFile {
                name,
                bytes: file.bytes.clone(),
                path: file.path.clone(),
            });
            queued = true;
        }

        queued
    }

    /// Queue raw file contents, e.g. from a test or another front end
    pub fn queue_bytes(&mut self, name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) {
        self.pending.lock().push(PendingFile {
            name: name.into(),
            bytes: Some(bytes.into()),
            path: None,
        });
    }

    /// Decode every queued file, in order, and empty the queue.
    ///
    /// Files that cannot be read or decoded are logged and skipped.
    pub fn take_images(&mut self) -> Vec<ImageSource> {
        let files = std::mem::take(&mut *self.pending.lock());
        files
            .into_iter()
            .filter_map(|file| match load_pending(file) {
                Ok(source) => Some(source),
                Err(err) => {
                    log::error!("Skipping upload: {}", err);
                    None
                }
            })
            .collect()
    }

    /// Darken the window while files are dragged over it
    pub fn preview_files_being_dropped(&self, ctx: &egui::Context) {
        use egui::{Align2, Color32, FontId, Id, LayerId, Order};

        if ctx.input(|i| i.raw.hovered_files.is_empty()) {
            return;
        }

        let text = ctx.input(|i| {
            let mut text = "Dropping files:\n".to_owned();
            for file in &i.raw.hovered_files {
                if let Some(path) = &file.path {
                    text += &format!("\n{}", path.display());
                } else if !file.mime.is_empty() {
                    text += &format!("\n{}", file.mime);
                } else {
                    text += "\n(Path not available)";
                }
            }
            text
        });

        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("file_drop_target")));
        let screen_rect = ctx.screen_rect();
        painter.rect_filled(screen_rect, 0.0, Color32::from_black_alpha(192));
        painter.text(
            screen_rect.center(),
            Align2::CENTER_CENTER,
            text,
            FontId::proportional(20.0),
            Color32::WHITE,
        );
    }
}

/// Check if a dropped file is an image based on MIME type or extension
fn is_image_file(file: &egui::DroppedFile) -> bool {
    if !file.mime.is_empty() {
        return file.mime.starts_with("image/");
    }
    if let Some(path) = &file.path {
        return has_image_extension(&path.to_string_lossy());
    }
    has_image_extension(&file.name)
}

/// Whether a file name ends in one of the accepted image extensions
pub fn has_image_extension(name: &str) -> bool {
    name.rsplit_once('.')
        .map(|(_, ext)| {
            let ext = ext.to_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

fn load_pending(file: PendingFile) -> WorkspaceResult<ImageSource> {
    if let Some(bytes) = &file.bytes {
        log::info!("Processing image from memory: {} ({} bytes)", file.name, bytes.len());
        return decode_image(file.name, bytes);
    }

    match file.path {
        #[cfg(not(target_arch = "wasm32"))]
        Some(path) => {
            log::info!("Processing image from path: {}", path.display());
            let bytes = std::fs::read(&path).map_err(|source| WorkspaceError::FileRead {
                name: file.name.clone(),
                source,
            })?;
            decode_image(file.name, &bytes)
        }
        _ => Err(WorkspaceError::FileRead {
            name: file.name,
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no accessible data"),
        }),
    }
}

/// Decode an encoded image (PNG, JPEG, ...) into an image source
pub fn decode_image(name: impl Into<String>, bytes: &[u8]) -> WorkspaceResult<ImageSource> {
    let name = name.into();
    let decoded = image::load_from_memory(bytes).map_err(|source| WorkspaceError::ImageDecode {
        name: name.clone(),
        source,
    })?;
    log::debug!("Decoded image {}: {}x{}", name, decoded.width(), decoded.height());

    let rgba = decoded.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    let pixels = ColorImage::from_rgba_unmultiplied(size, rgba.as_flat_samples().as_slice());
    Ok(ImageSource::new(name, pixels))
}
