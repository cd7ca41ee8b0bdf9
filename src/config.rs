use std::path::Path;

use egui::{Pos2, Vec2};
use serde::Deserialize;

use crate::error::{WorkspaceError, WorkspaceResult};

/// Environment variable naming an optional JSON config file
pub const CONFIG_ENV_VAR: &str = "POSTER_IO_CONFIG";

/// Tunables for the workspace. Every field may be omitted from the file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)] // missing fields fall back to the defaults below
pub struct WorkspaceConfig {
    /// Where newly added text lands, in canvas units
    pub text_position: [f32; 2],
    /// Display size of uploaded images
    pub image_size: [f32; 2],
    /// Uploaded images are scattered over `[0, image_scatter)` on both axes
    pub image_scatter: f32,
    /// Size of the poster page
    pub page_size: [f32; 2],
    pub dark_mode: bool,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            text_position: [50.0, 50.0],
            image_size: [200.0, 200.0],
            image_scatter: 300.0,
            page_size: [600.0, 800.0],
            dark_mode: false,
        }
    }
}

impl WorkspaceConfig {
    pub fn from_json_str(json: &str) -> WorkspaceResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| WorkspaceError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> WorkspaceResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| WorkspaceError::FileRead {
            name: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Load the file named by `POSTER_IO_CONFIG`, falling back to defaults
    pub fn load_or_default() -> Self {
        let Ok(path) = std::env::var(CONFIG_ENV_VAR) else {
            return Self::default();
        };
        match Self::from_file(Path::new(&path)) {
            Ok(config) => {
                log::info!("Loaded workspace config from {}", path);
                config
            }
            Err(err) => {
                log::error!("Ignoring config {}: {}", path, err);
                Self::default()
            }
        }
    }

    fn validate(&self) -> WorkspaceResult<()> {
        if self.image_size.iter().any(|v| *v <= 0.0) {
            return Err(WorkspaceError::Config("image_size must be positive".to_owned()));
        }
        if self.page_size.iter().any(|v| *v <= 0.0) {
            return Err(WorkspaceError::Config("page_size must be positive".to_owned()));
        }
        if !self.image_scatter.is_finite() || self.image_scatter < 0.0 {
            return Err(WorkspaceError::Config("image_scatter must not be negative".to_owned()));
        }
        Ok(())
    }

    pub fn text_position(&self) -> Pos2 {
        Pos2::new(self.text_position[0], self.text_position[1])
    }

    pub fn image_size(&self) -> Vec2 {
        Vec2::new(self.image_size[0], self.image_size[1])
    }

    pub fn page_size(&self) -> Vec2 {
        Vec2::new(self.page_size[0], self.page_size[1])
    }
}
