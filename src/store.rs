//! Cake document files
//!
//! Loading always goes through [`LayerCake::from_json_str`], so a file on
//! disk gets the same validation as any other input.

use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::cake::LayerCake;
use crate::error::{LayerCakeError, Result};

/// Load and validate a cake document.
pub fn load(path: &Path) -> Result<LayerCake> {
    if !path.exists() {
        return Err(LayerCakeError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    debug!("Loading cake: {}", path.display());
    let content = fs::read_to_string(path).map_err(|e| LayerCakeError::FileReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    LayerCake::from_json_str(&content)
}

/// Save a cake as pretty-printed JSON.
pub fn save(cake: &LayerCake, path: &Path) -> Result<()> {
    cake.validate()?;
    let content = cake.to_json_string()?;
    fs::write(path, content).map_err(|e| LayerCakeError::FileWriteError {
        path: path.to_path_buf(),
        source: e,
    })?;

    info!("Saved cake: {}", path.display());
    Ok(())
}
