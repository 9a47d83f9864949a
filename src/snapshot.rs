//! Save-file persistence.
//!
//! The in-memory shop is decoupled from the storage format through
//! [`ShopSnapshot`], a plain-data mirror of everything a save needs. Saves
//! are JSON with a small metadata block; round-trip fidelity is the only
//! format contract.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shop::{SalesRecord, ShopState};
use crate::weather::TemperatureRange;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("save io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("save format error: {0}")]
    Format(#[from] serde_json::Error),
}

/// Plain-data form of a shop, suitable for serialization. The temperature
/// population is rebuilt from the range on restore rather than stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopSnapshot {
    pub player_name: String,
    pub shop_name: String,
    pub day: u32,
    pub cash: f64,
    pub inventory: u32,
    pub range: TemperatureRange,
    pub sales: Vec<SalesRecord>,
}

impl ShopSnapshot {
    pub fn of(shop: &ShopState) -> Self {
        Self {
            player_name: shop.player_name().to_string(),
            shop_name: shop.shop_name().to_string(),
            day: shop.day(),
            cash: shop.cash(),
            inventory: shop.inventory(),
            range: shop.range(),
            sales: shop.sales().to_vec(),
        }
    }

    pub fn restore(self) -> ShopState {
        ShopState::from_parts(
            self.player_name,
            self.shop_name,
            self.day,
            self.cash,
            self.inventory,
            self.range,
            self.sales,
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveMetadata {
    pub saved_at: String,
    pub day: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveFile {
    pub metadata: SaveMetadata,
    pub shop: ShopSnapshot,
}

/// Writes and reads save files at a fixed path.
pub struct SaveManager {
    path: PathBuf,
}

impl SaveManager {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self, shop: &ShopState) -> Result<(), SaveError> {
        let file = SaveFile {
            metadata: SaveMetadata {
                saved_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
                day: shop.day(),
            },
            shop: ShopSnapshot::of(shop),
        };
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(&file)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<SaveFile, SaveError> {
        let contents = fs::read_to_string(path)?;
        let file: SaveFile = serde_json::from_str(&contents)?;
        Ok(file)
    }
}
