use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::shop::ShopState;
use crate::weather::{TemperatureRange, TEMP_MAX, TEMP_MIN};

fn default_starting_cash() -> f64 {
    ShopState::STARTING_CASH
}

fn default_starting_inventory() -> u32 {
    ShopState::STARTING_INVENTORY
}

fn default_temp_min() -> i32 {
    TEMP_MIN
}

fn default_temp_max() -> i32 {
    TEMP_MAX
}

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub description: Option<String>,
    pub seed: u64,
    #[serde(default)]
    pub days: Option<u64>,
    #[serde(default = "default_starting_cash")]
    pub starting_cash: f64,
    #[serde(default = "default_starting_inventory")]
    pub starting_inventory: u32,
    #[serde(default)]
    pub temperature: TemperatureConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TemperatureConfig {
    #[serde(default = "default_temp_min")]
    pub min: i32,
    #[serde(default = "default_temp_max")]
    pub max: i32,
}

impl Default for TemperatureConfig {
    fn default() -> Self {
        Self {
            min: default_temp_min(),
            max: default_temp_max(),
        }
    }
}

pub struct ScenarioLoader {
    base_dir: PathBuf,
}

impl ScenarioLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, file: impl AsRef<Path>) -> Result<Scenario> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read scenario file {}", path.display()))?;
        let scenario: Scenario = serde_yaml::from_str(&data)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(scenario)
    }
}

impl Scenario {
    pub fn build_shop(
        &self,
        player_name: impl Into<String>,
        shop_name: impl Into<String>,
    ) -> Result<ShopState> {
        let range = TemperatureRange::new(self.temperature.min, self.temperature.max)
            .with_context(|| format!("Invalid temperature range in scenario '{}'", self.name))?;
        Ok(ShopState::new(
            player_name,
            shop_name,
            self.starting_cash,
            self.starting_inventory,
            range,
        ))
    }

    pub fn days(&self, override_days: Option<u64>) -> u64 {
        override_days.or(self.days).unwrap_or(30)
    }
}
