pub mod engine;
pub mod input;
pub mod sales;
pub mod scenario;
pub mod shop;
pub mod snapshot;
pub mod weather;

pub use engine::{GameLoop, Outcome};
pub use scenario::{Scenario, ScenarioLoader};
pub use shop::{DayDecisions, DayResult, SalesRecord, ShopState};
pub use snapshot::{SaveManager, ShopSnapshot};
pub use weather::{SeededSampler, TemperaturePopulation, TemperatureRange, WeatherSampler};
