//! The game loop: one day-step per turn until bankruptcy or the day cap.

use anyhow::{Context, Result};

use crate::input::{DayContext, InputProvider};
use crate::shop::{DayDecisions, DayResult, ShopState};
use crate::snapshot::SaveManager;
use crate::weather::WeatherSampler;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The shop survived every simulated day.
    Completed { days: u64 },
    /// Cash went negative after a day's settlement.
    Bankrupt { day: u32 },
}

pub struct GameLoop {
    shop: ShopState,
    sampler: Box<dyn WeatherSampler>,
    autosave: Option<SaveManager>,
}

impl GameLoop {
    pub fn new(shop: ShopState, sampler: Box<dyn WeatherSampler>) -> Self {
        Self {
            shop,
            sampler,
            autosave: None,
        }
    }

    /// Saves the shop after every completed day.
    pub fn with_autosave(mut self, saver: SaveManager) -> Self {
        self.autosave = Some(saver);
        self
    }

    pub fn shop(&self) -> &ShopState {
        &self.shop
    }

    /// Runs exactly one day: sample weather, collect decisions, settle.
    pub fn step_with(&mut self, input: &mut dyn InputProvider) -> Result<DayResult> {
        let temperature = self.sampler.next_from(self.shop.temperatures());
        input.begin_day(&DayContext {
            day: self.shop.day(),
            temperature,
            cash: self.shop.cash(),
            inventory: self.shop.inventory(),
        });
        let cup_price = input.prompt_float("What do you want to charge per cup of coffee?");
        let advertising =
            input.prompt_float("How much do you want to spend on advertising (0 for none)?");
        let restock = input.prompt_optional_int("Buy more coffee? (cups, blank for none)");
        let decisions = DayDecisions {
            cup_price,
            advertising,
            restock,
        };
        let result = self.shop.step(temperature, &decisions);
        if let Some(saver) = &self.autosave {
            saver
                .save(&self.shop)
                .with_context(|| format!("Failed to autosave to {}", saver.path().display()))?;
        }
        Ok(result)
    }

    /// Runs up to `max_days` days, handing each day's result to the hook.
    /// Stops early on bankruptcy.
    pub fn run_with_hook(
        &mut self,
        input: &mut dyn InputProvider,
        max_days: u64,
        mut hook: impl FnMut(&DayResult),
    ) -> Result<Outcome> {
        for _ in 0..max_days {
            let result = self.step_with(input)?;
            hook(&result);
            if result.bankrupt {
                return Ok(Outcome::Bankrupt { day: result.day });
            }
        }
        Ok(Outcome::Completed { days: max_days })
    }
}
