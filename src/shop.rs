//! Shop state and the day-step transition.

use serde::{Deserialize, Serialize};

use crate::sales;
use crate::weather::{TemperaturePopulation, TemperatureRange};

/// One day's ledger entry. Appended once per day, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub day: u32,
    pub inventory_at_start: u32,
    pub advertising: f64,
    pub temperature: i32,
    pub cup_price: f64,
    pub cups_sold: u32,
}

/// The player's decisions for one day. Negative price or advertising is
/// treated as zero; `restock` is a requested unit count, one currency each.
#[derive(Debug, Clone, Copy, Default)]
pub struct DayDecisions {
    pub cup_price: f64,
    pub advertising: f64,
    pub restock: Option<u32>,
}

/// Structured result of one day-step, emitted for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayResult {
    pub day: u32,
    pub temperature: i32,
    pub cash: f64,
    pub inventory: u32,
    pub cups_sold: u32,
    pub gross_profit: f64,
    pub restock_rejected: bool,
    pub ran_out_of_stock: bool,
    pub bankrupt: bool,
}

/// Mutable day-by-day state of one coffee shop.
///
/// The temperature population is built once at creation and shared by every
/// day's weather draw. The sales history is owned exclusively here; callers
/// only ever see it as a slice.
pub struct ShopState {
    player_name: String,
    shop_name: String,
    day: u32,
    cash: f64,
    inventory: u32,
    range: TemperatureRange,
    temperatures: TemperaturePopulation,
    sales: Vec<SalesRecord>,
    bankrupt: bool,
}

impl ShopState {
    pub const STARTING_CASH: f64 = 100.0;
    pub const STARTING_INVENTORY: u32 = 100;

    pub fn new(
        player_name: impl Into<String>,
        shop_name: impl Into<String>,
        starting_cash: f64,
        starting_inventory: u32,
        range: TemperatureRange,
    ) -> Self {
        Self {
            player_name: player_name.into(),
            shop_name: shop_name.into(),
            day: 1,
            cash: starting_cash,
            inventory: starting_inventory,
            range,
            temperatures: TemperaturePopulation::build(range),
            sales: Vec::new(),
            bankrupt: false,
        }
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn shop_name(&self) -> &str {
        &self.shop_name
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn cash(&self) -> f64 {
        self.cash
    }

    pub fn inventory(&self) -> u32 {
        self.inventory
    }

    pub fn range(&self) -> TemperatureRange {
        self.range
    }

    pub fn temperatures(&self) -> &TemperaturePopulation {
        &self.temperatures
    }

    pub fn sales(&self) -> &[SalesRecord] {
        &self.sales
    }

    pub fn is_bankrupt(&self) -> bool {
        self.bankrupt
    }

    /// Buys coffee at one currency per unit. Rejected without touching any
    /// state when the amount exceeds cash on hand.
    pub fn buy_coffee(&mut self, amount: u32) -> bool {
        if f64::from(amount) <= self.cash {
            self.cash -= f64::from(amount);
            self.inventory += amount;
            true
        } else {
            false
        }
    }

    /// Advances the shop by one day.
    ///
    /// Order matters: advertising is deducted before the restock check, the
    /// sale runs against post-restock inventory, and bankruptcy is judged
    /// only after settlement. The whole transition is one atomic unit; a
    /// caller never observes a partially applied day.
    pub fn step(&mut self, temperature: i32, decisions: &DayDecisions) -> DayResult {
        debug_assert!(!self.bankrupt, "day-step on a bankrupt shop");
        let cup_price = decisions.cup_price.max(0.0);
        let advertising = decisions.advertising.max(0.0);

        self.cash -= advertising;

        let mut restock_rejected = false;
        if let Some(amount) = decisions.restock {
            restock_rejected = !self.buy_coffee(amount);
        }

        let inventory_at_start = self.inventory;
        let outcome = sales::cups_sold(self.range.max, temperature, advertising, self.inventory);
        let gross_profit = f64::from(outcome.cups_sold) * cup_price;
        self.cash += gross_profit;
        self.inventory -= outcome.cups_sold;
        self.sales.push(SalesRecord {
            day: self.day,
            inventory_at_start,
            advertising,
            temperature,
            cup_price,
            cups_sold: outcome.cups_sold,
        });

        let result = DayResult {
            day: self.day,
            temperature,
            cash: self.cash,
            inventory: self.inventory,
            cups_sold: outcome.cups_sold,
            gross_profit,
            restock_rejected,
            ran_out_of_stock: outcome.ran_out_of_stock,
            bankrupt: self.cash < 0.0,
        };
        if result.bankrupt {
            self.bankrupt = true;
        } else {
            self.day += 1;
        }
        result
    }

    /// Rebuilds a shop from persisted plain data. The temperature population
    /// is derived from the range rather than stored.
    pub(crate) fn from_parts(
        player_name: String,
        shop_name: String,
        day: u32,
        cash: f64,
        inventory: u32,
        range: TemperatureRange,
        sales: Vec<SalesRecord>,
    ) -> Self {
        Self {
            player_name,
            shop_name,
            day,
            cash,
            inventory,
            range,
            temperatures: TemperaturePopulation::build(range),
            sales,
            bankrupt: cash < 0.0,
        }
    }
}
