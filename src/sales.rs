//! The daily sales model.
//!
//! Demand falls as the day gets hotter and rises with advertising spend. The
//! cup price deliberately does not enter the demand side; it only scales
//! revenue at settlement time.

/// Result of one day's simulated demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaleOutcome {
    pub cups_sold: u32,
    pub ran_out_of_stock: bool,
}

/// Computes cups sold for one day, capped by inventory.
///
/// `raw = trunc((temp_max - temperature) * (advertising * 0.5))`, never
/// negative. When demand exceeds inventory the sale is clamped and the
/// outcome carries the out-of-stock flag.
pub fn cups_sold(temp_max: i32, temperature: i32, advertising: f64, inventory: u32) -> SaleOutcome {
    let raw = (f64::from(temp_max - temperature) * (advertising * 0.5)).max(0.0) as u64;
    if raw > u64::from(inventory) {
        SaleOutcome {
            cups_sold: inventory,
            ran_out_of_stock: true,
        }
    } else {
        SaleOutcome {
            cups_sold: raw as u32,
            ran_out_of_stock: false,
        }
    }
}
