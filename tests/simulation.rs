use brewday::{
    engine::{GameLoop, Outcome},
    input::ScriptedInput,
    scenario::ScenarioLoader,
    weather::{SeededSampler, TemperaturePopulation, WeatherSampler},
    ShopState, TemperatureRange,
};

fn scenario_loader() -> ScenarioLoader {
    ScenarioLoader::new(env!("CARGO_MANIFEST_DIR"))
}

struct FixedSampler(i32);

impl WeatherSampler for FixedSampler {
    fn next_from(&mut self, _population: &TemperaturePopulation) -> i32 {
        self.0
    }
}

#[test]
fn scenario_file_builds_a_playable_shop() {
    let scenario = scenario_loader()
        .load("scenarios/corner_cart.yaml")
        .expect("scenario should load");
    let shop = scenario.build_shop("Shelby", "The Toasty Beans").unwrap();
    assert_eq!(shop.day(), 1);
    assert_eq!(shop.cash(), 100.0);
    assert_eq!(shop.inventory(), 100);
    assert_eq!(scenario.days(None), 30);
}

#[test]
fn seeded_runs_are_reproducible() {
    let scenario = scenario_loader()
        .load("scenarios/corner_cart.yaml")
        .expect("scenario should load");

    let run = |seed: u64| -> Vec<i32> {
        let shop = scenario.build_shop("p", "s").unwrap();
        let mut game = GameLoop::new(shop, Box::new(SeededSampler::new(seed)));
        let mut input = ScriptedInput::new();
        let mut temps = Vec::new();
        game.run_with_hook(&mut input, 10, |result| temps.push(result.temperature))
            .unwrap();
        temps
    };

    assert_eq!(run(scenario.seed), run(scenario.seed));
    assert_ne!(run(scenario.seed), run(scenario.seed + 1));
}

#[test]
fn a_full_day_settles_like_the_ledger_says() {
    // temperature 30, $10 advertising, $2.50 per cup, plenty of stock:
    // 300 cups sold for $750 gross
    let shop = ShopState::new("p", "s", 1000.0, 1000, TemperatureRange::default());
    let mut game = GameLoop::new(shop, Box::new(FixedSampler(30)));
    let mut input = ScriptedInput::new()
        .with_floats([2.5, 10.0])
        .with_ints([None]);
    let result = game.step_with(&mut input).unwrap();
    assert_eq!(result.cups_sold, 300);
    assert_eq!(result.gross_profit, 750.0);
    assert_eq!(result.cash, 1000.0 - 10.0 + 750.0);
    assert_eq!(result.inventory, 700);
    assert!(!result.ran_out_of_stock);
}

#[test]
fn heavy_advertising_empties_the_shelf() {
    let shop = ShopState::new("p", "s", 1000.0, 5, TemperatureRange::default());
    let mut game = GameLoop::new(shop, Box::new(FixedSampler(30)));
    let mut input = ScriptedInput::new()
        .with_floats([1.0, 100.0])
        .with_ints([None]);
    let result = game.step_with(&mut input).unwrap();
    assert_eq!(result.cups_sold, 5);
    assert!(result.ran_out_of_stock);
    assert_eq!(result.inventory, 0);
}

#[test]
fn unparsable_input_means_zero_and_zero_sells_nothing() {
    // ScriptedInput falls back to 0.0 when its queue is empty, the same
    // coercion an unparsable terminal answer gets.
    let shop = ShopState::new("p", "s", 100.0, 100, TemperatureRange::default());
    let mut game = GameLoop::new(shop, Box::new(FixedSampler(30)));
    let mut input = ScriptedInput::new();
    let result = game.step_with(&mut input).unwrap();
    assert_eq!(result.cups_sold, 0);
    assert_eq!(result.gross_profit, 0.0);
    assert_eq!(result.cash, 100.0);
}

#[test]
fn restock_happens_before_the_sale() {
    // Hot day demand is (90 - 80) * 5 = 50 cups; starting stock of 10 only
    // covers it because the 100-cup restock lands first.
    let shop = ShopState::new("p", "s", 200.0, 10, TemperatureRange::default());
    let mut game = GameLoop::new(shop, Box::new(FixedSampler(80)));
    let mut input = ScriptedInput::new()
        .with_floats([2.0, 10.0])
        .with_ints([Some(100)]);
    let result = game.step_with(&mut input).unwrap();
    assert!(!result.restock_rejected);
    assert_eq!(result.cups_sold, 50);
    assert_eq!(result.inventory, 60);
    // 200 - 10 advertising - 100 coffee + 100 revenue
    assert_eq!(result.cash, 190.0);

    let record = &game.shop().sales()[0];
    assert_eq!(record.inventory_at_start, 110);
}

#[test]
fn unaffordable_restock_is_rejected_without_side_effects() {
    let shop = ShopState::new("p", "s", 100.0, 100, TemperatureRange::default());
    let mut game = GameLoop::new(shop, Box::new(FixedSampler(55)));
    let mut input = ScriptedInput::new()
        .with_floats([1.0, 0.0])
        .with_ints([Some(200)]);
    let result = game.step_with(&mut input).unwrap();
    assert!(result.restock_rejected);
    assert_eq!(result.cash, 100.0);
    assert_eq!(result.inventory, 100);
}

#[test]
fn overspending_on_advertising_ends_the_game() {
    // $150 of advertising against $100 cash; selling the whole 100-cup
    // inventory at $0.25 only recovers $25, leaving the till negative.
    let shop = ShopState::new("p", "s", 100.0, 100, TemperatureRange::default());
    let mut game = GameLoop::new(shop, Box::new(FixedSampler(20)));
    let mut input = ScriptedInput::new()
        .with_floats([0.25, 150.0])
        .with_ints([None]);
    let mut results = Vec::new();
    let outcome = game
        .run_with_hook(&mut input, 30, |result| results.push(result.clone()))
        .unwrap();
    assert_eq!(outcome, Outcome::Bankrupt { day: 1 });
    assert_eq!(results.len(), 1);
    assert!(results[0].cash < 0.0);
    assert!(game.shop().is_bankrupt());
}

#[test]
fn history_grows_by_one_record_per_day() {
    let shop = ShopState::new("p", "s", 500.0, 500, TemperatureRange::default());
    let mut game = GameLoop::new(shop, Box::new(SeededSampler::new(11)));
    let mut input = ScriptedInput::new()
        .with_floats([2.0, 1.0, 2.0, 1.0, 2.0, 1.0])
        .with_ints([None, None, None]);
    game.run_with_hook(&mut input, 3, |_| {}).unwrap();
    let shop = game.shop();
    assert_eq!(shop.sales().len(), 3);
    assert_eq!(shop.day(), 4);
    let days: Vec<u32> = shop.sales().iter().map(|r| r.day).collect();
    assert_eq!(days, vec![1, 2, 3]);
}

#[test]
fn inventory_balance_holds_across_days() {
    let scenario = scenario_loader()
        .load("scenarios/corner_cart.yaml")
        .expect("scenario should load");
    let shop = scenario.build_shop("p", "s").unwrap();
    let mut game = GameLoop::new(shop, Box::new(SeededSampler::new(3)));
    let floats: Vec<f64> = (0..20).flat_map(|_| [1.5, 2.0]).collect();
    let ints: Vec<Option<u32>> = (0..10).flat_map(|_| [Some(10), None]).collect();
    let mut input = ScriptedInput::new().with_floats(floats).with_ints(ints);
    game.run_with_hook(&mut input, 10, |_| {}).unwrap();

    for record in game.shop().sales() {
        assert!(record.cups_sold <= record.inventory_at_start);
    }
}
