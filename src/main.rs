use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use brewday::{
    engine::{GameLoop, Outcome},
    input::StdinInput,
    scenario::ScenarioLoader,
    snapshot::SaveManager,
    weather::SeededSampler,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Coffee shop simulator")]
struct Cli {
    /// Path to the scenario YAML file
    #[arg(long, default_value = "scenarios/corner_cart.yaml")]
    scenario: PathBuf,

    /// Override the number of days to play (uses scenario default when omitted)
    #[arg(long)]
    days: Option<u64>,

    /// Override the weather seed (uses system entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Autosave the shop to this file after every day
    #[arg(long)]
    save: Option<PathBuf>,

    /// Resume from a save file instead of starting fresh
    #[arg(long)]
    resume: Option<PathBuf>,

    /// Player name (prompted when omitted)
    #[arg(long)]
    player: Option<String>,

    /// Shop name (prompted when omitted)
    #[arg(long)]
    shop_name: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let loader = ScenarioLoader::new(".");
    let scenario = loader.load(&cli.scenario)?;

    let mut input = StdinInput::new();
    let shop = match &cli.resume {
        Some(path) => {
            let save = SaveManager::load(path)
                .with_context(|| format!("Failed to load save {}", path.display()))?;
            println!(
                "Resuming {} (day {}, saved {}).",
                save.shop.shop_name, save.shop.day, save.metadata.saved_at
            );
            save.shop.restore()
        }
        None => {
            let player = cli
                .player
                .unwrap_or_else(|| prompt_name(&mut input, "What is your name?"));
            let shop_name = cli.shop_name.unwrap_or_else(|| {
                prompt_name(&mut input, "What do you want to name your coffee shop?")
            });
            scenario.build_shop(player, shop_name)?
        }
    };

    println!(
        "\nWelcome to {}, {}. Ok, let's get started. Have fun!",
        shop.shop_name(),
        shop.player_name()
    );

    let sampler = match cli.seed {
        Some(seed) => SeededSampler::new(seed),
        None => SeededSampler::from_entropy(),
    };
    let mut game = GameLoop::new(shop, Box::new(sampler));
    if let Some(path) = cli.save {
        game = game.with_autosave(SaveManager::new(path));
    }

    let days = scenario.days(cli.days);
    let outcome = game.run_with_hook(&mut input, days, |result| {
        println!(
            "You sold {} cups of coffee today and made ${:.2}.",
            result.cups_sold, result.gross_profit
        );
        if result.restock_rejected {
            println!("You couldn't afford that much coffee; no purchase made.");
        }
        if result.ran_out_of_stock {
            println!("You ran out of coffee before the day was over!");
        }
    })?;

    match outcome {
        Outcome::Completed { days } => {
            let shop = game.shop();
            println!(
                "\n{} made it through {} days with ${:.2} in the till.",
                shop.shop_name(),
                days,
                shop.cash()
            );
        }
        Outcome::Bankrupt { day } => {
            println!(
                "\n{} went bankrupt on day {}. Better luck next time!",
                game.shop().shop_name(),
                day
            );
        }
    }
    Ok(())
}

fn prompt_name(input: &mut StdinInput, label: &str) -> String {
    // Keep asking until something non-empty arrives.
    loop {
        let value = input.prompt_line(label);
        if !value.is_empty() {
            return value;
        }
    }
}
