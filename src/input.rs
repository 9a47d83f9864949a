//! Decision input seam between the simulation core and the terminal.
//!
//! The core only ever asks for numbers through this trait; all text parsing
//! and rendering lives on the provider side.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Context shown to the player before each day's decisions.
#[derive(Debug, Clone, Copy)]
pub struct DayContext {
    pub day: u32,
    pub temperature: i32,
    pub cash: f64,
    pub inventory: u32,
}

pub trait InputProvider {
    /// Called once at the start of each day with the pre-decision stats.
    fn begin_day(&mut self, _ctx: &DayContext) {}

    /// Prompts for a float. Anything that fails to parse becomes 0.0.
    fn prompt_float(&mut self, label: &str) -> f64;

    /// Prompts for an optional whole number. Empty or unparsable input means
    /// "none", never an error.
    fn prompt_optional_int(&mut self, label: &str) -> Option<u32>;
}

/// Interactive provider reading from stdin.
pub struct StdinInput;

impl StdinInput {
    pub fn new() -> Self {
        Self
    }

    /// Prompts for a raw line of text, trimmed.
    pub fn prompt_line(&mut self, label: &str) -> String {
        self.read_line(label)
    }

    fn read_line(&self, label: &str) -> String {
        print!("{label} ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        let _ = io::stdin().lock().read_line(&mut line);
        line.trim().to_string()
    }
}

impl Default for StdinInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputProvider for StdinInput {
    fn begin_day(&mut self, ctx: &DayContext) {
        println!("\n-------| Day {} |-------", ctx.day);
        println!(
            "You have ${:.2} cash and it's {} degrees outside.",
            ctx.cash, ctx.temperature
        );
        println!(
            "You have enough coffee on hand to make {} cups.\n",
            ctx.inventory
        );
    }

    fn prompt_float(&mut self, label: &str) -> f64 {
        self.read_line(label).parse().unwrap_or(0.0)
    }

    fn prompt_optional_int(&mut self, label: &str) -> Option<u32> {
        self.read_line(label).parse().ok()
    }
}

/// Scripted provider for tests and demos: answers prompts from queues,
/// falling back to 0.0 / none when a queue runs dry.
#[derive(Default)]
pub struct ScriptedInput {
    floats: VecDeque<f64>,
    ints: VecDeque<Option<u32>>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_floats(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.floats.extend(values);
        self
    }

    pub fn with_ints(mut self, values: impl IntoIterator<Item = Option<u32>>) -> Self {
        self.ints.extend(values);
        self
    }
}

impl InputProvider for ScriptedInput {
    fn prompt_float(&mut self, _label: &str) -> f64 {
        self.floats.pop_front().unwrap_or(0.0)
    }

    fn prompt_optional_int(&mut self, _label: &str) -> Option<u32> {
        self.ints.pop_front().unwrap_or(None)
    }
}
