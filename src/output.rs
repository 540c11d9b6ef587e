//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::api::{ClaimItem, FactItem};
use crate::core::models::Verdict;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Colour a verdict label for terminal display
#[must_use]
pub fn paint_verdict(verdict: &str) -> ColoredString {
    let label = verdict.to_uppercase().replace('_', " ");
    match verdict.parse::<Verdict>() {
        Ok(Verdict::Verified) => label.green().bold(),
        Ok(Verdict::Debunked) => label.red().bold(),
        Ok(Verdict::CosmicMystery) => label.magenta().bold(),
        Err(_) => label.normal(),
    }
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

/// Result of an offline classification
#[derive(Debug, Serialize)]
pub struct ClassifyResult {
    /// Text that was classified
    pub text: String,
    /// Verdict
    pub verdict: String,
    /// Explanation
    pub explanation: String,
    /// Whether the verdict came from the random fallback
    pub fallback: bool,
}

impl ClassifyResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        println!("Claim:   {}", self.text);
        println!("Verdict: {}", paint_verdict(&self.verdict));
        println!("         {}", self.explanation);
        if self.fallback {
            println!("{}", "(no rule matched; verdict drawn at random)".dimmed());
        }
    }
}

/// A single stored claim
#[derive(Debug, Serialize)]
pub struct ClaimResult {
    /// The claim
    #[serde(flatten)]
    pub claim: ClaimItem,
}

impl ClaimResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print_claim(&self.claim),
            OutputMode::Json => render_json(self),
        }
    }
}

fn print_claim(claim: &ClaimItem) {
    println!("[{}] {}", claim.id, claim.text);
    println!("  {}  {}", paint_verdict(&claim.verdict), claim.explanation);
    println!("  \"{}\"", claim.witty_remark.italic());
    println!("  Bonus: {}", claim.bonus_fact);
    println!("  {} by {}", claim.created_at.dimmed(), claim.owner);
}

/// A list of claims
#[derive(Debug, Serialize)]
pub struct ClaimListResult {
    /// Claims, newest first
    pub claims: Vec<ClaimItem>,
}

impl ClaimListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.claims.is_empty() {
            println!("No claims analyzed yet.");
            return;
        }

        let n = self.claims.len();
        println!("{n} claim{} analyzed\n", if n == 1 { "" } else { "s" });
        for claim in &self.claims {
            print_claim(claim);
            println!();
        }
    }
}

/// A list of facts
#[derive(Debug, Serialize)]
pub struct FactListResult {
    /// Category filter applied, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Facts
    pub facts: Vec<FactItem>,
}

impl FactListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.facts.is_empty() {
            println!("No facts found.");
            return;
        }

        for fact in &self.facts {
            println!("{} [{}]", fact.title.bold(), fact.category);
            println!("  {}\n", fact.body);
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => render_json(self),
        }
    }
}
