//! Facts and examples commands

use cosmic_truth::api;
use cosmic_truth::output::{FactListResult, OutputMode};

use super::context::api_failure;

/// List facts, filter by category, or show a random one
pub fn facts(category: Option<&str>, random: bool, mode: OutputMode) -> anyhow::Result<()> {
    let result = if random {
        let fact = api::random_fact(&mut fastrand::Rng::new()).map_err(api_failure)?;
        FactListResult {
            category: None,
            facts: vec![fact],
        }
    } else {
        let data = api::list_facts(category).map_err(api_failure)?;
        FactListResult {
            category: data.category,
            facts: data.facts,
        }
    };

    result.render(mode);
    Ok(())
}

/// Print example claims
pub fn examples(mode: OutputMode) -> anyhow::Result<()> {
    let data = api::list_examples().map_err(api_failure)?;

    match mode {
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(&data)?),
        OutputMode::Human => {
            println!("Try these:\n");
            for example in &data.examples {
                println!("  cosmic classify \"{example}\"");
            }
        },
    }
    Ok(())
}
