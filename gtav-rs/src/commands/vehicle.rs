//! Vehicle model identifier command implementations

use anyhow::{Context, Result, bail};
use clap::Subcommand;
use console::style;
use prettytable::row;

use gta_vehicles::VehicleHash;

use crate::utils::table::create_table;

#[derive(Subcommand)]
pub enum VehicleCommands {
    /// Look up the model hash for a symbolic vehicle name
    Lookup {
        /// Symbolic vehicle name (e.g. "Adder"); matching is case-insensitive
        name: String,
    },

    /// Resolve a model hash back to its symbolic vehicle name
    Resolve {
        /// Model hash, decimal or 0x-prefixed hex (e.g. 3078201489 or 0xB779A091)
        hash: String,
    },

    /// List the vehicle identifier table
    List {
        /// Only show entries whose name contains this substring (case-insensitive)
        #[arg(short, long, value_name = "SUBSTRING")]
        filter: Option<String>,
    },
}

pub fn execute(command: VehicleCommands) -> Result<()> {
    match command {
        VehicleCommands::Lookup { name } => execute_lookup(&name),
        VehicleCommands::Resolve { hash } => execute_resolve(&hash),
        VehicleCommands::List { filter } => execute_list(filter.as_deref()),
    }
}

fn execute_lookup(name: &str) -> Result<()> {
    let vehicle = VehicleHash::from_name(name)
        .with_context(|| format!("Unknown vehicle model: {name}"))?;

    println!(
        "{}: {} (0x{:08X})",
        style(vehicle.name()).cyan(),
        style(vehicle.hash()).green(),
        vehicle.hash()
    );
    Ok(())
}

fn execute_resolve(hash: &str) -> Result<()> {
    let value = parse_hash(hash)?;
    let vehicle = VehicleHash::from_hash(value)
        .with_context(|| format!("No vehicle model has hash {value} (0x{value:08X})"))?;

    println!(
        "{} (0x{:08X}): {}",
        style(value).green(),
        value,
        style(vehicle.name()).cyan()
    );
    Ok(())
}

fn execute_list(filter: Option<&str>) -> Result<()> {
    let filter_lower = filter.map(str::to_ascii_lowercase);

    let mut table = create_table(vec!["Name", "Hash", "Hex"]);
    let mut shown = 0usize;
    for vehicle in VehicleHash::ALL {
        if let Some(ref needle) = filter_lower {
            if !vehicle.name().to_ascii_lowercase().contains(needle.as_str()) {
                continue;
            }
        }
        table.add_row(row![
            vehicle.name(),
            vehicle.hash(),
            format!("0x{:08X}", vehicle.hash())
        ]);
        shown += 1;
    }

    if shown == 0 {
        bail!("No vehicle models match filter: {}", filter.unwrap_or(""));
    }

    table.printstd();
    println!(
        "\n{} of {} vehicle models",
        style(shown).green(),
        style(VehicleHash::ALL.len()).dim()
    );
    Ok(())
}

/// Parses a model hash from decimal or 0x-prefixed hex notation.
fn parse_hash(input: &str) -> Result<u32> {
    let parsed = if let Some(hex) = input.strip_prefix("0x").or_else(|| input.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16)
    } else {
        input.parse::<u32>()
    };
    parsed.with_context(|| format!("Invalid model hash: {input}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hash_accepts_decimal_and_hex() {
        assert_eq!(parse_hash("3078201489").unwrap(), 3078201489);
        assert_eq!(parse_hash("0xB779A091").unwrap(), 3078201489);
        assert_eq!(parse_hash("0Xb779a091").unwrap(), 3078201489);
    }

    #[test]
    fn parse_hash_rejects_garbage() {
        assert!(parse_hash("not-a-hash").is_err());
        assert!(parse_hash("0x").is_err());
        assert!(parse_hash("4294967296").is_err());
    }
}
