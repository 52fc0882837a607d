use clap::Args;
use eyre::Result;

use crate::registries;

#[derive(Args)]
pub struct DialectsCommand {}

impl DialectsCommand {
    pub fn run(&self) -> Result<()> {
        for dialect in registries::dialects().iter() {
            println!(
                "{:<12} {} ({} type mappings)",
                dialect.id,
                dialect.display_name,
                dialect.types.len()
            );
        }
        Ok(())
    }
}
