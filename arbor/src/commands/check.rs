use std::path::PathBuf;

use arbor_model::{ArtifactState, domain};
use clap::Args;
use eyre::{Context, Result, bail};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the model file
    pub model: PathBuf,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let json = std::fs::read_to_string(&self.model)
            .wrap_err_with(|| format!("failed to read {}", self.model.display()))?;
        let state = ArtifactState::from_json(&json)
            .wrap_err_with(|| format!("failed to parse {}", self.model.display()))?;

        let tree = state.restore();
        if ArtifactState::capture(&tree) != state {
            bail!("model file does not round-trip losslessly");
        }

        let entities = domain::entities(&tree);
        let properties: usize = entities
            .iter()
            .map(|entity| domain::properties(entity).len())
            .sum();
        let relations: usize = entities
            .iter()
            .map(|entity| domain::relations(entity).len())
            .sum();

        println!(
            "{}: {} entities, {} properties, {} relations",
            tree.label(),
            entities.len(),
            properties,
            relations
        );
        Ok(())
    }
}
