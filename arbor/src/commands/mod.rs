mod check;
mod completions;
mod dialects;
mod emit;
mod languages;
mod scaffold;

use std::path::Path;

use arbor_model::{ArtifactNode, ArtifactState};
use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use dialects::DialectsCommand;
use emit::EmitCommand;
use eyre::{Context, Result};
use languages::LanguagesCommand;
use scaffold::ScaffoldCommand;

#[derive(Parser)]
#[command(name = "arbor")]
#[command(version)]
#[command(about = "Model-driven code generation over an artifact tree")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Emit(cmd) => cmd.run(),
            Commands::Scaffold(cmd) => cmd.run(),
            Commands::Languages(cmd) => cmd.run(),
            Commands::Dialects(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Emit source for a single entity to stdout
    Emit(EmitCommand),

    /// Generate source files for every entity in a model
    Scaffold(ScaffoldCommand),

    /// List registered target languages
    Languages(LanguagesCommand),

    /// List registered SQL dialects
    Dialects(DialectsCommand),

    /// Validate that a model file loads and round-trips losslessly
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Load a model file and rebuild its artifact tree.
pub(crate) fn load_model(path: &Path) -> Result<ArtifactNode> {
    let json = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;
    let state = ArtifactState::from_json(&json)
        .wrap_err_with(|| format!("failed to parse {}", path.display()))?;
    Ok(state.restore())
}

#[cfg(test)]
mod tests {
    use arbor_model::domain;

    use super::*;

    #[test]
    fn test_load_model_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shop.json");

        let shop = domain::model("Shop");
        shop.add_child(&domain::entity("Customer"));
        let json = ArtifactState::capture(&shop).to_json().unwrap();
        std::fs::write(&path, json).unwrap();

        let loaded = load_model(&path).unwrap();
        assert_eq!(loaded.id(), shop.id());
        assert_eq!(domain::entities(&loaded).len(), 1);
    }

    #[test]
    fn test_load_model_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(load_model(&path).is_err());
    }
}
