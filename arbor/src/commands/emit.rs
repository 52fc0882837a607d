use std::path::PathBuf;

use arbor_codegen::Emitter;
use arbor_model::{DomainKind, domain};
use clap::Args;
use eyre::{Result, eyre};

use super::load_model;
use crate::{registries, scaffold};

#[derive(Args)]
pub struct EmitCommand {
    /// Path to the model file
    pub model: PathBuf,

    /// Entity to emit
    #[arg(short, long)]
    pub entity: String,

    /// Target language
    #[arg(short, long, default_value = "csharp")]
    pub language: String,
}

impl EmitCommand {
    pub fn run(&self) -> Result<()> {
        let model = load_model(&self.model)?;
        let registry = registries::languages();
        let language = registry
            .get(&self.language)
            .ok_or_else(|| eyre!("unknown language '{}'", self.language))?;

        let entity = domain::find_child_named(&model, DomainKind::Entity, &self.entity)
            .ok_or_else(|| eyre!("no entity named '{}' in the model", self.entity))?;

        let element = scaffold::entity_class(&entity, language);
        print!("{}", language.emitter.generate(&element)?);
        Ok(())
    }
}
