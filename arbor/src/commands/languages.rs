use arbor_codegen::Emitter;
use clap::Args;
use eyre::Result;

use crate::registries;

#[derive(Args)]
pub struct LanguagesCommand {}

impl LanguagesCommand {
    pub fn run(&self) -> Result<()> {
        for language in registries::languages().iter() {
            println!(
                "{:<12} {} (.{}, {} type mappings)",
                language.id,
                language.display_name,
                language.emitter.file_extension(),
                language.types.len()
            );
        }
        Ok(())
    }
}
