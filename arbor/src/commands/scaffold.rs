use std::fs;
use std::path::PathBuf;

use arbor_codegen::Emitter;
use arbor_codegen_csharp::pascal_case;
use arbor_codegen_sql::create_table;
use arbor_model::{ArtifactNode, domain};
use clap::Args;
use eyre::{Context, Result, bail, eyre};

use super::load_model;
use crate::{registries, scaffold};

#[derive(Args)]
pub struct ScaffoldCommand {
    /// Path to the model file
    pub model: PathBuf,

    /// Target language for class scaffolds
    #[arg(short, long, conflicts_with = "dialect")]
    pub language: Option<String>,

    /// SQL dialect for CREATE TABLE scaffolds
    #[arg(short, long)]
    pub dialect: Option<String>,

    /// Output directory; prints to stdout when omitted
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

impl ScaffoldCommand {
    pub fn run(&self) -> Result<()> {
        let model = load_model(&self.model)?;
        let entities = domain::entities(&model);
        if entities.is_empty() {
            println!("No entities in model");
            return Ok(());
        }

        match (&self.language, &self.dialect) {
            (Some(language), None) => self.scaffold_language(language, &entities),
            (None, Some(dialect)) => self.scaffold_dialect(dialect, &entities),
            (None, None) => bail!("pass --language or --dialect"),
            // clap rejects the combination before we get here
            (Some(_), Some(_)) => unreachable!(),
        }
    }

    fn scaffold_language(&self, id: &str, entities: &[ArtifactNode]) -> Result<()> {
        let registry = registries::languages();
        let language = registry
            .get(id)
            .ok_or_else(|| eyre!("unknown language '{id}'"))?;

        for entity in entities {
            let element = scaffold::entity_class(entity, language);
            let source = language.emitter.generate(&element)?;
            let file_name = format!(
                "{}.{}",
                pascal_case(&entity_name(entity)),
                language.emitter.file_extension()
            );
            self.write_or_print(&file_name, &source, "//")?;
        }
        Ok(())
    }

    fn scaffold_dialect(&self, id: &str, entities: &[ArtifactNode]) -> Result<()> {
        let registry = registries::dialects();
        let dialect = registry
            .get(id)
            .ok_or_else(|| eyre!("unknown dialect '{id}'"))?;

        for entity in entities {
            let sql = create_table(entity, dialect);
            let file_name = format!("{}.sql", pascal_case(&entity_name(entity)));
            self.write_or_print(&file_name, &sql, "--")?;
        }
        Ok(())
    }

    fn write_or_print(&self, file_name: &str, content: &str, comment: &str) -> Result<()> {
        match &self.out {
            Some(out) => {
                fs::create_dir_all(out)
                    .wrap_err_with(|| format!("failed to create {}", out.display()))?;
                let path = out.join(file_name);
                fs::write(&path, content)
                    .wrap_err_with(|| format!("failed to write {}", path.display()))?;
                println!("  created {}", path.display());
            }
            None => {
                println!("{comment} {file_name}");
                print!("{content}");
                println!();
            }
        }
        Ok(())
    }
}

fn entity_name(entity: &ArtifactNode) -> String {
    entity.get::<String>(domain::NAME).unwrap_or_default()
}
