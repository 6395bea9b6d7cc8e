//! Lookup CLI command.

use anyhow::{Context, Result};
use clap::Args;
use comfy_table::Cell;
use serde::Serialize;

use crate::adapters::cache::CachingBreedSource;
use crate::adapters::memory::StaticBreedSource;
use crate::cli::output::{join_or_dash, output, table_with_header, CommandOutput};
use crate::domain::errors::BreedError;
use crate::domain::models::Config;
use crate::domain::ports::BreedSource;

#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Breed names to resolve, in order (repeat a name to hit the cache)
    #[arg(required = true)]
    pub breeds: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupEntry {
    pub breed: String,
    pub found: bool,
    /// Whether the answer came from the cache without reaching the source
    pub cache_hit: bool,
    pub sub_breeds: Vec<String>,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupOutput {
    pub lookups: Vec<LookupEntry>,
    pub calls_made: usize,
}

impl CommandOutput for LookupOutput {
    fn to_human(&self) -> String {
        let mut table = table_with_header(&["BREED", "STATUS", "SOURCE", "SUB-BREEDS", "COUNT"]);

        for entry in &self.lookups {
            let status = if entry.found { "found" } else { "not found" };
            let source = if entry.cache_hit { "cache" } else { "source" };
            table.add_row(vec![
                Cell::new(&entry.breed),
                Cell::new(status),
                Cell::new(source),
                Cell::new(join_or_dash(&entry.sub_breeds)),
                Cell::new(entry.count),
            ]);
        }

        format!("{table}\nCalls made to breed source: {}", self.calls_made)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Resolve `breeds` in order through `source`.
///
/// Unknown breeds are reported as not found; any other source failure aborts.
pub fn resolve<S: BreedSource + ?Sized>(
    source: &CachingBreedSource<S>,
    breeds: &[String],
) -> Result<LookupOutput> {
    let mut lookups = Vec::with_capacity(breeds.len());

    for breed in breeds {
        let cache_hit = source.is_cached(breed);
        let entry = match source.sub_breeds(breed) {
            Ok(sub_breeds) => LookupEntry {
                breed: breed.clone(),
                found: true,
                cache_hit,
                count: sub_breeds.len(),
                sub_breeds,
            },
            Err(BreedError::NotFound(_)) => LookupEntry {
                breed: breed.clone(),
                found: false,
                cache_hit,
                sub_breeds: Vec::new(),
                count: 0,
            },
            Err(err) => {
                return Err(err).with_context(|| format!("Failed to look up breed '{breed}'"));
            }
        };
        lookups.push(entry);
    }

    Ok(LookupOutput {
        lookups,
        calls_made: source.calls_made(),
    })
}

pub fn execute(args: &LookupArgs, config: &Config, json_mode: bool) -> Result<()> {
    let source = CachingBreedSource::from_source(StaticBreedSource::from_config(config));
    let result = resolve(&source, &args.breeds)?;
    output(&result, json_mode);
    Ok(())
}
