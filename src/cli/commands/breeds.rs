//! Breeds CLI command.

use anyhow::Result;
use comfy_table::Cell;
use serde::Serialize;

use crate::adapters::memory::StaticBreedSource;
use crate::cli::output::{join_or_dash, output, table_with_header, CommandOutput};
use crate::domain::models::Config;
use crate::domain::ports::BreedSource;

#[derive(Debug, Serialize)]
pub struct BreedRow {
    pub breed: String,
    pub sub_breeds: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct BreedsOutput {
    pub breeds: Vec<BreedRow>,
    pub total: usize,
}

impl From<&StaticBreedSource> for BreedsOutput {
    fn from(source: &StaticBreedSource) -> Self {
        let breeds: Vec<BreedRow> = source
            .breeds()
            .map(|breed| BreedRow {
                breed: breed.to_string(),
                // Listed names always resolve in a static table.
                sub_breeds: source.sub_breeds(breed).unwrap_or_default(),
            })
            .collect();
        let total = breeds.len();
        Self { breeds, total }
    }
}

impl CommandOutput for BreedsOutput {
    fn to_human(&self) -> String {
        if self.breeds.is_empty() {
            return "No breeds configured.".to_string();
        }

        let mut table = table_with_header(&["BREED", "SUB-BREEDS"]);
        for row in &self.breeds {
            table.add_row(vec![
                Cell::new(&row.breed),
                Cell::new(join_or_dash(&row.sub_breeds)),
            ]);
        }

        format!("Found {} breed(s):\n{table}", self.total)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(config: &Config, json_mode: bool) -> Result<()> {
    output(&BreedsOutput::from(&StaticBreedSource::from_config(config)), json_mode);
    Ok(())
}
