//! Row rendering from a generation document.

use anyhow::Context;
use datagen_factory::{DataGenerator, FactoryRegistry};
use std::io::Write;
use tracing::{debug, info};

use crate::config::GenerationDocument;

/// One generator per column, rendered as separator-joined rows.
#[derive(Debug)]
pub struct RowRenderer {
    columns: Vec<(String, Box<dyn DataGenerator>)>,
    separator: String,
}

impl RowRenderer {
    /// Create a generator for every column of `document`.
    ///
    /// Errors name the column whose generator could not be created.
    pub fn from_document(
        document: &GenerationDocument,
        registry: &FactoryRegistry,
    ) -> anyhow::Result<Self> {
        let mut columns = Vec::with_capacity(document.columns.len());
        for column in &document.columns {
            let parameters = column.parameter_bag()?;
            let generator = registry
                .create(&column.generator_type, &parameters)
                .with_context(|| {
                    format!("Failed to create generator for column '{}'", column.name)
                })?;
            debug!(
                "Column '{}' uses generator type '{}'",
                column.name, column.generator_type
            );
            columns.push((column.name.clone(), generator));
        }

        Ok(Self {
            columns,
            separator: document.separator.clone(),
        })
    }

    /// Column names joined by the separator.
    pub fn header(&self) -> String {
        self.columns
            .iter()
            .map(|(name, _)| name.as_str())
            .collect::<Vec<_>>()
            .join(&self.separator)
    }

    /// Render the next row.
    pub fn next_row(&mut self) -> String {
        self.columns
            .iter_mut()
            .map(|(_, generator)| generator.next_value().to_string())
            .collect::<Vec<_>>()
            .join(&self.separator)
    }

    /// Write `count` rows, optionally preceded by the header, one per line.
    pub fn write_rows<W: Write>(
        &mut self,
        out: &mut W,
        count: u64,
        header: bool,
    ) -> std::io::Result<()> {
        if header {
            writeln!(out, "{}", self.header())?;
        }
        for _ in 0..count {
            writeln!(out, "{}", self.next_row())?;
        }
        info!("Generated {} row(s) across {} column(s)", count, self.columns.len());
        Ok(())
    }
}
