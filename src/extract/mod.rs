pub mod grid;
pub mod scanner;
pub mod writer;

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::types::{DimensionPolicy, LevelPrefix};
use crate::dictionary::TokenDictionary;
use crate::errors::{Error, Result};
use crate::logging::{LogTarget, Logger};

use self::grid::GridDimensions;
use self::scanner::Declaration;

/// One level table after tokenizing, translating and sizing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelRecord {
    pub name: String,
    pub line: usize,
    pub raw_tokens: Vec<String>,
    pub tokens: Vec<String>,
    pub dimensions: GridDimensions,
    pub unknown_tokens: Vec<String>,
}

impl LevelRecord {
    pub fn from_declaration(declaration: &Declaration, dictionary: &TokenDictionary) -> Self {
        let raw_tokens = grid::tokenize_body(&declaration.body);
        let translation = dictionary.translate(&raw_tokens);
        Self {
            name: declaration.name.clone(),
            line: declaration.line,
            raw_tokens,
            tokens: translation.tokens,
            dimensions: grid::infer_dimensions(&declaration.body),
            unknown_tokens: translation.unknown,
        }
    }

    /// Token count matches the inferred width x height.
    pub fn fills_grid(&self) -> bool {
        self.tokens.len() == self.dimensions.cell_count()
    }

    pub fn rows(&self) -> Vec<&[String]> {
        grid::reshape(&self.tokens, self.dimensions)
    }

    pub fn render(&self) -> String {
        grid::render(&self.rows())
    }
}

/// A level file that made it to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedLevel {
    pub name: String,
    pub path: PathBuf,
    pub dimensions: GridDimensions,
    pub token_count: usize,
    pub unknown_tokens: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionReport {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub levels: Vec<ExportedLevel>,
}

impl ExtractionReport {
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.levels.iter().map(|level| level.name.as_str())
    }

    /// Distinct unknown tokens across all levels, in first-seen order.
    pub fn unknown_tokens(&self) -> Vec<&str> {
        let mut all: Vec<&str> = Vec::new();
        for token in self.levels.iter().flat_map(|l| &l.unknown_tokens) {
            if !all.contains(&token.as_str()) {
                all.push(token);
            }
        }
        all
    }
}

/// Turns the level tables of one source file into editor grid files.
#[derive(Debug, Clone, Copy)]
pub struct Extractor<'a> {
    dictionary: &'a TokenDictionary,
    prefix: &'a LevelPrefix,
    policy: DimensionPolicy,
}

impl<'a> Extractor<'a> {
    pub fn new(
        dictionary: &'a TokenDictionary,
        prefix: &'a LevelPrefix,
        policy: DimensionPolicy,
    ) -> Self {
        Self {
            dictionary,
            prefix,
            policy,
        }
    }

    /// Parses `source` without touching the filesystem.
    pub fn extract_levels(&self, source: &str) -> Vec<LevelRecord> {
        scanner::locate_declarations(source, self.prefix)
            .iter()
            .map(|declaration| LevelRecord::from_declaration(declaration, self.dictionary))
            .collect()
    }

    /// Applies the dimension policy; only `Strict` can fail.
    pub fn check_dimensions(&self, record: &LevelRecord, logger: &Logger) -> Result<()> {
        if record.fills_grid() {
            return Ok(());
        }
        match self.policy {
            DimensionPolicy::Permissive => Ok(()),
            DimensionPolicy::Warn => {
                logger.warn(
                    format!(
                        "  {} (line {}): {} token(s) do not fill the inferred {} grid ({}).",
                        record.name,
                        record.line,
                        record.tokens.len(),
                        record.dimensions,
                        record.dimensions.cell_count()
                    ),
                    LogTarget::ConsoleAndFile,
                );
                Ok(())
            }
            DimensionPolicy::Strict => Err(Error::DimensionMismatch {
                level: record.name.clone(),
                width: record.dimensions.width,
                height: record.dimensions.height,
                expected: record.dimensions.cell_count(),
                actual: record.tokens.len(),
            }),
        }
    }

    /// Reads `input`, writes one `<level>.txt` per table into `output_dir`.
    ///
    /// The output directory is only created once at least one table is found.
    /// The first failed write aborts the run.
    pub fn export(
        &self,
        input: &Path,
        output_dir: &Path,
        logger: &Logger,
    ) -> Result<ExtractionReport> {
        let source = fs::read_to_string(input).map_err(|e| Error::input_access(input, e))?;
        let records = self.extract_levels(&source);

        let mut report = ExtractionReport {
            input: input.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
            levels: Vec::with_capacity(records.len()),
        };

        if records.is_empty() {
            logger.info(
                format!("No levels found in {}.", input.display()),
                LogTarget::ConsoleAndFile,
            );
            return Ok(report);
        }

        writer::ensure_output_dir(output_dir)?;

        for record in &records {
            logger.info(
                format!("Extracting {}...", record.name),
                LogTarget::ConsoleAndFile,
            );
            if !record.unknown_tokens.is_empty() {
                logger.warn(
                    format!(
                        "  {} (line {}): {} unknown token(s) replaced with {}: {}",
                        record.name,
                        record.line,
                        record.unknown_tokens.len(),
                        self.dictionary.fallback(),
                        record.unknown_tokens.join(", ")
                    ),
                    LogTarget::ConsoleAndFile,
                );
            }
            self.check_dimensions(record, logger)?;

            let path = writer::write_level(output_dir, &record.name, &record.render())?;
            logger.info(
                format!("  Saved to {}", path.display()),
                LogTarget::ConsoleAndFile,
            );

            report.levels.push(ExportedLevel {
                name: record.name.clone(),
                path,
                dimensions: record.dimensions,
                token_count: record.tokens.len(),
                unknown_tokens: record.unknown_tokens.clone(),
            });
        }

        logger.info(
            format!(
                "Export complete: {} level(s) written to '{}'.",
                report.len(),
                output_dir.display()
            ),
            LogTarget::ConsoleAndFile,
        );

        Ok(report)
    }
}
