//! Generator picking lines from a text file.

use datagen_core::{FactoryError, GeneratedValue, Slot};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

use super::{DataGenerator, FILE_LINE_TYPE};
use crate::factory::Factory;
use crate::text_file;

/// Order in which lines are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOrder {
    /// Uniformly random line on each call
    Random,
    /// File order, wrapping around at the end
    Sequential,
}

impl FromStr for LineOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "random" => Ok(LineOrder::Random),
            "sequential" => Ok(LineOrder::Sequential),
            other => Err(format!(
                "mode must be 'random' or 'sequential', got '{other}'"
            )),
        }
    }
}

/// Settings of the `fileline` generator.
#[derive(Debug, Clone, PartialEq)]
pub struct FileLineSettings {
    pub path: PathBuf,
    pub mode: String,
    pub seed: i64,
}

impl Default for FileLineSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::new(),
            mode: "random".to_string(),
            seed: 0,
        }
    }
}

/// Factory for values drawn from the lines of a file.
pub struct FileLineFactory;

impl Factory for FileLineFactory {
    type Settings = FileLineSettings;

    fn type_name(&self) -> &str {
        FILE_LINE_TYPE
    }

    fn slots(&self) -> Vec<Slot<FileLineSettings>> {
        vec![
            Slot::string("path", |s: &mut FileLineSettings, v| s.path = PathBuf::from(v))
                .required()
                .help("UTF-8 text file to read lines from"),
            Slot::string("mode", |s: &mut FileLineSettings, v| s.mode = v)
                .help("'random' (default) or 'sequential'"),
            Slot::integer("seed", |s: &mut FileLineSettings, v| s.seed = v)
                .help("Random seed, default 0"),
        ]
    }

    fn create(&self, settings: FileLineSettings) -> Result<Box<dyn DataGenerator>, FactoryError> {
        let order = settings
            .mode
            .parse::<LineOrder>()
            .map_err(|reason| FactoryError::invalid_setting(FILE_LINE_TYPE, reason))?;

        let lines = text_file::read_lines(&settings.path)?;
        if lines.is_empty() {
            return Err(FactoryError::invalid_setting(
                FILE_LINE_TYPE,
                format!("'{}' contains no lines", settings.path.display()),
            ));
        }
        debug!(
            "Loaded {} line(s) from {}",
            lines.len(),
            settings.path.display()
        );

        Ok(Box::new(FileLineGenerator::new(lines, order, settings.seed)))
    }
}

/// Emits lines of a file, randomly or in order.
#[derive(Debug)]
pub struct FileLineGenerator {
    lines: Vec<String>,
    order: LineOrder,
    cursor: usize,
    rng: StdRng,
}

impl FileLineGenerator {
    /// `lines` must not be empty.
    pub fn new(lines: Vec<String>, order: LineOrder, seed: i64) -> Self {
        Self {
            lines,
            order,
            cursor: 0,
            rng: StdRng::seed_from_u64(seed as u64),
        }
    }
}

impl DataGenerator for FileLineGenerator {
    fn next_value(&mut self) -> GeneratedValue {
        let idx = match self.order {
            LineOrder::Random => self.rng.gen_range(0..self.lines.len()),
            LineOrder::Sequential => {
                let idx = self.cursor;
                self.cursor = (self.cursor + 1) % self.lines.len();
                idx
            }
        };
        GeneratedValue::Text(self.lines[idx].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn lines_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_sequential_wraps_around() {
        let mut generator = FileLineGenerator::new(
            vec!["a".to_string(), "b".to_string()],
            LineOrder::Sequential,
            0,
        );

        let values: Vec<String> = (0..5).map(|_| generator.next_value().to_string()).collect();
        assert_eq!(values, vec!["a", "b", "a", "b", "a"]);
    }

    #[test]
    fn test_random_picks_existing_lines() {
        let lines = vec!["red".to_string(), "green".to_string(), "blue".to_string()];
        let mut generator = FileLineGenerator::new(lines.clone(), LineOrder::Random, 42);

        for _ in 0..30 {
            let value = generator.next_value().to_string();
            assert!(lines.contains(&value));
        }
    }

    #[test]
    fn test_factory_reads_file() {
        let file = lines_file("first\nsecond\n");
        let mut generator = FileLineFactory
            .create(FileLineSettings {
                path: file.path().to_path_buf(),
                mode: "sequential".to_string(),
                seed: 0,
            })
            .unwrap();

        assert_eq!(generator.next_value().to_string(), "first");
        assert_eq!(generator.next_value().to_string(), "second");
    }

    #[test]
    fn test_factory_rejects_empty_file() {
        let file = lines_file("\n\n");
        let result = FileLineFactory.create(FileLineSettings {
            path: file.path().to_path_buf(),
            ..Default::default()
        });
        assert!(matches!(result, Err(FactoryError::InvalidSetting { .. })));
    }

    #[test]
    fn test_factory_rejects_unknown_mode() {
        let file = lines_file("x\n");
        let result = FileLineFactory.create(FileLineSettings {
            path: file.path().to_path_buf(),
            mode: "shuffled".to_string(),
            seed: 0,
        });
        assert!(matches!(result, Err(FactoryError::InvalidSetting { .. })));
    }

    #[test]
    fn test_factory_missing_file() {
        let result = FileLineFactory.create(FileLineSettings {
            path: PathBuf::from("/no/such/lines.txt"),
            ..Default::default()
        });
        assert!(matches!(result, Err(FactoryError::FileRead { .. })));
    }
}
