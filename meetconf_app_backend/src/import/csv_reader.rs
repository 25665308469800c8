use lazy_static::lazy_static;
use meetconf_entities::prelude::{ConfigurationError, Participant};
use regex::{Regex, RegexBuilder};
use std::{collections::HashMap, path::Path};
use thiserror::Error;

const CHOICE_ORDINALS: [&str; 10] = [
    "First", "Second", "Third", "Fourth", "Fifth", "Sixth", "Seventh", "Eighth", "Ninth", "Tenth",
];

const SUPPORTED_EXTENSIONS: [&str; 2] = ["csv", "tsv"];

#[derive(Debug, Clone, Default)]
pub struct CSVReaderConfig {
    name_column: Option<usize>,
    year_column: Option<usize>,
    choice_columns: Vec<Option<usize>>,
    delimiter: Option<u8>,
}

/// The input file is unreadable or does not have the expected shape.
/// Callers may ask for a different file.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Could not read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed input: {0}")]
    Csv(#[from] csv::Error),
    #[error("Missing column '{column}'")]
    MissingColumn { column: String },
    #[error("Row {row} has no value for '{column}'")]
    MissingField { row: usize, column: String },
    #[error("Reader configuration has no delimiter")]
    BadConfig,
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error(transparent)]
    Import(#[from] ImportError),
    /// A row was readable but does not describe a valid participant. This
    /// is not fixed by picking another file, so it is fatal.
    #[error(transparent)]
    Participant(#[from] ConfigurationError),
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
enum CSVField {
    Name,
    Year,
}

pub fn choice_column_label(choice_idx: usize) -> String {
    match CHOICE_ORDINALS.get(choice_idx) {
        Some(ordinal) => format!("{} Choice", ordinal),
        None => format!("Choice {}", choice_idx + 1),
    }
}

lazy_static! {
    static ref FIELD_HEADER_PATTERNS: HashMap<CSVField, Regex> = {
        let name_patterns: Vec<&str> = vec!["^(full )?name$"];
        let year_patterns: Vec<&str> = vec!["^(class )?year$", "^cohort$"];

        let mut m = HashMap::new();
        m.insert(CSVField::Name, name_patterns);
        m.insert(CSVField::Year, year_patterns);

        m.into_iter()
            .map(|(key, patterns)| {
                (
                    key,
                    RegexBuilder::new(&patterns.join("|"))
                        .case_insensitive(true)
                        .build()
                        .unwrap(),
                )
            })
            .collect()
    };
    static ref ORDINAL_CHOICE_PATTERNS: Vec<Regex> = CHOICE_ORDINALS
        .iter()
        .map(|ordinal| {
            RegexBuilder::new(&format!(r"^{}\s+choice$", ordinal))
                .case_insensitive(true)
                .build()
                .unwrap()
        })
        .collect();
    static ref NUMBERED_CHOICE_PATTERN: Regex = RegexBuilder::new(r"^choice\s*(\d+)$")
        .case_insensitive(true)
        .build()
        .unwrap();
}

/// Zero-based choice index of a header such as `Second Choice` or `Choice 2`.
fn choice_index(header: &str) -> Option<usize> {
    ORDINAL_CHOICE_PATTERNS
        .iter()
        .position(|pattern| pattern.is_match(header))
        .or_else(|| {
            NUMBERED_CHOICE_PATTERN
                .captures(header)
                .and_then(|captures| captures[1].parse::<usize>().ok())
                .filter(|number| *number > 0)
                .map(|number| number - 1)
        })
}

pub fn is_supported_input_path<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
        .unwrap_or(false)
}

/// Reads every row of the file at `path` into a participant.
pub fn load_participants<P: AsRef<Path>>(
    path: P,
    block_count: usize,
) -> Result<Vec<Participant>, LoadError> {
    let buffer = std::fs::read(path.as_ref()).map_err(ImportError::Io)?;
    let config = CSVReaderConfig::default_from_file(&buffer[..], block_count)?;
    let participants = config.parse(&buffer[..], block_count)?;

    tracing::debug!(
        "Loaded {} participants from {}",
        participants.len(),
        path.as_ref().display()
    );
    Ok(participants)
}

impl CSVReaderConfig {
    pub fn default_from_file<R>(
        mut reader: R,
        block_count: usize,
    ) -> Result<CSVReaderConfig, ImportError>
    where
        R: std::io::Read,
    {
        let delimiter_candidates = [b',', b';', b'\t'];
        let mut delimiter_counts = [0; 3];
        let mut buffer = Vec::new();

        reader.read_to_end(&mut buffer)?;

        for char in buffer.iter() {
            for (i, delimiter) in delimiter_candidates.iter().enumerate() {
                if char == delimiter {
                    delimiter_counts[i] += 1;
                }
            }
        }

        // Ties go to the earlier candidate, so files without any delimiter read as commas.
        let delimiter = delimiter_counts
            .into_iter()
            .enumerate()
            .rev()
            .max_by_key(|(_, c)| *c)
            .map(|(i, _)| delimiter_candidates[i])
            .unwrap_or(b',');
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .from_reader(&buffer[..]);
        let headers = reader.headers()?;

        let mut config = Self::propose_config_from_headers(headers.into_iter(), block_count);
        config.delimiter = Some(delimiter);
        Ok(config)
    }

    fn propose_config_from_headers<'a, I>(headers: I, block_count: usize) -> CSVReaderConfig
    where
        I: Iterator<Item = &'a str>,
    {
        let mut proposed_column_assignment = HashMap::new();
        let mut choice_columns = vec![None; block_count];
        for (header_idx, header) in headers.enumerate() {
            let header = header.trim();
            for (field, pattern) in FIELD_HEADER_PATTERNS.iter() {
                if pattern.is_match(header) && proposed_column_assignment.get(field) == None {
                    proposed_column_assignment.insert(*field, header_idx);
                }
            }
            if let Some(choice_idx) = choice_index(header) {
                if choice_idx < block_count && choice_columns[choice_idx] == None {
                    choice_columns[choice_idx] = Some(header_idx);
                }
            }
        }

        CSVReaderConfig {
            name_column: proposed_column_assignment.remove(&CSVField::Name),
            year_column: proposed_column_assignment.remove(&CSVField::Year),
            choice_columns,
            delimiter: None,
        }
    }

    fn required_columns(
        &self,
        block_count: usize,
    ) -> Result<(usize, usize, Vec<usize>), ImportError> {
        let name_idx = self.name_column.ok_or_else(|| ImportError::MissingColumn {
            column: "Name".into(),
        })?;
        let year_idx = self.year_column.ok_or_else(|| ImportError::MissingColumn {
            column: "Year".into(),
        })?;
        let choice_idxs = (0..block_count)
            .map(|choice_idx| {
                self.choice_columns
                    .get(choice_idx)
                    .copied()
                    .flatten()
                    .ok_or_else(|| ImportError::MissingColumn {
                        column: choice_column_label(choice_idx),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok((name_idx, year_idx, choice_idxs))
    }

    pub fn parse<R>(&self, reader: R, block_count: usize) -> Result<Vec<Participant>, LoadError>
    where
        R: std::io::Read,
    {
        let delimiter = self.delimiter.ok_or(ImportError::BadConfig)?;
        let (name_idx, year_idx, choice_idxs) = self.required_columns(block_count)?;

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut participants = vec![];

        for (row_idx, row) in reader.records().enumerate() {
            let row = row.map_err(ImportError::Csv)?;
            // Blank cells count as missing, an empty class would read as an open slot
            let field = |index: usize, column: String| {
                row.get(index)
                    .filter(|value| !value.is_empty())
                    .map(|value| value.to_string())
                    .ok_or(ImportError::MissingField {
                        row: row_idx + 1,
                        column,
                    })
            };

            let name = field(name_idx, "Name".into())?;
            let year = field(year_idx, "Year".into())?;
            let choices = choice_idxs
                .iter()
                .enumerate()
                .map(|(choice_idx, index)| field(*index, choice_column_label(choice_idx)))
                .collect::<Result<Vec<_>, _>>()?;

            participants.push(Participant::new(name, year, choices, block_count)?);
        }

        Ok(participants)
    }
}
