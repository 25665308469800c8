use itertools::Itertools;
use thiserror::Error;

/// Number of class blocks offered in one conference day.
pub const DEFAULT_BLOCK_COUNT: usize = 3;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ConfigurationError {
    #[error(
        "Participant {name} ({year}) chose only {chosen} distinct classes ({required} required)"
    )]
    TooFewChoices {
        name: String,
        year: String,
        chosen: usize,
        required: usize,
    },
    #[error("Block count must be at least 1")]
    ZeroBlocks,
}

/// A participant signing up for classes, together with the classes they
/// ended up in.
///
/// `choices` never contains duplicates and has at least `block_count`
/// entries. `assignments` has exactly one slot per block and never holds the
/// same class twice.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Participant {
    name: String,
    year: String,
    choices: Vec<String>,
    assignments: Vec<Option<String>>,
}

impl Participant {
    pub fn new(
        name: String,
        year: String,
        choices: Vec<String>,
        block_count: usize,
    ) -> Result<Participant, ConfigurationError> {
        if block_count == 0 {
            return Err(ConfigurationError::ZeroBlocks);
        }

        let choices = choices.into_iter().unique().collect_vec();
        if choices.len() < block_count {
            return Err(ConfigurationError::TooFewChoices {
                name,
                year,
                chosen: choices.len(),
                required: block_count,
            });
        }

        Ok(Participant {
            name,
            year,
            choices,
            assignments: vec![None; block_count],
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn year(&self) -> &str {
        &self.year
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    pub fn assignments(&self) -> &[Option<String>] {
        &self.assignments
    }

    pub fn assignment(&self, block: usize) -> Option<&str> {
        self.assignments.get(block).and_then(|a| a.as_deref())
    }

    pub fn block_count(&self) -> usize {
        self.assignments.len()
    }

    /// Whether `class` already occupies any block of this participant.
    pub fn holds(&self, class: &str) -> bool {
        self.assignments
            .iter()
            .any(|a| a.as_deref() == Some(class))
    }

    pub fn is_fully_assigned(&self) -> bool {
        self.assignments.iter().all(|a| a.is_some())
    }

    pub fn unassigned_blocks(&self) -> impl Iterator<Item = usize> + '_ {
        self.assignments
            .iter()
            .enumerate()
            .filter(|(_, a)| a.is_none())
            .map(|(idx, _)| idx)
    }

    /// Puts `class` into `block` unless the slot is taken or the class is
    /// already held elsewhere. Returns whether the assignment happened.
    pub fn try_assign(&mut self, block: usize, class: &str) -> bool {
        if self.holds(class) {
            return false;
        }

        match self.assignments.get_mut(block) {
            Some(slot @ None) => {
                *slot = Some(class.to_string());
                true
            }
            _ => false,
        }
    }

    pub fn clear_assignments(&mut self) {
        self.assignments.iter_mut().for_each(|a| *a = None);
    }

    /// Case-insensitive name plus year, e.g. `alice smith (2024)`.
    pub fn identity_key(&self) -> String {
        format!("{} ({})", self.name.to_lowercase(), self.year)
    }
}
