use std::collections::HashMap;

use super::AssignmentConfigError;

/// Classes that are only offered in the first few blocks.
///
/// A class with a limit of `n` can only be placed in blocks `0..n`. Classes
/// without an entry are offered in every block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassBlockLimits {
    limits: HashMap<String, usize>,
}

impl ClassBlockLimits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, class: impl Into<String>, blocks: usize) -> Self {
        self.limits.insert(class.into(), blocks);
        self
    }

    pub fn blocks_for(&self, class: &str, block_count: usize) -> usize {
        self.limits.get(class).copied().unwrap_or(block_count)
    }

    pub fn is_limited(&self, class: &str) -> bool {
        self.limits.contains_key(class)
    }

    pub fn validate(&self, block_count: usize) -> Result<(), AssignmentConfigError> {
        match self
            .limits
            .iter()
            .find(|(_, blocks)| **blocks == 0 || **blocks > block_count)
        {
            Some((class, blocks)) => Err(AssignmentConfigError::InvalidBlockLimit {
                class: class.clone(),
                blocks: *blocks,
                block_count,
            }),
            None => Ok(()),
        }
    }
}

impl From<HashMap<String, usize>> for ClassBlockLimits {
    fn from(limits: HashMap<String, usize>) -> Self {
        ClassBlockLimits { limits }
    }
}
