pub use crate::domain::participant::{ConfigurationError, Participant, DEFAULT_BLOCK_COUNT};
