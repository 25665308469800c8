pub mod import;
pub mod validation;
pub mod assign;
pub mod export;

pub use assign::{AllocationOutcome, AllocationSummary, ParticipantAssigner};
pub use import::{load_participants, LoadError, ImportError};
pub use export::{save_assignments, write_assignments, ExportError};
pub use validation::{check_for_duplicate_identities, DuplicateIdentityError};
