pub mod roster;
pub mod limits;
pub mod allocator;
pub mod driver;
pub mod report;

pub use allocator::assign_participants_for_class;
pub use driver::{AllocationOutcome, AllocationSummary, AssignmentConfigError, ParticipantAssigner};
pub use limits::ClassBlockLimits;
pub use report::BlockAttendance;
pub use roster::ClassRoster;
