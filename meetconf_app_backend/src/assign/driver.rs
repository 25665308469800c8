use itertools::Itertools;
use meetconf_entities::prelude::{Participant, DEFAULT_BLOCK_COUNT};
use thiserror::Error;

use super::{assign_participants_for_class, BlockAttendance, ClassBlockLimits, ClassRoster};

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum AssignmentConfigError {
    #[error("Class {class} is limited to {blocks} blocks, but there are {block_count} blocks")]
    InvalidBlockLimit {
        class: String,
        blocks: usize,
        block_count: usize,
    },
    #[error("Participant {name} has {actual} blocks, expected {expected}")]
    BlockCountMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocationOutcome {
    /// Every participant has a class in every block.
    Complete,
    /// A full round made no progress. `unassigned` slots are left empty.
    Stalled { unassigned: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationSummary {
    pub total_required: usize,
    pub assignments_made: usize,
    pub rounds: usize,
    pub outcome: AllocationOutcome,
    pub attendance: Option<BlockAttendance>,
}

impl AllocationSummary {
    pub fn is_complete(&self) -> bool {
        self.outcome == AllocationOutcome::Complete
    }
}

/// Assigns participants to the classes they chose, one class per block.
///
/// Preference order and class capacity are ignored. Oversubscribed classes
/// have to be fixed in the input before assigning.
#[derive(Debug, Clone)]
pub struct ParticipantAssigner {
    pub block_count: usize,
    pub block_limits: ClassBlockLimits,
    pub verbose: bool,
}

impl Default for ParticipantAssigner {
    fn default() -> Self {
        ParticipantAssigner {
            block_count: DEFAULT_BLOCK_COUNT,
            block_limits: ClassBlockLimits::default(),
            verbose: false,
        }
    }
}

impl ParticipantAssigner {
    pub fn new(block_count: usize) -> Self {
        ParticipantAssigner {
            block_count,
            ..Default::default()
        }
    }

    pub fn with_block_limits(mut self, block_limits: ClassBlockLimits) -> Self {
        self.block_limits = block_limits;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Runs rounds over all classes until every slot is filled or a round
    /// assigns nothing.
    pub fn assign(
        &self,
        participants: &mut [Participant],
    ) -> Result<AllocationSummary, AssignmentConfigError> {
        self.block_limits.validate(self.block_count)?;
        if let Some(participant) = participants
            .iter()
            .find(|p| p.block_count() != self.block_count)
        {
            return Err(AssignmentConfigError::BlockCountMismatch {
                name: participant.name().to_string(),
                expected: self.block_count,
                actual: participant.block_count(),
            });
        }

        let roster = ClassRoster::from_participants(participants);
        // Classes with fewer blocks go first, they have the fewest places to go
        let class_order = roster
            .iter()
            .filter(|(class, _)| self.block_limits.is_limited(class))
            .chain(
                roster
                    .iter()
                    .filter(|(class, _)| !self.block_limits.is_limited(class)),
            )
            .collect_vec();

        let total_required: usize = participants
            .iter()
            .map(|p| p.choices().len().min(self.block_count))
            .sum();
        let mut num_assignments = assigned_slots(participants);
        let mut rounds = 0;

        tracing::info!(
            "Assignments to make: {} across {} classes",
            total_required,
            roster.len()
        );

        let outcome = loop {
            if num_assignments >= total_required {
                break AllocationOutcome::Complete;
            }

            let prev_num_assignments = num_assignments;
            rounds += 1;
            for (class, candidates) in class_order.iter() {
                num_assignments += assign_participants_for_class(
                    class,
                    candidates,
                    participants,
                    self.block_limits.blocks_for(class, self.block_count),
                );
            }
            tracing::debug!(
                "Round {}: {} of {} assignments made",
                rounds,
                num_assignments,
                total_required
            );

            if prev_num_assignments == num_assignments {
                let unassigned = participants
                    .iter()
                    .map(|p| p.unassigned_blocks().count())
                    .sum();
                tracing::warn!(
                    "No new assignments found, {} slots are left empty. \
                     Check the output for blank cells!",
                    unassigned
                );
                break AllocationOutcome::Stalled { unassigned };
            }
        };

        let attendance = if self.verbose {
            let attendance =
                BlockAttendance::from_assignments(&roster, participants, self.block_count);
            for (class, counts) in attendance.iter() {
                tracing::info!(
                    "{}: {}",
                    class,
                    counts
                        .iter()
                        .enumerate()
                        .map(|(block, count)| format!("block {} has {}", block + 1, count))
                        .join(", ")
                );
            }
            Some(attendance)
        } else {
            None
        };

        Ok(AllocationSummary {
            total_required,
            assignments_made: num_assignments,
            rounds,
            outcome,
            attendance,
        })
    }
}

fn assigned_slots(participants: &[Participant]) -> usize {
    participants
        .iter()
        .map(|p| p.assignments().iter().filter(|a| a.is_some()).count())
        .sum()
}
