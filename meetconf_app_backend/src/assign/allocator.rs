use meetconf_entities::prelude::Participant;

/// Gives `class` to as many of its candidates as possible in one pass.
///
/// Assignments are spread round-robin over the class's blocks: a cursor
/// starts at each block in turn and moves on to the next block whenever a
/// candidate is placed. Candidates whose slot under the cursor is taken, or
/// who already hold the class, are skipped without moving the cursor.
/// Capacity is never considered.
///
/// Returns the number of new assignments.
pub fn assign_participants_for_class(
    class: &str,
    candidates: &[usize],
    participants: &mut [Participant],
    class_blocks: usize,
) -> usize {
    let mut num_assignments = 0;

    // Starting only at block 0 would never reach later blocks once everybody's first slot is taken
    for start_block in 0..class_blocks {
        let mut next_block_to_fill = start_block;
        for participant_idx in candidates {
            let Some(participant) = participants.get_mut(*participant_idx) else {
                continue;
            };

            if participant.try_assign(next_block_to_fill, class) {
                next_block_to_fill = (next_block_to_fill + 1) % class_blocks;
                num_assignments += 1;
            }
        }
    }

    num_assignments
}
