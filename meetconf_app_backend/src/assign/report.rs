use std::fmt::{Display, Formatter};

use meetconf_entities::prelude::Participant;

use super::ClassRoster;

/// Number of participants per class in each block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockAttendance {
    classes: Vec<(String, Vec<usize>)>,
}

impl BlockAttendance {
    pub fn from_assignments(
        roster: &ClassRoster,
        participants: &[Participant],
        block_count: usize,
    ) -> Self {
        let classes = roster
            .classes()
            .map(|class| {
                let counts = (0..block_count)
                    .map(|block| {
                        participants
                            .iter()
                            .filter(|p| p.assignment(block) == Some(class))
                            .count()
                    })
                    .collect();
                (class.to_string(), counts)
            })
            .collect();

        BlockAttendance { classes }
    }

    pub fn count(&self, class: &str, block: usize) -> Option<usize> {
        self.classes
            .iter()
            .find(|(c, _)| c == class)
            .and_then(|(_, counts)| counts.get(block).copied())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[usize])> {
        self.classes
            .iter()
            .map(|(class, counts)| (class.as_str(), counts.as_slice()))
    }
}

impl Display for BlockAttendance {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (class, counts) in self.iter() {
            writeln!(f, "{}", class)?;
            for (block, count) in counts.iter().enumerate() {
                writeln!(f, "\tBlock {}: {}", block + 1, count)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_counts_and_rendering() {
        let mut participants = vec![
            Participant::new("A".into(), "1".into(), vec!["Art".into(), "Chess".into()], 2)
                .unwrap(),
            Participant::new("B".into(), "1".into(), vec!["Chess".into(), "Art".into()], 2)
                .unwrap(),
        ];
        participants[0].try_assign(0, "Art");
        participants[0].try_assign(1, "Chess");
        participants[1].try_assign(0, "Art");

        let roster = ClassRoster::from_participants(&participants);
        let attendance = BlockAttendance::from_assignments(&roster, &participants, 2);

        assert_eq!(attendance.count("Art", 0), Some(2));
        assert_eq!(attendance.count("Chess", 0), Some(0));
        assert_eq!(attendance.count("Chess", 1), Some(1));
        assert_eq!(attendance.count("Chess", 2), None);
        assert_eq!(
            attendance.to_string(),
            "Art\n\tBlock 1: 2\n\tBlock 2: 0\nChess\n\tBlock 1: 0\n\tBlock 2: 1\n"
        );
    }
}
