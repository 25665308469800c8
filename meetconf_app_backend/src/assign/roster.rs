use std::collections::HashMap;

use meetconf_entities::prelude::Participant;

/// Maps every chosen class to the participants who chose it.
///
/// Classes keep the order in which they were first seen, candidates keep
/// the order of the participant list. Candidates are indices into the slice
/// the roster was built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassRoster {
    classes: Vec<(String, Vec<usize>)>,
    class_index: HashMap<String, usize>,
}

impl ClassRoster {
    pub fn from_participants(participants: &[Participant]) -> Self {
        let mut roster = ClassRoster::default();

        for (participant_idx, participant) in participants.iter().enumerate() {
            for class in participant.choices() {
                let class_idx = match roster.class_index.get(class) {
                    Some(class_idx) => *class_idx,
                    None => {
                        roster.classes.push((class.clone(), vec![]));
                        roster.class_index.insert(class.clone(), roster.classes.len() - 1);
                        roster.classes.len() - 1
                    }
                };
                roster.classes[class_idx].1.push(participant_idx);
            }
        }

        roster
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(|(class, _)| class.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[usize])> {
        self.classes
            .iter()
            .map(|(class, candidates)| (class.as_str(), candidates.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
