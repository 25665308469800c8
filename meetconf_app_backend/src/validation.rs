use std::collections::HashSet;

use meetconf_entities::prelude::Participant;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
#[error("Duplicate participant: {key}")]
pub struct DuplicateIdentityError {
    pub key: String,
}

/// Fails on the first participant whose name (ignoring case) and year were
/// already seen. Must pass before any assignment is made.
pub fn check_for_duplicate_identities(
    participants: &[Participant],
) -> Result<(), DuplicateIdentityError> {
    let mut keys_seen = HashSet::new();
    for participant in participants {
        let key = participant.identity_key();
        if keys_seen.contains(&key) {
            return Err(DuplicateIdentityError { key });
        }
        keys_seen.insert(key);
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn participant(name: &str, year: &str) -> Participant {
        Participant::new(
            name.into(),
            year.into(),
            vec!["Art".into(), "Music".into(), "Chess".into()],
            3,
        )
        .unwrap()
    }

    #[test]
    fn test_same_name_different_case_same_year_is_duplicate() {
        let participants = vec![
            participant("Alice Smith", "2024"),
            participant("alice smith", "2024"),
        ];

        assert_eq!(
            check_for_duplicate_identities(&participants),
            Err(DuplicateIdentityError {
                key: "alice smith (2024)".into()
            })
        );
    }

    #[test]
    fn test_same_name_different_year_is_allowed() {
        let participants = vec![
            participant("Alice Smith", "2024"),
            participant("alice smith", "2025"),
        ];

        assert_eq!(check_for_duplicate_identities(&participants), Ok(()));
    }

    #[test]
    fn test_first_repeat_is_reported() {
        let participants = vec![
            participant("A", "1"),
            participant("B", "1"),
            participant("b", "1"),
            participant("a", "1"),
        ];

        assert_eq!(
            check_for_duplicate_identities(&participants).unwrap_err().key,
            "b (1)"
        );
    }

    #[test]
    fn test_empty_list_is_valid() {
        assert_eq!(check_for_duplicate_identities(&[]), Ok(()));
    }
}
