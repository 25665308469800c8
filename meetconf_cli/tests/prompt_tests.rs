use std::{
    io::Cursor,
    path::{Path, PathBuf},
};

use assert_matches::assert_matches;
use meetconf_app_backend::{ImportError, LoadError};
use meetconf_cli::prompt::{prompt_for_participants, INVALID_PATH_PROMPT, UNREADABLE_PROMPT};
use meetconf_entities::prelude::{ConfigurationError, Participant};

fn one_participant() -> Vec<Participant> {
    vec![Participant::new(
        "Alice".into(),
        "2024".into(),
        vec!["Art".into(), "Music".into(), "Chess".into()],
        3,
    )
    .unwrap()]
}

#[test]
fn test_reprompts_on_unsupported_extension() {
    let mut input = Cursor::new("prefs.xlsx\n\nprefs.csv\n");
    let mut output = vec![];
    let mut loaded = vec![];

    let (path, participants) = prompt_for_participants(&mut input, &mut output, None, |path| {
        loaded.push(path.to_path_buf());
        Ok(one_participant())
    })
    .unwrap();

    assert_eq!(path, PathBuf::from("prefs.csv"));
    assert_eq!(participants.len(), 1);
    assert_eq!(loaded, vec![PathBuf::from("prefs.csv")]);
    assert_eq!(
        String::from_utf8(output).unwrap().matches(INVALID_PATH_PROMPT).count(),
        2
    );
}

#[test]
fn test_reprompts_on_unreadable_file() {
    let mut input = Cursor::new("good.csv\n");
    let mut output = vec![];
    let mut attempts = 0;

    let (path, _) = prompt_for_participants(
        &mut input,
        &mut output,
        Some(PathBuf::from("missing.csv")),
        |path: &Path| {
            attempts += 1;
            if path == Path::new("missing.csv") {
                Err(LoadError::Import(ImportError::MissingColumn {
                    column: "Name".into(),
                }))
            } else {
                Ok(one_participant())
            }
        },
    )
    .unwrap();

    assert_eq!(path, PathBuf::from("good.csv"));
    assert_eq!(attempts, 2);
    assert!(String::from_utf8(output).unwrap().contains(UNREADABLE_PROMPT));
}

#[test]
fn test_invalid_participant_is_not_reprompted() {
    let mut input = Cursor::new("other.csv\n");
    let mut output = vec![];

    let result = prompt_for_participants(
        &mut input,
        &mut output,
        Some(PathBuf::from("prefs.csv")),
        |_: &Path| {
            Err(LoadError::Participant(ConfigurationError::TooFewChoices {
                name: "Bob".into(),
                year: "2024".into(),
                chosen: 2,
                required: 3,
            }))
        },
    );

    let err = result.unwrap_err();
    assert_matches!(
        err.downcast_ref::<LoadError>(),
        Some(LoadError::Participant(_))
    );
    assert!(output.is_empty());
}

#[test]
fn test_end_of_input_stops_prompting() {
    let mut input = Cursor::new("");
    let mut output = vec![];

    let result = prompt_for_participants(&mut input, &mut output, None, |_: &Path| Ok(vec![]));

    assert!(result.is_err());
}
