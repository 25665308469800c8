use assert_matches::assert_matches;
use meetconf_app_backend::{load_participants, save_assignments, ImportError, LoadError};
use meetconf_entities::prelude::ConfigurationError;
use tempfile::tempdir;

#[test]
fn test_missing_file_is_import_error() -> Result<(), anyhow::Error> {
    let dir = tempdir()?;
    let result = load_participants(dir.path().join("does_not_exist.csv"), 3);

    assert_matches!(result, Err(LoadError::Import(ImportError::Io(_))));
    Ok(())
}

#[test]
fn test_load_tab_separated_file() -> Result<(), anyhow::Error> {
    let dir = tempdir()?;
    let path = dir.path().join("prefs.tsv");
    std::fs::write(
        &path,
        "Name\tYear\tFirst Choice\tSecond Choice\tThird Choice\nAlice\t2024\tArt\tMusic\tChess\n",
    )?;

    let participants = load_participants(&path, 3)?;

    assert_eq!(participants.len(), 1);
    assert_eq!(participants[0].choices(), &["Art", "Music", "Chess"]);
    Ok(())
}

#[test]
fn test_file_without_choice_columns_is_import_error() -> Result<(), anyhow::Error> {
    let dir = tempdir()?;
    let path = dir.path().join("no_choices.csv");
    std::fs::write(&path, "Name,Year\nAlice,2024\n")?;

    let result = load_participants(&path, 3);

    assert_matches!(result, Err(LoadError::Import(ImportError::MissingColumn { .. })));
    Ok(())
}

#[test]
fn test_duplicate_choices_in_file_are_fatal() -> Result<(), anyhow::Error> {
    let dir = tempdir()?;
    let path = dir.path().join("duplicates.csv");
    std::fs::write(
        &path,
        "Name,Year,First Choice,Second Choice,Third Choice\nAlice,2024,Art,Music,Art\n",
    )?;

    let result = load_participants(&path, 3);

    assert_matches!(
        result,
        Err(LoadError::Participant(ConfigurationError::TooFewChoices {
            chosen: 2,
            required: 3,
            ..
        }))
    );
    Ok(())
}

#[test]
fn test_saved_assignments_can_be_read_back() -> Result<(), anyhow::Error> {
    let dir = tempdir()?;
    let input = dir.path().join("roundtrip_in.csv");
    let output = dir.path().join("roundtrip_out.csv");
    std::fs::write(
        &input,
        "Name,Year,First Choice,Second Choice,Third Choice\nAlice,2024,Art,Music,Chess\n",
    )?;

    let mut participants = load_participants(&input, 3)?;
    meetconf_app_backend::ParticipantAssigner::new(3).assign(&mut participants)?;
    save_assignments(&output, &participants)?;

    let mut reader = csv::Reader::from_path(&output)?;
    let headers = reader.headers()?.clone();
    let rows = reader.records().collect::<Result<Vec<_>, _>>()?;

    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["Name", "Year", "Block 1", "Block 2", "Block 3"]
    );
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].iter().collect::<Vec<_>>(), vec!["Alice", "2024", "Art", "Music", "Chess"]);
    Ok(())
}
