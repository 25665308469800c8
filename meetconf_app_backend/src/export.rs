use std::path::Path;

use meetconf_entities::prelude::Participant;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Could not write assignments: {0}")]
    Csv(#[from] csv::Error),
    #[error("Could not write assignments: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes one row per participant: name, year, then the class of each
/// block. Empty slots are written as empty cells.
pub fn write_assignments<W>(writer: W, participants: &[Participant]) -> Result<(), ExportError>
where
    W: std::io::Write,
{
    let block_count = participants
        .iter()
        .map(|p| p.block_count())
        .max()
        .unwrap_or(meetconf_entities::prelude::DEFAULT_BLOCK_COUNT);

    let mut writer = csv::Writer::from_writer(writer);

    let mut header = vec!["Name".to_string(), "Year".to_string()];
    header.extend((0..block_count).map(|block| format!("Block {}", block + 1)));
    writer.write_record(&header)?;

    for participant in participants {
        let mut record = vec![participant.name(), participant.year()];
        record.extend((0..block_count).map(|block| participant.assignment(block).unwrap_or("")));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

pub fn save_assignments<P: AsRef<Path>>(
    path: P,
    participants: &[Participant],
) -> Result<(), ExportError> {
    let file = std::fs::File::create(path.as_ref())?;
    write_assignments(file, participants)?;
    tracing::debug!("Wrote {} rows to {}", participants.len(), path.as_ref().display());
    Ok(())
}
