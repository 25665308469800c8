use std::{io::Write, path::{Path, PathBuf}};

use clap::Parser;
use meetconf_app_backend::{
    check_for_duplicate_identities, load_participants, save_assignments, AllocationOutcome,
    AllocationSummary, ParticipantAssigner,
};
use meetconf_entities::prelude::Participant;

pub mod config;
pub mod logging;
pub mod prompt;

pub use config::{read_config, Config};

/// Assigns participants to elective classes, one class per block.
#[derive(Parser, Debug, Default)]
#[command(name = "meetconf", version)]
pub struct Args {
    /// Preferences file to read. Asked for interactively if missing.
    #[arg(short, long)]
    pub input: Option<PathBuf>,
    /// Where to write the assignments. Overrides `output_path` from the config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// YAML config file. Defaults to the file named by MEETCONF_CONFIG.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: Args) -> Result<(), anyhow::Error> {
    let config = read_config(args.config.as_deref());
    logging::init_logging(&config.logging_config);

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut stdout = std::io::stdout();

    let (input_path, mut participants) =
        prompt::prompt_for_participants(&mut input, &mut stdout, args.input, |path| {
            load_participants(path, config.block_count)
        })?;
    tracing::info!(
        "Read {} participants from {}",
        participants.len(),
        input_path.display()
    );

    let output_path = args
        .output
        .unwrap_or_else(|| PathBuf::from(&config.output_path));
    assign_and_save(&config, &mut participants, &output_path, &mut stdout)?;
    Ok(())
}

/// Validates, assigns and writes the result, reporting progress to `out`.
pub fn assign_and_save<W>(
    config: &Config,
    participants: &mut [Participant],
    output_path: &Path,
    out: &mut W,
) -> Result<AllocationSummary, anyhow::Error>
where
    W: Write,
{
    check_for_duplicate_identities(participants)?;

    let summary = ParticipantAssigner::new(config.block_count)
        .with_block_limits(config.block_limits())
        .verbose(true)
        .assign(participants)?;

    if let Some(attendance) = summary.attendance.as_ref() {
        write!(out, "{}", attendance)?;
    }
    if let AllocationOutcome::Stalled { unassigned } = summary.outcome {
        writeln!(
            out,
            "No new assignments found! {} slots are still empty, check the output for blank cells.",
            unassigned
        )?;
    }

    save_assignments(output_path, participants)?;
    writeln!(
        out,
        "Saved assignments to {}. Good luck at MEETConf!",
        output_path.display()
    )?;

    Ok(summary)
}
