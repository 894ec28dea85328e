use crate::cli::BatchArgs;
use crate::error::{CliError, Result};
use crate::export;
use tracing::info;

pub fn run(args: BatchArgs) -> Result<()> {
    let irreps = args
        .irreps
        .iter()
        .map(|spec| parse_rows(spec))
        .collect::<Result<Vec<_>>>()?;

    info!(
        "Batch export of {} representations to '{}'.",
        irreps.len(),
        args.export.display()
    );
    println!("Batch export: {} representations", irreps.len());

    let outcomes = export::write_batch(&irreps, &args.export);
    let total = outcomes.len();
    let mut successful = 0usize;
    for (index, outcome) in outcomes.iter().enumerate() {
        let label = outcome
            .rows
            .iter()
            .map(|row| row.to_string())
            .collect::<Vec<_>>()
            .join(",");
        match &outcome.files {
            Ok(_) => {
                successful += 1;
                println!("[{:2}/{}] [{}] ✓", index + 1, total, label);
            }
            Err(error) => println!("[{:2}/{}] [{}] ✗ {}", index + 1, total, label, error),
        }
    }
    println!("Summary: {} successful, {} failed", successful, total - successful);

    Ok(())
}

/// Parses one `f1,f2,f3[,f4]` argument into its row lengths.
fn parse_rows(spec: &str) -> Result<Vec<i64>> {
    spec.split(',')
        .map(|part| part.trim().parse::<i64>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|_| CliError::InvalidIrrep {
            value: spec.to_string(),
        })
}
