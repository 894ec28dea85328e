use crate::cli::Su4Args;
use crate::error::Result;
use crate::ui::CliProgressHandler;
use supermultiplet::engine::progress::ProgressReporter;
use supermultiplet::workflows;
use tracing::info;

pub fn run(args: Su4Args) -> Result<()> {
    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Branching custom SU(4) irrep with rows {:?}.", args.rows);
    let result = workflows::branch::run_rows(&args.rows, &reporter)?;

    crate::commands::report(&result, args.export.as_deref())
}
