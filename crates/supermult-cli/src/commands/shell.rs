use crate::error::Result;
use crate::ui::CliProgressHandler;
use std::path::Path;
use supermultiplet::core::shells::{self, ShellSpace};
use supermultiplet::engine::progress::ProgressReporter;
use supermultiplet::workflows;
use tracing::info;

pub fn run(space: ShellSpace, rows: &[i64], export_dir: Option<&Path>) -> Result<()> {
    info!("Converting {} diagram {:?} to an SU(4) label.", space, rows);
    let shape = shells::to_su4(space, rows)?;

    println!("{} diagram {:?}", space, rows);
    println!("SU(4) label (reduced): {}\n", shape);

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    let result = workflows::branch::run(shape, &reporter)?;
    crate::commands::report(&result, export_dir)
}
