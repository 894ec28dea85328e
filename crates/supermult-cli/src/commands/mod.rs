pub mod batch;
pub mod shell;
pub mod su4;

use crate::error::Result;
use crate::export;
use crate::render;
use std::path::Path;
use supermultiplet::workflows::branch::BranchingResult;

/// Prints the result tables and, when requested, exports them to disk.
pub(crate) fn report(result: &BranchingResult, export_dir: Option<&Path>) -> Result<()> {
    println!("{}", render::info_block(&result.info));
    println!("{}", render::branching_table(result));

    if let Some(dir) = export_dir {
        let files = export::write_tables(result, dir)?;
        println!("Files written to {}:", dir.display());
        for path in files.all() {
            println!(" • {}", path.file_name().unwrap_or_default().to_string_lossy());
        }
    }

    Ok(())
}
