use crate::error::{CliError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use supermultiplet::core::partitions::su4::Su4Info;
use supermultiplet::engine::progress::ProgressReporter;
use supermultiplet::workflows::branch::{BranchingResult, run_rows};
use tracing::info;

/// Paths of the four files written for one representation: the irrep info
/// table and the branching table, each as CSV and as a LaTeX `table`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFiles {
    pub info_csv: PathBuf,
    pub branching_csv: PathBuf,
    pub info_tex: PathBuf,
    pub branching_tex: PathBuf,
}

impl ExportedFiles {
    pub fn all(&self) -> [&Path; 4] {
        [
            &self.info_csv,
            &self.branching_csv,
            &self.info_tex,
            &self.branching_tex,
        ]
    }
}

/// Writes the result tables into `out_dir` under names tagged with the
/// partition, e.g. `su4_branching_rules_8_5_5_0.csv`.
pub fn write_tables(result: &BranchingResult, out_dir: &Path) -> Result<ExportedFiles> {
    fs::create_dir_all(out_dir)?;

    let [f1, f2, f3, f4] = result.info.partition.rows();
    let tag = format!("{}_{}_{}_{}", f1, f2, f3, f4);
    let files = ExportedFiles {
        info_csv: out_dir.join(format!("su4_representation_{}.csv", tag)),
        branching_csv: out_dir.join(format!("su4_branching_rules_{}.csv", tag)),
        info_tex: out_dir.join(format!("su4_representation_{}.tex", tag)),
        branching_tex: out_dir.join(format!("su4_branching_rules_{}.tex", tag)),
    };

    write_info_csv(&result.info, &files.info_csv)?;
    write_branching_csv(result, &files.branching_csv)?;
    fs::write(&files.info_tex, info_latex(&result.info, &tag))?;
    fs::write(&files.branching_tex, branching_latex(result, &tag))?;

    info!(directory = %out_dir.display(), tag, "Exported result tables.");
    Ok(files)
}

/// Outcome of one representation inside a batch export.
#[derive(Debug)]
pub struct BatchOutcome {
    pub rows: Vec<i64>,
    pub files: Result<ExportedFiles>,
}

/// Branches and exports every representation in `irreps`, continuing past
/// failures so one bad label does not abort the rest of the batch.
pub fn write_batch(irreps: &[Vec<i64>], out_dir: &Path) -> Vec<BatchOutcome> {
    irreps
        .iter()
        .map(|rows| {
            let files = run_rows(rows, &ProgressReporter::new())
                .map_err(CliError::from)
                .and_then(|result| write_tables(&result, out_dir));
            BatchOutcome {
                rows: rows.clone(),
                files,
            }
        })
        .collect()
}

fn write_info_csv(info: &Su4Info, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|source| CliError::Export {
        path: path.to_path_buf(),
        source,
    })?;

    let [f1, f2, f3, f4] = info.partition.rows();
    let record = [
        f1.to_string(),
        f2.to_string(),
        f3.to_string(),
        f4.to_string(),
        info.p1.to_string(),
        info.p2.to_string(),
        info.p3.to_string(),
        info.alpha.to_string(),
        info.beta.to_string(),
        info.gamma.to_string(),
        info.casimir.to_string(),
        info.dimension.to_string(),
    ];

    let result = writer
        .write_record([
            "f1", "f2", "f3", "f4", "p1", "p2", "p3", "alpha", "beta", "gamma", "casimir",
            "dimension",
        ])
        .and_then(|_| writer.write_record(&record))
        .and_then(|_| writer.flush().map_err(csv::Error::from));

    result.map_err(|source| CliError::Export {
        path: path.to_path_buf(),
        source,
    })
}

fn write_branching_csv(result: &BranchingResult, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|source| CliError::Export {
        path: path.to_path_buf(),
        source,
    })?;

    let rows = result.summary();
    let written = rows
        .iter()
        .try_for_each(|row| writer.serialize(row))
        .and_then(|_| writer.flush().map_err(csv::Error::from));

    written.map_err(|source| CliError::Export {
        path: path.to_path_buf(),
        source,
    })
}

fn notation(info: &Su4Info) -> String {
    let [f1, f2, f3, f4] = info.partition.rows();
    format!("[{},{},{},{}]", f1, f2, f3, f4)
}

fn info_latex(info: &Su4Info, tag: &str) -> String {
    let notation = notation(info);
    let mut out = String::new();
    out.push_str(&format!("% SU(4) representation {} information\n\n", notation));
    out.push_str("\\begin{table}[htbp]\n\\centering\n");
    out.push_str(&format!(
        "\\caption{{SU(4) representation ${}$ - basic information}}\n",
        notation
    ));
    out.push_str(&format!("\\label{{tab:su4_info_{}}}\n", tag));
    out.push_str("\\begin{tabular}{|c|c|c|c|c|}\n\\hline\n");
    out.push_str("$[f_1,f_2,f_3,f_4]$ & $(p_1,p_2,p_3)$ & $(\\alpha,\\beta,\\gamma)$ & $C_2$ & dim \\\\\n\\hline\n");
    out.push_str(&format!(
        "${}$ & $({},{},{})$ & $({},{},{})$ & ${}$ & ${}$ \\\\\n",
        notation,
        info.p1,
        info.p2,
        info.p3,
        info.alpha,
        info.beta,
        info.gamma,
        info.casimir,
        info.dimension
    ));
    out.push_str("\\hline\n\\end{tabular}\n\\end{table}\n");
    out
}

fn branching_latex(result: &BranchingResult, tag: &str) -> String {
    let notation = notation(&result.info);
    let mut out = String::new();
    out.push_str(&format!(
        "% Branching rules for the SU(4) representation {}\n\n",
        notation
    ));
    out.push_str("\\begin{table}[htbp]\n\\centering\n");
    out.push_str(&format!(
        "\\caption{{Branching rules for the SU(4) representation ${}$ to $(S,T)$}}\n",
        notation
    ));
    out.push_str(&format!("\\label{{tab:branching_rules_{}}}\n", tag));
    out.push_str("\\begin{tabular}{|c|c|c|c|c|}\n\\hline\n");
    out.push_str("$S$ & $T$ & mult & dim & cumulative \\\\\n\\hline\n");
    for row in result.summary() {
        out.push_str(&format!(
            "${}$ & ${}$ & {} & {} & {} \\\\\n",
            row.spin, row.isospin, row.multiplicity, row.dimension, row.cumulative_dimension
        ));
    }
    out.push_str("\\hline\n\\end{tabular}\n\\end{table}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn branch(rows: &[i64]) -> BranchingResult {
        run_rows(rows, &ProgressReporter::new()).unwrap()
    }

    #[test]
    fn writes_all_four_tagged_files() {
        let dir = tempfile::tempdir().unwrap();
        let files = write_tables(&branch(&[1, 1, 0, 0]), dir.path()).unwrap();

        for path in files.all() {
            assert!(path.exists(), "missing export file {:?}", path);
            let name = path.file_name().unwrap().to_string_lossy();
            assert!(name.contains("1_1_0_0"));
        }
    }

    #[test]
    fn branching_csv_has_headers_and_exact_fractions() {
        let dir = tempfile::tempdir().unwrap();
        let files = write_tables(&branch(&[1, 0, 0, 0]), dir.path()).unwrap();

        let content = fs::read_to_string(&files.branching_csv).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "spin,isospin,multiplicity,dimension,cumulative_dimension"
        );
        assert_eq!(lines.next().unwrap(), "1/2,1/2,1,4,4");
    }

    #[test]
    fn info_csv_carries_the_closed_form_dimension() {
        let dir = tempfile::tempdir().unwrap();
        let files = write_tables(&branch(&[8, 5, 5, 0]), dir.path()).unwrap();

        let content = fs::read_to_string(&files.info_csv).unwrap();
        let data_line = content.lines().nth(1).unwrap();
        assert!(data_line.starts_with("8,5,5,0,"));
        assert!(data_line.ends_with(",770"));
    }

    #[test]
    fn latex_tables_are_labelled_by_tag() {
        let dir = tempfile::tempdir().unwrap();
        let files = write_tables(&branch(&[2, 1, 1, 0]), dir.path()).unwrap();

        let tex = fs::read_to_string(&files.branching_tex).unwrap();
        assert!(tex.contains("\\label{tab:branching_rules_2_1_1_0}"));
        assert!(tex.contains("\\begin{tabular}{|c|c|c|c|c|}"));

        let info_tex = fs::read_to_string(&files.info_tex).unwrap();
        assert!(info_tex.contains("\\label{tab:su4_info_2_1_1_0}"));
    }

    #[test]
    fn batch_export_continues_past_failures() {
        let dir = tempfile::tempdir().unwrap();
        let irreps = vec![vec![1, 1, 0, 0], vec![3, 5, 1, 0], vec![2, 0, 0, 0]];

        let outcomes = write_batch(&irreps, dir.path());
        assert_eq!(outcomes.len(), 3);
        assert!(outcomes[0].files.is_ok());
        assert!(outcomes[1].files.is_err(), "non-descending rows must fail");
        let files = outcomes[2].files.as_ref().unwrap();
        for path in files.all() {
            assert!(path.exists());
        }
    }

    #[test]
    fn creates_the_output_directory_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out/tables");
        let files = write_tables(&branch(&[1, 1, 0, 0]), &nested).unwrap();
        assert!(files.info_csv.starts_with(&nested));
        assert!(files.info_csv.exists());
    }
}
