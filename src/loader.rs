//! Skill table loading
//!
//! A data directory holds one file per skill. The file stem is the skill name
//! and the file carries `Occupation`, `Code` and `Skills Covered` columns.
//! CSV and Parquet files are both accepted. `Skills Covered` is a percentage,
//! with or without a trailing `%`, and is normalized to `[0, 1]`.
//!
//! Loading is all or nothing: a missing column, an empty cell or an unreadable
//! percentage in any file rejects the whole directory.

use std::fs::File;
use std::io::Seek;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use arrow::csv::ReaderBuilder;
use arrow::csv::reader::Format;
use arrow::record_batch::RecordBatch;
use arrow_schema::{Schema, SchemaRef};
use itertools::Itertools;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::error::util::{safe_open_file, validate_directory};
use crate::error::{CareerGraphError, Result};
use crate::models::{SkillRow, SkillTable, SkillTables};
use crate::utils::arrow::{all_text_schema, project_text_columns};
use crate::utils::logging::{
    create_main_progress_bar, finish_and_clear, log_operation_complete, log_operation_start,
    log_warning,
};

/// Column holding the occupation identifier
pub const OCCUPATION_COLUMN: &str = "Occupation";
/// Column holding the classification code
pub const CODE_COLUMN: &str = "Code";
/// Column holding the coverage percentage
pub const COVERAGE_COLUMN: &str = "Skills Covered";

const SKILL_COLUMNS: [&str; 3] = [OCCUPATION_COLUMN, CODE_COLUMN, COVERAGE_COLUMN];

/// Number of CSV records sampled to discover the header
const CSV_SCHEMA_SAMPLE: usize = 100;

/// File formats a skill table can be stored in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillFileFormat {
    Csv,
    Parquet,
}

impl SkillFileFormat {
    /// Detect the format from the file extension
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(Self::Csv),
            "parquet" => Some(Self::Parquet),
            _ => None,
        }
    }
}

/// A row as it comes out of the file, before validation
#[derive(Debug, Deserialize)]
struct RawSkillRow {
    #[serde(rename = "Occupation")]
    occupation: Option<String>,
    #[serde(rename = "Code")]
    code: Option<String>,
    #[serde(rename = "Skills Covered")]
    coverage: Option<String>,
}

impl RawSkillRow {
    fn into_row(self, skill: &str, row: usize) -> Result<SkillRow> {
        let occupation = require(self.occupation, skill, OCCUPATION_COLUMN, row)?;
        let code = require(self.code, skill, CODE_COLUMN, row)?;
        let coverage = require(self.coverage, skill, COVERAGE_COLUMN, row)?;
        Ok(SkillRow {
            occupation,
            code,
            coverage: parse_coverage(skill, &coverage)?,
        })
    }
}

fn require(
    value: Option<String>,
    skill: &str,
    column: &'static str,
    row: usize,
) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(CareerGraphError::MissingValue {
            skill: skill.to_string(),
            column,
            row,
        }),
    }
}

/// Parse a `Skills Covered` cell into a fraction
///
/// The value is always read as a percentage: `"75%"`, `"75"` and `"75.0"` all
/// become `0.75`. Values outside `0..=100` are rejected.
pub fn parse_coverage(skill: &str, raw: &str) -> Result<f64> {
    let invalid = || CareerGraphError::InvalidCoverage {
        skill: skill.to_string(),
        value: raw.to_string(),
    };

    let trimmed = raw.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
    let percent: f64 = number.parse().map_err(|_| invalid())?;

    if !percent.is_finite() || !(0.0..=100.0).contains(&percent) {
        return Err(invalid());
    }

    Ok(percent / 100.0)
}

/// Skill name for a table file: its file stem
pub fn skill_name_from_path(path: &Path) -> Result<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            CareerGraphError::schema_error(path, "Cannot derive a skill name from the file name")
        })
}

/// Find all skill table files in a directory, sorted by path
pub fn find_skill_files(dir: &Path) -> Result<Vec<PathBuf>> {
    log_operation_start("Searching for skill tables in", dir);
    validate_directory(dir, "loading skill tables")?;

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && SkillFileFormat::from_path(&path).is_some() {
            files.push(path);
        }
    }

    let files = files.into_iter().sorted().collect_vec();
    if files.is_empty() {
        log_warning("No skill table files found in directory", Some(dir));
    } else {
        log_operation_complete("Found", "skill table files", dir, files.len(), None);
    }

    Ok(files)
}

/// Read every record batch of a skill table file along with its schema
pub fn read_record_batches(path: &Path) -> Result<(SchemaRef, Vec<RecordBatch>)> {
    let format = SkillFileFormat::from_path(path).ok_or_else(|| {
        CareerGraphError::schema_error(path, "Unsupported file type, expected .csv or .parquet")
    })?;

    match format {
        SkillFileFormat::Csv => read_csv_batches(path),
        SkillFileFormat::Parquet => read_parquet_batches(path),
    }
}

fn read_csv_batches(path: &Path) -> Result<(SchemaRef, Vec<RecordBatch>)> {
    let mut file = safe_open_file(path, "reading skill table")?;

    let (inferred, _) = Format::default()
        .with_header(true)
        .infer_schema(&mut file, Some(CSV_SCHEMA_SAMPLE))?;
    file.rewind()?;

    // Read every column as text; percentages and codes are parsed by hand.
    let schema: SchemaRef = Arc::new(all_text_schema(&inferred));
    let reader = ReaderBuilder::new(Arc::clone(&schema))
        .with_header(true)
        .build(file)?;

    let batches = reader.collect::<std::result::Result<Vec<_>, _>>()?;
    Ok((schema, batches))
}

fn read_parquet_batches(path: &Path) -> Result<(SchemaRef, Vec<RecordBatch>)> {
    let file: File = safe_open_file(path, "reading skill table")?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    let schema = Arc::clone(builder.schema());
    let reader = builder.build()?;

    let batches = reader.collect::<std::result::Result<Vec<_>, _>>()?;
    Ok((schema, batches))
}

fn check_required_columns(schema: &Schema, path: &Path) -> Result<()> {
    let missing: Vec<&str> = SKILL_COLUMNS
        .iter()
        .copied()
        .filter(|column| schema.index_of(column).is_err())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(CareerGraphError::schema_error(
            path,
            format!("Missing required column(s): {}", missing.join(", ")),
        ))
    }
}

/// Read one skill table file
pub fn read_skill_table(path: &Path) -> Result<SkillTable> {
    let skill = skill_name_from_path(path)?;
    let (schema, batches) = read_record_batches(path)?;
    check_required_columns(&schema, path)?;

    let mut rows = Vec::with_capacity(batches.iter().map(RecordBatch::num_rows).sum());
    let mut offset = 0;
    for batch in &batches {
        let projected = project_text_columns(batch, &SKILL_COLUMNS, path)?;
        let raw: Vec<RawSkillRow> = serde_arrow::from_record_batch(&projected)?;
        for (i, raw_row) in raw.into_iter().enumerate() {
            rows.push(raw_row.into_row(&skill, offset + i)?);
        }
        offset += projected.num_rows();
    }

    log::debug!("Read {} rows for skill '{}' from {}", rows.len(), skill, path.display());
    Ok(SkillTable::new(skill, rows))
}

/// Combine loaded tables, rejecting two files that name the same skill
pub(crate) fn assemble_tables(loaded: Vec<(PathBuf, SkillTable)>) -> Result<SkillTables> {
    let mut sources: FxHashMap<String, PathBuf> = FxHashMap::default();
    let mut tables = SkillTables::new();

    for (path, table) in loaded {
        if let Some(first) = sources.get(table.skill()) {
            return Err(CareerGraphError::DuplicateSkill {
                skill: table.skill().to_string(),
                first: first.clone(),
                second: path,
            });
        }
        sources.insert(table.skill().to_string(), path);
        tables.insert(table);
    }

    Ok(tables)
}

/// Loader for a directory of skill tables
#[derive(Debug, Clone, Default)]
pub struct SkillTableLoader {
    show_progress: bool,
}

impl SkillTableLoader {
    /// Create a loader without progress output
    #[must_use]
    pub const fn new() -> Self {
        Self {
            show_progress: false,
        }
    }

    /// Show a progress bar while files are read
    #[must_use]
    pub const fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    #[must_use]
    pub const fn shows_progress(&self) -> bool {
        self.show_progress
    }

    /// Load every skill table in `dir`, reading files in parallel
    pub fn load_dir(&self, dir: &Path) -> Result<SkillTables> {
        let start = Instant::now();
        let files = find_skill_files(dir)?;
        if files.is_empty() {
            return Ok(SkillTables::new());
        }

        let pb = create_main_progress_bar(
            files.len() as u64,
            Some("Loading skill tables"),
            self.show_progress,
        );

        let loaded = files
            .par_iter()
            .map(|path| {
                let table = read_skill_table(path);
                pb.inc(1);
                table.map(|table| (path.clone(), table))
            })
            .collect::<Result<Vec<_>>>();
        finish_and_clear(&pb);

        let tables = assemble_tables(loaded?)?;
        log_operation_complete(
            "Loaded",
            "skill tables",
            dir,
            tables.len(),
            Some(start.elapsed()),
        );
        Ok(tables)
    }
}

/// Load every skill table in `dir` without progress output
pub fn load_skill_tables(dir: &Path) -> Result<SkillTables> {
    SkillTableLoader::new().load_dir(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coverage_accepts_percent_forms() {
        assert_eq!(parse_coverage("s", "75%").unwrap(), 0.75);
        assert_eq!(parse_coverage("s", " 75 ").unwrap(), 0.75);
        assert_eq!(parse_coverage("s", "100").unwrap(), 1.0);
        assert_eq!(parse_coverage("s", "0%").unwrap(), 0.0);
        assert_eq!(parse_coverage("s", "12.5 %").unwrap(), 0.125);
    }

    #[test]
    fn test_parse_coverage_rejects_bad_values() {
        for raw in ["", "%", "high", "-5%", "150%", "NaN", "inf"] {
            let err = parse_coverage("Speaking", raw).unwrap_err();
            assert!(
                matches!(err, CareerGraphError::InvalidCoverage { ref skill, .. } if skill == "Speaking"),
                "expected rejection of {raw:?}"
            );
        }
    }

    #[test]
    fn test_skill_name_from_path() {
        assert_eq!(
            skill_name_from_path(Path::new("data/softskills/Active Listening.csv")).unwrap(),
            "Active Listening"
        );
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(SkillFileFormat::from_path(Path::new("a.CSV")), Some(SkillFileFormat::Csv));
        assert_eq!(
            SkillFileFormat::from_path(Path::new("a.parquet")),
            Some(SkillFileFormat::Parquet)
        );
        assert_eq!(SkillFileFormat::from_path(Path::new("a.txt")), None);
        assert_eq!(SkillFileFormat::from_path(Path::new("README")), None);
    }
}
