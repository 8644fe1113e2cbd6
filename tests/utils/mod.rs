#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use arrow::array::{Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use career_graph::{ScoredOccupation, SkillRow, SkillTable, SkillTables};
use parquet::arrow::ArrowWriter;

/// Tolerance used when comparing scores
pub const EPSILON: f64 = 1e-12;

/// Build a skill table from `(occupation, code, coverage)` triples
#[must_use]
pub fn table(skill: &str, rows: &[(&str, &str, f64)]) -> SkillTable {
    SkillTable::new(
        skill,
        rows.iter()
            .map(|(occupation, code, coverage)| SkillRow::new(*occupation, *code, *coverage))
            .collect(),
    )
}

/// Build a set of skill tables
#[must_use]
pub fn tables(entries: &[(&str, &[(&str, &str, f64)])]) -> SkillTables {
    entries.iter().map(|(skill, rows)| table(skill, rows)).collect()
}

/// Three single-row tables where Occ1 and Occ3 share `code1`
#[must_use]
pub fn worked_example() -> SkillTables {
    tables(&[
        ("A", &[("Occ1", "code1", 0.5)]),
        ("B", &[("Occ2", "code2", 0.7)]),
        ("C", &[("Occ3", "code1", 0.9)]),
    ])
}

/// A small construction-trade data set with shared codes across tables
#[must_use]
pub fn construction_tables() -> SkillTables {
    tables(&[
        (
            "Coordination",
            &[
                ("Roofers", "47-2181.00", 0.60),
                ("Carpenters", "47-2031.00", 0.80),
                ("Helpers--Roofers", "47-2181.00", 0.40),
                ("Millwrights", "49-9044.00", 0.50),
            ],
        ),
        (
            "Monitoring",
            &[
                ("Carpenters", "47-2031.00", 0.30),
                ("Stonemasons", "47-2031.00", 0.70),
                ("Roofers", "47-2181.00", 0.20),
            ],
        ),
        (
            "Speaking",
            &[
                ("Dancers", "27-2031.00", 0.90),
                ("Athletes and Sports Competitors", "27-2021.00", 0.90),
            ],
        ),
    ])
}

/// Occupation names of a scored list, in order
#[must_use]
pub fn names(scored: &[ScoredOccupation]) -> Vec<&str> {
    scored.iter().map(|s| s.occupation.as_str()).collect()
}

/// Find a scored occupation by name
#[must_use]
pub fn find<'a>(scored: &'a [ScoredOccupation], occupation: &str) -> &'a ScoredOccupation {
    scored
        .iter()
        .find(|s| s.occupation == occupation)
        .unwrap_or_else(|| panic!("{occupation} was not scored"))
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

/// Write a CSV skill table into `dir`
pub fn write_csv(dir: &Path, skill: &str, content: &str) -> PathBuf {
    let path = dir.join(format!("{skill}.csv"));
    fs::write(&path, content).expect("failed to write csv fixture");
    path
}

/// Write a Parquet skill table with numeric percentages into `dir`
pub fn write_parquet(dir: &Path, skill: &str, rows: &[(&str, &str, f64)]) -> PathBuf {
    let schema = Arc::new(Schema::new(vec![
        Field::new("Occupation", DataType::Utf8, false),
        Field::new("Code", DataType::Utf8, false),
        Field::new("Skills Covered", DataType::Float64, false),
    ]));
    let batch = RecordBatch::try_new(
        Arc::clone(&schema),
        vec![
            Arc::new(StringArray::from(
                rows.iter().map(|r| r.0).collect::<Vec<_>>(),
            )),
            Arc::new(StringArray::from(
                rows.iter().map(|r| r.1).collect::<Vec<_>>(),
            )),
            Arc::new(Float64Array::from(
                rows.iter().map(|r| r.2).collect::<Vec<_>>(),
            )),
        ],
    )
    .expect("failed to build parquet fixture batch");

    let path = dir.join(format!("{skill}.parquet"));
    let file = fs::File::create(&path).expect("failed to create parquet fixture");
    let mut writer = ArrowWriter::try_new(file, schema, None).expect("failed to open writer");
    writer.write(&batch).expect("failed to write parquet fixture");
    writer.close().expect("failed to close parquet fixture");
    path
}
