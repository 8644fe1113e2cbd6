//! Async skill table loader
//!
//! Directory listing goes through `tokio::fs`; each file is decoded on the
//! blocking pool and the tasks are joined together. The result is identical
//! to the synchronous loader, including its all-or-nothing failure mode.

use std::path::{Path, PathBuf};
use std::time::Instant;

use futures::future::try_join_all;
use itertools::Itertools;
use tokio::fs;

use crate::error::util::validate_directory;
use crate::error::Result;
use crate::loader::{SkillFileFormat, SkillTableLoader, assemble_tables, read_skill_table};
use crate::models::SkillTables;
use crate::utils::logging::{
    create_main_progress_bar, finish_and_clear, log_operation_complete, log_operation_start,
    log_warning,
};

/// Find all skill table files in a directory asynchronously, sorted by path
pub async fn find_skill_files_async(dir: &Path) -> Result<Vec<PathBuf>> {
    log_operation_start("Searching for skill tables asynchronously in", dir);
    validate_directory(dir, "loading skill tables")?;

    let mut files = Vec::new();
    let mut entries = fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        let metadata = fs::metadata(&path).await?;
        if metadata.is_file() && SkillFileFormat::from_path(&path).is_some() {
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

/// Load every skill table in `dir` on the tokio blocking pool
pub async fn load_skill_tables_async(dir: &Path, show_progress: bool) -> Result<SkillTables> {
    let start = Instant::now();
    let files = find_skill_files_async(dir).await?;
    if files.is_empty() {
        return Ok(SkillTables::new());
    }

    let pb = create_main_progress_bar(
        files.len() as u64,
        Some("Loading skill tables"),
        show_progress,
    );

    let tasks = files.into_iter().map(|path| {
        let pb = pb.clone();
        tokio::task::spawn_blocking(move || {
            let table = read_skill_table(&path);
            pb.inc(1);
            table.map(|table| (path, table))
        })
    });

    let joined = try_join_all(tasks).await;
    finish_and_clear(&pb);

    let loaded = joined?.into_iter().collect::<Result<Vec<_>>>()?;
    let tables = assemble_tables(loaded)?;
    log_operation_complete(
        "Loaded",
        "skill tables",
        dir,
        tables.len(),
        Some(start.elapsed()),
    );
    Ok(tables)
}

impl SkillTableLoader {
    /// Async counterpart of [`SkillTableLoader::load_dir`]
    pub async fn load_dir_async(&self, dir: &Path) -> Result<SkillTables> {
        load_skill_tables_async(dir, self.shows_progress()).await
    }
}
