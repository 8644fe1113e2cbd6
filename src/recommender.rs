//! Recommendation pipeline
//!
//! Owns the skill tables and the occupation network built from them, and runs
//! score, rank and select for each query.

use std::path::Path;

use log::info;

use crate::algorithm::matching::score_occupations;
use crate::algorithm::network::{NetworkBuilder, OccupationGraph};
use crate::algorithm::ranking::{rank, select};
use crate::config::RecommenderConfig;
use crate::error::Result;
use crate::loader::SkillTableLoader;
use crate::models::{ScoredOccupation, SkillTables};

/// Occupation recommender over a fixed set of skill tables
#[derive(Debug, Clone)]
pub struct Recommender {
    config: RecommenderConfig,
    tables: SkillTables,
    graph: OccupationGraph,
}

impl Recommender {
    /// Build the occupation network for `tables`
    #[must_use]
    pub fn new(tables: SkillTables, config: RecommenderConfig) -> Self {
        let graph = NetworkBuilder::new()
            .with_config(config.network_config())
            .build(&tables);
        Self {
            config,
            tables,
            graph,
        }
    }

    /// Load the skill tables from `config.data_dir` and build the network
    pub fn from_config(config: RecommenderConfig) -> Result<Self> {
        let tables = SkillTableLoader::new()
            .with_progress(config.show_progress)
            .load_dir(&config.data_dir)?;
        Ok(Self::new(tables, config))
    }

    /// Async counterpart of [`Recommender::from_config`]
    pub async fn from_config_async(config: RecommenderConfig) -> Result<Self> {
        let tables = SkillTableLoader::new()
            .with_progress(config.show_progress)
            .load_dir_async(&config.data_dir)
            .await?;
        Ok(Self::new(tables, config))
    }

    /// Load the skill tables from `dir` with an otherwise default configuration
    pub fn from_dir(dir: &Path) -> Result<Self> {
        Self::from_config(RecommenderConfig::builder().data_dir(dir).build()?)
    }

    /// Top `config.num_recommendations` occupations for `user_skills`
    #[must_use]
    pub fn recommend<S: AsRef<str>>(&self, user_skills: &[S]) -> Vec<ScoredOccupation> {
        self.recommend_n(user_skills, self.config.num_recommendations)
    }

    /// Top `n` occupations for `user_skills`
    #[must_use]
    pub fn recommend_n<S: AsRef<str>>(&self, user_skills: &[S], n: usize) -> Vec<ScoredOccupation> {
        let scored = score_occupations(&self.graph, user_skills, &self.tables);
        let top = select(rank(scored), n);
        info!("Selected {} of {} requested recommendations", top.len(), n);
        top
    }

    /// All occupations scored and ranked, without truncation
    #[must_use]
    pub fn ranked<S: AsRef<str>>(&self, user_skills: &[S]) -> Vec<ScoredOccupation> {
        rank(score_occupations(&self.graph, user_skills, &self.tables))
    }

    #[must_use]
    pub fn graph(&self) -> &OccupationGraph {
        &self.graph
    }

    #[must_use]
    pub fn tables(&self) -> &SkillTables {
        &self.tables
    }

    #[must_use]
    pub fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    /// Names of the skills a user can choose from
    pub fn skill_names(&self) -> impl Iterator<Item = &str> {
        self.tables.skill_names()
    }
}
