//! Pack build pipeline.
//!
//! [`PackBuilder`] assembles one output tree per [`Variant`] under
//! `beta/<modloader>/<mcversion>/<variant>`.
//!
//! # Build Algorithm
//!
//! 1. Wipe and recreate the variant's output directory.
//! 2. Merge the variant's tiers in order: framework packwiz tree, then
//!    `mod/<modloader>/all/server`, then `nano` (nano, giga), then `giga` (giga).
//!    Later tiers overwrite earlier ones file by file.
//! 3. Apply and delete `filesToRemove.txt` if the merged tree has one.
//! 4. Replace the version placeholder in the stamp targets.
//! 5. Run `packwiz refresh --build` inside the output directory.
//!
//! Steps 1 and 2 are the only ones that abort a variant. Everything after is
//! best-effort: failures are logged and recorded in the [`BuildReport`] so the
//! user can inspect the tree and rerun the failed step by hand.
//!
//! A full build ([`PackBuilder::run`]) syncs the framework checkout once and
//! then builds every variant in [`Variant::BUILD_ORDER`]. A failed variant does
//! not stop the ones after it.

use crate::command::{CommandFailure, CommandRunner, ToolCommand, PACKWIZ};
use crate::config::PackConfig;
use crate::error::{Error, Result};
use crate::layout::PackLayout;
use crate::merge::{merge_dir, reset_dir, MergeStats};
use crate::removal::{apply_removal_list, RemovalReport};
use crate::stamp::{replace_in_file, stamp_targets, StampOutcome, VERSION_PLACEHOLDER};
use crate::sync::{RepoSyncer, SyncOutcome};
use crate::variant::{Tier, Variant};
use camino::Utf8PathBuf;

/// Progress information emitted while building a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildProgress {
    pub variant: Variant,
    pub stage: BuildStage,
}

/// Stages of a variant build, emitted in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStage {
    /// Deleting and recreating the output directory.
    Cleaning,
    /// Overlaying one tier onto the output directory.
    Merging(Tier),
    /// Processing `filesToRemove.txt`.
    ApplyingRemovals,
    /// Replacing the version placeholder.
    Stamping,
    /// Running the packaging tool.
    Refreshing,
    Complete,
}

/// One tier merged into an output tree.
#[derive(Debug, Clone)]
pub struct TierMerge {
    pub tier: Tier,
    pub source: Utf8PathBuf,
    /// Whether the tier's source directory existed.
    pub present: bool,
    pub stats: MergeStats,
}

/// Summary of a single variant build.
#[derive(Debug)]
pub struct BuildReport {
    pub variant: Variant,
    pub output_dir: Utf8PathBuf,
    pub tiers: Vec<TierMerge>,
    pub removal: RemovalReport,
    pub stamped: Vec<(Utf8PathBuf, StampOutcome)>,
    pub stamp_failures: Vec<Error>,
    /// `Err` if the packaging tool failed or could not be started.
    pub packaging: std::result::Result<(), CommandFailure>,
}

impl BuildReport {
    /// Whether every best-effort step succeeded.
    pub fn is_clean(&self) -> bool {
        !self.removal.has_failures() && self.stamp_failures.is_empty() && self.packaging.is_ok()
    }

    pub fn files_copied(&self) -> usize {
        self.tiers.iter().map(|t| t.stats.files_copied).sum()
    }
}

/// Summary of a full build: one framework sync and every variant.
#[derive(Debug)]
pub struct FullBuildReport {
    pub sync: SyncOutcome,
    pub variants: Vec<(Variant, Result<BuildReport>)>,
}

type ProgressCallback = Box<dyn Fn(BuildProgress)>;

/// Builds pack variants for one configuration and pack version.
pub struct PackBuilder {
    layout: PackLayout,
    config: PackConfig,
    version: String,
    progress_callback: Option<ProgressCallback>,
}

impl PackBuilder {
    pub fn new(layout: PackLayout, config: PackConfig, version: impl Into<String>) -> Self {
        Self {
            layout,
            config,
            version: version.into(),
            progress_callback: None,
        }
    }

    /// Register a progress callback, called at the start of each [`BuildStage`].
    pub fn with_progress<F>(mut self, callback: F) -> Self
    where
        F: Fn(BuildProgress) + 'static,
    {
        self.progress_callback = Some(Box::new(callback));
        self
    }

    pub fn layout(&self) -> &PackLayout {
        &self.layout
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Sync the framework checkout, then build every variant in build order.
    pub fn run(&self, runner: &mut dyn CommandRunner) -> FullBuildReport {
        let sync = self.sync_framework(runner);
        let variants = self.build_all(runner);
        FullBuildReport { sync, variants }
    }

    /// Clone or pull the framework checkout. Never fails; see [`SyncOutcome`].
    pub fn sync_framework(&self, runner: &mut dyn CommandRunner) -> SyncOutcome {
        RepoSyncer::new(&self.layout).sync(runner)
    }

    /// Build every variant in [`Variant::BUILD_ORDER`], continuing past failures.
    pub fn build_all(
        &self,
        runner: &mut dyn CommandRunner,
    ) -> Vec<(Variant, Result<BuildReport>)> {
        let mut variants = Vec::with_capacity(Variant::BUILD_ORDER.len());
        for variant in Variant::BUILD_ORDER {
            let result = self.build(variant, runner);
            if let Err(e) = &result {
                tracing::warn!("Build of {} failed: {}", variant, e);
            }
            variants.push((variant, result));
        }
        variants
    }

    /// Build a single variant from scratch.
    pub fn build(&self, variant: Variant, runner: &mut dyn CommandRunner) -> Result<BuildReport> {
        let output_dir = self.layout.output_dir(&self.config, variant);
        tracing::info!(
            "Building {}-{} into {}",
            self.config.mcversion,
            variant,
            output_dir
        );

        self.emit(variant, BuildStage::Cleaning);
        reset_dir(&output_dir)?;

        let mut tiers = Vec::with_capacity(variant.tiers().len());
        for &tier in variant.tiers() {
            self.emit(variant, BuildStage::Merging(tier));
            let source = self.layout.tier_source(&self.config, variant, tier);
            let present = source.as_std_path().is_dir();
            if !present {
                tracing::debug!("Tier '{}' has no source at {}", tier, source);
            }
            let stats = merge_dir(&source, &output_dir)?;
            tiers.push(TierMerge {
                tier,
                source,
                present,
                stats,
            });
        }

        self.emit(variant, BuildStage::ApplyingRemovals);
        let removal = match apply_removal_list(&output_dir) {
            Ok(report) => report,
            Err(e) => {
                tracing::warn!("Failed to process removal list: {}", e);
                RemovalReport {
                    list_found: true,
                    failures: vec![e],
                    ..Default::default()
                }
            }
        };

        self.emit(variant, BuildStage::Stamping);
        let mut stamped = Vec::new();
        let mut stamp_failures = Vec::new();
        for target in stamp_targets(variant) {
            let path = output_dir.join(target);
            match replace_in_file(&path, VERSION_PLACEHOLDER, &self.version) {
                Ok(outcome) => stamped.push((path, outcome)),
                Err(e) => {
                    tracing::warn!("Failed to stamp {}: {}", path, e);
                    stamp_failures.push(e);
                }
            }
        }

        self.emit(variant, BuildStage::Refreshing);
        let refresh = ToolCommand::new(PACKWIZ, &["refresh", "--build"], &output_dir);
        let packaging = runner.run(&refresh);
        if let Err(e) = &packaging {
            tracing::warn!("`{}` failed for {}: {}", refresh, variant, e);
        }

        self.emit(variant, BuildStage::Complete);
        Ok(BuildReport {
            variant,
            output_dir,
            tiers,
            removal,
            stamped,
            stamp_failures,
            packaging,
        })
    }

    fn emit(&self, variant: Variant, stage: BuildStage) {
        if let Some(callback) = &self.progress_callback {
            callback(BuildProgress { variant, stage });
        }
    }
}
