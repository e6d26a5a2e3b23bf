//! Tiered modpack assembly on top of a PackFramework checkout.
//!
//! This crate holds every file-system step of a PackFrameworker build. It does
//! no terminal I/O: prompts are passed in as closures and external tools run
//! through [`CommandRunner`]. It supports:
//!
//! - **Settings**: `config.json` with the target game version and modloader
//! - **Framework sync**: clone or pull the PackFramework repository
//! - **Tiered overlay**: framework, server, nano and giga tiers merged in order
//! - **Removal lists**: `filesToRemove.txt` drops files lower tiers contributed
//! - **Version stamping**: the `noVersion` placeholder is replaced on build
//! - **Release promotion**: copy `beta/` to `release/` without beta-local state
//!
//! # Example
//!
//! ```no_run
//! use pfw_pack::{PackBuilder, PackConfig, PackLayout, SystemRunner};
//!
//! let layout = PackLayout::new("/opt/packframeworker");
//! let config = PackConfig::new("1.20.1", "forge");
//!
//! let builder = PackBuilder::new(layout, config, "3.2.0").with_progress(|progress| {
//!     println!("{}: {:?}", progress.variant, progress.stage);
//! });
//!
//! let report = builder.run(&mut SystemRunner);
//! for (variant, result) in &report.variants {
//!     match result {
//!         Ok(build) => println!("{} -> {}", variant, build.output_dir),
//!         Err(e) => eprintln!("{} failed: {}", variant, e),
//!     }
//! }
//! ```

pub mod builder;
pub mod command;
pub mod config;
pub mod error;
pub mod layout;
pub mod merge;
pub mod release;
pub mod removal;
pub mod stamp;
pub mod sync;
pub mod variant;
pub mod version;

// Re-export main types
pub use builder::{BuildProgress, BuildReport, BuildStage, FullBuildReport, PackBuilder};
pub use command::{missing_tools, CommandFailure, CommandRunner, SystemRunner, ToolCommand};
pub use config::{ConfigOverrides, ConfigStore, PackConfig};
pub use error::{Error, Result};
pub use layout::PackLayout;
pub use merge::merge_dir;
pub use release::{promote, PromoteReport};
pub use sync::{RepoSyncer, SyncOutcome};
pub use variant::{Tier, Variant};
pub use version::VersionSelector;
