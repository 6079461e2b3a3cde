//! pacbar - pending-update reporter for status bars
//!
//! This library checks an Arch-style system for pending package updates
//! from the official repositories and the AUR, flags NVIDIA driver-stack
//! updates for extra visibility, and renders a waybar-ready JSON payload,
//! following hexagonal architecture principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`update_check`): Pure types, policies, and parsing
//! - **Application Layer** (`application`): Use cases and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use pacbar::prelude::*;
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! // Create adapters
//! let official = CommandUpdateSource::official(
//!     vec!["pacman".into(), "-Qu".into()],
//!     Duration::from_secs(30),
//! );
//! let aur = CommandUpdateSource::aur(
//!     vec!["yay".into(), "-Qua".into()],
//!     Duration::from_secs(30),
//! );
//!
//! // Create use case
//! let use_case = CheckUpdatesUseCase::new(
//!     official,
//!     aur,
//!     VendorPolicy::default(),
//!     StderrProgressReporter::new(),
//! );
//!
//! // Execute and format
//! let report = use_case.execute().await;
//! let model = StatusReadModelBuilder::build(&report);
//! let output = WaybarFormatter::new().format(&model)?;
//! StdoutPresenter::new().present(&output)?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod shared;
pub mod update_check;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{StderrProgressReporter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{TextFormatter, WaybarFormatter};
    pub use crate::adapters::outbound::process::CommandUpdateSource;
    pub use crate::application::read_models::{StatusReadModel, StatusReadModelBuilder, UpdateView};
    pub use crate::application::use_cases::CheckUpdatesUseCase;
    pub use crate::ports::outbound::{
        OutputPresenter, ProgressReporter, StatusFormatter, UpdateSource,
    };
    pub use crate::shared::error::SourceError;
    pub use crate::shared::Result;
    pub use crate::update_check::domain::{
        Origin, PackageName, PackageUpdate, Severity, UpdateReport, Version,
    };
    pub use crate::update_check::policies::VendorPolicy;
    pub use crate::update_check::services::UpdateListingParser;
}
