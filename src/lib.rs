//! Minerva — voice tutoring agent worker.
//!
//! A long-running worker accepts job dispatches and, for each job, runs the
//! session bootstrap: connect the room transport, look up the room's topic,
//! wait for a participant, start a realtime speech session with a
//! topic-conditioned instructions prompt, seed one assistant opening message,
//! and request one spoken response.
//!
//! # Quick Start
//!
//! ```no_run
//! use minerva::config::WorkerConfig;
//!
//! # async fn example() -> minerva::error::Result<()> {
//! let config = WorkerConfig::from_env();
//! config.validate()?;
//! minerva::worker::run(config).await?;
//! # Ok(())
//! # }
//! ```

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod prelude;
pub mod prompt;
pub mod realtime;
pub mod tools;
pub mod topic;
pub mod transport;
pub mod types;
pub mod util;
pub mod worker;
