//! # dqgate-cli — Data-Quality Gate CLI
//!
//! Provides the `dqgate` binary: schema validation of order CSV exports
//! with a CI-friendly exit-code contract and optional webhook alerting.
//!
//! ## Subcommands
//!
//! - `dqgate check <file>` — Validate an order export and set the exit
//!   code: 0 all rows valid, 1 one or more rows failed.
//! - `dqgate seed` — Write the canonical sample order export.
//!
//! ## Exit Codes
//!
//! The exit status is the authoritative machine-readable signal for
//! calling automation (a build system gating on this check):
//!
//! - `0` — every row satisfied the schema.
//! - `1` — one or more rows failed validation.
//! - `2` — the source could not be read at all (or another fatal error);
//!   no report was produced.

pub mod check;
pub mod seed;
