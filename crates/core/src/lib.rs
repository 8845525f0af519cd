//! Core accounting-cycle logic for Siklus.
//!
//! This crate contains pure business logic with ZERO file, database or web
//! dependencies. Every report is a deterministic function of its inputs.
//!
//! # Modules
//!
//! - `ledger` - Journal entries, transaction pairs and the general ledger
//! - `reports` - Trial balances, income statement, closing entries and the
//!   report pipeline

pub mod ledger;
pub mod reports;
