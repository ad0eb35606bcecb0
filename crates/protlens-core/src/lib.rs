//! # protlens Core Library
//!
//! A library for parsing macromolecular coordinate files (PDB format) and
//! answering geometric queries over the resulting structure hierarchy.
//!
//! ## Architecture
//!
//! The library is split into small, independent layers:
//!
//! - **[`models`]: The hierarchy.** Owned value types for the four-level
//!   containment hierarchy (`Structure` → `Model` → `Chain` → `Residue` →
//!   `Atom`) and the incremental [`models::builder::StructureBuilder`] that
//!   grows it from a stream of classified records.
//!
//! - **[`io`]: Ingest.** Fixed-column classification of PDB coordinate
//!   lines (`ATOM`, `HETATM`, `MODEL`, `ENDMDL`) into records the builder
//!   consumes. No other record types are interpreted.
//!
//! - **[`geometry`]: Queries.** Read-only computations over a built model:
//!   the exact pairwise diameter and the proximity-to-ligand contact scan.
//!
//! - **[`report`]: Summaries.** Serializable value types describing a
//!   structure's shape (model/chain/residue/atom counts) for display layers.
//!
//! A `Structure`, once built, is never mutated by any query, so a host may
//! freely run multiple queries against the same structure concurrently.

pub mod geometry;
pub mod io;
pub mod models;
pub mod report;
pub mod utils;
