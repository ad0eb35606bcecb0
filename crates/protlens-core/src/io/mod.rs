//! Ingest of coordinate files.
//!
//! This layer classifies raw text lines into the records the structure
//! builder consumes. Only the PDB coordinate format is supported; writing
//! is out of scope (structures live only in process memory).

pub mod pdb;
pub mod traits;
