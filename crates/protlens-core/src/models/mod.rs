//! Owned value types for the structure containment hierarchy.
//!
//! Ownership is strictly top-down: a [`structure::Structure`] owns its
//! models, a [`model::Model`] its chains, a [`chain::Chain`] its two residue
//! lists, and a [`residue::Residue`] its atoms. No entity holds a reference
//! to its container; container-scoped queries are issued top-down with the
//! necessary context passed explicitly.

pub mod atom;
pub mod builder;
pub mod chain;
pub mod model;
pub mod residue;
pub mod structure;
