//! Read-only geometric queries over a built model.
//!
//! Both queries iterate atoms in the fixed global enumeration order
//! (chain, then residue with polymer before ligand, then atom) and compare
//! squared distances, deferring the square root to the end of the
//! computation. Nothing here mutates the hierarchy.

pub mod contacts;
pub mod diameter;

pub use contacts::{Contact, ContactAtom, Granularity, LigandRef, QueryError, contacts};
pub use diameter::diameter;
