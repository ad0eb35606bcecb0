//! Summary value types for display layers.
//!
//! The hierarchy itself stays free of formatting concerns; a summary is a
//! plain, serializable snapshot of the counts a reporting layer needs.

use crate::models::structure::Structure;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructureSummary {
    pub models: Vec<ModelSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelSummary {
    pub complete: bool,
    pub chains: Vec<ChainSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChainSummary {
    pub id: char,
    pub polymer_residues: usize,
    pub ligand_residues: usize,
    pub atoms: usize,
}

impl StructureSummary {
    pub fn of(structure: &Structure) -> Self {
        Self {
            models: structure
                .models()
                .iter()
                .map(|model| ModelSummary {
                    complete: model.is_complete(),
                    chains: model
                        .chains()
                        .iter()
                        .map(|chain| ChainSummary {
                            id: chain.id,
                            polymer_residues: chain.polymer_residues().len(),
                            ligand_residues: chain.ligand_residues().len(),
                            atoms: chain.atom_count(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    pub fn model_count(&self) -> usize {
        self.models.len()
    }
}
