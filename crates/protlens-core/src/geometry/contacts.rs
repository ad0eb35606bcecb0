use crate::models::model::Model;
use crate::models::residue::Residue;
use thiserror::Error;

/// Identifies a ligand residue by chain and sequence identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LigandRef {
    pub chain_id: char,
    pub residue_seq: String,
}

/// Whether matches are reported per atom or per residue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Atom,
    Residue,
}

/// One proximity match, in enumeration order.
///
/// `atom` is present in atom granularity and absent in residue granularity.
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub chain_id: char,
    pub residue_name: String,
    pub residue_seq: String,
    pub atom: Option<ContactAtom>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactAtom {
    pub name: String,
    pub serial: i32,
}

#[derive(Debug, Error, PartialEq)]
pub enum QueryError {
    #[error("chain '{0}' not found in model")]
    ChainNotFound(char),

    #[error("no ligand residue with sequence identifier '{seq}' in chain '{chain}'")]
    LigandNotFound { chain: char, seq: String },

    #[error("distance threshold must be a non-negative finite number, got {0}")]
    InvalidThreshold(f64),
}

/// Finds polymer atoms or residues within `threshold` Angstroms of any atom
/// of the referenced ligand residue.
///
/// A polymer atom matches when its squared distance to any ligand atom is
/// at most `threshold²`. In atom granularity every matching atom is
/// reported once; in residue granularity a residue is reported at its first
/// matching atom and its remaining atoms are skipped. Output follows the
/// enumeration order (chain, then residue); no distance sort is applied.
///
/// # Errors
///
/// Fails before scanning when the threshold is negative or non-finite, or
/// when the ligand reference resolves to no chain or no ligand residue.
pub fn contacts(
    model: &Model,
    ligand_ref: &LigandRef,
    threshold: f64,
    granularity: Granularity,
) -> Result<Vec<Contact>, QueryError> {
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(QueryError::InvalidThreshold(threshold));
    }

    let ligand = resolve_ligand(model, ligand_ref)?;
    let threshold_squared = threshold * threshold;
    let mut matches = Vec::new();

    for chain in model.chains() {
        for residue in chain.polymer_residues() {
            'atoms: for atom in residue.atoms() {
                for ligand_atom in ligand.atoms() {
                    if atom.distance_squared(ligand_atom) <= threshold_squared {
                        matches.push(Contact {
                            chain_id: chain.id,
                            residue_name: residue.name.clone(),
                            residue_seq: residue.seq.clone(),
                            atom: match granularity {
                                Granularity::Atom => Some(ContactAtom {
                                    name: atom.name.clone(),
                                    serial: atom.serial,
                                }),
                                Granularity::Residue => None,
                            },
                        });
                        match granularity {
                            // One report per atom; move on to the next atom.
                            Granularity::Atom => continue 'atoms,
                            // One report per residue; skip its other atoms.
                            Granularity::Residue => break 'atoms,
                        }
                    }
                }
            }
        }
    }

    Ok(matches)
}

fn resolve_ligand<'a>(model: &'a Model, ligand_ref: &LigandRef) -> Result<&'a Residue, QueryError> {
    let chain = model
        .find_chain(ligand_ref.chain_id)
        .ok_or(QueryError::ChainNotFound(ligand_ref.chain_id))?;
    chain
        .find_ligand(&ligand_ref.residue_seq)
        .ok_or_else(|| QueryError::LigandNotFound {
            chain: ligand_ref.chain_id,
            seq: ligand_ref.residue_seq.clone(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::builder::{AtomRecord, Record, StructureBuilder};
    use crate::models::structure::Structure;
    use nalgebra::Point3;

    fn record(
        hetero: bool,
        chain_id: char,
        seq: &str,
        res_name: &str,
        serial: i32,
        name: &str,
        pos: (f64, f64, f64),
    ) -> Record {
        Record::Atom(AtomRecord {
            hetero,
            chain_id,
            residue_seq: seq.to_string(),
            residue_name: res_name.to_string(),
            serial,
            name: name.to_string(),
            position: Point3::new(pos.0, pos.1, pos.2),
        })
    }

    /// Ligand HEM 154 at the origin, one polymer atom at (3,4,0).
    fn scenario() -> Structure {
        let mut builder = StructureBuilder::new();
        builder.process(record(false, 'A', "1", "GLY", 1, "CA", (3.0, 4.0, 0.0)));
        builder.process(record(true, 'A', "154", "HEM", 10, "FE", (0.0, 0.0, 0.0)));
        builder.build()
    }

    fn hem() -> LigandRef {
        LigandRef {
            chain_id: 'A',
            residue_seq: "154".to_string(),
        }
    }

    #[test]
    fn residue_at_exactly_the_threshold_matches() {
        let structure = scenario();
        let found = contacts(structure.model(0).unwrap(), &hem(), 5.0, Granularity::Residue)
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].residue_name, "GLY");
        assert_eq!(found[0].residue_seq, "1");
        assert!(found[0].atom.is_none());
    }

    #[test]
    fn residue_just_outside_the_threshold_does_not_match() {
        let structure = scenario();
        let found = contacts(structure.model(0).unwrap(), &hem(), 4.99, Granularity::Residue)
            .unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn atom_granularity_reports_atom_identity() {
        let structure = scenario();
        let found =
            contacts(structure.model(0).unwrap(), &hem(), 5.0, Granularity::Atom).unwrap();
        assert_eq!(found.len(), 1);
        let atom = found[0].atom.as_ref().unwrap();
        assert_eq!(atom.name, "CA");
        assert_eq!(atom.serial, 1);
    }

    #[test]
    fn zero_threshold_matches_only_coincident_atoms() {
        let mut builder = StructureBuilder::new();
        builder.process(record(false, 'A', "1", "GLY", 1, "CA", (0.0, 0.0, 0.0)));
        builder.process(record(false, 'A', "2", "ALA", 2, "CA", (0.1, 0.0, 0.0)));
        builder.process(record(true, 'A', "154", "HEM", 10, "FE", (0.0, 0.0, 0.0)));
        let structure = builder.build();

        let found =
            contacts(structure.model(0).unwrap(), &hem(), 0.0, Granularity::Atom).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].residue_seq, "1");
    }

    #[test]
    fn residue_granularity_deduplicates_multi_atom_matches() {
        let mut builder = StructureBuilder::new();
        // Three atoms in one residue, two inside the threshold.
        builder.process(record(false, 'A', "1", "GLY", 1, "N", (1.0, 0.0, 0.0)));
        builder.process(record(false, 'A', "1", "GLY", 2, "CA", (2.0, 0.0, 0.0)));
        builder.process(record(false, 'A', "1", "GLY", 3, "C", (50.0, 0.0, 0.0)));
        builder.process(record(true, 'A', "154", "HEM", 10, "FE", (0.0, 0.0, 0.0)));
        let structure = builder.build();

        let found = contacts(structure.model(0).unwrap(), &hem(), 3.0, Granularity::Residue)
            .unwrap();
        assert_eq!(found.len(), 1);

        let found =
            contacts(structure.model(0).unwrap(), &hem(), 3.0, Granularity::Atom).unwrap();
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn output_follows_enumeration_order_not_distance() {
        let mut builder = StructureBuilder::new();
        builder.process(record(false, 'A', "1", "GLY", 1, "CA", (4.0, 0.0, 0.0)));
        builder.process(record(false, 'B', "1", "ALA", 2, "CA", (1.0, 0.0, 0.0)));
        builder.process(record(true, 'A', "154", "HEM", 10, "FE", (0.0, 0.0, 0.0)));
        let structure = builder.build();

        let found = contacts(structure.model(0).unwrap(), &hem(), 10.0, Granularity::Residue)
            .unwrap();
        let chains: Vec<char> = found.iter().map(|c| c.chain_id).collect();
        // Chain A comes first despite being the farther match.
        assert_eq!(chains, ['A', 'B']);
    }

    #[test]
    fn unknown_chain_is_rejected() {
        let structure = scenario();
        let err = contacts(
            structure.model(0).unwrap(),
            &LigandRef {
                chain_id: 'Z',
                residue_seq: "154".to_string(),
            },
            5.0,
            Granularity::Residue,
        )
        .unwrap_err();
        assert_eq!(err, QueryError::ChainNotFound('Z'));
    }

    #[test]
    fn unknown_ligand_seq_is_rejected() {
        let structure = scenario();
        let err = contacts(
            structure.model(0).unwrap(),
            &LigandRef {
                chain_id: 'A',
                residue_seq: "999".to_string(),
            },
            5.0,
            Granularity::Residue,
        )
        .unwrap_err();
        assert_eq!(
            err,
            QueryError::LigandNotFound {
                chain: 'A',
                seq: "999".to_string(),
            }
        );
    }

    #[test]
    fn polymer_residue_seq_does_not_resolve_as_ligand() {
        let structure = scenario();
        let err = contacts(
            structure.model(0).unwrap(),
            &LigandRef {
                chain_id: 'A',
                residue_seq: "1".to_string(),
            },
            5.0,
            Granularity::Residue,
        )
        .unwrap_err();
        assert!(matches!(err, QueryError::LigandNotFound { .. }));
    }

    #[test]
    fn negative_threshold_is_rejected_before_the_scan() {
        let structure = scenario();
        let err = contacts(structure.model(0).unwrap(), &hem(), -1.0, Granularity::Atom)
            .unwrap_err();
        assert_eq!(err, QueryError::InvalidThreshold(-1.0));
    }

    #[test]
    fn nan_threshold_is_rejected() {
        let structure = scenario();
        let err = contacts(
            structure.model(0).unwrap(),
            &hem(),
            f64::NAN,
            Granularity::Atom,
        )
        .unwrap_err();
        assert!(matches!(err, QueryError::InvalidThreshold(_)));
    }
}
