use super::atom::Atom;
use super::residue::Residue;

/// A chain keyed by its single-character identifier.
///
/// Residues are split into two disjoint lists: polymer residues from ATOM
/// records and ligand residues from HETATM records. Each list is ordered by
/// first appearance in the input, independently of the other.
#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    /// Chain identifier from column 22 (e.g., 'A').
    pub id: char,
    polymer: Vec<Residue>,
    ligands: Vec<Residue>,
}

impl Chain {
    pub(crate) fn new(id: char) -> Self {
        Self {
            id,
            polymer: Vec::new(),
            ligands: Vec::new(),
        }
    }

    /// Routes one atom into this chain.
    ///
    /// Streaming, single-pass rule: the atom joins the selected list's last
    /// residue only when that residue's sequence identifier matches;
    /// otherwise a new residue is appended. Records for one residue that
    /// arrive interleaved with another residue therefore produce two
    /// distinct residues.
    pub(crate) fn add_atom(&mut self, hetero: bool, seq: &str, res_name: &str, atom: Atom) {
        let list = if hetero {
            &mut self.ligands
        } else {
            &mut self.polymer
        };
        match list.last_mut() {
            Some(last) if last.seq == seq => last.push_atom(atom),
            _ => {
                let mut residue = Residue::new(seq, res_name);
                residue.push_atom(atom);
                list.push(residue);
            }
        }
    }

    pub fn polymer_residues(&self) -> &[Residue] {
        &self.polymer
    }

    pub fn ligand_residues(&self) -> &[Residue] {
        &self.ligands
    }

    /// Looks up a ligand residue by its sequence identifier.
    pub fn find_ligand(&self, seq: &str) -> Option<&Residue> {
        self.ligands.iter().find(|r| r.seq == seq)
    }

    pub fn atom_count(&self) -> usize {
        self.polymer
            .iter()
            .chain(self.ligands.iter())
            .map(Residue::atom_count)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn atom(serial: i32) -> Atom {
        Atom::new(serial, "CA", Point3::origin())
    }

    #[test]
    fn polymer_and_ligand_lists_are_disjoint() {
        let mut chain = Chain::new('A');
        chain.add_atom(false, "1", "GLY", atom(1));
        chain.add_atom(true, "101", "HEM", atom(2));

        assert_eq!(chain.polymer_residues().len(), 1);
        assert_eq!(chain.ligand_residues().len(), 1);
        assert_eq!(chain.polymer_residues()[0].name, "GLY");
        assert_eq!(chain.ligand_residues()[0].name, "HEM");
        assert_eq!(chain.atom_count(), 2);
    }

    #[test]
    fn consecutive_records_with_same_seq_share_a_residue() {
        let mut chain = Chain::new('A');
        chain.add_atom(false, "1", "GLY", atom(1));
        chain.add_atom(false, "1", "GLY", atom(2));
        chain.add_atom(false, "2", "ALA", atom(3));

        assert_eq!(chain.polymer_residues().len(), 2);
        assert_eq!(chain.polymer_residues()[0].atom_count(), 2);
        assert_eq!(chain.polymer_residues()[1].atom_count(), 1);
    }

    #[test]
    fn interleaved_records_split_into_distinct_residues() {
        let mut chain = Chain::new('A');
        chain.add_atom(false, "1", "GLY", atom(1));
        chain.add_atom(false, "2", "ALA", atom(2));
        chain.add_atom(false, "1", "GLY", atom(3));

        // Single-pass construction: the returning "1" opens a new residue.
        assert_eq!(chain.polymer_residues().len(), 3);
    }

    #[test]
    fn find_ligand_matches_sequence_identifier_exactly() {
        let mut chain = Chain::new('B');
        chain.add_atom(true, "154", "HEM", atom(1));
        assert!(chain.find_ligand("154").is_some());
        assert!(chain.find_ligand("15").is_none());
        assert!(chain.find_ligand("1540").is_none());
    }
}
