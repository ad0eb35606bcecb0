use super::atom::Atom;

/// An ordered collection of atoms sharing a sequence identifier and name.
///
/// The sequence identifier is kept as text because PDB residue numbers may
/// carry non-numeric insertion codes (e.g., "27A"). Identity is fixed at
/// creation; atoms are appended only while the residue is the current one
/// being filled by the builder.
#[derive(Debug, Clone, PartialEq)]
pub struct Residue {
    /// Residue sequence identifier from columns 23-26, trimmed.
    pub seq: String,
    /// Three-letter residue name (e.g., "ALA", "HEM").
    pub name: String,
    atoms: Vec<Atom>,
}

impl Residue {
    pub(crate) fn new(seq: &str, name: &str) -> Self {
        Self {
            seq: seq.to_string(),
            name: name.to_string(),
            atoms: Vec::new(),
        }
    }

    pub(crate) fn push_atom(&mut self, atom: Atom) {
        self.atoms.push(atom);
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    #[test]
    fn new_residue_starts_empty() {
        let residue = Residue::new("10", "GLY");
        assert_eq!(residue.seq, "10");
        assert_eq!(residue.name, "GLY");
        assert!(residue.atoms().is_empty());
    }

    #[test]
    fn push_atom_preserves_order() {
        let mut residue = Residue::new("5", "ALA");
        residue.push_atom(Atom::new(1, "N", Point3::origin()));
        residue.push_atom(Atom::new(2, "CA", Point3::new(1.4, 0.0, 0.0)));
        let names: Vec<&str> = residue.atoms().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["N", "CA"]);
        assert_eq!(residue.atom_count(), 2);
    }

    #[test]
    fn sequence_identifier_may_carry_insertion_code() {
        let residue = Residue::new("27A", "SER");
        assert_eq!(residue.seq, "27A");
    }
}
