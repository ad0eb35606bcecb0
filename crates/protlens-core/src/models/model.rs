use super::atom::Atom;
use super::chain::Chain;
use super::residue::Residue;

/// One complete coordinate set within a structure.
///
/// Multi-model files (e.g., NMR ensembles) hold one `Model` per
/// MODEL/ENDMDL pair; a file without explicit boundaries holds exactly one.
/// Chains are ordered by first appearance in the input, not by identifier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    chains: Vec<Chain>,
    complete: bool,
}

impl Model {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn mark_complete(&mut self) {
        self.complete = true;
    }

    /// Whether an explicit or implicit end-of-model signal was received.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn chains(&self) -> &[Chain] {
        &self.chains
    }

    pub fn find_chain(&self, id: char) -> Option<&Chain> {
        self.chains.iter().find(|c| c.id == id)
    }

    /// Routes one atom record into the matching chain, appending a new
    /// chain when the identifier has not been seen in this model.
    pub(crate) fn route_atom(&mut self, hetero: bool, chain_id: char, seq: &str, res_name: &str, atom: Atom) {
        let chain = match self.chains.iter_mut().find(|c| c.id == chain_id) {
            Some(chain) => chain,
            None => {
                self.chains.push(Chain::new(chain_id));
                self.chains.last_mut().unwrap()
            }
        };
        chain.add_atom(hetero, seq, res_name, atom);
    }

    /// All atoms of the model in the fixed global enumeration order:
    /// chain by chain, polymer residues before ligand residues, then atom
    /// order within each residue.
    pub fn atoms(&self) -> impl Iterator<Item = &Atom> {
        self.chains.iter().flat_map(|chain| {
            chain
                .polymer_residues()
                .iter()
                .chain(chain.ligand_residues().iter())
                .flat_map(|residue| residue.atoms().iter())
        })
    }

    /// All ligand residues of the model with their owning chain identifier,
    /// in enumeration order.
    pub fn ligands(&self) -> impl Iterator<Item = (char, &Residue)> {
        self.chains.iter().flat_map(|chain| {
            chain
                .ligand_residues()
                .iter()
                .map(move |residue| (chain.id, residue))
        })
    }

    /// Names of the polymer residues in enumeration order.
    ///
    /// Surface-area computation is delegated to external structural-biology
    /// tooling; this is the identity information such a collaborator needs.
    pub fn polymer_residue_names(&self) -> Vec<&str> {
        self.chains
            .iter()
            .flat_map(|chain| chain.polymer_residues().iter().map(|r| r.name.as_str()))
            .collect()
    }

    pub fn atom_count(&self) -> usize {
        self.chains.iter().map(Chain::atom_count).sum()
    }
}
