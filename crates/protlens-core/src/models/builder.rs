use super::atom::Atom;
use super::model::Model;
use super::structure::Structure;
use nalgebra::Point3;

/// One classified coordinate-file record, the unit the builder consumes.
///
/// Produced by the ingest layer ([`crate::io::pdb`]); lines of any other
/// record type never reach the builder.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Atom(AtomRecord),
    BeginModel,
    EndModel,
}

/// The fields of one ATOM or HETATM record.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    /// True for HETATM records (ligand residues), false for ATOM records.
    pub hetero: bool,
    pub chain_id: char,
    pub residue_seq: String,
    pub residue_name: String,
    pub serial: i32,
    pub name: String,
    pub position: Point3<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BuilderState {
    NoModel,
    ModelOpen,
    ModelClosed,
}

/// Incrementally grows a [`Structure`] from a stream of classified records.
///
/// Model boundaries follow a three-state machine:
///
/// - The first atom record with no prior `BeginModel` opens a model
///   implicitly, so single-model files need no MODEL/ENDMDL pair.
/// - `BeginModel` while a model is already open is a no-op; after a closed
///   model it opens the next one.
/// - `EndModel` marks the open model complete; a repeated `EndModel` is a
///   no-op.
/// - [`StructureBuilder::build`] closes a still-open final model, so every
///   structure ends with a fully closed last model.
pub struct StructureBuilder {
    structure: Structure,
    state: BuilderState,
}

impl Default for StructureBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StructureBuilder {
    pub fn new() -> Self {
        Self {
            structure: Structure::default(),
            state: BuilderState::NoModel,
        }
    }

    pub fn process(&mut self, record: Record) {
        match record {
            Record::Atom(atom) => self.process_atom(atom),
            Record::BeginModel => self.begin_model(),
            Record::EndModel => self.end_model(),
        }
    }

    fn process_atom(&mut self, record: AtomRecord) {
        if self.structure.is_empty() {
            self.structure.push_model(Model::new());
            self.state = BuilderState::ModelOpen;
        }
        // Atoms arriving after ENDMDL without a new MODEL line still route
        // to the newest model; well-formed files never hit this.
        let atom = Atom::new(record.serial, &record.name, record.position);
        self.structure
            .last_model_mut()
            .expect("at least one model exists")
            .route_atom(
                record.hetero,
                record.chain_id,
                &record.residue_seq,
                &record.residue_name,
                atom,
            );
    }

    fn begin_model(&mut self) {
        if self.state == BuilderState::ModelOpen {
            return;
        }
        self.structure.push_model(Model::new());
        self.state = BuilderState::ModelOpen;
    }

    fn end_model(&mut self) {
        if self.state != BuilderState::ModelOpen {
            return;
        }
        if let Some(model) = self.structure.last_model_mut() {
            model.mark_complete();
        }
        self.state = BuilderState::ModelClosed;
    }

    /// Finishes construction, implicitly closing an open final model.
    pub fn build(mut self) -> Structure {
        self.end_model();
        self.structure
    }
}
