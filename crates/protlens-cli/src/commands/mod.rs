pub mod contacts;
pub mod diameter;
pub mod info;
pub mod ligands;

use crate::error::{CliError, Result};
use crate::utils::progress;
use protlens::io::pdb::{PdbError, PdbFile};
use protlens::io::traits::StructureFile;
use protlens::models::model::Model;
use protlens::models::structure::Structure;
use std::path::Path;
use tracing::{debug, info};

pub(crate) fn load_structure(path: &Path) -> Result<Structure> {
    info!("Loading structure from '{}'.", path.display());
    let spinner = progress::loading_spinner("Loading structure...");

    let result = PdbFile::read_from_path(path);
    spinner.finish_and_clear();

    let structure = result.map_err(|source| match source {
        PdbError::Io(e) => CliError::Io(e),
        other => CliError::FileParsing {
            path: path.to_path_buf(),
            source: other,
        },
    })?;

    debug!(
        models = structure.model_count(),
        "Structure loaded successfully."
    );
    Ok(structure)
}

/// Resolves a 1-based model selection, defaulting to the first model.
///
/// Rejects the selection before any query runs when the structure is empty
/// or the number is 0 or past the model count.
pub(crate) fn select_model(
    structure: &Structure,
    requested: Option<usize>,
) -> Result<(usize, &Model)> {
    if structure.is_empty() {
        return Err(CliError::Argument(
            "no models were loaded from the input file".to_string(),
        ));
    }

    let number = requested.unwrap_or(1);
    if number == 0 || number > structure.model_count() {
        return Err(CliError::Argument(format!(
            "model {} is out of range (structure has {} model{})",
            number,
            structure.model_count(),
            if structure.model_count() == 1 { "" } else { "s" },
        )));
    }

    let model = structure
        .model(number - 1)
        .expect("index validated against model count");
    Ok((number, model))
}
