use super::load_structure;
use crate::cli::DiameterArgs;
use crate::error::Result;
use crate::utils::progress;
use protlens::geometry::diameter;
use tracing::{debug, info};

pub fn run(args: DiameterArgs) -> Result<()> {
    let structure = load_structure(&args.input)?;

    if structure.is_empty() {
        println!("No models were loaded from '{}'.", args.input.display());
        return Ok(());
    }

    if structure.model_count() == 1 {
        let model = structure.model(0).expect("structure is non-empty");
        debug!(atoms = model.atom_count(), "Computing diameter.");
        println!(
            "Diameter of the loaded structure is {:.3} Angstroms.",
            diameter(model)
        );
        return Ok(());
    }

    // The pairwise scan is quadratic in the atom count, so an ensemble with
    // many models can take a while.
    info!(
        "Structure contains {} models; computing one diameter per model.",
        structure.model_count()
    );
    let bar = progress::model_bar(structure.model_count() as u64);

    let mut results = Vec::with_capacity(structure.model_count());
    for model in structure.models() {
        results.push(diameter(model));
        bar.inc(1);
    }
    bar.finish_and_clear();

    for (index, value) in results.iter().enumerate() {
        println!(
            "Diameter of the structure in model {} is {:.3} Angstroms.",
            index + 1,
            value
        );
    }

    Ok(())
}
