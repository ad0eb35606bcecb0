use super::load_structure;
use crate::cli::InfoArgs;
use crate::error::Result;
use protlens::models::model::Model;
use protlens::report::StructureSummary;
use protlens::utils::residues::one_letter_code;
use tracing::info;

const SEQUENCE_LINE_WIDTH: usize = 60;

pub fn run(args: InfoArgs) -> Result<()> {
    let structure = load_structure(&args.input)?;

    if structure.is_empty() {
        println!("No models were loaded from '{}'.", args.input.display());
        return Ok(());
    }

    let summary = StructureSummary::of(&structure);
    info!("Summarizing structure with {} models.", summary.model_count());

    println!("This structure contains {} model(s).", summary.model_count());
    if summary.model_count() > 1 {
        // Models of an ensemble are replicates of the same atom records, so
        // the detailed breakdown is shown for the first model only.
        println!("Counts below are taken from the first model.");
    }

    let model_summary = &summary.models[0];
    println!("The model contains {} chain(s).", model_summary.chains.len());
    for chain in &model_summary.chains {
        println!(
            "Chain {}: {} polymer residue(s), {} ligand residue(s), {} atom(s).",
            chain.id, chain.polymer_residues, chain.ligand_residues, chain.atoms
        );
    }

    if args.sequence {
        let model = structure.model(0).expect("structure is non-empty");
        print_sequences(model);
    }

    Ok(())
}

fn print_sequences(model: &Model) {
    for chain in model.chains() {
        if chain.polymer_residues().is_empty() {
            continue;
        }
        let sequence: String = chain
            .polymer_residues()
            .iter()
            .map(|residue| one_letter_code(&residue.name))
            .collect();

        println!("Sequence of chain {} ({} residues):", chain.id, sequence.len());
        for chunk in sequence.as_bytes().chunks(SEQUENCE_LINE_WIDTH) {
            println!("  {}", String::from_utf8_lossy(chunk));
        }
    }
}
