use super::{load_structure, select_model};
use crate::cli::LigandsArgs;
use crate::error::Result;
use protlens::utils::residues::is_water;
use tracing::info;

pub fn run(args: LigandsArgs) -> Result<()> {
    let structure = load_structure(&args.input)?;
    let (number, model) = select_model(&structure, args.model)?;

    info!("Listing ligand residues of model {}.", number);

    let mut shown = 0usize;
    let mut waters_hidden = 0usize;
    for (chain_id, residue) in model.ligands() {
        if !args.include_water && is_water(&residue.name) {
            waters_hidden += 1;
            continue;
        }
        println!(
            "Chain {}, residue {} ({})",
            chain_id, residue.name, residue.seq
        );
        shown += 1;
    }

    if shown == 0 {
        println!("Model {} contains no ligand residues.", number);
    }
    if waters_hidden > 0 {
        println!(
            "({} water residue(s) hidden; pass --include-water to list them.)",
            waters_hidden
        );
    }

    Ok(())
}
