use super::{load_structure, select_model};
use crate::cli::ContactsArgs;
use crate::config::FileConfig;
use crate::error::Result;
use protlens::geometry::{Contact, Granularity, LigandRef, contacts};
use std::path::Path;
use tracing::info;

pub fn run(args: ContactsArgs, config: &FileConfig) -> Result<()> {
    let structure = load_structure(&args.input)?;
    let (number, model) = select_model(&structure, args.model)?;

    let threshold = config.distance_threshold(args.distance);
    let granularity: Granularity = config.granularity(args.granularity).into();
    let ligand_ref = LigandRef {
        chain_id: args.chain,
        residue_seq: args.residue.clone(),
    };

    info!(
        "Querying model {} for contacts within {} Angstroms of ligand {} ({}).",
        number, threshold, ligand_ref.chain_id, ligand_ref.residue_seq
    );

    let matches = contacts(model, &ligand_ref, threshold, granularity)?;

    println!(
        "Matches within {} Angstroms of ligand residue {} in chain {}:",
        threshold, args.residue, args.chain
    );
    for contact in &matches {
        match &contact.atom {
            Some(atom) => println!(
                "Chain {}, residue {} ({}), atom {} ({})",
                contact.chain_id, contact.residue_name, contact.residue_seq, atom.name, atom.serial
            ),
            None => println!(
                "Chain {}, residue {} ({})",
                contact.chain_id, contact.residue_name, contact.residue_seq
            ),
        }
    }
    println!("End of list: {} match(es).", matches.len());

    if let Some(output) = &args.output {
        write_csv(output, &matches)?;
        println!("Matches written to '{}'.", output.display());
    }

    Ok(())
}

fn write_csv(path: &Path, matches: &[Contact]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["chain", "residue_name", "residue_seq", "atom_name", "atom_serial"])?;

    for contact in matches {
        let (atom_name, atom_serial) = match &contact.atom {
            Some(atom) => (atom.name.clone(), atom.serial.to_string()),
            None => (String::new(), String::new()),
        };
        writer.write_record([
            contact.chain_id.to_string(),
            contact.residue_name.clone(),
            contact.residue_seq.clone(),
            atom_name,
            atom_serial,
        ])?;
    }

    writer.flush()?;
    Ok(())
}
