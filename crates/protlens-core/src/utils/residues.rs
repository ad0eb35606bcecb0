use phf::{Map, Set, phf_map, phf_set};

static WATER_RESIDUE_NAMES: Set<&'static str> = phf_set! {
    "HOH", "WAT", "H2O", "DOD",
};

static ONE_LETTER_CODES: Map<&'static str, char> = phf_map! {
    "ALA" => 'A', "ARG" => 'R', "ASN" => 'N', "ASP" => 'D',
    "CYS" => 'C', "GLN" => 'Q', "GLU" => 'E', "GLY" => 'G',
    "HIS" => 'H', "ILE" => 'I', "LEU" => 'L', "LYS" => 'K',
    "MET" => 'M', "PHE" => 'F', "PRO" => 'P', "SER" => 'S',
    "THR" => 'T', "TRP" => 'W', "TYR" => 'Y', "VAL" => 'V',
};

/// True for the 20 standard amino-acid 3-letter codes.
pub fn is_standard_residue(residue_name: &str) -> bool {
    ONE_LETTER_CODES.contains_key(residue_name.trim())
}

/// One-letter code for a standard residue name; 'X' for anything else.
pub fn one_letter_code(residue_name: &str) -> char {
    ONE_LETTER_CODES
        .get(residue_name.trim())
        .copied()
        .unwrap_or('X')
}

/// True for solvent residue names commonly carried as HETATM records.
pub fn is_water(residue_name: &str) -> bool {
    WATER_RESIDUE_NAMES.contains(residue_name.trim())
}
