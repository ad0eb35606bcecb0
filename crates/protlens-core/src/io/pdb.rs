use crate::io::traits::StructureFile;
use crate::models::builder::{AtomRecord, Record, StructureBuilder};
use crate::models::structure::Structure;
use nalgebra::Point3;
use std::io::{self, BufRead};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: PdbParseErrorKind,
    },
}

#[derive(Debug, Error)]
pub enum PdbParseErrorKind {
    #[error("ATOM/HETATM record is {length} characters; coordinate fields end at column 54")]
    LineTooShort { length: usize },
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt {
        columns: &'static str,
        value: String,
    },
    #[error("Invalid float format in columns {columns} (value: '{value}')")]
    InvalidFloat {
        columns: &'static str,
        value: String,
    },
}

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    let end = end.min(line.len());
    if start >= end {
        return "";
    }
    line.get(start..end).unwrap_or("").trim()
}

fn parse_float(
    line: &str,
    line_num: usize,
    start: usize,
    end: usize,
    columns: &'static str,
) -> Result<f64, PdbError> {
    let value = slice_and_trim(line, start, end);
    value.parse().map_err(|_| PdbError::Parse {
        line: line_num,
        kind: PdbParseErrorKind::InvalidFloat {
            columns,
            value: value.into(),
        },
    })
}

/// Classifies one line of a PDB coordinate file.
///
/// Returns `Ok(None)` for lines of any record type other than ATOM,
/// HETATM, MODEL, or ENDMDL; those are ignored per the fixed record set
/// this tool interprets. `line_num` is 1-based and is carried into parse
/// errors so callers can name the offending line.
///
/// # Errors
///
/// Fails when an ATOM/HETATM line is shorter than its coordinate fields or
/// a numeric field does not parse. There is no partial recovery.
pub fn parse_record(line: &str, line_num: usize) -> Result<Option<Record>, PdbError> {
    match slice_and_trim(line, 0, 6) {
        "MODEL" => Ok(Some(Record::BeginModel)),
        "ENDMDL" => Ok(Some(Record::EndModel)),
        keyword @ ("ATOM" | "HETATM") => {
            if line.len() < 54 {
                return Err(PdbError::Parse {
                    line: line_num,
                    kind: PdbParseErrorKind::LineTooShort { length: line.len() },
                });
            }

            let serial_str = slice_and_trim(line, 6, 11);
            let serial: i32 = serial_str.parse().map_err(|_| PdbError::Parse {
                line: line_num,
                kind: PdbParseErrorKind::InvalidInt {
                    columns: "7-11",
                    value: serial_str.into(),
                },
            })?;

            let name = slice_and_trim(line, 12, 16);
            let residue_name = slice_and_trim(line, 17, 20);
            let chain_id = line.chars().nth(21).unwrap_or(' ');
            let residue_seq = slice_and_trim(line, 22, 26);

            let x = parse_float(line, line_num, 30, 38, "31-38")?;
            let y = parse_float(line, line_num, 38, 46, "39-46")?;
            let z = parse_float(line, line_num, 46, 54, "47-54")?;

            Ok(Some(Record::Atom(AtomRecord {
                hetero: keyword == "HETATM",
                chain_id,
                residue_seq: residue_seq.to_string(),
                residue_name: residue_name.to_string(),
                serial,
                name: name.to_string(),
                position: Point3::new(x, y, z),
            })))
        }
        _ => Ok(None),
    }
}

pub struct PdbFile;

impl StructureFile for PdbFile {
    type Error = PdbError;

    fn read_from(reader: &mut impl BufRead) -> Result<Structure, Self::Error> {
        let mut builder = StructureBuilder::new();

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            if let Some(record) = parse_record(&line, line_num + 1)? {
                builder.process(record);
            }
        }

        Ok(builder.build())
    }
}
