//! Nucleotide to amino-acid translation for CDS features without a stored
//! `/translation`.

use crate::consts::{GeneticCode, DEFAULT_TABLE, GENETIC_CODES, TABLE_1};

use log::warn;

/// Looks up a genetic code by its NCBI `transl_table` number.
///
/// Unknown tables fall back to the standard code.
pub fn genetic_code(table: u8) -> GeneticCode {
    match GENETIC_CODES.iter().find(|code| code.id == table) {
        Some(code) => *code,
        None => {
            warn!(
                "WARN: transl_table {} is not supported, using table {}",
                table, DEFAULT_TABLE
            );
            TABLE_1
        }
    }
}

/// Translates a coding sequence into amino acids.
///
/// `codon_start` is the 1-based reading frame offset from the feature's
/// `/codon_start` qualifier. The first codon is emitted as `M` when the code
/// lists it as a start, a single terminal stop is dropped and a trailing
/// partial codon is ignored.
pub fn translate_cds(sequence: &[u8], code: &GeneticCode, codon_start: usize) -> String {
    let offset = codon_start.saturating_sub(1).min(sequence.len());
    let mut aa = Vec::with_capacity(sequence.len() / 3);

    for (idx, codon) in sequence[offset..].chunks_exact(3).enumerate() {
        match codon_index(codon) {
            Some(i) if idx == 0 && code.starts[i] == b'M' => aa.push(b'M'),
            Some(i) => aa.push(code.amino_acids[i]),
            None => aa.push(b'X'),
        }
    }

    if aa.last() == Some(&b'*') {
        aa.pop();
    }

    // every byte pushed above is ASCII
    String::from_utf8_lossy(&aa).into_owned()
}

/// Position of a codon in NCBI table layout, or `None` for ambiguous bases.
fn codon_index(codon: &[u8]) -> Option<usize> {
    codon
        .iter()
        .try_fold(0usize, |acc, &base| Some(acc * 4 + base_index(base)?))
}

fn base_index(base: u8) -> Option<usize> {
    match base {
        b'T' | b't' | b'U' | b'u' => Some(0),
        b'C' | b'c' => Some(1),
        b'A' | b'a' => Some(2),
        b'G' | b'g' => Some(3),
        _ => None,
    }
}
