//! sample translated CDS features from GenBank annotations
//!
//! Constants shared by the extractor, the translator and the FASTA writer.

/// Feature category that carries a protein-coding sequence.
pub const CDS: &str = "CDS";

pub const LOCUS_TAG: &str = "locus_tag";
pub const PROTEIN_ID: &str = "protein_id";
pub const PRODUCT: &str = "product";
pub const TRANSLATION: &str = "translation";
pub const CODON_START: &str = "codon_start";
pub const TRANSL_TABLE: &str = "transl_table";

/// Residues per line in the FASTA output.
pub const LINE_WIDTH: usize = 60;

/// Genetic code used when a feature has no usable `transl_table`.
pub const DEFAULT_TABLE: u8 = 1;

/// A genetic code in NCBI layout: 64 codons ordered by T, C, A, G at each of
/// the three positions (TTT, TTC, TTA, TTG, TCT, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneticCode {
    pub id: u8,
    pub amino_acids: &'static [u8; 64],
    pub starts: &'static [u8; 64],
}

// Standard
pub const TABLE_1: GeneticCode = GeneticCode {
    id: 1,
    amino_acids: b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
    starts: b"---M------**--*----M---------------M----------------------------",
};

// Vertebrate mitochondrial
pub const TABLE_2: GeneticCode = GeneticCode {
    id: 2,
    amino_acids: b"FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSS**VVVVAAAADDEEGGGG",
    starts: b"----------**--------------------MMMM----------**---M------------",
};

// Mold, protozoan, coelenterate mitochondrial and Mycoplasma/Spiroplasma
pub const TABLE_4: GeneticCode = GeneticCode {
    id: 4,
    amino_acids: b"FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
    starts: b"--MM------**-------M------------MMMM---------------M------------",
};

// Bacterial, archaeal and plant plastid
pub const TABLE_11: GeneticCode = GeneticCode {
    id: 11,
    amino_acids: b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
    starts: b"---M------**--*----M------------MMMM---------------M------------",
};

pub const GENETIC_CODES: [GeneticCode; 4] = [TABLE_1, TABLE_2, TABLE_4, TABLE_11];
