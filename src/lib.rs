//! sample translated CDS features from GenBank annotations
//!
//! This tool extracts every CDS feature from a GenBank file, resolves an
//! identifier and a protein sequence for each one, and writes a uniform random
//! subset of them (without replacement) as FASTA.
//!
//! # Usage
//!
//! ```bash
//! Usage: cdsample [OPTIONS] --input_file <INPUT_FILE> --output_file <OUTPUT_FILE> --count <COUNT>
//!
//! Options:
//!   -i, --input_file <INPUT_FILE>     Path to annotation file (GenBank, optionally .gz)
//!   -o, --output_file <OUTPUT_FILE>   Path to output FASTA file
//!   -c, --count <COUNT>               Number of protein records to sample
//!   -f, --fabricate_ids [<FABRICATE_IDS>]
//!                                     Derive CDS_<start>_<end> identifiers for features without locus_tag/protein_id [0 or 1] [default: 0]
//!   -l, --log <LOG>                   Append log lines to this file
//!   -L, --level <LEVEL>               Logging verbosity level [default: info]
//!   -s, --seed <SEED>                 Seed for the random number generator
//!   -Z, --compress                    Gzip-compress the output file
//!   -h, --help                        Print help
//!   -V, --version                     Print version
//! ```

pub mod cli;
pub mod consts;
pub mod core;
pub mod error;
pub mod extract;
pub mod fasta;
pub mod genbank;
pub mod logger;
pub mod sample;
pub mod translate;

pub use cli::Args;
pub use core::{cdsample, Summary};
pub use error::{CdsError, CdsResult};
pub use extract::{extract_records, CodingFeature, ProteinRecord};
