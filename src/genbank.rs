//! GenBank input: reading entries from disk and exposing their features to
//! the extractor.

use crate::{
    consts::{CODON_START, DEFAULT_TABLE, TRANSL_TABLE},
    error::{CdsError, CdsResult},
    extract::CodingFeature,
    translate::{genetic_code, translate_cds},
};

use flate2::read::MultiGzDecoder;
use gb_io::{
    reader::SeqReader,
    seq::{Feature, Seq},
};
use log::info;

use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

/// A feature together with the entry whose sequence it annotates.
pub struct GbFeature<'a> {
    entry: &'a Seq,
    feature: &'a Feature,
}

impl<'a> GbFeature<'a> {
    pub fn new(entry: &'a Seq, feature: &'a Feature) -> Self {
        GbFeature { entry, feature }
    }

    fn numeric_qualifier(&self, key: &str) -> Option<u8> {
        self.qualifier(key).and_then(|v| v.trim().parse().ok())
    }
}

impl CodingFeature for GbFeature<'_> {
    fn kind(&self) -> String {
        self.feature.kind.to_string()
    }

    fn bounds(&self) -> CdsResult<(i64, i64)> {
        self.feature
            .location
            .find_bounds()
            .map_err(|e| CdsError::Location {
                reason: format!("{:?}", e),
            })
    }

    fn qualifier(&self, key: &str) -> Option<&str> {
        self.feature
            .qualifiers
            .iter()
            .filter(|(k, _)| &**k == key)
            .find_map(|(_, v)| v.as_deref())
    }

    fn translate(&self) -> CdsResult<String> {
        let nucleotides = self
            .entry
            .extract_location(&self.feature.location)
            .map_err(|e| CdsError::Location {
                reason: format!("{:?}", e),
            })?;

        let code = genetic_code(self.numeric_qualifier(TRANSL_TABLE).unwrap_or(DEFAULT_TABLE));
        let codon_start = match self.numeric_qualifier(CODON_START) {
            Some(frame @ 1..=3) => frame as usize,
            _ => 1,
        };

        Ok(translate_cds(&nucleotides, &code, codon_start))
    }
}

/// Every feature of every entry, in file order.
pub fn features(entries: &[Seq]) -> impl Iterator<Item = GbFeature<'_>> {
    entries.iter().flat_map(|entry| {
        entry
            .features
            .iter()
            .map(move |feature| GbFeature::new(entry, feature))
    })
}

/// Reads all entries from a GenBank file, gzip-compressed or not.
pub fn read_entries(path: &Path) -> CdsResult<Vec<Seq>> {
    info!("Reading annotations from file {}", path.display());

    let file = File::open(path).map_err(|e| CdsError::io(path, e))?;
    let reader: Box<dyn Read> = if is_gzipped(path) {
        Box::new(BufReader::new(MultiGzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };

    let entries = SeqReader::new(reader)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| CdsError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    info!(
        "Read {} entries from file {}",
        entries.len(),
        path.display()
    );

    Ok(entries)
}

fn is_gzipped(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("gz" | "gzip")
    )
}
