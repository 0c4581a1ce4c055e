use crate::{
    cli::Args,
    error::{CdsError, CdsResult},
    extract::{extract_records, ProteinRecord},
    fasta::write_records,
    genbank::{features, read_entries},
    sample::sample,
};

use flate2::{write::GzEncoder, Compression};
use log::info;
use rand::{rngs::StdRng, SeedableRng};

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub extracted: usize,
    pub sampled: usize,
    pub output: PathBuf,
}

/// Runs the whole pipeline: parse, extract, sample, write.
///
/// Nothing is written unless extraction and sampling both succeed.
pub fn cdsample(args: Args) -> CdsResult<Summary> {
    let Args {
        input_file,
        output_file,
        count,
        fabricate_ids,
        seed,
        compress,
        ..
    } = args;

    if count == 0 {
        return Err(CdsError::InvalidArgument(
            "--count must be greater than 0".to_string(),
        ));
    }

    let entries = read_entries(&input_file)?;
    let records = extract_records(features(&entries), fabricate_ids)?;
    info!(
        "Extracted {} protein records from {}",
        records.len(),
        input_file.display()
    );

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let picked = sample(&records, count, &mut rng)?;

    let output_path = with_gzip_extension(output_file, compress);
    let sampled = write_output(&output_path, &picked, compress)?;
    info!(
        "Wrote {} of {} records to {}",
        sampled,
        records.len(),
        output_path.display()
    );

    Ok(Summary {
        extracted: records.len(),
        sampled,
        output: output_path,
    })
}

fn write_output(path: &Path, records: &[&ProteinRecord], compress: bool) -> CdsResult<usize> {
    let file = File::create(path).map_err(|e| CdsError::io(path, e))?;
    let records = records.iter().copied();

    if compress {
        let mut writer = GzEncoder::new(BufWriter::new(file), Compression::default());
        let written = write_records(&mut writer, records).map_err(|e| CdsError::io(path, e))?;
        writer
            .finish()
            .and_then(|mut inner| inner.flush())
            .map_err(|e| CdsError::io(path, e))?;
        Ok(written)
    } else {
        let mut writer = BufWriter::new(file);
        let written = write_records(&mut writer, records).map_err(|e| CdsError::io(path, e))?;
        writer.flush().map_err(|e| CdsError::io(path, e))?;
        Ok(written)
    }
}

fn with_gzip_extension(mut path: PathBuf, compress: bool) -> PathBuf {
    if compress && path.extension().and_then(|ext| ext.to_str()) != Some("gz") {
        path.as_mut_os_string().push(".gz");
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gzip_extension_is_added_once() {
        assert_eq!(
            with_gzip_extension(PathBuf::from("out.fa"), true),
            PathBuf::from("out.fa.gz")
        );
        assert_eq!(
            with_gzip_extension(PathBuf::from("out.fa.gz"), true),
            PathBuf::from("out.fa.gz")
        );
        assert_eq!(
            with_gzip_extension(PathBuf::from("out.fa"), false),
            PathBuf::from("out.fa")
        );
    }
}
