//! FASTA output for protein records.

use crate::{consts::LINE_WIDTH, extract::ProteinRecord};

use std::io::{self, Write};

/// Removes every whitespace character, including embedded newlines.
pub fn strip_whitespace(sequence: &str) -> String {
    sequence.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Writes one record: header, sequence wrapped at [`LINE_WIDTH`] and a
/// trailing blank line.
pub fn write_record<W: Write>(writer: &mut W, record: &ProteinRecord) -> io::Result<()> {
    if record.description.is_empty() {
        writeln!(writer, ">{}", record.id)?;
    } else {
        writeln!(writer, ">{} {}", record.id, record.description)?;
    }

    let sequence = strip_whitespace(&record.sequence);
    for line in sequence.as_bytes().chunks(LINE_WIDTH) {
        writer.write_all(line)?;
        writer.write_all(b"\n")?;
    }

    writer.write_all(b"\n")
}

pub fn write_records<'a, W, I>(writer: &mut W, records: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a ProteinRecord>,
{
    let mut written = 0;
    for record in records {
        write_record(writer, record)?;
        written += 1;
    }

    Ok(written)
}
