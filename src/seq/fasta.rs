// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fs;
use std::path::Path;

use log::debug;

use crate::seq::file::AlignmentFile;
use crate::seq::record::AlignmentRecord;

/// Parses FastA text into alignment records.
///
/// Sequence lines are appended verbatim (no trimming) to the current record. A record is only
/// kept if it has at least one sequence character, so a header directly followed by another
/// header (or by the end of the text) yields nothing, and so does an empty text.
pub fn parse_fasta(text: &str) -> AlignmentFile {
    let mut result: AlignmentFile = Vec::new();
    let mut current_record = AlignmentRecord::new("", "");

    for line in text.split('\n') {
        if let Some(hdr) = line.strip_prefix('>') {
            if !current_record.is_empty() {
                result.push(current_record);
            } else if !current_record.header.is_empty() {
                debug!("Dropping header-only record '{}'", current_record.header);
            }
            current_record = AlignmentRecord::new(hdr, "");
        } else {
            // append line to current record's sequence
            current_record.sequence.push_str(line);
        }
    }
    if !current_record.is_empty() {
        result.push(current_record);
    }
    result
}

pub fn read_fasta_file<P: AsRef<Path>>(path: P) -> Result<AlignmentFile, std::io::Error> {
    let text = fs::read_to_string(path)?;
    Ok(parse_fasta(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequences(records: &AlignmentFile) -> Vec<&str> {
        records.iter().map(|r| r.sequence.as_str()).collect()
    }

    #[test]
    fn test_parse_fasta_two_records() {
        let records = parse_fasta(">a\nAC-\n>b\nAG-\n");
        assert_eq!(sequences(&records), vec!["AC-", "AG-"]);
        assert_eq!(records[0].header, "a");
        assert_eq!(records[1].header, "b");
    }

    #[test]
    fn test_parse_fasta_empty() {
        assert!(parse_fasta("").is_empty());
    }

    #[test]
    fn test_parse_fasta_multiline() {
        let records = parse_fasta(">seq1\nTTGC\nCG-C\nGA\n>seq2\nTTCCCGGCGA");
        assert_eq!(sequences(&records), vec!["TTGCCG-CGA", "TTCCCGGCGA"]);
    }

    #[test]
    fn test_parse_fasta_header_only_dropped() {
        let records = parse_fasta(">a\n>b\nMK-\n>c\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].header, "b");
        assert_eq!(records[0].sequence, "MK-");
    }

    #[test]
    fn test_parse_fasta_leading_blank_lines() {
        let records = parse_fasta("\n\n>a\nMK\n");
        assert_eq!(sequences(&records), vec!["MK"]);
    }

    #[test]
    fn test_parse_fasta_text_before_first_header() {
        // Not dropped: it is accumulated like any other sequence line.
        let records = parse_fasta("XY\n>a\nMK\n");
        assert_eq!(sequences(&records), vec!["XY", "MK"]);
        assert_eq!(records[0].header, "");
    }

    #[test]
    fn test_parse_fasta_no_trimming() {
        let records = parse_fasta(">a\r\nAC \r\n>b\nAG\n");
        assert_eq!(sequences(&records), vec!["AC \r", "AG"]);
        assert_eq!(records[0].header, "a\r");
    }

    #[test]
    fn test_read_fasta_file() {
        let path = "tests/data/PF01352_seed.fa";
        let fasta: AlignmentFile = read_fasta_file(path).expect("Test file not found");
        assert_eq!(fasta.len(), 4);
        assert_eq!(fasta[0].header, "Q9Y6M1_HUMAN/12-40");
        assert_eq!(fasta[0].sequence, "KVQFSDLSYHIEVE-DLLRWEGKEVTAGQ");
    }
}
