// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use log::debug;

use crate::seq::{file::alignment_width, record::AlignmentRecord};

pub const GAP: char = '-';

/// One line of the frequency table: how many records have `residue` at (1-based) `position`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyRow {
    pub position: usize,
    pub residue: char,
    pub count: usize,
}

// Residue tallies for one column, in the order in which residues are first seen. The alphabet is
// small (amino acids + gap), so a linear scan beats hashing here.
pub type ColumnCounts = Vec<(char, usize)>;

/// Tallies the residues found in column `col` (0-based). Records shorter than `col + 1` count as
/// a gap.
pub fn column_counts(seqs: &[Vec<char>], col: usize) -> ColumnCounts {
    let mut counts: ColumnCounts = Vec::new();
    for seq in seqs {
        let residue = seq.get(col).copied().unwrap_or(GAP);
        match counts.iter_mut().find(|(r, _)| *r == residue) {
            Some((_, n)) => *n += 1,
            None => counts.push((residue, 1)),
        }
    }
    counts
}

/// Builds the frequency table: rows are grouped by position (ascending), then by residue in
/// first-seen order.
pub fn tabulate(records: &[AlignmentRecord]) -> Vec<FrequencyRow> {
    let width = alignment_width(records);
    debug!("Tabulating {} records, alignment width {}", records.len(), width);

    let seqs: Vec<Vec<char>> = records
        .iter()
        .map(|rec| rec.sequence.chars().collect())
        .collect();

    let mut rows: Vec<FrequencyRow> = Vec::new();
    for col in 0..width {
        rows.extend(
            column_counts(&seqs, col)
                .into_iter()
                .map(|(residue, count)| FrequencyRow {
                    position: col + 1,
                    residue,
                    count,
                }),
        );
    }
    rows
}
