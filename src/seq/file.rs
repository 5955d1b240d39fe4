// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use crate::seq::record::AlignmentRecord;

// For our purposes, an alignment file is just a Vec of alignment records.
//

pub type AlignmentFile = Vec<AlignmentRecord>;

/// Number of columns of the alignment, i.e. the length of its longest record (0 if there are no
/// records). Shorter records are considered gap-padded up to that length.
pub fn alignment_width(records: &[AlignmentRecord]) -> usize {
    records.iter().map(AlignmentRecord::len).max().unwrap_or(0)
}
