// A record for aligned sequences: the header line (without '>') and the residues/gaps of one row
// of the alignment. Gaps are kept as they come ('-' in Pfam's "gaps=dashes" output).

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentRecord {
    pub header: String,
    pub sequence: String,
}

impl AlignmentRecord {
    pub fn new(header: impl Into<String>, sequence: impl Into<String>) -> Self {
        AlignmentRecord {
            header: header.into(),
            sequence: sequence.into(),
        }
    }

    // Length in characters, not bytes.
    pub fn len(&self) -> usize {
        self.sequence.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}
