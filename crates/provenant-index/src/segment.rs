use provenant_confidence::MatchKind;

/// One indexed text segment.
#[derive(Debug, Clone)]
pub struct Segment<T> {
    /// Insertion position, stable for the life of the index.
    pub position: usize,
    /// Text exactly as indexed.
    pub raw: String,
    /// Trimmed, whitespace-collapsed, case-folded text used for matching.
    pub normalized: String,
    /// Caller data associated with the segment.
    pub data: T,
}

/// A search hit.
#[derive(Debug, Clone)]
pub struct SegmentMatch<T> {
    pub position: usize,
    /// Raw text of the matched segment.
    pub segment: String,
    pub data: T,
    /// Similarity to the query, in (0.0, 1.0].
    pub similarity: f64,
    pub kind: MatchKind,
}
