/// A byte range within one input line, exclusive on the right end.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}
