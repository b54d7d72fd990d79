//! Append-only record sequence returned by every iterative procedure.
//!
//! A [`Trace`] is built fresh per call and handed back inside the report, so
//! the algorithms stay free of I/O and the caller decides how to print.

/// Upper bound on the records reserved up front; iteration caps may be huge.
const MAX_RESERVED: usize = 64;

/// Ordered, append-only sequence of per-iteration records.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace<R> {
    records: Vec<R>,
}

impl<R> Trace<R> {
    #[must_use]
    pub fn new() -> Self {
        Self { records: Vec::new() }
    }

    /// Reserves room for `capacity` records, at most `MAX_RESERVED`.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { records: Vec::with_capacity(capacity.min(MAX_RESERVED)) }
    }

    pub(crate) fn push(&mut self, record: R) {
        self.records.push(record);
    }

    #[inline] #[must_use] pub fn records(&self) -> &[R] { &self.records }
    #[inline] #[must_use] pub fn len(&self) -> usize { self.records.len() }
    #[inline] #[must_use] pub fn is_empty(&self) -> bool { self.records.is_empty() }
    #[inline] #[must_use] pub fn first(&self) -> Option<&R> { self.records.first() }
    #[inline] #[must_use] pub fn last(&self) -> Option<&R> { self.records.last() }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    #[must_use]
    pub fn into_records(self) -> Vec<R> {
        self.records
    }
}

impl<R> Default for Trace<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, R> IntoIterator for &'a Trace<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl<R> IntoIterator for Trace<R> {
    type Item = R;
    type IntoIter = std::vec::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
