use std::ops::Index;

use thiserror::Error;

/// A record that knows its 1-based position in a [`Trace`].
pub trait Numbered {
    /// Returns the iteration number this record was produced in.
    fn iter(&self) -> usize;
}

/// The ordered sequence of iteration records produced by one solve.
///
/// Records are appended in chronological order and never reordered, so the
/// `i`-th record (0-based) always carries iteration number `i + 1`.
/// Each solve owns a fresh trace and hands it to the caller in its solution.
///
/// A trace built from outside rows, by `Trace::try_from` or by
/// deserializing, is checked against the same rule.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Trace<R> {
    rows: Vec<R>,
}

/// A row whose iteration number does not match its position in the trace.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("trace row {index} carries iteration {iter}, expected {}", .index + 1)]
pub struct OutOfOrder {
    /// 0-based position of the offending row.
    pub index: usize,
    /// The iteration number it carries.
    pub iter: usize,
}

impl<R> Default for Trace<R> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<R: Numbered> Trace<R> {
    /// Creates an empty trace with room for `max_iters` records.
    #[must_use]
    pub fn with_capacity(max_iters: usize) -> Self {
        Self {
            rows: Vec::with_capacity(max_iters),
        }
    }

    /// Returns the iteration number the next record must carry.
    #[must_use]
    pub fn next_iter(&self) -> usize {
        self.rows.len() + 1
    }

    /// Appends a record.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the record's iteration number is not
    /// [`Trace::next_iter`].
    pub fn push(&mut self, row: R) {
        debug_assert_eq!(row.iter(), self.next_iter(), "trace rows must be consecutive");
        self.rows.push(row);
    }
}

impl<R: Numbered> TryFrom<Vec<R>> for Trace<R> {
    type Error = OutOfOrder;

    fn try_from(rows: Vec<R>) -> Result<Self, Self::Error> {
        if let Some((index, row)) = rows
            .iter()
            .enumerate()
            .find(|(index, row)| row.iter() != index + 1)
        {
            return Err(OutOfOrder {
                index,
                iter: row.iter(),
            });
        }
        Ok(Self { rows })
    }
}

#[cfg(feature = "serde")]
impl<'de, R> serde::Deserialize<'de> for Trace<R>
where
    R: serde::Deserialize<'de> + Numbered,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Rows<T> {
            rows: Vec<T>,
        }

        let Rows { rows } = <Rows<R> as serde::Deserialize>::deserialize(deserializer)?;
        Self::try_from(rows).map_err(serde::de::Error::custom)
    }
}

impl<R> Trace<R> {
    /// Returns the recorded rows in iteration order.
    #[must_use]
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Returns the number of recorded iterations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if no iteration was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the most recent row, if any.
    #[must_use]
    pub fn last(&self) -> Option<&R> {
        self.rows.last()
    }

    /// Returns an iterator over the rows in iteration order.
    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.rows.iter()
    }

    /// Consumes the trace and returns its rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<R> {
        self.rows
    }
}

impl<R> Index<usize> for Trace<R> {
    type Output = R;

    fn index(&self, index: usize) -> &R {
        &self.rows[index]
    }
}

impl<'a, R> IntoIterator for &'a Trace<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl<R> IntoIterator for Trace<R> {
    type Item = R;
    type IntoIter = std::vec::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}
