use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PartitionError {
    #[error("partition entry f{} = {value} is negative", index + 1)]
    NegativeEntry { index: usize, value: i64 },

    #[error("partition {0:?} is not sorted in non-increasing order")]
    NotDescending(Vec<i64>),

    #[error("partition has {actual} nonzero rows but at most {expected} are allowed")]
    TooManyRows { actual: usize, expected: usize },

    #[error("partition entry f{} = {value} exceeds the largest supported row length {}", index + 1, u32::MAX)]
    EntryTooLarge { index: usize, value: i64 },
}

/// A validated Young-diagram partition of fixed length.
///
/// Rows are non-increasing and non-negative. Construction pads missing
/// trailing rows with zeros; extra rows are accepted only if they are empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Partition {
    rows: Vec<u32>,
}

impl Partition {
    /// Validates `entries` against the Young-diagram conditions and
    /// normalizes the result to exactly `length` rows.
    pub fn new(entries: &[i64], length: usize) -> Result<Self, PartitionError> {
        for (index, &value) in entries.iter().enumerate() {
            if value < 0 {
                return Err(PartitionError::NegativeEntry { index, value });
            }
        }
        if entries.windows(2).any(|pair| pair[0] < pair[1]) {
            return Err(PartitionError::NotDescending(entries.to_vec()));
        }
        if entries.len() > length && entries[length..].iter().any(|&value| value != 0) {
            let nonzero = entries.iter().filter(|&&value| value != 0).count();
            return Err(PartitionError::TooManyRows {
                actual: nonzero,
                expected: length,
            });
        }

        let mut rows = Vec::with_capacity(length);
        for (index, &value) in entries.iter().take(length).enumerate() {
            let row = u32::try_from(value)
                .map_err(|_| PartitionError::EntryTooLarge { index, value })?;
            rows.push(row);
        }
        rows.resize(length, 0);
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[u32] {
        &self.rows
    }

    /// Total number of boxes in the diagram.
    pub fn box_count(&self) -> u32 {
        self.rows.iter().sum()
    }

    /// The conjugate (transposed) diagram: columns become rows.
    ///
    /// Each pass counts the rows that still hold a box (the height of the
    /// current leftmost column) and strips that column. The result keeps its
    /// natural length, which is the first row length of `self`; the all-empty
    /// diagram conjugates to the empty diagram.
    pub fn conjugate(&self) -> Partition {
        let mut remaining: Vec<u32> = self.rows.iter().copied().filter(|&r| r > 0).collect();
        let mut columns = Vec::with_capacity(self.rows.first().copied().unwrap_or(0) as usize);
        while !remaining.is_empty() {
            columns.push(remaining.len() as u32);
            remaining.iter_mut().for_each(|row| *row -= 1);
            remaining.retain(|&row| row > 0);
        }
        Partition { rows: columns }
    }
}
