//! Shift-offset tables for the cross-orientation couplers.
//!
//! Each configuration pairs a vertical table (`off0`) and a horizontal table
//! (`off1`) of twelve entries drawn from `{2, 6, 10}`. The horizontal table
//! clips the `k` range of vertical qubits at the first and last tile; the
//! vertical table shifts the tile a horizontal partner lands in.

use std::fmt;

use crate::{
    coordinates::{PegasusIndex, TILE},
    error::{PegasusError, Result},
};

/// A single offset table, one entry per tile slot.
pub type OffsetTable = [u8; TILE];

/// Values permitted in an offset table.
pub const ALLOWED_OFFSETS: [u8; 3] = [2, 6, 10];

/// A vertical/horizontal pair of offset tables.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct OffsetLists {
    vertical: OffsetTable,
    horizontal: OffsetTable,
}

/// The eight predefined offset configurations, selected by offsets index.
pub const OFFSET_CONFIGURATIONS: [OffsetLists; 8] = [
    OffsetLists::from_tables(
        [2, 2, 2, 2, 10, 10, 10, 10, 6, 6, 6, 6],
        [6, 6, 6, 6, 2, 2, 2, 2, 10, 10, 10, 10],
    ),
    OffsetLists::from_tables(
        [2, 2, 2, 2, 10, 10, 10, 10, 6, 6, 6, 6],
        [2, 2, 2, 2, 10, 10, 10, 10, 6, 6, 6, 6],
    ),
    OffsetLists::from_tables(
        [2, 2, 2, 2, 10, 10, 10, 10, 6, 6, 6, 6],
        [10, 10, 10, 10, 6, 6, 6, 6, 2, 2, 2, 2],
    ),
    OffsetLists::from_tables(
        [10, 10, 10, 10, 6, 6, 6, 6, 2, 2, 2, 2],
        [10, 10, 10, 10, 6, 6, 6, 6, 2, 2, 2, 2],
    ),
    OffsetLists::from_tables(
        [10, 10, 10, 10, 6, 6, 6, 6, 2, 2, 2, 2],
        [2, 2, 2, 2, 6, 6, 6, 6, 10, 10, 10, 10],
    ),
    OffsetLists::from_tables(
        [6, 6, 2, 2, 2, 2, 10, 10, 10, 10, 6, 6],
        [6, 6, 2, 2, 2, 2, 10, 10, 10, 10, 6, 6],
    ),
    OffsetLists::from_tables(
        [6, 6, 2, 2, 2, 2, 10, 10, 10, 10, 6, 6],
        [6, 6, 10, 10, 10, 10, 2, 2, 2, 2, 6, 6],
    ),
    OffsetLists::from_tables([6; TILE], [6; TILE]),
];

impl OffsetLists {
    const fn from_tables(vertical: OffsetTable, horizontal: OffsetTable) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }

    /// The standard configuration (offsets index `0`).
    #[must_use]
    pub const fn standard() -> Self {
        OFFSET_CONFIGURATIONS[0]
    }

    /// Returns the predefined configuration at `index`.
    ///
    /// # Errors
    /// Returns [`PegasusError::InvalidOffsetsIndex`] when `index > 7`.
    ///
    /// # Examples
    /// ```
    /// use pegasus_core::OffsetLists;
    ///
    /// let lists = OffsetLists::from_index(7).expect("index in range");
    /// assert_eq!(lists.vertical(), &[6; 12]);
    /// assert!(OffsetLists::from_index(8).is_err());
    /// ```
    pub fn from_index(index: usize) -> Result<Self> {
        OFFSET_CONFIGURATIONS
            .get(index)
            .copied()
            .ok_or(PegasusError::InvalidOffsetsIndex {
                index,
                available: OFFSET_CONFIGURATIONS.len(),
            })
    }

    /// Validates an explicit pair of tables.
    ///
    /// # Errors
    /// Returns [`PegasusError::InvalidOffsetTableLength`] when a table does not
    /// have twelve entries and [`PegasusError::InvalidOffsetValue`] when an
    /// entry is not one of [`ALLOWED_OFFSETS`].
    ///
    /// # Examples
    /// ```
    /// use pegasus_core::{OffsetLists, PegasusError};
    ///
    /// let lists = OffsetLists::new(&[6; 12], &[2; 12]).expect("valid tables");
    /// assert_eq!(lists.horizontal(), &[2; 12]);
    ///
    /// let err = OffsetLists::new(&[6; 12], &[3; 12]).expect_err("3 is not allowed");
    /// assert!(matches!(err, PegasusError::InvalidOffsetValue { value: 3, .. }));
    /// ```
    pub fn new(vertical: &[u8], horizontal: &[u8]) -> Result<Self> {
        Ok(Self {
            vertical: parse_table("vertical", vertical)?,
            horizontal: parse_table("horizontal", horizontal)?,
        })
    }

    /// Returns the vertical table (`off0`).
    #[must_use]
    pub const fn vertical(&self) -> &OffsetTable {
        &self.vertical
    }

    /// Returns the horizontal table (`off1`).
    #[must_use]
    pub const fn horizontal(&self) -> &OffsetTable {
        &self.horizontal
    }

    /// Returns the predefined index of these tables, if any.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        OFFSET_CONFIGURATIONS.iter().position(|lists| lists == self)
    }

    /// Reports whether these are the standard tables.
    #[must_use]
    pub fn is_standard(&self) -> bool {
        *self == Self::standard()
    }

    /// Vertical tile shift of the horizontal partner of slot `k` at slot `kk`.
    pub(crate) fn tile_shift(&self, k: usize, kk: usize) -> usize {
        usize::from(kk < self.vertical_at(k))
    }

    /// Clip bound that the horizontal table places on vertical slots paired
    /// with horizontal slot `kk`.
    pub(crate) fn clip(&self, kk: usize) -> usize {
        self.horizontal
            .get(kk)
            .map_or(0, |&offset| usize::from(offset))
    }

    /// Reports whether `q` belongs to the fabric, i.e. has at least one
    /// cross-orientation coupler in a lattice of size `m`.
    pub(crate) fn in_fabric(&self, q: PegasusIndex, m: usize) -> bool {
        let table = if q.u == 0 {
            &self.horizontal
        } else {
            &self.vertical
        };
        let start = table.iter().copied().min().map_or(0, usize::from);
        let end = table.iter().copied().max().map_or(0, usize::from);
        (q.w > 0 || q.k >= start) && (q.w + 1 < m || q.k < end)
    }

    fn vertical_at(&self, k: usize) -> usize {
        self.vertical.get(k).map_or(0, |&offset| usize::from(offset))
    }
}

impl Default for OffsetLists {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<usize> for OffsetLists {
    type Error = PegasusError;

    fn try_from(index: usize) -> Result<Self> {
        Self::from_index(index)
    }
}

impl fmt::Display for OffsetLists {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}, {:?}]", self.vertical, self.horizontal)
    }
}

fn parse_table(table: &'static str, values: &[u8]) -> Result<OffsetTable> {
    let parsed: OffsetTable = values
        .try_into()
        .map_err(|_| PegasusError::InvalidOffsetTableLength {
            table,
            len: values.len(),
            expected: TILE,
        })?;
    if let Some((position, &value)) = parsed
        .iter()
        .enumerate()
        .find(|(_, value)| !ALLOWED_OFFSETS.contains(value))
    {
        return Err(PegasusError::InvalidOffsetValue {
            table,
            position,
            value,
        });
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn every_predefined_table_uses_allowed_values() {
        for lists in OFFSET_CONFIGURATIONS {
            let rebuilt = OffsetLists::new(lists.vertical(), lists.horizontal())
                .expect("predefined tables are valid");
            assert_eq!(rebuilt, lists);
        }
    }

    #[rstest]
    fn predefined_tables_are_distinct() {
        for (i, lists) in OFFSET_CONFIGURATIONS.iter().enumerate() {
            assert_eq!(lists.index(), Some(i));
        }
    }

    #[rstest]
    #[case(&[2; 11], &[2; 12], "vertical", 11)]
    #[case(&[2; 12], &[2; 13], "horizontal", 13)]
    #[case(&[], &[2; 12], "vertical", 0)]
    fn rejects_tables_of_the_wrong_length(
        #[case] vertical: &[u8],
        #[case] horizontal: &[u8],
        #[case] table: &'static str,
        #[case] len: usize,
    ) {
        assert_eq!(
            OffsetLists::new(vertical, horizontal),
            Err(PegasusError::InvalidOffsetTableLength {
                table,
                len,
                expected: TILE,
            })
        );
    }

    #[rstest]
    fn reports_the_first_invalid_value() {
        let mut horizontal = [6; TILE];
        horizontal[4] = 4;
        horizontal[9] = 0;
        assert_eq!(
            OffsetLists::new(&[2; TILE], &horizontal),
            Err(PegasusError::InvalidOffsetValue {
                table: "horizontal",
                position: 4,
                value: 4,
            })
        );
    }

    #[rstest]
    fn explicit_lists_matching_a_configuration_report_its_index() {
        let lists = OffsetLists::new(
            &[2, 2, 2, 2, 10, 10, 10, 10, 6, 6, 6, 6],
            &[6, 6, 6, 6, 2, 2, 2, 2, 10, 10, 10, 10],
        )
        .expect("valid tables");
        assert!(lists.is_standard());
        assert_eq!(lists.index(), Some(0));
        let custom = OffsetLists::new(&[2; TILE], &[10; TILE]).expect("valid tables");
        assert!(!custom.is_standard());
        assert_eq!(custom.index(), None);
    }

    #[rstest]
    fn offsets_index_converts_through_try_from() {
        assert_eq!(OffsetLists::try_from(3), OffsetLists::from_index(3));
        assert_eq!(
            OffsetLists::try_from(8),
            Err(PegasusError::InvalidOffsetsIndex {
                index: 8,
                available: 8,
            })
        );
    }

    #[rstest]
    fn display_lists_both_tables() {
        assert_eq!(
            OffsetLists::from_index(7).map(|lists| lists.to_string()),
            Ok(format!("[{:?}, {:?}]", [6; TILE], [6; TILE]))
        );
    }

    #[rstest]
    #[case(PegasusIndex::new(0, 0, 1, 0), false)]
    #[case(PegasusIndex::new(0, 0, 2, 0), true)]
    #[case(PegasusIndex::new(0, 2, 9, 0), true)]
    #[case(PegasusIndex::new(0, 2, 10, 0), false)]
    #[case(PegasusIndex::new(1, 0, 1, 1), false)]
    #[case(PegasusIndex::new(1, 1, 0, 1), true)]
    #[case(PegasusIndex::new(1, 2, 10, 1), false)]
    fn fabric_membership_follows_table_extremes(#[case] q: PegasusIndex, #[case] expected: bool) {
        assert_eq!(OffsetLists::standard().in_fabric(q, 3), expected);
    }
}
