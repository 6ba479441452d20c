//! Packed cell sets over an N×N grid.
//!
//! A `CellSet` stores one bit per board cell inside a single unsigned
//! integer, so set algebra on whole boards (occupancy vs. shot overlap
//! checks, sunk-ship overlays) is a couple of machine instructions.

use core::fmt;
use core::ops::{BitAnd, BitOr, BitOrAssign};
use num_traits::{PrimInt, Unsigned};

/// A set of `(row, col)` cells on an N×N grid, packed into `T`.
///
/// `T` must provide at least `N * N` bits; constructing an undersized set is
/// a compile-time mistake caught by the `debug_assert` in `new`. Coordinates
/// are a caller contract: all operations assert `row < N && col < N`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CellSet<T, const N: usize>
where
    T: PrimInt + Unsigned,
{
    bits: T,
}

impl<T, const N: usize> CellSet<T, N>
where
    T: PrimInt + Unsigned,
{
    /// Create an empty set.
    #[inline]
    pub fn new() -> Self {
        debug_assert!(N * N <= core::mem::size_of::<T>() * 8);
        CellSet { bits: T::zero() }
    }

    #[inline]
    fn bit(row: usize, col: usize) -> T {
        assert!(row < N && col < N, "cell ({row}, {col}) out of bounds");
        T::one() << (row * N + col)
    }

    /// Membership test.
    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.bits & Self::bit(row, col) != T::zero()
    }

    /// Add a cell to the set.
    #[inline]
    pub fn insert(&mut self, row: usize, col: usize) {
        self.bits = self.bits | Self::bit(row, col);
    }

    /// Remove a cell from the set.
    #[inline]
    pub fn remove(&mut self, row: usize, col: usize) {
        self.bits = self.bits & !Self::bit(row, col);
    }

    /// Number of cells in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// True when no cells are set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// True when the two sets share no cells.
    #[inline]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        (self.bits & other.bits).is_zero()
    }

    /// Iterator over member cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let bits = self.bits;
        (0..N * N).filter_map(move |idx| {
            if bits >> idx & T::one() != T::zero() {
                Some((idx / N, idx % N))
            } else {
                None
            }
        })
    }

    /// Build a set from an iterator of cells.
    pub fn from_cells<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut set = Self::new();
        for (r, c) in cells {
            set.insert(r, c);
        }
        set
    }
}

impl<T, const N: usize> Default for CellSet<T, N>
where
    T: PrimInt + Unsigned,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> BitAnd for CellSet<T, N>
where
    T: PrimInt + Unsigned,
{
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        CellSet {
            bits: self.bits & rhs.bits,
        }
    }
}

impl<T, const N: usize> BitOr for CellSet<T, N>
where
    T: PrimInt + Unsigned,
{
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        CellSet {
            bits: self.bits | rhs.bits,
        }
    }
}

impl<T, const N: usize> BitOrAssign for CellSet<T, N>
where
    T: PrimInt + Unsigned,
{
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}

impl<T, const N: usize> fmt::Debug for CellSet<T, N>
where
    T: PrimInt + Unsigned,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CellSet<{}>:", N)?;
        for r in 0..N {
            for c in 0..N {
                let ch = if self.contains(r, c) { '#' } else { '.' };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
