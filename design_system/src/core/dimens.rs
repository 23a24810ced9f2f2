// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [Size] holds the `width` and `height` of a painted component, and [Pos] holds the
//! `col` and `row` index where a component is painted. [`ColWidth`] and [`RowHeight`]
//! are distinct types, as are [`ColIndex`] and [`RowIndex`], so that it isn't possible
//! to use a width where a height was intended, and vice versa.
//!
//! ```text
//!     0   4    9    1    2    2
//!                   4    0    5
//!    ┌────┴────┴────┴────┴────┴── col
//!  0 ┤     ╭─ Weight ────╮
//!  1 ┤     │ 105         │
//!  2 ┤     ╰─────────────╯
//!    │     origin pos: [5, 0]
//!   row    size: [15, 3]
//! ```
//!
//! # The many ways to create one
//!
//! Use the [`width()`], [`height()`], [`col()`], and [`row()`] functions along w/ the
//! [Add] `+` operator, in any order:
//!
//! ```
//! use r3bl_design_system::{col, height, row, width, Pos, Size};
//!
//! let size: Size = width(15) + height(3);
//! assert_eq!(size, height(3) + width(15));
//! assert_eq!(size.col_width.as_u16(), 15);
//!
//! let pos: Pos = col(5) + row(0);
//! assert_eq!(pos, row(0) + col(5));
//! assert!(pos.contains(size, col(19) + row(2)));
//! assert!(!pos.contains(size, col(20) + row(2)));
//! ```

use std::{fmt::{Debug, Formatter, Result},
          ops::Add};

/// Width is column count, i.e., the number of columns that a UI component occupies.
#[derive(Copy, Clone, PartialEq, PartialOrd, Ord, Eq, Hash, Default)]
pub struct ColWidth(pub u16);

/// Height is row count, i.e., the number of rows that a UI component occupies.
#[derive(Copy, Clone, PartialEq, PartialOrd, Ord, Eq, Hash, Default)]
pub struct RowHeight(pub u16);

/// Column index (position), zero based.
#[derive(Copy, Clone, PartialEq, PartialOrd, Ord, Eq, Hash, Default)]
pub struct ColIndex(pub u16);

/// Row index (position), zero based.
#[derive(Copy, Clone, PartialEq, PartialOrd, Ord, Eq, Hash, Default)]
pub struct RowIndex(pub u16);

#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub col_width: ColWidth,
    pub row_height: RowHeight,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Pos {
    pub col_index: ColIndex,
    pub row_index: RowIndex,
}

pub fn width(arg_col_width: impl Into<ColWidth>) -> ColWidth { arg_col_width.into() }

pub fn height(arg_row_height: impl Into<RowHeight>) -> RowHeight {
    arg_row_height.into()
}

pub fn col(arg_col_index: impl Into<ColIndex>) -> ColIndex { arg_col_index.into() }

pub fn row(arg_row_index: impl Into<RowIndex>) -> RowIndex { arg_row_index.into() }

/// Generates the `From<u16>`, `From<usize>`, `From<i32>`, `as_u16()`, `as_usize()` and [Debug]
/// boilerplate for the newtypes above.
macro_rules! impl_u16_newtype {
    ($name:ident) => {
        impl From<u16> for $name {
            fn from(it: u16) -> Self { $name(it) }
        }

        /// Saturates at [`u16::MAX`].
        impl From<usize> for $name {
            fn from(it: usize) -> Self { $name(u16::try_from(it).unwrap_or(u16::MAX)) }
        }

        /// Clamps to `0..=u16::MAX`. Plain integer literals land here.
        impl From<i32> for $name {
            fn from(it: i32) -> Self {
                $name(u16::try_from(it.max(0)).unwrap_or(u16::MAX))
            }
        }

        impl From<$name> for u16 {
            fn from(it: $name) -> Self { it.0 }
        }

        impl $name {
            #[must_use]
            pub fn as_u16(&self) -> u16 { self.0 }

            #[must_use]
            pub fn as_usize(&self) -> usize { usize::from(self.0) }
        }

        impl Debug for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

impl_u16_newtype!(ColWidth);
impl_u16_newtype!(RowHeight);
impl_u16_newtype!(ColIndex);
impl_u16_newtype!(RowIndex);

mod size_impl {
    use super::{Add, ColWidth, Debug, Formatter, Result, RowHeight, Size};

    impl Size {
        pub fn new(arg_size: impl Into<Size>) -> Self { arg_size.into() }

        #[must_use]
        pub fn is_zero(&self) -> bool { self.col_width.0 == 0 || self.row_height.0 == 0 }
    }

    impl From<(ColWidth, RowHeight)> for Size {
        fn from((col_width, row_height): (ColWidth, RowHeight)) -> Self {
            Size {
                col_width,
                row_height,
            }
        }
    }

    impl Add<RowHeight> for ColWidth {
        type Output = Size;

        fn add(self, rhs: RowHeight) -> Self::Output {
            Size {
                col_width: self,
                row_height: rhs,
            }
        }
    }

    impl Add<ColWidth> for RowHeight {
        type Output = Size;

        fn add(self, rhs: ColWidth) -> Self::Output {
            Size {
                col_width: rhs,
                row_height: self,
            }
        }
    }

    impl Debug for Size {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            write!(f, "[w: {}, h: {}]", self.col_width.0, self.row_height.0)
        }
    }
}

mod pos_impl {
    use super::{Add, ColIndex, Debug, Formatter, Pos, Result, RowIndex, Size};

    impl Pos {
        /// Returns true if `other` falls inside the rectangle that starts at `self` and
        /// spans `size`. A zero [Size] contains nothing.
        #[must_use]
        pub fn contains(&self, size: Size, other: Pos) -> bool {
            let col_start = u32::from(self.col_index.0);
            let row_start = u32::from(self.row_index.0);
            let col_end = col_start + u32::from(size.col_width.0);
            let row_end = row_start + u32::from(size.row_height.0);
            let (c, r) = (u32::from(other.col_index.0), u32::from(other.row_index.0));
            (col_start..col_end).contains(&c) && (row_start..row_end).contains(&r)
        }
    }

    impl Add<RowIndex> for ColIndex {
        type Output = Pos;

        fn add(self, rhs: RowIndex) -> Self::Output {
            Pos {
                col_index: self,
                row_index: rhs,
            }
        }
    }

    impl Add<ColIndex> for RowIndex {
        type Output = Pos;

        fn add(self, rhs: ColIndex) -> Self::Output {
            Pos {
                col_index: rhs,
                row_index: self,
            }
        }
    }

    /// Moves a position down by `rhs` rows.
    impl Add<RowIndex> for Pos {
        type Output = Pos;

        fn add(self, rhs: RowIndex) -> Self::Output {
            Pos {
                col_index: self.col_index,
                row_index: RowIndex(self.row_index.0.saturating_add(rhs.0)),
            }
        }
    }

    impl Debug for Pos {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            write!(f, "[c: {}, r: {}]", self.col_index.0, self.row_index.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_size_is_order_independent() {
        let size_1 = width(10) + height(3);
        let size_2 = height(3) + width(10);
        assert_eq2!(size_1, size_2);
        assert_eq2!(Size::new((width(10), height(3))), size_1);
    }

    #[test]
    fn test_zero_size() {
        assert!(Size::default().is_zero());
        assert!((width(10) + height(0)).is_zero());
        assert!(!(width(1) + height(1)).is_zero());
    }

    #[test]
    fn test_contains() {
        let origin = col(2) + row(1);
        let size = width(4) + height(3);
        assert!(origin.contains(size, col(2) + row(1)));
        assert!(origin.contains(size, col(5) + row(3)));
        assert!(!origin.contains(size, col(6) + row(3)));
        assert!(!origin.contains(size, col(5) + row(4)));
        assert!(!origin.contains(size, col(1) + row(1)));
        assert!(!origin.contains(Size::default(), origin));
    }

    #[test]
    fn test_usize_saturates() {
        assert_eq2!(width(usize::MAX), ColWidth(u16::MAX));
        assert_eq2!(width(-3), ColWidth(0));
        assert_eq2!(format!("{:?}", width(7)), "ColWidth(7)");
    }
}
