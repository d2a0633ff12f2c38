use std::ops::{Add, AddAssign, Sub, SubAssign};

use paste::paste;

/// Grid coordinate or offset, `(column, row)`.
///
/// Signed, so that a step off the edge of the grid is still representable and can be
/// rejected by a bounds check instead of wrapping around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Dims(pub i32, pub i32);

impl Dims {
    pub const ZERO: Dims = Dims(0, 0);

    /// Manhattan length, `1` for two orthogonally adjacent cells.
    pub fn abs_sum(self) -> i32 {
        self.0.abs() + self.1.abs()
    }

    /// Sum that returns `None` instead of overflowing.
    pub fn checked_add(self, other: Dims) -> Option<Dims> {
        Some(Dims(self.0.checked_add(other.0)?, self.1.checked_add(other.1)?))
    }

    pub fn all_positive(self) -> bool {
        self.0 > 0 && self.1 > 0
    }

    /// Iterates over every position in `[from, to)`, row by row.
    pub fn iter_fill(from: Dims, to: Dims) -> impl Iterator<Item = Dims> {
        (from.1..to.1).flat_map(move |y| (from.0..to.0).map(move |x| Dims(x, y)))
    }
}

macro_rules! impl_op {
    ($trait:ident + Assign, $op:ident) => {
        impl_op!($trait, $op);

        paste! {
            impl [<$trait Assign>] for Dims {
                #[inline(always)]
                fn [<$op _assign>](&mut self, other: Dims) {
                    *self = self.$op(other);
                }
            }

            impl [<$trait Assign>]<i32> for Dims {
                #[inline(always)]
                fn [<$op _assign>](&mut self, other: i32) {
                    *self = self.$op(other);
                }
            }
        }
    };
    ($trait:ident, $op:ident) => {
        impl $trait for Dims {
            type Output = Dims;

            #[inline(always)]
            fn $op(self, other: Dims) -> Dims {
                Dims(self.0.$op(other.0), self.1.$op(other.1))
            }
        }

        impl $trait<i32> for Dims {
            type Output = Dims;

            #[inline(always)]
            fn $op(self, other: i32) -> Dims {
                Dims(self.0.$op(other), self.1.$op(other))
            }
        }
    };
}

impl_op!(Add + Assign, add);
impl_op!(Sub + Assign, sub);
