use crate::dims::Dims;

/// Row-major 2D storage addressed by [`Dims`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Array2D<T> {
    buf: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Array2D<T> {
    /// Builds the array by calling `init` for every position, row by row.
    ///
    /// Returns `None` if either side is not positive.
    pub fn from_fn(size: Dims, mut init: impl FnMut(Dims) -> T) -> Option<Self> {
        if !size.all_positive() {
            return None;
        }

        let (width, height) = (size.0 as usize, size.1 as usize);
        let buf = Dims::iter_fill(Dims::ZERO, size).map(&mut init).collect();

        Some(Self { buf, width, height })
    }

    pub fn size(&self) -> Dims {
        Dims(self.width as i32, self.height as i32)
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn dim_to_idx(&self, pos: Dims) -> Option<usize> {
        let Dims(x, y) = pos;
        if x < 0 || y < 0 {
            return None;
        }

        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }

        Some(y * self.width + x)
    }

    pub fn get(&self, pos: Dims) -> Option<&T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get(i))
    }

    pub fn get_mut(&mut self, pos: Dims) -> Option<&mut T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get_mut(i))
    }

    /// Mutable access to two distinct positions at once.
    pub fn get_pair_mut(&mut self, a: Dims, b: Dims) -> Option<(&mut T, &mut T)> {
        let (ia, ib) = (self.dim_to_idx(a)?, self.dim_to_idx(b)?);
        if ia == ib {
            return None;
        }

        if ia < ib {
            let (lo, hi) = self.buf.split_at_mut(ib);
            Some((&mut lo[ia], &mut hi[0]))
        } else {
            let (lo, hi) = self.buf.split_at_mut(ia);
            Some((&mut hi[0], &mut lo[ib]))
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.buf.iter_mut()
    }
}
