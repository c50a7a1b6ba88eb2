use std::ops::{Index, IndexMut};

use bevy::log::trace;
use bevy::math::IVec2;
use serde::{Deserialize, Serialize};

use crate::util_error::UtilError;


// ---------------------------------------------------------------------------
// GridIndex: the three equivalent ways of addressing a cell
// ---------------------------------------------------------------------------

/// Anything that can address a cell of a row-major `width x height` array.
///
/// Implemented for a flat `usize`, an `(x, y)` pair and an [`IVec2`]. All three
/// resolve to the same flat index `y * width + x`.
pub trait GridIndex: Copy {
    fn flat_index(self, width: usize, height: usize) -> Result<usize, UtilError>;
}

impl GridIndex for usize {
    #[inline]
    fn flat_index(self, width: usize, height: usize) -> Result<usize, UtilError> {
        if self < width.saturating_mul(height) {
            Ok(self)
        } else {
            Err(UtilError::OutOfRange {
                index: self,
                len: width.saturating_mul(height),
            })
        }
    }
}

impl GridIndex for (usize, usize) {
    #[inline]
    fn flat_index(self, width: usize, height: usize) -> Result<usize, UtilError> {
        let (x, y) = self;
        if x < width && y < height {
            Ok(y * width + x)
        } else {
            Err(UtilError::CoordinateOutOfRange {
                x: i64::try_from(x).unwrap_or(i64::MAX),
                y: i64::try_from(y).unwrap_or(i64::MAX),
                width,
                height,
            })
        }
    }
}

impl GridIndex for IVec2 {
    #[inline]
    fn flat_index(self, width: usize, height: usize) -> Result<usize, UtilError> {
        match (usize::try_from(self.x), usize::try_from(self.y)) {
            (Ok(x), Ok(y)) => (x, y).flat_index(width, height),
            _ => Err(UtilError::CoordinateOutOfRange {
                x: i64::from(self.x),
                y: i64::from(self.y),
                width,
                height,
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// TwoDimensionalArray
// ---------------------------------------------------------------------------

/// Fixed-size, row-major 2D array.
///
/// Dimensions are set at construction and never change; `len() == width * height`
/// always holds, including after deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "ArrayRepr<T>",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct TwoDimensionalArray<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

/// Unchecked wire form, validated through `TryFrom` on the way in.
#[derive(Deserialize)]
struct ArrayRepr<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T> TryFrom<ArrayRepr<T>> for TwoDimensionalArray<T> {
    type Error = UtilError;

    fn try_from(repr: ArrayRepr<T>) -> Result<Self, Self::Error> {
        Self::from_vec(repr.width, repr.height, repr.data)
    }
}

impl<T: Default> TwoDimensionalArray<T> {
    /// Allocates `width * height` default-valued cells.
    pub fn new(width: usize, height: usize) -> Result<Self, UtilError> {
        let len = check_dimensions(width, height)?;
        let data = std::iter::repeat_with(T::default).take(len).collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }
}

impl<T> TwoDimensionalArray<T> {
    /// Wraps existing row-major data. `data.len()` must equal `width * height`.
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> Result<Self, UtilError> {
        let len = check_dimensions(width, height)?;
        if data.len() != len {
            return Err(UtilError::OutOfRange {
                index: data.len(),
                len,
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells, `width * height`.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: construction rejects zero dimensions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// `(width, height)` as a vector, the default window of [`Self::copy_into`].
    #[inline]
    pub fn dimensions(&self) -> IVec2 {
        // Construction caps both axes at i32::MAX, so this never saturates.
        IVec2::new(
            i32::try_from(self.width).unwrap_or(i32::MAX),
            i32::try_from(self.height).unwrap_or(i32::MAX),
        )
    }

    #[inline]
    pub fn in_bounds(&self, pos: IVec2) -> bool {
        self.checked_index(i64::from(pos.x), i64::from(pos.y)).is_some()
    }

    pub fn index_of(&self, x: usize, y: usize) -> Result<usize, UtilError> {
        (x, y).flat_index(self.width, self.height)
    }

    pub fn coords_of(&self, index: usize) -> Result<(usize, usize), UtilError> {
        let i = index.flat_index(self.width, self.height)?;
        Ok((i % self.width, i / self.width))
    }

    pub fn get<I: GridIndex>(&self, idx: I) -> Result<&T, UtilError> {
        let i = idx.flat_index(self.width, self.height)?;
        Ok(&self.data[i])
    }

    pub fn get_mut<I: GridIndex>(&mut self, idx: I) -> Result<&mut T, UtilError> {
        let i = idx.flat_index(self.width, self.height)?;
        Ok(&mut self.data[i])
    }

    pub fn set<I: GridIndex>(&mut self, idx: I, value: T) -> Result<(), UtilError> {
        *self.get_mut(idx)? = value;
        Ok(())
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Row slices from `y = 0` to `y = height - 1`.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, T> {
        self.data.chunks_exact(self.width)
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Flat index for a signed coordinate, `None` when outside the array.
    #[inline]
    fn checked_index(&self, x: i64, y: i64) -> Option<usize> {
        let x = usize::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = usize::try_from(y).ok().filter(|&y| y < self.height)?;
        Some(y * self.width + x)
    }
}

impl<T: Clone> TwoDimensionalArray<T> {
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Resamples this array into `dest`.
    ///
    /// The window `[dest_offset, dest_offset + copy_size)` of `dest` receives
    /// `self[d - dest_offset + src_offset]` for every cell `d`, or `fill` where
    /// that source coordinate is outside `self`. Every `dest` cell outside the
    /// window is set to `fill`. `copy_size = None` copies `self.dimensions()`.
    pub fn copy_into(
        &self,
        fill: T,
        dest: &mut TwoDimensionalArray<T>,
        dest_offset: IVec2,
        src_offset: IVec2,
        copy_size: Option<IVec2>,
    ) {
        let copy_size = copy_size.unwrap_or_else(|| self.dimensions());
        dest.fill(fill.clone());
        let written = self.write_window(&fill, dest, dest_offset, src_offset, copy_size);
        trace!(
            "copy_into: {}x{} window at {dest_offset} from {src_offset}, {written} cells sourced",
            copy_size.x,
            copy_size.y
        );
    }

    /// Like [`Self::copy_into`], but only the window is written; `dest` cells
    /// outside `[dest_offset, dest_offset + copy_size)` keep their values.
    /// Returns the number of destination cells written.
    pub fn overlay_into(
        &self,
        fill: T,
        dest: &mut TwoDimensionalArray<T>,
        dest_offset: IVec2,
        src_offset: IVec2,
        copy_size: IVec2,
    ) -> usize {
        let written = self.write_window(&fill, dest, dest_offset, src_offset, copy_size);
        trace!(
            "overlay_into: {}x{} window at {dest_offset} from {src_offset}, {written} cells written",
            copy_size.x,
            copy_size.y
        );
        written
    }

    fn write_window(
        &self,
        fill: &T,
        dest: &mut TwoDimensionalArray<T>,
        dest_offset: IVec2,
        src_offset: IVec2,
        copy_size: IVec2,
    ) -> usize {
        let (dox, doy) = (i64::from(dest_offset.x), i64::from(dest_offset.y));
        let (sox, soy) = (i64::from(src_offset.x), i64::from(src_offset.y));
        let (dest_w, dest_h) = (dest.width as i64, dest.height as i64);

        // Clip the window to the destination so huge windows cost nothing.
        let dx_range = (-dox).max(0)..i64::from(copy_size.x).min(dest_w - dox);
        let dy_range = (-doy).max(0)..i64::from(copy_size.y).min(dest_h - doy);

        let mut written = 0;
        for dy in dy_range {
            for dx in dx_range.clone() {
                let Some(d) = dest.checked_index(dox + dx, doy + dy) else {
                    continue;
                };
                dest.data[d] = match self.checked_index(sox + dx, soy + dy) {
                    Some(s) => self.data[s].clone(),
                    None => fill.clone(),
                };
                written += 1;
            }
        }
        written
    }
}

impl<T, I: GridIndex> Index<I> for TwoDimensionalArray<T> {
    type Output = T;

    /// Panics when `idx` is out of range, like slice indexing.
    fn index(&self, idx: I) -> &T {
        match self.get(idx) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T, I: GridIndex> IndexMut<I> for TwoDimensionalArray<T> {
    fn index_mut(&mut self, idx: I) -> &mut T {
        match self.get_mut(idx) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<'a, T> IntoIterator for &'a TwoDimensionalArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// Validates dimensions and returns the cell count. Each axis must be in
/// `1..=i32::MAX` so it fits an `IVec2`, and the product must fit a `usize`.
fn check_dimensions(width: usize, height: usize) -> Result<usize, UtilError> {
    let axis_ok = |n: usize| n > 0 && i32::try_from(n).is_ok();
    if !axis_ok(width) || !axis_ok(height) {
        return Err(UtilError::InvalidArgument { width, height });
    }
    width
        .checked_mul(height)
        .ok_or(UtilError::InvalidArgument { width, height })
}
