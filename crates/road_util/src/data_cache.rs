use crate::util_error::UtilError;

/// A single cached value with an explicit validity flag.
///
/// Starts out empty. [`set_data`](Self::set_data) makes it valid,
/// [`invalidate`](Self::invalidate) empties it again; reading an empty cache
/// is an [`UtilError::InvalidState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataCache<T> {
    data: Option<T>,
}

impl<T> Default for DataCache<T> {
    fn default() -> Self {
        Self { data: None }
    }
}

impl<T> DataCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `data`, replacing any previous value.
    pub fn set_data(&mut self, data: T) {
        self.data = Some(data);
    }

    pub fn get_data(&self) -> Result<&T, UtilError> {
        self.data.as_ref().ok_or(UtilError::InvalidState)
    }

    pub fn get_data_mut(&mut self) -> Result<&mut T, UtilError> {
        self.data.as_mut().ok_or(UtilError::InvalidState)
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.data.is_some()
    }

    /// Drops the stored value. Invalidating an empty cache is a no-op.
    pub fn invalidate(&mut self) {
        self.data = None;
    }

    /// Moves the value out and leaves the cache invalid.
    pub fn take(&mut self) -> Result<T, UtilError> {
        self.data.take().ok_or(UtilError::InvalidState)
    }
}
