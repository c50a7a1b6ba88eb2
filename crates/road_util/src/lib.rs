//! Engine-independent helpers shared by the road system tooling.
//!
//! Everything here is plain data: no ECS systems, no plugins. Each module is
//! a leaf and can be used on its own.

pub mod config;
pub mod context_data_cache;
pub mod data_cache;
pub mod string_utility;
pub mod two_dimensional_array;
pub mod util_error;

pub use context_data_cache::ContextDataCache;
pub use data_cache::DataCache;
pub use string_utility::{get_initials, split_words};
pub use two_dimensional_array::{GridIndex, TwoDimensionalArray};
pub use util_error::{ErrorKind, UtilError};
