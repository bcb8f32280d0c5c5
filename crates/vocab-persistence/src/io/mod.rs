//! File I/O operations for vocabulary persistence.
//!
//! This module handles:
//! - Saving collections with atomic writes
//! - Loading collections with format validation

mod load;
mod save;

pub use load::{load_vocabulary, try_load_vocabulary};
pub use save::save_vocabulary;
