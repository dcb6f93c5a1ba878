//! Named array container for a grid's cell data.

use crate::array::DataArray;
use crate::error::{CoreError, Result};

/// The set of named [`DataArray`]s attached to a grid's cells.
///
/// Arrays are kept in insertion order so that operations iterating the
/// container are deterministic.
#[derive(Default)]
pub struct AttributeContainer {
    arrays: Vec<Box<dyn DataArray>>,
}

impl AttributeContainer {
    /// Creates an empty container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the names of all arrays, in insertion order.
    #[must_use]
    pub fn array_names(&self) -> Vec<String> {
        self.arrays.iter().map(|a| a.name().to_string()).collect()
    }

    /// Gets a reference to the array with the given name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn DataArray> {
        self.arrays
            .iter()
            .find(|a| a.name() == name)
            .map(AsRef::as_ref)
    }

    /// Gets a mutable reference to the array with the given name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Box<dyn DataArray>> {
        self.arrays.iter_mut().find(|a| a.name() == name)
    }

    /// Inserts an array, replacing any existing array with the same name.
    pub fn insert_or_replace(&mut self, array: Box<dyn DataArray>) {
        match self.arrays.iter_mut().find(|a| a.name() == array.name()) {
            Some(slot) => *slot = array,
            None => self.arrays.push(array),
        }
    }

    /// Removes and returns the array with the given name.
    pub fn remove(&mut self, name: &str) -> Result<Box<dyn DataArray>> {
        let pos = self
            .arrays
            .iter()
            .position(|a| a.name() == name)
            .ok_or_else(|| CoreError::ArrayNotFound(name.to_string()))?;
        Ok(self.arrays.remove(pos))
    }

    /// Detaches every array, leaving the container empty.
    pub fn take_all(&mut self) -> Vec<Box<dyn DataArray>> {
        std::mem::take(&mut self.arrays)
    }

    /// Returns an iterator over the arrays in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn DataArray> {
        self.arrays.iter().map(AsRef::as_ref)
    }

    /// Returns the number of arrays.
    #[must_use]
    pub fn len(&self) -> usize {
        self.arrays.len()
    }

    /// Returns true if the container holds no arrays.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arrays.is_empty()
    }
}
