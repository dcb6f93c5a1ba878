//! Type-erased per-voxel data arrays.
//!
//! A [`DataArray`] stores one tuple of scalar components per voxel, identified
//! by name. The trait is object-safe so that heterogeneous arrays (different
//! scalar types, different component counts) can live in one container and be
//! resampled through a single code path: tuple copies are raw byte copies
//! keyed by element size, never per-scalar-type dispatch.

use std::any::Any;

use bytemuck::Zeroable;

use crate::error::{CoreError, Result};

/// The primitive scalar kind stored in a [`DataArray`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    U64,
    I64,
    F32,
    F64,
}

impl ScalarType {
    /// Returns the size of one scalar in bytes.
    #[must_use]
    pub fn size_of(self) -> usize {
        match self {
            ScalarType::U8 | ScalarType::I8 => 1,
            ScalarType::U16 | ScalarType::I16 => 2,
            ScalarType::U32 | ScalarType::I32 | ScalarType::F32 => 4,
            ScalarType::U64 | ScalarType::I64 | ScalarType::F64 => 8,
        }
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A primitive scalar usable as a [`TypedArray`] element.
///
/// Sealed; implemented for the ten fixed-width integer and float types.
pub trait Scalar: bytemuck::Pod + Send + Sync + sealed::Sealed + 'static {
    /// The runtime tag for this scalar type.
    const SCALAR_TYPE: ScalarType;
}

macro_rules! impl_scalar {
    ($($ty:ty => $tag:ident),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}
            impl Scalar for $ty {
                const SCALAR_TYPE: ScalarType = ScalarType::$tag;
            }
        )*
    };
}

impl_scalar!(
    u8 => U8, i8 => I8,
    u16 => U16, i16 => I16,
    u32 => U32, i32 => I32,
    u64 => U64, i64 => I64,
    f32 => F32, f64 => F64,
);

/// A named per-voxel tuple array with a fixed component count.
///
/// Tuple count tracks the voxel count of the owning grid. All mutating
/// operations keep tuples whole: a tuple copy either copies every component
/// or touches nothing.
pub trait DataArray: Send + Sync {
    /// Returns the name of this array.
    fn name(&self) -> &str;

    /// Returns the scalar type stored per component.
    fn scalar_type(&self) -> ScalarType;

    /// Returns the number of tuples (one per voxel).
    fn tuple_count(&self) -> usize;

    /// Returns the number of components per tuple (>= 1).
    fn component_count(&self) -> usize;

    /// Resizes to `tuple_count` tuples, zero-filling any new tuples.
    ///
    /// Contract: a resize to the current tuple count is a no-op and must not
    /// reallocate. Callers that need a freshly sized allocation after
    /// [`clone_empty`](DataArray::clone_empty) should resize to 1 and then to
    /// the final count.
    fn resize_tuples(&mut self, tuple_count: usize);

    /// Drops all tuples and releases the backing storage.
    fn truncate(&mut self);

    /// Copies one whole tuple from `src` at `src_index` into `dst_index`.
    ///
    /// Returns false (and copies nothing) on scalar-type or component-count
    /// mismatch, or when either index is out of range.
    fn copy_tuple_from(&mut self, dst_index: usize, src: &dyn DataArray, src_index: usize) -> bool;

    /// Sets every component of the tuple at `index` to the scalar zero.
    fn zero_tuple(&mut self, index: usize);

    /// Creates an empty array with the same name, scalar type, and component
    /// count, holding zero tuples.
    fn clone_empty(&self) -> Box<dyn DataArray>;

    /// Returns the raw backing bytes.
    fn as_bytes(&self) -> &[u8];

    /// Downcast support.
    fn as_any(&self) -> &dyn Any;

    /// Mutable downcast support.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// The concrete [`DataArray`] implementation for scalar type `T`.
#[derive(Debug, Clone)]
pub struct TypedArray<T: Scalar> {
    name: String,
    components: usize,
    data: Vec<T>,
}

impl<T: Scalar> TypedArray<T> {
    /// Creates a zero-filled array with the given tuple count.
    ///
    /// # Panics
    ///
    /// Panics if `components` is zero.
    #[must_use]
    pub fn new(name: impl Into<String>, components: usize, tuple_count: usize) -> Self {
        assert!(components >= 1, "component count must be at least 1");
        Self {
            name: name.into(),
            components,
            data: vec![T::zeroed(); components * tuple_count],
        }
    }

    /// Creates an array from existing component data.
    ///
    /// The data length must be a whole number of tuples.
    pub fn from_vec(name: impl Into<String>, components: usize, data: Vec<T>) -> Result<Self> {
        assert!(components >= 1, "component count must be at least 1");
        if data.len() % components != 0 {
            return Err(CoreError::SizeMismatch {
                expected: data.len() - data.len() % components,
                actual: data.len(),
            });
        }
        Ok(Self {
            name: name.into(),
            components,
            data,
        })
    }

    /// Returns the component data.
    #[must_use]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Returns the component data mutably.
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Returns the tuple at `index` as a component slice.
    #[must_use]
    pub fn tuple(&self, index: usize) -> &[T] {
        let start = index * self.components;
        &self.data[start..start + self.components]
    }
}

impl<T: Scalar> DataArray for TypedArray<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn scalar_type(&self) -> ScalarType {
        T::SCALAR_TYPE
    }

    fn tuple_count(&self) -> usize {
        self.data.len() / self.components
    }

    fn component_count(&self) -> usize {
        self.components
    }

    fn resize_tuples(&mut self, tuple_count: usize) {
        if tuple_count == self.tuple_count() {
            return;
        }
        self.data.resize(tuple_count * self.components, T::zeroed());
    }

    fn truncate(&mut self) {
        self.data = Vec::new();
    }

    fn copy_tuple_from(&mut self, dst_index: usize, src: &dyn DataArray, src_index: usize) -> bool {
        if src.scalar_type() != T::SCALAR_TYPE || src.component_count() != self.components {
            return false;
        }
        if dst_index >= self.tuple_count() || src_index >= src.tuple_count() {
            return false;
        }
        let tuple_bytes = std::mem::size_of::<T>() * self.components;
        let dst_bytes: &mut [u8] = bytemuck::cast_slice_mut(&mut self.data);
        let src_bytes = src.as_bytes();
        dst_bytes[dst_index * tuple_bytes..(dst_index + 1) * tuple_bytes]
            .copy_from_slice(&src_bytes[src_index * tuple_bytes..(src_index + 1) * tuple_bytes]);
        true
    }

    fn zero_tuple(&mut self, index: usize) {
        let start = index * self.components;
        self.data[start..start + self.components].fill(T::zeroed());
    }

    fn clone_empty(&self) -> Box<dyn DataArray> {
        Box::new(Self {
            name: self.name.clone(),
            components: self.components,
            data: Vec::new(),
        })
    }

    fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
