//! Config-driven facade over the free functions.
//!
//! [`Toolkit`] accepts any [`Collection`], including ones built at runtime
//! from JSON, and applies the policies in [`KitConfig`] wherever the free
//! functions would either return a sentinel or refuse a shape at compile
//! time.

use crate::collection::{Collection, MappingView, Shape};
use crate::config::{EmptyReducePolicy, KitConfig, MappingPositionPolicy};
use crate::error::KitError;
use crate::ops::derived::reduce;
use crate::ops::helpers::{leading, trailing, Taken};
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Toolkit {
    config: KitConfig,
}

impl Toolkit {
    pub fn new(config: KitConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &KitConfig {
        &self.config
    }

    /// [`reduce`](crate::reduce) with the empty-input case decided by
    /// [`KitConfig::empty_reduce`].
    pub fn reduce<'a, V, C, F>(
        &self,
        collection: C,
        callback: F,
        initial: Option<V>,
    ) -> Result<Option<V>, KitError>
    where
        V: Clone + 'a,
        C: Into<Collection<'a, V>>,
        F: FnMut(V, &'a V) -> V,
    {
        match reduce(collection, callback, initial) {
            Some(accumulator) => Ok(Some(accumulator)),
            None => match self.config.empty_reduce {
                EmptyReducePolicy::Sentinel => Ok(None),
                EmptyReducePolicy::Error => {
                    debug!("Rejecting reduce of empty collection without initial value");
                    Err(KitError::empty_reduce())
                }
            },
        }
    }

    pub fn first_n<'a, V: 'a>(
        &self,
        collection: impl Into<Collection<'a, V>>,
        n: usize,
    ) -> Result<Option<Taken<'a, V>>, KitError> {
        let collection = self.positional(collection.into(), "first_n")?;
        Ok(leading(collection.ordered_values(), n))
    }

    pub fn last_n<'a, V: 'a>(
        &self,
        collection: impl Into<Collection<'a, V>>,
        n: usize,
    ) -> Result<Option<Taken<'a, V>>, KitError> {
        let collection = self.positional(collection.into(), "last_n")?;
        Ok(trailing(collection.ordered_values(), n))
    }

    /// Keys of a mapping; sequences are rejected.
    pub fn keys<'a, V: 'a>(
        &self,
        collection: impl Into<Collection<'a, V>>,
    ) -> Result<Vec<&'a str>, KitError> {
        Ok(Self::mapping(collection.into(), "keys")?.key_list())
    }

    /// Values of a mapping; sequences are rejected.
    pub fn values<'a, V: 'a>(
        &self,
        collection: impl Into<Collection<'a, V>>,
    ) -> Result<Vec<&'a V>, KitError> {
        Ok(Self::mapping(collection.into(), "values")?.value_list())
    }

    fn positional<'a, V: 'a>(
        &self,
        collection: Collection<'a, V>,
        operation: &'static str,
    ) -> Result<Collection<'a, V>, KitError> {
        match (collection.shape(), self.config.mapping_positions) {
            (Shape::Sequence, _) | (Shape::Mapping, MappingPositionPolicy::Values) => {
                Ok(collection)
            }
            (Shape::Mapping, MappingPositionPolicy::Reject) => Err(KitError::shape_mismatch(
                operation,
                Shape::Sequence,
                Shape::Mapping,
            )),
        }
    }

    fn mapping<'a, V: 'a>(
        collection: Collection<'a, V>,
        operation: &'static str,
    ) -> Result<&'a dyn MappingView<V>, KitError> {
        collection
            .as_mapping()
            .ok_or_else(|| KitError::shape_mismatch(operation, Shape::Mapping, collection.shape()))
    }
}
