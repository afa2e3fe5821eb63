//! Per-resource state snapshot.
//!
//! DESIGN
//! ======
//! A snapshot is never mutated after it is published. The reducer builds the
//! next snapshot from the previous one, so a caller holding an older
//! `Arc<ListResourceState<R>>` keeps seeing exactly what it was handed.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::fmt::{Debug, Display};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StoreError;
use crate::paging::Paging;

/// One resource item, identified by a unique id.
pub trait Record: Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    type Id: Clone + Debug + Display + PartialEq + Send + Sync + 'static;

    fn id(&self) -> &Self::Id;
}

/// Loaded records, tagged by how they were loaded.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceData<R> {
    /// Nothing loaded yet, or reset.
    Empty,
    /// A listing window, in server order plus local tail inserts.
    List(Vec<R>),
    /// A single record fetched by id.
    Single(R),
}

impl<R> Default for ResourceData<R> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<R: Record> ResourceData<R> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::List(records) => records.is_empty(),
            Self::Single(_) => false,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::List(records) => records.len(),
            Self::Single(_) => 1,
        }
    }

    /// Records as a slice regardless of shape.
    #[must_use]
    pub fn records(&self) -> &[R] {
        match self {
            Self::Empty => &[],
            Self::List(records) => records,
            Self::Single(record) => std::slice::from_ref(record),
        }
    }

    /// Look up a loaded record by id.
    #[must_use]
    pub fn find(&self, id: &R::Id) -> Option<&R> {
        self.records().iter().find(|record| record.id() == id)
    }
}

/// State held by one [`crate::ListResourceStore`].
#[derive(Debug, Clone, PartialEq)]
pub struct ListResourceState<R> {
    /// Window of the last listing, if the resource pages.
    pub paging: Option<Paging>,
    pub data: ResourceData<R>,
    /// True exactly while a request is in flight.
    pub loading: bool,
    /// Last failure payload.
    pub error: Option<StoreError>,
}

impl<R> Default for ListResourceState<R> {
    fn default() -> Self {
        Self { paging: None, data: ResourceData::Empty, loading: false, error: None }
    }
}

impl<R: Record> ListResourceState<R> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
