//! Pure state transitions for a list resource.
//!
//! DESIGN
//! ======
//! `reduce` takes the previous snapshot by reference and returns a new one.
//! Mutations copy the record list before touching it, so the previous
//! snapshot and every reference into it stay valid.
//!
//! ERROR HANDLING
//! ==============
//! A rejected settlement records the failure and leaves `data` and `paging`
//! exactly as they were. An update or delete whose id is not in the local
//! copy settles normally without touching `data`; the miss is logged at
//! `warn` so it is visible without surfacing as a failure.

#[cfg(test)]
#[path = "reducer_test.rs"]
mod reducer_test;

use tracing::warn;

use crate::error::StoreError;
use crate::paging::Paging;
use crate::state::{ListResourceState, Record, ResourceData};

/// Outcome fed to the reducer: the start of a request, or its settlement.
#[derive(Debug, Clone)]
pub enum Action<R: Record> {
    /// A request has been issued.
    Pending,
    ListLoaded { records: Vec<R>, paging: Option<Paging> },
    ItemLoaded(R),
    ItemCreated(R),
    /// Server accepted the update of `id`; `record` is its authoritative copy.
    ItemUpdated { id: R::Id, record: R },
    ItemDeleted { id: R::Id },
    Rejected(StoreError),
    Reset,
}

/// Compute the next snapshot.
#[must_use]
pub fn reduce<R: Record>(state: &ListResourceState<R>, action: Action<R>) -> ListResourceState<R> {
    match action {
        Action::Pending => ListResourceState { loading: true, ..state.clone() },
        Action::ListLoaded { records, paging } => settled(paging, ResourceData::List(records)),
        Action::ItemLoaded(record) => settled(state.paging, ResourceData::Single(record)),
        Action::ItemCreated(record) => settled(state.paging, append(&state.data, record)),
        Action::ItemUpdated { id, record } => {
            let data = replace(&state.data, &id, record).unwrap_or_else(|| {
                warn!(%id, "updated record not in local copy; data left unchanged");
                state.data.clone()
            });
            settled(state.paging, data)
        }
        Action::ItemDeleted { id } => {
            let data = remove(&state.data, &id).unwrap_or_else(|| {
                warn!(%id, "deleted record not in local copy; data left unchanged");
                state.data.clone()
            });
            settled(state.paging, data)
        }
        Action::Rejected(error) => ListResourceState { loading: false, error: Some(error), ..state.clone() },
        Action::Reset => ListResourceState::default(),
    }
}

fn settled<R>(paging: Option<Paging>, data: ResourceData<R>) -> ListResourceState<R> {
    ListResourceState { paging, data, loading: false, error: None }
}

/// Tail insert. An unloaded store starts a new list; a single-record view
/// grows into a list.
fn append<R: Record>(data: &ResourceData<R>, record: R) -> ResourceData<R> {
    let mut records = data.records().to_vec();
    records.push(record);
    ResourceData::List(records)
}

/// Replace the record matching `id` in place. `None` when nothing matches.
fn replace<R: Record>(data: &ResourceData<R>, id: &R::Id, record: R) -> Option<ResourceData<R>> {
    match data {
        ResourceData::Empty => None,
        ResourceData::Single(current) => (current.id() == id).then_some(ResourceData::Single(record)),
        ResourceData::List(records) => {
            let index = records.iter().position(|r| r.id() == id)?;
            let mut next = records.clone();
            next[index] = record;
            Some(ResourceData::List(next))
        }
    }
}

/// Remove exactly the record matching `id`. `None` when nothing matches.
fn remove<R: Record>(data: &ResourceData<R>, id: &R::Id) -> Option<ResourceData<R>> {
    match data {
        ResourceData::Empty => None,
        ResourceData::Single(current) => (current.id() == id).then(|| ResourceData::List(Vec::new())),
        ResourceData::List(records) => {
            let index = records.iter().position(|r| r.id() == id)?;
            let mut next = records.clone();
            next.remove(index);
            Some(ResourceData::List(next))
        }
    }
}
