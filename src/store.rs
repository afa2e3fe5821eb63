//! Generic per-resource store: issues requests and folds their outcomes.
//!
//! DESIGN
//! ======
//! Every operation follows the same two-phase protocol: dispatch `Pending`,
//! await exactly one transport call, then dispatch the settlement. The state
//! cell is a `watch` channel holding `Arc` snapshots; each dispatch runs the
//! reducer inside `send_modify`, so one reducer application never interleaves
//! with another. Presentation code reads snapshots or subscribes to changes.
//!
//! CONCURRENCY
//! ===========
//! Operations on the same store are not serialized. Two in-flight listings
//! race and whichever settles last owns `data` and `paging`. Each request
//! carries a request id in its log events so such races can be traced.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tokio::sync::watch;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::envelope::{self, Settlement};
use crate::error::StoreError;
use crate::paging::ListQuery;
use crate::reducer::{Action, reduce};
use crate::state::{ListResourceState, Record};
use crate::transport::{ApiRequest, Transport, item_path};

/// Snapshot handed back to callers.
pub type Snapshot<R> = Arc<ListResourceState<R>>;

// =============================================================================
// INTENT
// =============================================================================

/// What a request was issued for; decides how its body is adapted and which
/// action it settles into.
enum Intent<R: Record> {
    FetchList,
    FetchOne,
    Create,
    Update(R::Id),
    Delete(R::Id),
}

impl<R: Record> Intent<R> {
    fn name(&self) -> &'static str {
        match self {
            Self::FetchList => "fetch_list",
            Self::FetchOne => "fetch_one",
            Self::Create => "create_item",
            Self::Update(_) => "update_item",
            Self::Delete(_) => "delete_item",
        }
    }

    fn adapt(&self, body: Value) -> Result<Settlement<R>, StoreError> {
        match self {
            Self::FetchList => envelope::adapt_list(body),
            Self::FetchOne | Self::Create | Self::Update(_) => envelope::adapt_record(body),
            Self::Delete(_) => Ok(envelope::adapt_removed(body)),
        }
    }

    fn settle(self, settlement: Settlement<R>) -> Result<Action<R>, StoreError> {
        let name = self.name();
        match (self, settlement) {
            (Self::FetchList, Settlement::Records { records, paging }) => Ok(Action::ListLoaded { records, paging }),
            (Self::FetchOne, Settlement::Record(record)) => Ok(Action::ItemLoaded(record)),
            (Self::Create, Settlement::Record(record)) => Ok(Action::ItemCreated(record)),
            (Self::Update(id), Settlement::Record(record)) => Ok(Action::ItemUpdated { id, record }),
            (Self::Delete(id), Settlement::Removed) => Ok(Action::ItemDeleted { id }),
            (_, other) => Err(StoreError::Decode(format!("{name} cannot settle with {other:?}"))),
        }
    }
}

// =============================================================================
// STORE
// =============================================================================

/// Client-side state container for one resource kind.
pub struct ListResourceStore<R: Record> {
    name: &'static str,
    base_path: String,
    transport: Arc<dyn Transport>,
    state: watch::Sender<Snapshot<R>>,
}

impl<R: Record> ListResourceStore<R> {
    /// Create a store for the resource served at `base_path`.
    #[must_use]
    pub fn new(name: &'static str, base_path: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        let (state, _) = watch::channel(Arc::new(ListResourceState::default()));
        Self { name, base_path: base_path.into(), transport, state }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Current immutable snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<R> {
        Arc::clone(&self.state.borrow())
    }

    /// Change feed of snapshots, starting from the current one.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Snapshot<R>> {
        self.state.subscribe()
    }

    /// Drop loaded data and return to the initial state.
    pub fn reset(&self) -> Snapshot<R> {
        self.dispatch(Action::Reset)
    }

    /// `GET {base}` with the filter and window. Replaces `data` and `paging`.
    pub async fn fetch_list(&self, query: &ListQuery) -> Snapshot<R> {
        let request = ApiRequest::get(self.base_path.as_str()).with_query(query.query_pairs());
        self.run(Intent::FetchList, request).await
    }

    /// `GET {base}/{id}`. Collapses `data` into a single-record view.
    pub async fn fetch_one(&self, id: &R::Id) -> Snapshot<R> {
        let request = ApiRequest::get(item_path(&self.base_path, id));
        self.run(Intent::FetchOne, request).await
    }

    /// `POST {base}`. Appends the server's record to the tail of `data`.
    pub async fn create_item<F: Serialize + ?Sized>(&self, fields: &F) -> Snapshot<R> {
        match encode(fields) {
            Ok(body) => self.run(Intent::Create, ApiRequest::post(self.base_path.as_str(), body)).await,
            Err(error) => self.reject(Intent::<R>::Create.name(), error),
        }
    }

    /// `PUT {base}/{id}`. Replaces the record with matching id in place.
    pub async fn update_item<F: Serialize + ?Sized>(&self, id: &R::Id, fields: &F) -> Snapshot<R> {
        match encode(fields) {
            Ok(body) => {
                let request = ApiRequest::put(item_path(&self.base_path, id), body);
                self.run(Intent::Update(id.clone()), request).await
            }
            Err(error) => self.reject(Intent::<R>::Update(id.clone()).name(), error),
        }
    }

    /// `DELETE {base}/{id}`. Removes the record with matching id.
    pub async fn delete_item(&self, id: &R::Id) -> Snapshot<R> {
        let request = ApiRequest::delete(item_path(&self.base_path, id));
        self.run(Intent::Delete(id.clone()), request).await
    }

    async fn run(&self, intent: Intent<R>, request: ApiRequest) -> Snapshot<R> {
        let request_id = Uuid::new_v4();
        let operation = intent.name();
        debug!(
            resource = self.name,
            operation,
            %request_id,
            method = %request.method,
            path = %request.path,
            "request issued"
        );
        self.dispatch(Action::Pending);

        let outcome = match self.transport.send(request).await {
            Ok(body) => intent.adapt(body).and_then(|settlement| intent.settle(settlement)),
            Err(error) => Err(error),
        };

        match outcome {
            Ok(action) => {
                debug!(resource = self.name, operation, %request_id, "request settled");
                self.dispatch(action)
            }
            Err(error) => {
                warn!(
                    resource = self.name,
                    operation,
                    %request_id,
                    code = error.error_code(),
                    error = %error,
                    "request failed"
                );
                self.dispatch(Action::Rejected(error))
            }
        }
    }

    fn reject(&self, operation: &'static str, error: StoreError) -> Snapshot<R> {
        warn!(resource = self.name, operation, code = error.error_code(), error = %error, "request not issued");
        self.dispatch(Action::Rejected(error))
    }

    /// Apply one action atomically and return the snapshot now current.
    fn dispatch(&self, action: Action<R>) -> Snapshot<R> {
        let mut applied = None;
        self.state.send_modify(|current| {
            let next = Arc::new(reduce(current, action));
            *current = Arc::clone(&next);
            applied = Some(next);
        });
        applied.unwrap_or_else(|| self.snapshot())
    }
}

fn encode<F: Serialize + ?Sized>(fields: &F) -> Result<Value, StoreError> {
    serde_json::to_value(fields).map_err(|e| StoreError::Encode(e.to_string()))
}
