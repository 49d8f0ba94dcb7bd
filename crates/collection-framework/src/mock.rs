//! # Mock Collections
//!
//! `MockClient<T>` hands out a real [`CollectionClient<T>`] whose requests are answered
//! from a queue of expectations instead of a running [`CollectionActor`](crate::CollectionActor).
//! Use it to test domain clients and repository adapters deterministically, including
//! failures that are awkward to provoke with a real actor.
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | None (expectations) | Real store |
//! | **Use Case** | Logic *around* the client | The collection itself or the full system |
//! | **Error Injection** | `return_err` | Requires specific state |
//!
//! ```rust,ignore
//! let mut products = MockClient::<Product>::new();
//! products
//!     .expect_find()
//!     .return_ok(vec![Product::new(ProductId(1), UserId(1), "Poster", 9.0)]);
//!
//! let client = ProductClient::new(products.client());
//! let owned = client.find_by_owner(&UserId(1), 0).await?;
//! products.verify();
//! ```
//!
//! Expectations are consumed in order; a request that does not match the next
//! expectation's kind (or id, for `get`) panics the mock task, which the caller observes
//! as [`FrameworkError::ActorDropped`].

use crate::client::CollectionClient;
use crate::entity::CollectionEntity;
use crate::error::FrameworkError;
use crate::message::CollectionRequest;
use crate::query::{FindQuery, FindResult};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

enum Expectation<T: CollectionEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Find {
        response: Result<FindResult<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
pub struct MockClient<T: CollectionEntity> {
    client: CollectionClient<T>,
    expectations: Queue<T>,
    /// Every `Find` query received, so tests can assert on owner and depth.
    queries: Arc<Mutex<Vec<FindQuery<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: CollectionEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: CollectionEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<CollectionRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queries = Arc::new(Mutex::new(Vec::new()));
        let expectations_clone = expectations.clone();
        let queries_clone = queries.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        CollectionRequest::Get { id, respond_to, .. },
                        Some(Expectation::Get {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "get called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        CollectionRequest::Find { query, respond_to },
                        Some(Expectation::Find { response }),
                    ) => {
                        queries_clone.lock().unwrap().push(query);
                        let _ = respond_to.send(response);
                    }
                    (
                        CollectionRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        CollectionRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "update called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: CollectionClient::new(sender),
            expectations,
            queries,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> CollectionClient<T> {
        self.client.clone()
    }

    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::Get { id, response }
        })
    }

    pub fn expect_find(&mut self) -> ExpectationBuilder<T, FindResult<T>> {
        ExpectationBuilder::new(self.expectations.clone(), |response| {
            Expectation::Find { response }
        })
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        ExpectationBuilder::new(self.expectations.clone(), |response| {
            Expectation::Create { response }
        })
    }

    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::Update { id, response }
        })
    }

    /// The `Find` queries received so far, oldest first.
    pub fn find_queries(&self) -> Vec<FindQuery<T>> {
        self.queries.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder that queues one expectation once its response is chosen.
pub struct ExpectationBuilder<T: CollectionEntity, R> {
    expectations: Queue<T>,
    build: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: CollectionEntity, R> ExpectationBuilder<T, R> {
    fn new(
        expectations: Queue<T>,
        build: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> Self {
        Self {
            expectations,
            build: Box::new(build),
        }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: impl Into<R>) {
        let expectation = (self.build)(Ok(value.into()));
        self.expectations.lock().unwrap().push_back(expectation);
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        let expectation = (self.build)(Err(error));
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

/// Creates a client and the raw receiver its requests arrive on.
///
/// For tests that want to inspect each request and answer it by hand.
pub fn create_mock_client<T: CollectionEntity>(
    buffer_size: usize,
) -> (CollectionClient<T>, mpsc::Receiver<CollectionRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CollectionClient::new(sender), receiver)
}
