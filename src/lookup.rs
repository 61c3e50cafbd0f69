//! Asynchronous option lookups
//!
//! A lookup is started by handing the caller's `filter_options` function a
//! search term and a [`Pending`] handle. The caller completes the handle
//! whenever the options are ready: inside the call, from a worker thread, or
//! from whatever callback its transport offers. Completions are queued on a
//! channel owned by the controller and applied on its next tick, tagged with
//! the generation of the request that produced them.

use crate::error::LookupError;
use crossbeam_channel::Sender;
use std::thread;

/// Outcome of one lookup
pub type LookupResult<T> = std::result::Result<Vec<T>, LookupError>;

/// Caller-supplied lookup: receives the term and the handle to complete.
pub type FilterOptions<T> = Box<dyn Fn(&str, Pending<T>)>;

/// Message from a lookup back to its controller
pub(crate) struct Completion<T> {
    pub generation: u64,
    pub result: LookupResult<T>,
}

/// Single-use completion handle for one lookup request.
///
/// Dropping it without completing reports [`LookupError::Abandoned`].
pub struct Pending<T> {
    term: String,
    generation: u64,
    tx: Option<Sender<Completion<T>>>,
}

impl<T> Pending<T> {
    pub(crate) fn new(term: String, generation: u64, tx: Sender<Completion<T>>) -> Self {
        Self {
            term,
            generation,
            tx: Some(tx),
        }
    }

    /// The search term this request was made for
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn resolve(self, options: Vec<T>) {
        self.complete(Ok(options));
    }

    pub fn reject(self, error: impl Into<LookupError>) {
        self.complete(Err(error.into()));
    }

    pub fn complete(mut self, result: LookupResult<T>) {
        self.send(result);
    }

    fn send(&mut self, result: LookupResult<T>) {
        if let Some(tx) = self.tx.take() {
            // The controller may already be gone; nothing left to update then.
            let _ = tx.send(Completion {
                generation: self.generation,
                result,
            });
        }
    }
}

impl<T> Drop for Pending<T> {
    fn drop(&mut self) {
        if self.tx.is_some() {
            tracing::warn!(term = %self.term, "lookup dropped without completing");
            self.send(Err(LookupError::Abandoned));
        }
    }
}

impl<T> std::fmt::Debug for Pending<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pending")
            .field("term", &self.term)
            .field("generation", &self.generation)
            .field("completed", &self.tx.is_none())
            .finish()
    }
}

/// Lookup that gets the completion handle directly.
pub fn deferred<T, F>(f: F) -> FilterOptions<T>
where
    F: Fn(&str, Pending<T>) + 'static,
{
    Box::new(f)
}

/// Lookup that answers synchronously, e.g. over an in-memory list.
pub fn immediate<T, F>(f: F) -> FilterOptions<T>
where
    F: Fn(&str) -> LookupResult<T> + 'static,
{
    Box::new(move |term: &str, pending: Pending<T>| pending.complete(f(term)))
}

/// Lookup that runs a blocking function on a background thread per request.
pub fn blocking<T, F>(f: F) -> FilterOptions<T>
where
    T: Send + 'static,
    F: Fn(&str) -> LookupResult<T> + Send + Sync + 'static,
{
    let f = std::sync::Arc::new(f);
    Box::new(move |term: &str, pending: Pending<T>| {
        let f = f.clone();
        let term = term.to_string();
        let spawned = thread::Builder::new()
            .name("typeahead-lookup".into())
            .spawn(move || {
                let result = f(&term);
                pending.complete(result);
            });
        if let Err(e) = spawned {
            // The handle went down with the closure, which reports it as abandoned.
            tracing::error!(error = %e, "failed to spawn lookup thread");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;
    use std::time::Duration;

    #[test]
    fn resolve_sends_tagged_result() {
        let (tx, rx) = unbounded();
        let pending = Pending::new("fa".into(), 7, tx);
        assert_eq!(pending.term(), "fa");
        pending.resolve(vec![1, 2]);

        let done = rx.try_recv().unwrap();
        assert_eq!(done.generation, 7);
        assert_eq!(done.result, Ok(vec![1, 2]));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn reject_sends_error() {
        let (tx, rx) = unbounded::<Completion<u8>>();
        Pending::new("x".into(), 1, tx).reject("boom");
        assert_eq!(rx.try_recv().unwrap().result, Err(LookupError::failed("boom")));
    }

    #[test]
    fn drop_reports_abandoned() {
        let (tx, rx) = unbounded::<Completion<u8>>();
        drop(Pending::new("x".into(), 3, tx));
        let done = rx.try_recv().unwrap();
        assert_eq!(done.generation, 3);
        assert_eq!(done.result, Err(LookupError::Abandoned));
    }

    #[test]
    fn immediate_completes_inside_the_call() {
        let (tx, rx) = unbounded();
        let lookup = immediate(|term: &str| Ok(vec![term.len()]));
        lookup("four", Pending::new("four".into(), 2, tx));
        assert_eq!(rx.try_recv().unwrap().result, Ok(vec![4]));
    }

    #[test]
    fn blocking_completes_from_worker_thread() {
        let (tx, rx) = unbounded();
        let lookup = blocking(|term: &str| Ok(vec![term.to_uppercase()]));
        lookup("fake", Pending::new("fake".into(), 5, tx));

        let done = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(done.generation, 5);
        assert_eq!(done.result, Ok(vec!["FAKE".to_string()]));
    }
}
