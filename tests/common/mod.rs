//! Helpers shared by the integration tests.

use std::sync::Arc;

use distvec::parallel::{ThreadComm, UniverseComm};

/// Run `f` once per rank of an `n`-rank in-process group and collect the results
/// in rank order. Every rank must issue the same sequence of collective calls.
pub fn on_ranks<F, R>(n: usize, f: F) -> Vec<R>
where
    F: Fn(Arc<UniverseComm>) -> R + Sync,
    R: Send,
{
    let comms = ThreadComm::group(n);
    std::thread::scope(|s| {
        let f = &f;
        let handles: Vec<_> = comms
            .into_iter()
            .map(|comm| s.spawn(move || f(Arc::new(UniverseComm::Threads(comm)))))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    })
}
