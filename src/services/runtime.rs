//! Tokio Runtime Bridge
//!
//! GPUI runs its own executor, but reqwest needs tokio. Enrollment requests
//! are handed to a process-wide tokio runtime and their result awaited from
//! the GPUI task.
//!
//! ```text
//! GPUI task ──run_in_tokio(request)──▶ tokio runtime ──▶ result back to GPUI
//! ```

use std::future::Future;
use std::sync::OnceLock;
use tokio::runtime::Runtime;

/// Global tokio runtime instance
static TOKIO_RUNTIME: OnceLock<Runtime> = OnceLock::new();

fn get_runtime() -> &'static Runtime {
    TOKIO_RUNTIME.get_or_init(|| Runtime::new().expect("Failed to create tokio runtime"))
}

/// Run a future on the tokio runtime and await its result from any executor
pub async fn run_in_tokio<F, T>(future: F) -> T
where
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    let handle = get_runtime().spawn(future);
    match handle.await {
        Ok(result) => result,
        Err(e) => std::panic::resume_unwind(e.into_panic()),
    }
}
