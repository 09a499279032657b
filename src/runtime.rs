//! Runtime for the command-line entry points

use crate::error::Result;
use std::future::Future;
use tokio::runtime::{Builder, Runtime};

/// Multi-thread runtime shared by `serve` and `lookup`.
pub fn build() -> Result<Runtime> {
    let runtime = Builder::new_multi_thread()
        .enable_all()
        .thread_name("statefacts-worker")
        .build()?;
    Ok(runtime)
}

/// Run a future to completion on a fresh runtime.
pub fn block_on<F>(future: F) -> Result<F::Output>
where
    F: Future,
{
    Ok(build()?.block_on(future))
}
