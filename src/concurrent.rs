// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// Ordered fan-out/fan-in over independent asynchronous operations.
///
/// Every item is processed on its own task and all tasks are joined before
/// the caller continues. Results are returned in input order regardless of
/// completion order.
use std::future::Future;

use tokio::task::JoinSet;
use tracing::debug;

use crate::error::Error;

/// Maps every item through `operation` concurrently and collects the results.
///
/// All tasks run to completion even when one of them fails; the error
/// reported is the one belonging to the earliest item in input order, so the
/// outcome does not depend on scheduling.
///
/// # Errors
///
/// Returns the first operation error in input order, or [`Error::Task`] when
/// a task panics.
///
/// # Example
///
/// ```no_run
/// use iconsmith::{Error, async_map};
///
/// # async fn example() -> Result<(), Error> {
/// let lengths = async_map(vec!["a", "bb"], |value| async move { Ok(value.len(),) },).await?;
/// assert_eq!(lengths, vec![1, 2]);
/// # Ok(())
/// # }
/// ```
pub async fn async_map<T, U, F, Fut,>(items: Vec<T,>, operation: F,) -> Result<Vec<U,>, Error,>
where
    T: Send + 'static,
    U: Send + 'static,
    F: Fn(T,) -> Fut,
    Fut: Future<Output = Result<U, Error,>,> + Send + 'static,
{
    let total = items.len();
    let mut tasks = JoinSet::new();

    for (index, item,) in items.into_iter().enumerate() {
        let pending = operation(item,);
        tasks.spawn(async move { (index, pending.await,) },);
    }

    let mut slots: Vec<Option<Result<U, Error,>,>,> = (0..total).map(|_| None,).collect();
    while let Some(joined,) = tasks.join_next().await {
        let (index, outcome,) = joined?;
        if let Some(slot,) = slots.get_mut(index,) {
            *slot = Some(outcome,);
        }
    }
    debug!("joined {} concurrent tasks", total);

    let mut results = Vec::with_capacity(total,);
    for slot in slots {
        match slot {
            Some(Ok(value,),) => results.push(value,),
            Some(Err(error,),) => return Err(error,),
            None => {
                return Err(Error::Task {
                    message: "task finished without reporting a result".to_owned(),
                },);
            }
        }
    }

    Ok(results,)
}
