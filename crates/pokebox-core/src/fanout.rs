// ── Fan-out ──
//
// "Fire independent requests, await all" for collection sync. Every
// future settles before the result is decided, and a single failure
// discards all successes.

use std::future::Future;

use futures_util::future::join_all;

/// Await every future concurrently on the current task.
///
/// Returns all outputs in input order, or the first error in input order.
pub async fn all_or_nothing<I, F, T, E>(tasks: I) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>>,
{
    join_all(tasks).await.into_iter().collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[tokio::test]
    async fn keeps_input_order() {
        let out: Result<Vec<u32>, ()> =
            all_or_nothing((1..=4).map(|n| async move { Ok(n * 10) })).await;
        assert_eq!(out.unwrap(), vec![10, 20, 30, 40]);
    }

    #[tokio::test]
    async fn first_error_wins_and_everything_settles() {
        let settled = Cell::new(0);
        let tasks = ["ok", "bad-1", "ok", "bad-2"].map(|tag| {
            let settled = &settled;
            async move {
                settled.set(settled.get() + 1);
                if tag.starts_with("bad") { Err(tag) } else { Ok(tag) }
            }
        });

        let out = all_or_nothing(tasks).await;
        assert_eq!(out, Err("bad-1"));
        assert_eq!(settled.get(), 4);
    }

    #[tokio::test]
    async fn empty_input_is_ok() {
        let out: Result<Vec<u8>, ()> =
            all_or_nothing(std::iter::empty::<std::future::Ready<Result<u8, ()>>>()).await;
        assert_eq!(out, Ok(Vec::new()));
    }
}
