//! Cursor-following collection of paginated ledger queries

use std::future::Future;

use swapgraph_core::{Cursor, EdgeFilter, LedgerError, Page, PoolEdge};

use crate::{LedgerQuery, Result};

/// Fetch every page of a remote query into one sequence.
///
/// Starts with no cursor and follows `end_cursor` until a page reports
/// `has_next_page = false`. Records keep page order, then in-page order.
/// Any failed page fails the whole collection.
///
/// At most `max_pages` pages are requested; a backend that keeps
/// reporting more pages past that yields `PaginationLimitExceeded`.
pub async fn collect_all_pages<T, F, Fut>(
    page_size: u32,
    max_pages: usize,
    mut fetch: F,
) -> Result<Vec<T>>
where
    F: FnMut(Option<Cursor>, u32) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    let mut records = Vec::new();
    let mut after: Option<Cursor> = None;
    let mut pages = 0usize;

    loop {
        if pages >= max_pages {
            tracing::warn!(
                max_pages,
                collected = records.len(),
                "Pagination limit reached, aborting query"
            );
            return Err(LedgerError::PaginationLimitExceeded { max_pages });
        }

        let page = fetch(after.take(), page_size).await?;
        pages += 1;

        tracing::debug!(
            page = pages,
            records = page.data.len(),
            has_next = page.page_info.has_next_page,
            "Fetched page"
        );

        records.extend(page.data);

        if !page.page_info.has_next_page {
            break;
        }
        after = Some(page.page_info.end_cursor.ok_or(LedgerError::MissingCursor)?);
    }

    tracing::debug!(pages, records = records.len(), "Pagination complete");
    Ok(records)
}

/// Collect every pool edge matching `filter`
pub async fn collect_edges(
    ledger: &dyn LedgerQuery,
    filter: EdgeFilter,
    page_size: u32,
    max_pages: usize,
) -> Result<Vec<PoolEdge>> {
    collect_all_pages(page_size, max_pages, move |after, first| {
        ledger.query_edges(filter, after, first)
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Serve `total` records split into pages of the requested size.
    /// Cursors are the decimal offset of the next record.
    async fn serve(total: u32, after: Option<Cursor>, first: u32) -> Result<Page<u32>> {
        let start: u32 = match after {
            Some(c) => c.as_str().parse().expect("numeric cursor"),
            None => 0,
        };
        let end = (start + first).min(total);
        let data: Vec<u32> = (start..end).collect();
        if end < total {
            Ok(Page::with_next(data, Cursor::new(end.to_string())))
        } else {
            Ok(Page::last(data))
        }
    }

    #[tokio::test]
    async fn test_collects_every_record_in_order() {
        for page_size in [1, 3, 10, 25, 100] {
            let records = collect_all_pages(page_size, 1000, |after, first| serve(25, after, first))
                .await
                .unwrap();
            assert_eq!(records, (0..25).collect::<Vec<u32>>(), "page_size={}", page_size);
        }
    }

    #[tokio::test]
    async fn test_first_request_has_no_cursor() {
        let seen = RefCell::new(Vec::new());
        collect_all_pages(10, 1000, |after, first| {
            seen.borrow_mut().push(after.clone());
            serve(25, after, first)
        })
        .await
        .unwrap();

        let seen = seen.into_inner();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0], None);
        assert_eq!(seen[1], Some(Cursor::new("10")));
        assert_eq!(seen[2], Some(Cursor::new("20")));
    }

    #[tokio::test]
    async fn test_empty_first_page() {
        let records = collect_all_pages(10, 1000, |after, first| serve(0, after, first))
            .await
            .unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_failed_page_fails_collection() {
        let mut calls = 0;
        let result = collect_all_pages(10, 1000, |after, first| {
            calls += 1;
            let fail = calls == 2;
            async move {
                if fail {
                    Err(LedgerError::ApiError {
                        message: "boom".into(),
                    })
                } else {
                    serve(25, after, first).await
                }
            }
        })
        .await;

        assert!(matches!(result, Err(LedgerError::ApiError { .. })));
    }

    #[tokio::test]
    async fn test_endless_backend_hits_page_limit() {
        let result: Result<Vec<u32>> = collect_all_pages(10, 5, |_after, _first| async {
            Ok(Page::with_next(vec![1], Cursor::new("again")))
        })
        .await;

        assert!(matches!(
            result,
            Err(LedgerError::PaginationLimitExceeded { max_pages: 5 })
        ));
    }

    #[tokio::test]
    async fn test_exactly_max_pages_succeeds() {
        let records = collect_all_pages(10, 3, |after, first| serve(30, after, first))
            .await
            .unwrap();
        assert_eq!(records.len(), 30);
    }

    #[tokio::test]
    async fn test_missing_cursor_is_error() {
        let result: Result<Vec<u32>> = collect_all_pages(10, 100, |_after, _first| async {
            Ok(Page {
                data: vec![1, 2],
                page_info: swapgraph_core::PageInfo {
                    has_next_page: true,
                    end_cursor: None,
                },
            })
        })
        .await;

        assert!(matches!(result, Err(LedgerError::MissingCursor)));
    }
}
