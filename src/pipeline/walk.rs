//! Common page loop: fetch with the current token, process into (next token, items), repeat until no token.

/// Walk every page of one list endpoint, appending items to `sink` in page order.
///
/// `fetch` receives `None` for the first page and the previous page's token after that.
/// `process` turns one raw response into `(next_token, items)`; a `None` or empty token ends the walk.
/// Returns the number of pages processed.
///
/// On error the walk stops immediately. Items from pages processed before the failure are
/// already in `sink`; whether to keep them is the caller's decision.
pub fn walk_pages<R, T, E, F, P>(
    mut fetch: F,
    mut process: P,
    sink: &mut Vec<T>,
) -> Result<usize, E>
where
    F: FnMut(Option<&str>) -> Result<R, E>,
    P: FnMut(R) -> Result<(Option<String>, Vec<T>), E>,
{
    let mut token: Option<String> = None;
    let mut pages = 0_usize;
    loop {
        let raw = fetch(token.as_deref())?;
        let (next, items) = process(raw)?;
        pages += 1;
        sink.extend(items);
        match next.filter(|t| !t.is_empty()) {
            Some(t) => token = Some(t),
            None => break,
        }
    }
    Ok(pages)
}

/// [`walk_pages`] into a fresh Vec. Partial results are dropped on error.
pub fn collect_pages<R, T, E, F, P>(fetch: F, process: P) -> Result<Vec<T>, E>
where
    F: FnMut(Option<&str>) -> Result<R, E>,
    P: FnMut(R) -> Result<(Option<String>, Vec<T>), E>,
{
    let mut items = Vec::new();
    walk_pages(fetch, process, &mut items)?;
    Ok(items)
}
