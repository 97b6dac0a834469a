/// Resolve a row limit: the command's own `--limit`, then the global flag,
/// then the configured default.
#[must_use]
pub fn effective_limit(local: Option<u32>, global: Option<u32>, fallback: u32) -> usize {
    let limit = local.or(global).unwrap_or(fallback);
    usize::try_from(limit).unwrap_or(usize::MAX)
}

/// Keep at most `limit` items.
pub fn truncate<T>(mut items: Vec<T>, limit: usize) -> Vec<T> {
    items.truncate(limit);
    items
}
