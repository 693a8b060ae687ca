use crate::error::ConfigError;

/// Position of `index` inside a pool of `len` entries.
fn wrap(index: u64, len: usize) -> usize {
    let len_u64 = u64::try_from(len).unwrap_or(u64::MAX);
    let offset = index.checked_rem(len_u64).unwrap_or(0);
    usize::try_from(offset).unwrap_or(0)
}

/// Returns the element at `index mod pool.len()`.
///
/// # Errors
///
/// Returns [`ConfigError::EmptyPool`] when `pool` is empty.
pub fn sample(index: u64, pool: &[String]) -> Result<&str, ConfigError> {
    if pool.is_empty() {
        return Err(ConfigError::EmptyPool);
    }
    pool.get(wrap(index, pool.len()))
        .map(String::as_str)
        .ok_or(ConfigError::EmptyPool)
}

/// Returns `count` consecutive elements starting at `index mod pool.len()`,
/// wrapping past the end of the pool.
///
/// # Errors
///
/// Returns [`ConfigError::EmptyPool`] when `pool` is empty.
pub fn window(index: u64, count: usize, pool: &[String]) -> Result<Vec<String>, ConfigError> {
    if pool.is_empty() {
        return Err(ConfigError::EmptyPool);
    }
    let start = wrap(index, pool.len());
    Ok(pool
        .iter()
        .cycle()
        .skip(start)
        .take(count)
        .cloned()
        .collect())
}

/// Non-empty ordered pool of text fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPool {
    items: Vec<String>,
}

impl TextPool {
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyPool`] when `items` is empty.
    pub fn new(items: Vec<String>) -> Result<Self, ConfigError> {
        if items.is_empty() {
            return Err(ConfigError::EmptyPool);
        }
        Ok(Self { items })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // `items` is never empty, so the slice helpers cannot fail here.
    #[must_use]
    pub fn sample(&self, index: u64) -> &str {
        sample(index, &self.items).unwrap_or_default()
    }

    #[must_use]
    pub fn window(&self, index: u64, count: usize) -> Vec<String> {
        window(index, count, &self.items).unwrap_or_default()
    }
}

/// Query and passage pools for one run.
///
/// Queries fill the `query`/`text` slot of every task; passages fill the
/// rerank candidate window. Both may be the same pool.
#[derive(Debug, Clone)]
pub struct Sampler {
    queries: TextPool,
    passages: TextPool,
}

impl Sampler {
    #[must_use]
    pub const fn new(queries: TextPool, passages: TextPool) -> Self {
        Self { queries, passages }
    }

    /// Uses one pool for both queries and passages.
    #[must_use]
    pub fn single(pool: TextPool) -> Self {
        Self {
            queries: pool.clone(),
            passages: pool,
        }
    }

    #[must_use]
    pub fn query(&self, index: u64) -> &str {
        self.queries.sample(index)
    }

    #[must_use]
    pub fn passages(&self, index: u64, count: usize) -> Vec<String> {
        self.passages.window(index, count)
    }
}
