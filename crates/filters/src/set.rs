use std::sync::Arc;

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

use crate::MaskError;

#[derive(Debug, Default)]
struct MaskSetInner {
    include: Option<GlobSet>,
    exclude: Option<GlobSet>,
}

/// Compiled, immutable include/exclude mask lists.
///
/// Masks match **leaf names only** with case-insensitive glob semantics. An
/// empty include list admits every name; a name matching any exclude mask is
/// rejected regardless of the include list.
///
/// `MaskSet` is cheaply cloneable (the compiled matchers sit behind an
/// [`Arc`]), so the walker can hand one set to every recursion level without
/// recompiling.
///
/// # Examples
///
/// ```
/// use filters::MaskSet;
///
/// let set = MaskSet::new(["*.csv", "*.tsv"], ["backup-*"]).unwrap();
/// assert!(set.allows("Report.CSV"));
/// assert!(!set.allows("backup-2024.csv"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct MaskSet {
    inner: Arc<MaskSetInner>,
}

impl MaskSet {
    /// Compiles the supplied include and exclude masks.
    ///
    /// # Errors
    ///
    /// Returns [`MaskError`] for the first pattern that is not a valid glob.
    pub fn new<I, E>(include: I, exclude: E) -> Result<Self, MaskError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        Ok(Self {
            inner: Arc::new(MaskSetInner {
                include: compile(include)?,
                exclude: compile(exclude)?,
            }),
        })
    }

    /// A set with no masks at all; allows every name.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns `true` when the set contains no include and no exclude masks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.include.is_none() && self.inner.exclude.is_none()
    }

    /// Decides whether `name` survives the include and exclude lists.
    ///
    /// `name` must be a leaf name; callers strip any directory component
    /// before asking.
    #[must_use]
    pub fn allows(&self, name: &str) -> bool {
        if let Some(exclude) = &self.inner.exclude {
            if exclude.is_match(name) {
                return false;
            }
        }
        match &self.inner.include {
            Some(include) => include.is_match(name),
            None => true,
        }
    }
}

/// Compiles a mask list into a matcher, or `None` when the list is empty.
fn compile<I>(patterns: I) -> Result<Option<GlobSet>, MaskError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut builder = GlobSetBuilder::new();
    let mut any = false;
    for pattern in patterns {
        let pattern = pattern.as_ref();
        let glob = GlobBuilder::new(pattern)
            .case_insensitive(true)
            .backslash_escape(true)
            .build()
            .map_err(|source| MaskError::new(pattern.to_owned(), source))?;
        builder.add(glob);
        any = true;
    }
    if !any {
        return Ok(None);
    }
    let set = builder
        .build()
        .map_err(|source| MaskError::new(String::new(), source))?;
    Ok(Some(set))
}
