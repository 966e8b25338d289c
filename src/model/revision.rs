//! Revision identifiers
//!
//! cvs numbers revisions as dotted integers. Two components (`1.3`) sit on
//! the trunk; every further pair of components (`1.3.2.2`) descends into a
//! branch rooted at the revision named by the leading components.

use std::fmt;

/// Dotted numeric revision identifier (`1.3`, `1.3.2.2`, `1.3.20.2.2.1`)
///
/// The text is kept verbatim; structural queries fail soft on malformed ids
/// instead of rejecting them up front.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct RevisionId(String);

impl RevisionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Exactly two numeric components, e.g. `1.3`
    pub fn is_trunk_root(&self) -> bool {
        let mut parts = self.0.split('.');
        matches!(
            (parts.next(), parts.next(), parts.next()),
            (Some(a), Some(b), None) if is_number(a) && is_number(b)
        )
    }

    /// Revision the branch containing this one sprouted from
    ///
    /// Drops the last two components: `1.3.2.2` -> `1.3`,
    /// `1.3.2.2.2.1` -> `1.3.2.2`. Trunk roots have no branch point, and
    /// neither does anything too short to truncate.
    pub fn branch_point(&self) -> Option<RevisionId> {
        if self.is_trunk_root() {
            return None;
        }
        let last = self.0.rfind('.')?;
        let second_last = self.0[..last].rfind('.')?;
        let parent = &self.0[..second_last];
        if parent.is_empty() {
            None
        } else {
            Some(RevisionId::new(parent))
        }
    }

    /// Revision to diff against when showing what this revision changed
    ///
    /// - `1.7` -> `1.6`, `1.3.2.2` -> `1.3.2.1` (same line, one step back)
    /// - `1.3.2.1` -> `1.3` (first on a branch: the branch point)
    /// - `1.1` -> none (start of history)
    pub fn predecessor(&self) -> Option<RevisionId> {
        let dot = self.0.rfind('.')?;
        let (prefix, last) = self.0.split_at(dot + 1);
        let number: u64 = last.parse().ok()?;
        match number {
            0 => None,
            1 => self.branch_point(),
            n => Some(RevisionId::new(format!("{}{}", prefix, n - 1))),
        }
    }
}

fn is_number(part: &str) -> bool {
    !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit())
}

impl fmt::Display for RevisionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RevisionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl AsRef<str> for RevisionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
