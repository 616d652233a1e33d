//! Configuration types for the tree walker

/// What to do when an entry cannot be read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Stop the whole walk at the first inaccessible entry.
    #[default]
    FailFast,
    /// Log and collect errors, keep walking the remaining entries.
    KeepGoing,
}

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Deepest level to print, where the root's children are level 0.
    /// `None` walks the whole tree.
    pub max_depth: Option<usize>,
    pub error_policy: ErrorPolicy,
}

impl WalkerConfig {
    /// Interpret a command-line depth, where any negative value means unlimited.
    pub fn depth_limit(max_depth: i64) -> Option<usize> {
        usize::try_from(max_depth).ok()
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn keep_going(mut self) -> Self {
        self.error_policy = ErrorPolicy::KeepGoing;
        self
    }
}
