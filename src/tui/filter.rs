//! Filter cycling state for the explorer shell.
//!
//! The kind and status filters are both "all plus one variant" choices that
//! the user steps through with a single key. The cycling logic is shared
//! through [`CycleFilter`] so both enums get identical behavior.

use crate::model::{DependencyKind, DependencyStatus};

/// Trait for filter choices that cycle through a fixed set of options.
pub trait CycleFilter: Clone + Copy + Default {
    /// Next choice in the cycle.
    #[must_use]
    fn next(&self) -> Self;

    /// Previous choice in the cycle.
    #[must_use]
    fn prev(&self) -> Self;

    /// Display name for the status line.
    fn display_name(&self) -> &str;
}

/// Cycling state for any [`CycleFilter`] choice.
#[derive(Debug, Clone, Default)]
pub struct FilterState<F: CycleFilter> {
    pub current: F,
}

impl<F: CycleFilter> FilterState<F> {
    pub fn new() -> Self {
        Self {
            current: F::default(),
        }
    }

    pub fn next(&mut self) {
        self.current = self.current.next();
    }

    pub fn prev(&mut self) {
        self.current = self.current.prev();
    }

    pub fn reset(&mut self) {
        self.current = F::default();
    }

    pub fn display_name(&self) -> &str {
        self.current.display_name()
    }
}

/// Kind filter choices: all kinds or exactly one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KindChoice {
    #[default]
    All,
    Direct,
    Dev,
    Peer,
    Optional,
}

impl KindChoice {
    /// Choice matching a criteria restriction. `All` when the restriction is
    /// absent or names a kind the cycle has no entry for.
    #[must_use]
    pub fn from_kind(kind: Option<DependencyKind>) -> Self {
        match kind {
            Some(DependencyKind::Direct) => Self::Direct,
            Some(DependencyKind::Dev) => Self::Dev,
            Some(DependencyKind::Peer) => Self::Peer,
            Some(DependencyKind::Optional) => Self::Optional,
            Some(DependencyKind::Unknown) | None => Self::All,
        }
    }

    /// The model kind this choice restricts to, `None` for "all".
    #[must_use]
    pub fn as_kind(&self) -> Option<DependencyKind> {
        match self {
            Self::All => None,
            Self::Direct => Some(DependencyKind::Direct),
            Self::Dev => Some(DependencyKind::Dev),
            Self::Peer => Some(DependencyKind::Peer),
            Self::Optional => Some(DependencyKind::Optional),
        }
    }
}

impl CycleFilter for KindChoice {
    fn next(&self) -> Self {
        match self {
            Self::All => Self::Direct,
            Self::Direct => Self::Dev,
            Self::Dev => Self::Peer,
            Self::Peer => Self::Optional,
            Self::Optional => Self::All,
        }
    }

    fn prev(&self) -> Self {
        match self {
            Self::All => Self::Optional,
            Self::Direct => Self::All,
            Self::Dev => Self::Direct,
            Self::Peer => Self::Dev,
            Self::Optional => Self::Peer,
        }
    }

    fn display_name(&self) -> &str {
        match self {
            Self::All => "All",
            Self::Direct => "Direct",
            Self::Dev => "Dev",
            Self::Peer => "Peer",
            Self::Optional => "Optional",
        }
    }
}

/// Status filter choices: all statuses or exactly one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusChoice {
    #[default]
    All,
    Active,
    Deprecated,
    SecurityIssue,
    Outdated,
}

impl StatusChoice {
    /// Choice matching a criteria restriction. `All` when the restriction is
    /// absent or names a status the cycle has no entry for.
    #[must_use]
    pub fn from_status(status: Option<DependencyStatus>) -> Self {
        match status {
            Some(DependencyStatus::Active) => Self::Active,
            Some(DependencyStatus::Deprecated) => Self::Deprecated,
            Some(DependencyStatus::SecurityIssue) => Self::SecurityIssue,
            Some(DependencyStatus::Outdated) => Self::Outdated,
            Some(DependencyStatus::Unknown) | None => Self::All,
        }
    }

    /// The model status this choice restricts to, `None` for "all".
    #[must_use]
    pub fn as_status(&self) -> Option<DependencyStatus> {
        match self {
            Self::All => None,
            Self::Active => Some(DependencyStatus::Active),
            Self::Deprecated => Some(DependencyStatus::Deprecated),
            Self::SecurityIssue => Some(DependencyStatus::SecurityIssue),
            Self::Outdated => Some(DependencyStatus::Outdated),
        }
    }
}

impl CycleFilter for StatusChoice {
    fn next(&self) -> Self {
        match self {
            Self::All => Self::Active,
            Self::Active => Self::Deprecated,
            Self::Deprecated => Self::SecurityIssue,
            Self::SecurityIssue => Self::Outdated,
            Self::Outdated => Self::All,
        }
    }

    fn prev(&self) -> Self {
        match self {
            Self::All => Self::Outdated,
            Self::Active => Self::All,
            Self::Deprecated => Self::Active,
            Self::SecurityIssue => Self::Deprecated,
            Self::Outdated => Self::SecurityIssue,
        }
    }

    fn display_name(&self) -> &str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Deprecated => "Deprecated",
            Self::SecurityIssue => "Security",
            Self::Outdated => "Outdated",
        }
    }
}
