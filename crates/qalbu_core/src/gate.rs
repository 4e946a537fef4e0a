//! Access approval gate.
//!
//! New accounts start as `pending` and are approved manually; the app only
//! runs its mood flow for approved users.

use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalStatus {
    Pending,
    Approved,
}

impl ApprovalStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
        }
    }

    pub fn is_approved(self) -> bool {
        matches!(self, Self::Approved)
    }
}

impl Display for ApprovalStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// External signal deciding whether the current user may use the app.
pub trait AccessGate {
    fn approval_status(&self) -> ApprovalStatus;
}

impl<T: AccessGate + ?Sized> AccessGate for &T {
    fn approval_status(&self) -> ApprovalStatus {
        (**self).approval_status()
    }
}

/// Gate with a fixed answer. `StaticAccessGate::demo()` is used when no
/// auth backend is configured.
#[derive(Debug, Clone, Copy)]
pub struct StaticAccessGate(pub ApprovalStatus);

impl StaticAccessGate {
    pub fn demo() -> Self {
        Self(ApprovalStatus::Approved)
    }
}

impl AccessGate for StaticAccessGate {
    fn approval_status(&self) -> ApprovalStatus {
        self.0
    }
}
