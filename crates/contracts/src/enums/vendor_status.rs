use serde::{Deserialize, Serialize};

/// Progress of the work handed to a vendor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VendorStatus {
    YetToStart,
    PendingWithClient,
    PendingWithVendor,
    Blocked,
    Completed,
}

impl VendorStatus {
    pub fn code(&self) -> &'static str {
        match self {
            VendorStatus::YetToStart => "yet-to-start",
            VendorStatus::PendingWithClient => "pending-with-client",
            VendorStatus::PendingWithVendor => "pending-with-vendor",
            VendorStatus::Blocked => "blocked",
            VendorStatus::Completed => "completed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            VendorStatus::YetToStart => "Yet to start",
            VendorStatus::PendingWithClient => "Pending with client",
            VendorStatus::PendingWithVendor => "Pending with vendor",
            VendorStatus::Blocked => "Blocked",
            VendorStatus::Completed => "Completed",
        }
    }

    pub fn all() -> Vec<VendorStatus> {
        vec![
            VendorStatus::YetToStart,
            VendorStatus::PendingWithClient,
            VendorStatus::PendingWithVendor,
            VendorStatus::Blocked,
            VendorStatus::Completed,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }
}

impl std::fmt::Display for VendorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
