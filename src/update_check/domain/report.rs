use crate::update_check::domain::{Origin, PackageUpdate};
use crate::update_check::policies::VendorPolicy;

/// Severity of a report, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// At least one vendor-sensitive update is pending
    VendorWarning,
    /// Updates are pending, none vendor-sensitive
    HasUpdates,
    /// Nothing to report
    NoUpdates,
}

impl Severity {
    /// Status icon shown in the bar
    pub fn icon(&self) -> &'static str {
        match self {
            Severity::VendorWarning => "⚠️",
            Severity::HasUpdates => "🔄",
            Severity::NoUpdates => "✅",
        }
    }

    /// CSS class consumed by the status-bar stylesheet
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::VendorWarning => "vendor-warning",
            Severity::HasUpdates => "has-updates",
            Severity::NoUpdates => "no-updates",
        }
    }
}

/// Per-cycle aggregate of everything both sources reported.
///
/// Constructed fresh each reporting cycle and passed by ownership through
/// the pipeline; nothing is retained across cycles. Records are appended in
/// discovery order (official source first) and never mutated afterwards.
#[derive(Debug, Default)]
pub struct UpdateReport {
    official: Vec<PackageUpdate>,
    aur: Vec<PackageUpdate>,
    vendor_sensitive: Vec<PackageUpdate>,
}

impl UpdateReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record to its origin sequence, classifying it on the way in.
    ///
    /// Vendor-sensitive records are also tracked in a separate sequence that
    /// preserves discovery order across both sources. A name already present
    /// there is not added twice.
    pub fn append(&mut self, update: PackageUpdate, policy: &VendorPolicy) {
        if policy.is_vendor_sensitive(update.name())
            && !self
                .vendor_sensitive
                .iter()
                .any(|existing| existing.name() == update.name())
        {
            self.vendor_sensitive.push(update.clone());
        }

        match update.origin() {
            Origin::Official => self.official.push(update),
            Origin::Aur => self.aur.push(update),
        }
    }

    pub fn official(&self) -> &[PackageUpdate] {
        &self.official
    }

    pub fn aur(&self) -> &[PackageUpdate] {
        &self.aur
    }

    pub fn vendor_sensitive(&self) -> &[PackageUpdate] {
        &self.vendor_sensitive
    }

    /// True if the record is one of the vendor-sensitive ones
    pub fn is_vendor_sensitive(&self, update: &PackageUpdate) -> bool {
        self.vendor_sensitive
            .iter()
            .any(|existing| existing.name() == update.name())
    }

    pub fn total(&self) -> usize {
        self.official.len() + self.aur.len()
    }

    /// Severity selection: vendor warning beats pending updates beats clean.
    pub fn severity(&self) -> Severity {
        if !self.vendor_sensitive.is_empty() {
            Severity::VendorWarning
        } else if self.total() > 0 {
            Severity::HasUpdates
        } else {
            Severity::NoUpdates
        }
    }
}
