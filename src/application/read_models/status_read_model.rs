//! Status read model for the formatters
//!
//! This module provides a denormalized, render-ready view of one reporting
//! cycle: the payload fields the status bar consumes plus the full
//! per-origin update lists for the plain-text formatter.

/// View representation of a single pending update
#[derive(Debug, Clone)]
pub struct UpdateView {
    pub name: String,
    pub current_version: String,
    pub new_version: String,
    pub vendor_sensitive: bool,
}

/// Render-ready view of one reporting cycle
#[derive(Debug, Clone)]
pub struct StatusReadModel {
    /// Compact bar text: icon followed by the total count
    pub text: String,
    /// Alternative text: "Updates: N"
    pub alt: String,
    /// Multi-line tooltip, sections bounded and ordered
    pub tooltip: String,
    /// CSS class for the bar stylesheet
    pub css_class: String,
    /// All official updates, in listing order
    pub official: Vec<UpdateView>,
    /// All AUR updates, in listing order
    pub aur: Vec<UpdateView>,
    /// Combined update count
    pub total: usize,
}
