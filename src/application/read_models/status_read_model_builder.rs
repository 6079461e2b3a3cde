use super::status_read_model::{StatusReadModel, UpdateView};
use crate::update_check::domain::{PackageUpdate, UpdateReport};

/// How many entries a tooltip section shows before truncating.
const SECTION_DISPLAY_CAP: usize = 8;

/// StatusReadModelBuilder - converts the per-cycle aggregate into the
/// render-ready read model.
///
/// All tooltip layout rules live here: section ordering, the vendor banner,
/// vendor-first ordering inside the official section, the per-section
/// display cap with its `...and N more` line, and the trailing summary.
pub struct StatusReadModelBuilder;

impl StatusReadModelBuilder {
    /// Builds the read model from a finished report
    pub fn build(report: &UpdateReport) -> StatusReadModel {
        let severity = report.severity();
        let total = report.total();

        StatusReadModel {
            text: format!("{}{}", severity.icon(), total),
            alt: format!("Updates: {}", total),
            tooltip: Self::build_tooltip(report),
            css_class: severity.css_class().to_string(),
            official: Self::build_views(report, report.official()),
            aur: Self::build_views(report, report.aur()),
            total,
        }
    }

    fn build_views(report: &UpdateReport, updates: &[PackageUpdate]) -> Vec<UpdateView> {
        updates
            .iter()
            .map(|update| UpdateView {
                name: update.name().to_string(),
                current_version: update.current_version().to_string(),
                new_version: update.new_version().to_string(),
                vendor_sensitive: report.is_vendor_sensitive(update),
            })
            .collect()
    }

    fn build_tooltip(report: &UpdateReport) -> String {
        let mut lines: Vec<String> = Vec::new();

        if !report.vendor_sensitive().is_empty() {
            lines.push("🚨 NVIDIA DRIVER UPDATES AVAILABLE!".to_string());
            lines.push("Check vendor release notes before proceeding".to_string());
            lines.push(String::new());
        }

        if !report.official().is_empty() {
            lines.push(format!("📦 Official Updates ({}):", report.official().len()));

            // Vendor-sensitive entries first, then the rest in listing order.
            let vendor_first: Vec<&PackageUpdate> = report
                .official()
                .iter()
                .filter(|u| report.is_vendor_sensitive(u))
                .chain(
                    report
                        .official()
                        .iter()
                        .filter(|u| !report.is_vendor_sensitive(u)),
                )
                .collect();

            Self::push_section_entries(&mut lines, &vendor_first, |update| {
                format!(
                    "  • {}: {} -> {}",
                    update.name(),
                    update.current_version(),
                    update.new_version()
                )
            });
        }

        if !report.aur().is_empty() {
            if !lines.is_empty() {
                lines.push(String::new());
            }
            lines.push(format!("🌟 AUR Updates ({}):", report.aur().len()));

            let entries: Vec<&PackageUpdate> = report.aur().iter().collect();
            Self::push_section_entries(&mut lines, &entries, |update| {
                let marker = if report.is_vendor_sensitive(update) {
                    "⚠️"
                } else {
                    "•"
                };
                format!(
                    "  {} {}: {} -> {}",
                    marker,
                    update.name(),
                    update.current_version(),
                    update.new_version()
                )
            });
        }

        if lines.is_empty() {
            lines.push("✅ System is up to date".to_string());
        } else {
            lines.push(String::new());
            lines.push(format!("📊 Total: {} updates", report.total()));
        }

        lines.join("\n")
    }

    /// Appends section entries honoring the display cap; truncation keeps
    /// the first entries in order, never a sample.
    fn push_section_entries<F>(lines: &mut Vec<String>, entries: &[&PackageUpdate], render: F)
    where
        F: Fn(&PackageUpdate) -> String,
    {
        for update in entries.iter().take(SECTION_DISPLAY_CAP) {
            lines.push(render(update));
        }
        if entries.len() > SECTION_DISPLAY_CAP {
            lines.push(format!(
                "  ...and {} more",
                entries.len() - SECTION_DISPLAY_CAP
            ));
        }
    }
}
