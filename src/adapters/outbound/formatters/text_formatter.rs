use crate::application::read_models::{StatusReadModel, UpdateView};
use crate::ports::outbound::StatusFormatter;
use crate::shared::Result;
use owo_colors::OwoColorize;

/// TextFormatter adapter for a human-readable terminal listing
///
/// This adapter implements the StatusFormatter port for running the tool
/// by hand: every update is listed (no display cap), grouped by origin,
/// with per-origin counts in the footer.
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    fn push_section(lines: &mut Vec<String>, header: &str, updates: &[UpdateView]) {
        if updates.is_empty() {
            return;
        }
        lines.push(format!("{}", header.bold()));
        for update in updates {
            let entry = format!(
                "  {}: {} → {}",
                update.name, update.current_version, update.new_version
            );
            if update.vendor_sensitive {
                lines.push(format!("{} {}", entry.yellow(), "(NVIDIA)".yellow().bold()));
            } else {
                lines.push(entry);
            }
        }
        lines.push(String::new());
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusFormatter for TextFormatter {
    fn format(&self, model: &StatusReadModel) -> Result<String> {
        if model.total == 0 {
            return Ok(format!("{}", "✅ System is up to date".green()));
        }

        let mut lines: Vec<String> = Vec::new();
        Self::push_section(&mut lines, "Official Repository Updates:", &model.official);
        Self::push_section(&mut lines, "AUR Updates:", &model.aur);

        lines.push(format!(
            "Total updates available: {}",
            model.total.to_string().bold()
        ));
        lines.push(format!("  - Official: {}", model.official.len()));
        lines.push(format!("  - AUR: {}", model.aur.len()));

        Ok(lines.join("\n"))
    }
}
