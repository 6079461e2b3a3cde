use crate::application::read_models::StatusReadModel;
use crate::ports::outbound::StatusFormatter;
use crate::shared::Result;
use serde::Serialize;

/// Waybar custom-module payload.
///
/// Waybar reads exactly one JSON object per invocation from stdout; the
/// tooltip is a single string with embedded newlines.
#[derive(Debug, Serialize)]
struct WaybarPayload<'a> {
    text: &'a str,
    alt: &'a str,
    tooltip: &'a str,
    class: &'a str,
}

/// WaybarFormatter adapter for the status-bar JSON payload
///
/// This adapter implements the StatusFormatter port for waybar's
/// `custom` module format.
pub struct WaybarFormatter;

impl WaybarFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WaybarFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusFormatter for WaybarFormatter {
    fn format(&self, model: &StatusReadModel) -> Result<String> {
        let payload = WaybarPayload {
            text: &model.text,
            alt: &model.alt,
            tooltip: &model.tooltip,
            class: &model.css_class,
        };
        Ok(serde_json::to_string(&payload)?)
    }
}
