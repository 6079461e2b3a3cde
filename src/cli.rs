use clap::Parser;

use crate::adapters::outbound::formatters::{TextFormatter, WaybarFormatter};
use crate::ports::outbound::StatusFormatter;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Waybar,
    Text,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "waybar" => Ok(OutputFormat::Waybar),
            "text" | "plain" => Ok(OutputFormat::Text),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'waybar' or 'text'",
                s
            )),
        }
    }
}

impl OutputFormat {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Returns
    /// A boxed StatusFormatter trait object appropriate for this format
    pub fn create_formatter(&self) -> Box<dyn StatusFormatter> {
        match self {
            OutputFormat::Waybar => Box::new(WaybarFormatter::new()),
            OutputFormat::Text => Box::new(TextFormatter::new()),
        }
    }
}

/// Report pending pacman and AUR updates for a status bar
#[derive(Parser, Debug)]
#[command(name = "pacbar")]
#[command(version)]
#[command(
    about = "Report pending pacman and AUR updates for a status bar",
    long_about = None
)]
pub struct Args {
    /// Output format: waybar or text (overrides the config file)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Path to a config file (defaults to auto-discovery under
    /// $XDG_CONFIG_HOME/pacbar)
    #[arg(short, long)]
    pub config: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
