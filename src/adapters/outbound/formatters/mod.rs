mod text_formatter;
mod waybar_formatter;

pub use text_formatter::TextFormatter;
pub use waybar_formatter::WaybarFormatter;
