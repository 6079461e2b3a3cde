mod command_source;

pub use command_source::CommandUpdateSource;
