mod update_parser;

pub use update_parser::UpdateListingParser;
