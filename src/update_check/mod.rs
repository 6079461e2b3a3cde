/// Update-check domain layer - pure types, policies, and parsing
///
/// Nothing in this module performs I/O; sources and presentation live in
/// the adapters layer.
pub mod domain;
pub mod policies;
pub mod services;
