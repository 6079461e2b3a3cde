pub mod package_update;
pub mod report;

pub use package_update::{Origin, PackageName, PackageUpdate, Version};
pub use report::{Severity, UpdateReport};
