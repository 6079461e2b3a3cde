use crate::shared::Result;

/// Maximum length for package names (security limit)
const MAX_PACKAGE_NAME_LENGTH: usize = 255;

/// Maximum length for package versions (security limit)
const MAX_VERSION_LENGTH: usize = 100;

/// Which update listing a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// The official, distro-curated repositories (pacman)
    Official,
    /// The user-contributed repository, via a build helper (yay)
    Aur,
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Origin::Official => write!(f, "official"),
            Origin::Aur => write!(f, "AUR"),
        }
    }
}

/// NewType wrapper for package name with validation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: String) -> Result<Self> {
        if name.is_empty() {
            anyhow::bail!("Package name cannot be empty");
        }

        // Security: Length limit to prevent DoS through pathological command output
        if name.len() > MAX_PACKAGE_NAME_LENGTH {
            anyhow::bail!(
                "Package name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_PACKAGE_NAME_LENGTH
            );
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// NewType wrapper for package version with validation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version(String);

impl Version {
    pub fn new(version: String) -> Result<Self> {
        if version.is_empty() {
            anyhow::bail!("Package version cannot be empty");
        }

        // Security: Length limit to prevent DoS through pathological command output
        if version.len() > MAX_VERSION_LENGTH {
            anyhow::bail!(
                "Package version is too long ({} bytes). Maximum allowed: {} bytes",
                version.len(),
                MAX_VERSION_LENGTH
            );
        }

        Ok(Self(version))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One pending package update, immutable once constructed.
///
/// A record exists only for listing lines that match the four-token
/// `name current -> new` shape; everything else is skipped at parse time.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageUpdate {
    name: PackageName,
    current: Version,
    new: Version,
    origin: Origin,
}

impl PackageUpdate {
    pub fn new(name: String, current: String, new: String, origin: Origin) -> Result<Self> {
        Ok(Self {
            name: PackageName::new(name)?,
            current: Version::new(current)?,
            new: Version::new(new)?,
            origin,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn current_version(&self) -> &str {
        self.current.as_str()
    }

    pub fn new_version(&self) -> &str {
        self.new.as_str()
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }
}
