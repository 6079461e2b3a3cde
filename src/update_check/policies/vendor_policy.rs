/// A single vendor name pattern, anchored at the start of the package name.
///
/// Pattern specs ending in `*` match any name with that prefix; all other
/// specs match the name exactly. Matching is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
enum VendorPattern {
    Exact(String),
    Prefix(String),
}

impl VendorPattern {
    fn parse(spec: &str) -> Self {
        match spec.strip_suffix('*') {
            Some(prefix) => VendorPattern::Prefix(prefix.to_string()),
            None => VendorPattern::Exact(spec.to_string()),
        }
    }

    fn matches(&self, name: &str) -> bool {
        match self {
            VendorPattern::Exact(pattern) => name == pattern,
            VendorPattern::Prefix(prefix) => name.starts_with(prefix),
        }
    }
}

/// VendorPolicy for flagging driver-stack packages that warrant extra
/// attention before upgrading.
///
/// This policy encodes the business rule for deciding whether a package
/// belongs to the NVIDIA driver stack: the bare driver package, anything in
/// the vendor's namespace, LTS/DKMS build variants, the CUDA toolkit family,
/// 32-bit compatibility libraries, and the settings utility.
///
/// Classification is a pure function of the package name. An empty pattern
/// set disables vendor classification entirely.
#[derive(Debug, Clone)]
pub struct VendorPolicy {
    patterns: Vec<VendorPattern>,
}

/// Default NVIDIA pattern set. `*` marks a prefix match.
const NVIDIA_PATTERNS: &[&str] = &[
    "nvidia",
    "nvidia-*",
    "nvidia-lts",
    "nvidia-dkms",
    "nvidia-utils*",
    "lib32-nvidia-utils*",
    "cuda*",
    "opencl-nvidia*",
    "nvidia-settings*",
];

impl VendorPolicy {
    /// Creates a policy from pattern specs (`*` suffix selects prefix match)
    ///
    /// # Arguments
    /// * `pattern_specs` - Ordered pattern list; an empty list disables
    ///   classification
    pub fn new<S: AsRef<str>>(pattern_specs: &[S]) -> Self {
        Self {
            patterns: pattern_specs
                .iter()
                .map(|spec| VendorPattern::parse(spec.as_ref()))
                .collect(),
        }
    }

    /// A policy that never flags anything
    pub fn disabled() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Returns true if the package name matches any vendor pattern
    ///
    /// Any single match suffices; pattern order only affects early exit,
    /// never the outcome.
    pub fn is_vendor_sensitive(&self, name: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.matches(name))
    }
}

impl Default for VendorPolicy {
    fn default() -> Self {
        Self::new(NVIDIA_PATTERNS)
    }
}
