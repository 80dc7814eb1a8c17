use serde::{Deserialize, Serialize};

/// Placeholder shown in human-readable output when no license was detected
pub const UNKNOWN_LICENSE_PLACEHOLDER: &str = "unknown";

/// Evaluation outcome for a single dependency
///
/// Serializes as the lowercase tokens `allowed`, `denied` and `unknown`
/// so machine-readable output does not depend on Rust enum naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Allowed,
    Denied,
    Unknown,
}

impl Outcome {
    pub const ALL: [Outcome; 3] = [Outcome::Allowed, Outcome::Denied, Outcome::Unknown];

    /// Stable string token for this outcome
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Allowed => "allowed",
            Outcome::Denied => "denied",
            Outcome::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// LicenseResult value object: one dependency's license evaluation outcome
///
/// Read-only once built. An empty license string means no license was detected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseResult {
    dependency: String,
    #[serde(default)]
    license: String,
    outcome: Outcome,
}

impl LicenseResult {
    pub fn new(
        dependency: impl Into<String>,
        license: impl Into<String>,
        outcome: Outcome,
    ) -> Self {
        Self {
            dependency: dependency.into(),
            license: license.into(),
            outcome,
        }
    }

    /// Dependency identifier, usually `name@version`
    pub fn dependency(&self) -> &str {
        &self.dependency
    }

    /// Detected license identifier exactly as evaluated (possibly empty)
    pub fn license(&self) -> &str {
        &self.license
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn has_license(&self) -> bool {
        !self.license.trim().is_empty()
    }

    /// License identifier, or `"unknown"` when none was detected
    pub fn license_or_placeholder(&self) -> &str {
        if self.has_license() {
            &self.license
        } else {
            UNKNOWN_LICENSE_PLACEHOLDER
        }
    }
}
