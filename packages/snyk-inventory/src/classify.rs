//! Maps a project's declared type to the Snyk product that scans it.

use serde::Serialize;

pub const IAC_TYPES: &[&str] = &[
    "terraformconfig",
    "terraformplan",
    "k8sconfig",
    "helmconfig",
    "cloudformationconfig",
    "armconfig",
];

pub const OPEN_SOURCE_TYPES: &[&str] = &[
    "maven",
    "npm",
    "nuget",
    "gradle",
    "pip",
    "yarn",
    "gomodules",
    "rubygems",
    "composer",
    "sbt",
    "golangdep",
    "cocoapods",
    "poetry",
    "govendor",
    "cpp",
    "yarn-workspace",
    "hex",
    "paket",
    "golang",
];

pub const CONTAINER_TYPES: &[&str] = &["dockerfile", "apk", "deb", "rpm", "linux"];

pub const CODE_TYPES: &[&str] = &["sast"];

/// Product category a project is counted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ProductCategory {
    #[serde(rename = "Snyk_IAC")]
    Iac,
    #[serde(rename = "Snyk_OpenSource")]
    OpenSource,
    #[serde(rename = "Snyk_Container")]
    Container,
    #[serde(rename = "Snyk_Code")]
    Code,
}

impl ProductCategory {
    /// Categories in matching order.
    pub const ALL: [ProductCategory; 4] = [
        ProductCategory::Iac,
        ProductCategory::OpenSource,
        ProductCategory::Container,
        ProductCategory::Code,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Iac => "Snyk_IAC",
            ProductCategory::OpenSource => "Snyk_OpenSource",
            ProductCategory::Container => "Snyk_Container",
            ProductCategory::Code => "Snyk_Code",
        }
    }

    /// Project types recognised for this category.
    pub fn project_types(&self) -> &'static [&'static str] {
        match self {
            ProductCategory::Iac => IAC_TYPES,
            ProductCategory::OpenSource => OPEN_SOURCE_TYPES,
            ProductCategory::Container => CONTAINER_TYPES,
            ProductCategory::Code => CODE_TYPES,
        }
    }
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a project type. The first category whose set contains the type
/// wins; unknown types yield `None`.
pub fn classify(project_type: &str) -> Option<ProductCategory> {
    ProductCategory::ALL
        .into_iter()
        .find(|category| category.project_types().iter().any(|t| *t == project_type))
}
