//! The project-idea catalog
//!
//! A static table of future projects, each with the language its starter
//! code targets and a one-line summary. The catalog is the whole input to
//! the generator - there is no discovery step.

use anyhow::bail;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Target kind of a scaffolded project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectKind {
    Python,
    Node,
    GithubAction,
}

impl ProjectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectKind::Python => "python",
            ProjectKind::Node => "node",
            ProjectKind::GithubAction => "github-action",
        }
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "python" => Ok(ProjectKind::Python),
            "node" => Ok(ProjectKind::Node),
            "github-action" => Ok(ProjectKind::GithubAction),
            other => bail!("Unknown project kind: {}", other),
        }
    }
}

/// A catalog entry
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProjectIdea {
    /// Directory name, kebab-case
    pub name: &'static str,
    /// Target kind (decides the file set)
    pub kind: ProjectKind,
    /// One-line summary shown in listings
    pub summary: &'static str,
}

impl ProjectIdea {
    const fn new(name: &'static str, kind: ProjectKind, summary: &'static str) -> Self {
        Self {
            name,
            kind,
            summary,
        }
    }

    /// Human-readable title: "repo-health-monitor" -> "Repo Health Monitor"
    pub fn title(&self) -> String {
        self.name
            .split('-')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// All project ideas, in generation order
pub const CATALOG: &[ProjectIdea] = &[
    ProjectIdea::new(
        "automated-compliance-reporter",
        ProjectKind::Python,
        "Generate compliance reports from repository audit data",
    ),
    ProjectIdea::new(
        "ci-cd-workflow-enhancer",
        ProjectKind::GithubAction,
        "Reusable workflow improvements for CI/CD pipelines",
    ),
    ProjectIdea::new(
        "env-var-sync-tool",
        ProjectKind::Python,
        "Keep GitHub Actions secrets in sync with local env files",
    ),
    ProjectIdea::new(
        "iot-device-status-dashboard",
        ProjectKind::Node,
        "Dashboard surfacing IoT device status via repository issues",
    ),
    ProjectIdea::new(
        "firmware-release-manager",
        ProjectKind::Python,
        "Automate firmware release tagging and asset uploads",
    ),
    ProjectIdea::new(
        "home-automation-config-sync",
        ProjectKind::Node,
        "Sync home-automation configs to a versioned repository",
    ),
    ProjectIdea::new(
        "github-issue-bot",
        ProjectKind::Python,
        "Triage and label incoming issues automatically",
    ),
    ProjectIdea::new(
        "pr-reviewer-assistant",
        ProjectKind::Node,
        "First-pass review comments on pull requests",
    ),
    ProjectIdea::new(
        "repo-health-monitor",
        ProjectKind::Python,
        "Track stale branches, open PR age, and issue backlog",
    ),
    ProjectIdea::new(
        "secret-scanner-integration",
        ProjectKind::Python,
        "Wire secret-scanning alerts into team notifications",
    ),
    ProjectIdea::new(
        "audit-trail-generator",
        ProjectKind::Python,
        "Build an audit trail from repository event history",
    ),
    ProjectIdea::new(
        "encrypted-backup-sync",
        ProjectKind::Python,
        "Encrypted off-site backups of repository contents",
    ),
];

/// Look up a catalog entry by exact name
pub fn find(name: &str) -> Option<&'static ProjectIdea> {
    CATALOG.iter().find(|idea| idea.name == name)
}
