//! Static portfolio content.
//!
//! The biography, work history and project list live in
//! `content/portfolio.toml`, embedded at compile time so the site stays a
//! single static bundle.

use serde::Deserialize;

use crate::error::PortfolioError;

const PORTFOLIO_TOML: &str = include_str!("../content/portfolio.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub about: About,
    pub skills: Vec<SkillGroup>,
    pub experience: Vec<Role>,
    #[serde(default)]
    pub education: Vec<Education>,
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub location: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub resume_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct About {
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillGroup {
    pub name: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Role {
    pub company: String,
    pub position: String,
    pub duration: String,
    pub location: String,
    /// Employment type, e.g. "Full-time" or "Internship".
    pub kind: String,
    pub achievements: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub period: String,
    #[serde(default)]
    pub details: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub category: String,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

/// Parse portfolio content from a TOML document.
pub fn load_content(source: &str) -> Result<Portfolio, PortfolioError> {
    let portfolio: Portfolio = toml::from_str(source)?;
    if portfolio.profile.name.trim().is_empty() {
        return Err(PortfolioError::Content("profile.name is empty".to_string()));
    }
    Ok(portfolio)
}

/// The content embedded in the binary.
///
/// # Panics
/// Panics if the embedded TOML is invalid (a build-time bug caught by tests).
pub fn default_content() -> Portfolio {
    load_content(PORTFOLIO_TOML).expect("embedded portfolio.toml must be valid")
}

/// Projects shown in the grid: featured ones only until the visitor asks for all.
pub fn visible_projects(projects: &[Project], show_all: bool) -> Vec<&Project> {
    projects
        .iter()
        .filter(|project| show_all || project.featured)
        .collect()
}
