use std::sync::LazyLock;

use chrono::{DateTime, Datelike};
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const PORTFOLIO_FILE: &str = "portfolio.json";

pub static PORTFOLIO: LazyLock<Result<Portfolio, ContentError>> =
    LazyLock::new(|| Portfolio::load(PORTFOLIO_FILE));

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    Missing(String),
    #[error("couldn't parse {file}: {message}")]
    Parse { file: String, message: String },
    #[error("invalid content: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Owner {
    pub name: String,
    pub role: String,
    pub greeting: String,
    pub tagline: String,
    pub email: String,
    pub avatar: String,
    #[serde(default)]
    pub resume: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct About {
    pub paragraphs: Vec<String>,
    pub portrait: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image: String,
    pub tags: Vec<String>,
    pub gradient: String,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub icon: String,
    pub skills: Vec<String>,
    pub gradient: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub owner: Owner,
    pub about: About,
    pub projects: Vec<Project>,
    pub skill_groups: Vec<SkillGroup>,
    pub socials: Vec<SocialLink>,
    pub contact_blurb: String,
}

impl Portfolio {
    pub fn load(file: &str) -> Result<Self, ContentError> {
        let data = Assets::get(file).ok_or_else(|| ContentError::Missing(file.to_string()))?;
        Self::parse(file, &data.data)
    }

    pub fn parse(file: &str, bytes: &[u8]) -> Result<Self, ContentError> {
        let portfolio: Portfolio =
            serde_json::from_slice(bytes).map_err(|e| ContentError::Parse {
                file: file.to_string(),
                message: e.to_string(),
            })?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.owner.name.trim().is_empty() {
            return Err(ContentError::Invalid("owner name is empty".into()));
        }
        if !self.owner.email.contains('@') {
            return Err(ContentError::Invalid(format!(
                "owner email {:?} is not an address",
                self.owner.email
            )));
        }
        if let Some(p) = self.projects.iter().find(|p| p.title.trim().is_empty()) {
            return Err(ContentError::Invalid(format!(
                "project with description {:?} has no title",
                p.description
            )));
        }
        Ok(())
    }
}

/// Year the site was built, for the footer.
pub fn build_year() -> i32 {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.year())
        .unwrap_or(2025)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal(email: &str, title: &str) -> String {
        format!(
            r#"{{
                "owner": {{
                    "name": "Ada",
                    "role": "Engineer",
                    "greeting": "Hello, I'm",
                    "tagline": "Builds things.",
                    "email": "{email}",
                    "avatar": "/me.png"
                }},
                "about": {{ "paragraphs": ["one"], "portrait": "/p.svg" }},
                "projects": [{{
                    "title": "{title}",
                    "description": "d",
                    "image": "/i.svg",
                    "tags": ["Rust"],
                    "gradient": "from-blue-500/20 to-purple-500/20"
                }}],
                "skill_groups": [],
                "socials": [],
                "contact_blurb": "Say hi"
            }}"#
        )
    }

    #[test]
    fn test_embedded_portfolio_loads() {
        let portfolio = PORTFOLIO.as_ref().expect("embedded content should be valid");
        assert!(portfolio.owner.email.contains('@'));
        assert!(!portfolio.projects.is_empty());
        assert!(!portfolio.skill_groups.is_empty());
        assert!(portfolio.socials.iter().all(|s| s.href.starts_with("https://")));
    }

    #[test]
    fn test_parse_minimal() {
        let p = Portfolio::parse("t.json", minimal("ada@example.com", "Engine").as_bytes())
            .expect("should parse");
        assert_eq!(p.owner.resume, None);
        assert!(p.about.highlights.is_empty());
        assert_eq!(p.projects[0].tags, vec!["Rust".to_string()]);
    }

    #[test]
    fn test_invalid_email_rejected() {
        let err = Portfolio::parse("t.json", minimal("nobody", "Engine").as_bytes()).unwrap_err();
        assert!(matches!(err, ContentError::Invalid(_)));
    }

    #[test]
    fn test_untitled_project_rejected() {
        let err = Portfolio::parse("t.json", minimal("a@b.c", " ").as_bytes()).unwrap_err();
        assert!(matches!(err, ContentError::Invalid(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = Portfolio::parse("broken.json", b"{ not json").unwrap_err();
        match err {
            ContentError::Parse { file, .. } => assert_eq!(file, "broken.json"),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = Portfolio::load("nope.json").unwrap_err();
        assert_eq!(err, ContentError::Missing("nope.json".to_string()));
    }

    #[test]
    fn test_build_year_is_sane() {
        assert!(build_year() >= 2025);
    }
}
