use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    Github,
    Itch,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLink {
    #[serde(rename = "type")]
    pub link_type: LinkType,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub thumbnail: String,
    pub links: Vec<ProjectLink>,
}

impl Project {
    pub fn link_url(&self, link_type: LinkType) -> Option<&str> {
        self.links
            .iter()
            .find(|l| l.link_type == link_type)
            .map(|l| l.url.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    pub introduction: String,
    pub background: String,
    pub skills: Vec<String>,
    pub what_drives_me: String,
    pub left_images: Vec<String>,
    pub right_images: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub github: String,
    pub itch: String,
    pub linktree: String,
    pub linkedin: String,
}

/// Lower-cases a display name and replaces whitespace runs with hyphens,
/// giving the filesystem-safe form used for thumbnail filenames.
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}
