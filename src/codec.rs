//! Conversion between domain records and the generated TypeScript data
//! modules consumed by the published site.
//!
//! Encoding produces the whole file: fixed type-declaration boilerplate
//! followed by the record literal. Decoding locates the declaration marker,
//! slices out the literal and parses it as JSON. There is no partial
//! recovery: a missing marker or unparseable literal decodes to nothing.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::error;

use crate::models::{AboutContent, Project, SocialLinks};

const PROJECTS_MARKER: &str = "export const projects: Project[] = ";
const ABOUT_MARKER: &str = "export const aboutContent: AboutContent = ";
const SOCIAL_MARKER: &str = "export const socialLinks: SocialLinks = ";

const PROJECTS_HEADER: &str = "export interface ProjectLink {
  type: 'github' | 'itch';
  url: string;
}

export interface Project {
  name: string;
  description: string;
  thumbnail: string;
  links: ProjectLink[];
}

";

pub fn encode_projects(projects: &[Project]) -> String {
    format!(
        "{PROJECTS_HEADER}{PROJECTS_MARKER}{};\n",
        to_pretty_json(projects)
    )
}

/// Extracts and parses the project array from a generated projects module.
/// Returns an empty collection if the marker is absent or the literal does
/// not parse; both cases are logged, neither is a hard failure.
pub fn decode_projects(source: &str) -> Vec<Project> {
    extract_literal(source, PROJECTS_MARKER, ']').unwrap_or_default()
}

pub fn encode_about(about: &AboutContent) -> String {
    format!(
        "import {{ AboutContent }} from './types';\n\n{ABOUT_MARKER}{};\n",
        to_pretty_json(about)
    )
}

pub fn decode_about(source: &str) -> Option<AboutContent> {
    extract_literal(source, ABOUT_MARKER, '}')
}

pub fn encode_social(social: &SocialLinks) -> String {
    format!(
        "import {{ SocialLinks }} from './types';\n\n{SOCIAL_MARKER}{};\n",
        to_pretty_json(social)
    )
}

pub fn decode_social(source: &str) -> Option<SocialLinks> {
    extract_literal(source, SOCIAL_MARKER, '}')
}

fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> String {
    // Record types serialize to plain strings, arrays and maps only.
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".to_string())
}

/// Slices the literal between `marker` and the last `closer` character and
/// parses it. The closer is searched from the end so nested brackets inside
/// the literal cannot cut it short.
fn extract_literal<T: DeserializeOwned>(source: &str, marker: &str, closer: char) -> Option<T> {
    let start = match source.find(marker) {
        Some(idx) => idx + marker.len(),
        None => {
            error!("declaration marker {marker:?} not found in data file");
            return None;
        }
    };

    let rest = &source[start..];
    let end = match rest.rfind(closer) {
        Some(idx) => idx + closer.len_utf8(),
        None => {
            error!("unterminated literal after marker {marker:?}");
            return None;
        }
    };

    match serde_json::from_str(&rest[..end]) {
        Ok(value) => Some(value),
        Err(e) => {
            error!("failed to parse data file literal: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LinkType, ProjectLink};

    fn sample_projects() -> Vec<Project> {
        vec![
            Project {
                name: "Foo Game".into(),
                description: "A game about foo".into(),
                thumbnail: "/thumbnails/foo-game.png".into(),
                links: vec![
                    ProjectLink {
                        link_type: LinkType::Github,
                        url: "https://github.com/x/foo".into(),
                    },
                    ProjectLink {
                        link_type: LinkType::Itch,
                        url: "https://x.itch.io/foo".into(),
                    },
                ],
            },
            Project {
                name: "Bar".into(),
                description: "Bar [with] brackets".into(),
                thumbnail: "/thumbnails/bar.png".into(),
                links: vec![],
            },
        ]
    }

    #[test]
    fn projects_round_trip_exactly() {
        let projects = sample_projects();
        assert_eq!(decode_projects(&encode_projects(&projects)), projects);
    }

    #[test]
    fn empty_collection_round_trips() {
        assert_eq!(decode_projects(&encode_projects(&[])), vec![]);
    }

    #[test]
    fn missing_marker_decodes_to_empty() {
        assert_eq!(decode_projects("export const other = [];"), vec![]);
        assert_eq!(decode_projects(""), vec![]);
    }

    #[test]
    fn malformed_literal_decodes_to_empty() {
        let source = format!("{PROJECTS_MARKER}[{{ not json ]");
        assert_eq!(decode_projects(&source), vec![]);
    }

    #[test]
    fn encoded_projects_include_type_declarations() {
        let out = encode_projects(&sample_projects());
        assert!(out.starts_with("export interface ProjectLink {"));
        assert!(out.contains("export interface Project {"));
        assert!(out.trim_end().ends_with("];"));
    }

    #[test]
    fn about_round_trips() {
        let about = AboutContent {
            introduction: "hi".into(),
            background: "there".into(),
            skills: vec!["rust".into(), "rust".into()],
            what_drives_me: "shipping".into(),
            left_images: vec!["/thumbnails/left-image.png".into()],
            right_images: vec![],
        };
        assert_eq!(decode_about(&encode_about(&about)), Some(about));
    }

    #[test]
    fn social_round_trips() {
        let social = SocialLinks {
            github: "https://github.com/x".into(),
            itch: "https://x.itch.io".into(),
            linktree: "https://linktr.ee/x".into(),
            linkedin: "https://linkedin.com/in/x".into(),
        };
        assert_eq!(decode_social(&encode_social(&social)), Some(social));
    }

    #[test]
    fn literal_with_bracket_in_string_survives() {
        let projects = vec![Project {
            name: "Tricky]; one".into(),
            description: "contains ]; inside".into(),
            thumbnail: "/thumbnails/tricky-one.png".into(),
            links: vec![],
        }];
        assert_eq!(decode_projects(&encode_projects(&projects)), projects);
    }
}
