//! Flat-file content store.
//!
//! One authoritative tree owns the content: JSON documents under the data
//! directory and image assets under `public/thumbnails`. The published
//! site's checkout is a derived copy; [`ContentStore::publish`] renders the
//! generated TypeScript data modules into it and mirrors the thumbnail
//! directory. Publish is idempotent and can be re-run at any time to
//! reconcile the site tree.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::codec;
use crate::config::Config;
use crate::models::{AboutContent, Project, SocialLinks};

pub const THUMBNAILS_DIR: &str = "thumbnails";

pub struct ContentStore {
    data_dir: PathBuf,
    thumbs_dir: PathBuf,
    site_data_dir: PathBuf,
    site_thumbs_dir: PathBuf,
}

impl ContentStore {
    pub fn new(config: &Config) -> io::Result<Self> {
        let store = ContentStore {
            data_dir: config.data_dir.clone(),
            thumbs_dir: config.public_dir.join(THUMBNAILS_DIR),
            site_data_dir: config.site_dir.join("data"),
            site_thumbs_dir: config.site_dir.join("public").join(THUMBNAILS_DIR),
        };

        fs::create_dir_all(&store.data_dir)?;
        fs::create_dir_all(&store.thumbs_dir)?;

        Ok(store)
    }

    // --- projects ---

    /// Reads the project collection from the authoritative document. When the
    /// document does not exist yet, falls back to importing the site's
    /// generated module, so pointing the tool at a pre-existing checkout
    /// picks up its data.
    pub fn load_projects(&self) -> io::Result<Vec<Project>> {
        let path = self.data_dir.join("projects.json");
        if path.exists() {
            let raw = fs::read_to_string(&path)?;
            return serde_json::from_str(&raw).map_err(into_io);
        }

        let site_path = self.site_data_dir.join("projects.ts");
        if site_path.exists() {
            let raw = fs::read_to_string(&site_path)?;
            let projects = codec::decode_projects(&raw);
            info!(
                "imported {} project(s) from {}",
                projects.len(),
                site_path.display()
            );
            return Ok(projects);
        }

        Ok(Vec::new())
    }

    pub fn save_projects(&self, projects: &[Project]) -> io::Result<()> {
        self.write_json("projects.json", projects)
    }

    // --- about ---

    pub fn load_about(&self) -> io::Result<AboutContent> {
        let path = self.data_dir.join("about.json");
        if path.exists() {
            let raw = fs::read_to_string(&path)?;
            return serde_json::from_str(&raw).map_err(into_io);
        }

        let site_path = self.site_data_dir.join("about.ts");
        if site_path.exists() {
            let raw = fs::read_to_string(&site_path)?;
            if let Some(about) = codec::decode_about(&raw) {
                return Ok(about);
            }
        }

        Ok(AboutContent::default())
    }

    pub fn save_about(&self, about: &AboutContent) -> io::Result<()> {
        self.write_json("about.json", about)
    }

    // --- social ---

    pub fn load_social(&self) -> io::Result<SocialLinks> {
        let path = self.data_dir.join("social.json");
        if path.exists() {
            let raw = fs::read_to_string(&path)?;
            return serde_json::from_str(&raw).map_err(into_io);
        }

        let site_path = self.site_data_dir.join("social.ts");
        if site_path.exists() {
            let raw = fs::read_to_string(&site_path)?;
            if let Some(social) = codec::decode_social(&raw) {
                return Ok(social);
            }
        }

        Ok(SocialLinks::default())
    }

    pub fn save_social(&self, social: &SocialLinks) -> io::Result<()> {
        self.write_json("social.json", social)
    }

    // --- thumbnails ---

    pub fn write_thumbnail(&self, filename: &str, bytes: &[u8]) -> io::Result<()> {
        fs::write(self.thumbs_dir.join(filename), bytes)
    }

    /// Filenames physically present in the authoritative thumbnail directory.
    pub fn list_thumbnails(&self) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.thumbs_dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    pub fn remove_thumbnail(&self, filename: &str) -> io::Result<()> {
        fs::remove_file(self.thumbs_dir.join(filename))
    }

    // --- publish ---

    /// Renders the generated data modules into the site tree and makes its
    /// thumbnail directory an exact mirror of the authoritative one.
    pub fn publish(&self) -> io::Result<()> {
        fs::create_dir_all(&self.site_data_dir)?;
        fs::create_dir_all(&self.site_thumbs_dir)?;

        let projects = self.load_projects()?;
        fs::write(
            self.site_data_dir.join("projects.ts"),
            codec::encode_projects(&projects),
        )?;
        fs::write(
            self.site_data_dir.join("about.ts"),
            codec::encode_about(&self.load_about()?),
        )?;
        fs::write(
            self.site_data_dir.join("social.ts"),
            codec::encode_social(&self.load_social()?),
        )?;

        self.mirror_thumbnails()?;

        info!("published content to {}", self.site_data_dir.display());
        Ok(())
    }

    fn mirror_thumbnails(&self) -> io::Result<()> {
        let mut expected = HashSet::new();
        for name in self.list_thumbnails()? {
            fs::copy(
                self.thumbs_dir.join(&name),
                self.site_thumbs_dir.join(&name),
            )?;
            expected.insert(name);
        }

        for entry in fs::read_dir(&self.site_thumbs_dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if entry.file_type()?.is_file() && !expected.contains(&name) {
                warn!("removing stale site thumbnail {name}");
                fs::remove_file(entry.path())?;
            }
        }

        Ok(())
    }

    fn write_json<T: serde::Serialize + ?Sized>(&self, filename: &str, value: &T) -> io::Result<()> {
        let raw = serde_json::to_string_pretty(value).map_err(into_io)?;
        fs::write(self.data_dir.join(filename), raw)
    }
}

fn into_io(e: serde_json::Error) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, e)
}

/// Thumbnail filename referenced by a project, if its path has the expected
/// `/thumbnails/` prefix.
pub fn referenced_thumbnail(project: &Project) -> Option<&str> {
    project.thumbnail.strip_prefix("/thumbnails/")
}
