use axum::extract::{Multipart, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::error::AppError;
use crate::models::{AboutContent, LinkType, Project, ProjectLink, SocialLinks};
use crate::state::AppState;
use crate::store::referenced_thumbnail;
use crate::upload;

// --- projects ---

#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
    pub description: String,
    pub github: Option<String>,
    pub itch: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProjectRequest {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub github: Option<String>,
    pub itch: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteProjectParams {
    pub name: String,
}

pub async fn list_projects(
    State(state): State<AppState>,
) -> Result<Json<Vec<Project>>, AppError> {
    let store = state.store.lock().await;
    Ok(Json(store.load_projects()?))
}

pub async fn create_project(
    State(state): State<AppState>,
    Json(req): Json<CreateProjectRequest>,
) -> Result<Json<Project>, AppError> {
    if req.name.trim().is_empty() || req.description.trim().is_empty() {
        return Err(AppError::validation("Name and description are required"));
    }

    let store = state.store.lock().await;
    let mut projects = store.load_projects()?;

    if projects.iter().any(|p| p.name == req.name) {
        return Err(AppError::conflict("A project with this name already exists"));
    }

    let project = Project {
        thumbnail: upload::thumbnail_path(&req.name),
        links: build_links(req.github.as_deref(), req.itch.as_deref()),
        name: req.name,
        description: req.description,
    };

    projects.push(project.clone());
    store.save_projects(&projects)?;
    store.publish()?;

    info!("created project {:?}", project.name);
    Ok(Json(project))
}

pub async fn update_project(
    State(state): State<AppState>,
    Json(req): Json<UpdateProjectRequest>,
) -> Result<Json<Project>, AppError> {
    let has_change = req.name.is_some()
        || req.description.is_some()
        || req.github.is_some()
        || req.itch.is_some();
    if req.id.trim().is_empty() || !has_change {
        return Err(AppError::validation(
            "Project ID and at least one field to update are required",
        ));
    }

    let store = state.store.lock().await;
    let mut projects = store.load_projects()?;

    let index = projects
        .iter()
        .position(|p| p.name == req.id)
        .ok_or_else(|| AppError::not_found("Project not found"))?;

    let new_name = match req.name.as_deref() {
        Some(name) if !name.trim().is_empty() => name.to_string(),
        _ => projects[index].name.clone(),
    };
    if new_name != req.id && projects.iter().any(|p| p.name == new_name) {
        return Err(AppError::conflict("A project with this name already exists"));
    }

    let current = &projects[index];
    let github = req
        .github
        .clone()
        .or_else(|| current.link_url(LinkType::Github).map(String::from));
    let itch = req
        .itch
        .clone()
        .or_else(|| current.link_url(LinkType::Itch).map(String::from));

    let description = match req.description {
        Some(d) if !d.trim().is_empty() => d,
        _ => current.description.clone(),
    };

    let updated = Project {
        thumbnail: upload::thumbnail_path(&new_name),
        links: build_links(github.as_deref(), itch.as_deref()),
        name: new_name,
        description,
    };

    projects[index] = updated.clone();
    store.save_projects(&projects)?;
    store.publish()?;

    info!("updated project {:?}", updated.name);
    Ok(Json(updated))
}

pub async fn delete_project(
    State(state): State<AppState>,
    Query(params): Query<DeleteProjectParams>,
) -> Result<Json<Value>, AppError> {
    let store = state.store.lock().await;
    let mut projects = store.load_projects()?;

    let index = projects
        .iter()
        .position(|p| p.name == params.name)
        .ok_or_else(|| AppError::not_found("Project not found"))?;

    projects.remove(index);
    store.save_projects(&projects)?;
    store.publish()?;

    info!("deleted project {:?}", params.name);
    Ok(Json(json!({ "success": true })))
}

fn build_links(github: Option<&str>, itch: Option<&str>) -> Vec<ProjectLink> {
    let mut links = Vec::new();
    if let Some(url) = github {
        if !url.trim().is_empty() {
            links.push(ProjectLink {
                link_type: LinkType::Github,
                url: url.to_string(),
            });
        }
    }
    if let Some(url) = itch {
        if !url.trim().is_empty() {
            links.push(ProjectLink {
                link_type: LinkType::Itch,
                url: url.to_string(),
            });
        }
    }
    links
}

// --- about ---

pub async fn get_about(State(state): State<AppState>) -> Result<Json<AboutContent>, AppError> {
    let store = state.store.lock().await;
    Ok(Json(store.load_about()?))
}

pub async fn save_about(
    State(state): State<AppState>,
    Json(content): Json<AboutContent>,
) -> Result<Json<Value>, AppError> {
    if content.introduction.trim().is_empty()
        || content.background.trim().is_empty()
        || content.what_drives_me.trim().is_empty()
    {
        return Err(AppError::validation("Missing required fields"));
    }

    let store = state.store.lock().await;
    store.save_about(&content)?;
    store.publish()?;

    Ok(Json(json!({ "message": "About content updated successfully" })))
}

// --- social ---

pub async fn get_social(State(state): State<AppState>) -> Result<Json<SocialLinks>, AppError> {
    let store = state.store.lock().await;
    Ok(Json(store.load_social()?))
}

pub async fn save_social(
    State(state): State<AppState>,
    Json(content): Json<SocialLinks>,
) -> Result<Json<Value>, AppError> {
    if content.github.trim().is_empty()
        || content.itch.trim().is_empty()
        || content.linktree.trim().is_empty()
        || content.linkedin.trim().is_empty()
    {
        return Err(AppError::validation("All social links are required"));
    }

    let store = state.store.lock().await;
    store.save_social(&content)?;
    store.publish()?;

    Ok(Json(json!({ "success": true })))
}

// --- upload ---

pub async fn upload_asset(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Value>, AppError> {
    let mut bytes: Option<Vec<u8>> = None;
    let mut name: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some("file") => bytes = Some(field.bytes().await?.to_vec()),
            Some("name") => name = Some(field.text().await?),
            _ => {}
        }
    }

    let (bytes, name) = match (bytes, name) {
        (Some(bytes), Some(name)) if !name.trim().is_empty() => (bytes, name),
        _ => return Err(AppError::validation("File and name are required")),
    };

    let filename = upload::asset_filename(&name);
    let store = state.store.lock().await;
    store.write_thumbnail(&filename, &bytes)?;
    store.publish()?;

    info!("stored asset {filename} ({} bytes)", bytes.len());
    Ok(Json(json!({ "path": upload::asset_path(&name) })))
}

// --- cleanup ---

pub async fn cleanup_thumbnails(
    State(state): State<AppState>,
) -> Result<Json<Value>, AppError> {
    let store = state.store.lock().await;

    let projects = store.load_projects()?;
    let referenced: std::collections::HashSet<&str> =
        projects.iter().filter_map(referenced_thumbnail).collect();

    let mut deleted = Vec::new();
    for file in store.list_thumbnails()? {
        if !referenced.contains(file.as_str()) {
            store.remove_thumbnail(&file)?;
            deleted.push(file);
        }
    }
    store.publish()?;

    info!("cleanup removed {} thumbnail(s)", deleted.len());
    Ok(Json(json!({ "success": true, "deleted": deleted })))
}
