//! `paceline course` subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use tabled::{Table, Tabled};
use uuid::Uuid;

use super::context::AppContext;
use super::output;
use crate::domain::{CourseId, CoursePatch, NewCourse, RoutePath, SortKey};
use crate::error::Result;
use crate::port::outbound::storage::ObjectStorage;

#[derive(Subcommand, Debug)]
pub enum CourseCommand {
    /// List courses
    List(ListArgs),
    /// Show one course in detail
    Show {
        /// Course id
        id: CourseId,
    },
    /// Create a course
    Create(CreateArgs),
    /// Update course fields
    Update(UpdateArgs),
    /// Delete a course
    Delete {
        /// Course id
        id: CourseId,
    },
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Ordering; defaults to newest first
    #[arg(long, value_enum)]
    pub sort: Option<SortKey>,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Display name
    pub name: String,
    #[arg(long)]
    pub description: Option<String>,
    /// Route geometry as `lat,lng;lat,lng;...`
    #[arg(long)]
    pub path: Option<String>,
    /// Image file to upload for the course
    #[arg(long)]
    pub image: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Course id
    pub id: CourseId,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Replacement route geometry as `lat,lng;lat,lng;...`
    #[arg(long)]
    pub path: Option<String>,
}

#[derive(Tabled)]
struct CourseRow {
    id: String,
    name: String,
    points: usize,
    created: String,
}

pub async fn run(command: CourseCommand, ctx: &AppContext) -> Result<()> {
    let cache = ctx.course_cache();
    match command {
        CourseCommand::List(args) => {
            match args.sort {
                Some(key) => cache.set_sort_key(key).await?,
                None => cache.refresh().await?,
            }
            let rows: Vec<CourseRow> = cache
                .entities()
                .into_iter()
                .map(|c| CourseRow {
                    id: c.id.to_string(),
                    name: c.name,
                    points: c.path.len(),
                    created: c.created_at.format("%Y-%m-%d %H:%M").to_string(),
                })
                .collect();
            if rows.is_empty() {
                output::note("no courses yet");
            } else {
                output::note(&Table::new(rows).to_string());
            }
        }
        CourseCommand::Show { id } => {
            cache.refresh().await?;
            match cache.get_by_id(&id) {
                Some(course) => {
                    output::section(&course.name);
                    output::key_value("id", course.id);
                    output::key_value("created", course.created_at.to_rfc3339());
                    if let Some(description) = &course.description {
                        output::key_value("description", description);
                    }
                    output::key_value("points", course.path.len());
                    if let Some(center) = course.path.center() {
                        output::key_value("center", format!("{:.5},{:.5}", center.lat, center.lng));
                    }
                    if let Some(image_path) = &course.image_path {
                        output::key_value("image", ctx.storage().public_url(image_path));
                    }
                }
                None => output::note("no such course"),
            }
        }
        CourseCommand::Create(args) => {
            let mut draft = NewCourse::try_new(args.name)?;
            if let Some(description) = args.description {
                draft = draft.with_description(description);
            }
            if let Some(path) = args.path {
                draft = draft.with_path(path.parse::<RoutePath>()?);
            }
            if let Some(image) = args.image {
                let object_path = upload_image(ctx, &image).await?;
                draft = draft.with_image_path(object_path);
            }
            let course = cache.create(draft).await?;
            output::ok(&format!("created course {} ({})", course.name, course.id));
        }
        CourseCommand::Update(args) => {
            cache.refresh().await?;
            let mut patch = CoursePatch::default();
            if let Some(name) = args.name {
                patch = patch.with_name(name);
            }
            if let Some(description) = args.description {
                patch = patch.with_description(description);
            }
            if let Some(path) = args.path {
                patch = patch.with_path(path.parse::<RoutePath>()?);
            }
            if patch.is_empty() {
                output::note("nothing to update");
                return Ok(());
            }
            let course = cache.update(&args.id, patch).await?;
            output::ok(&format!("updated course {}", course.name));
        }
        CourseCommand::Delete { id } => {
            cache.refresh().await?;
            cache.remove(&id).await?;
            output::ok("course deleted");
        }
    }
    Ok(())
}

/// Upload a local image file and return its object path.
async fn upload_image(ctx: &AppContext, file: &PathBuf) -> Result<String> {
    let bytes = std::fs::read(file)?;
    let ext = file
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("png")
        .to_ascii_lowercase();
    let content_type = match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "gif" => "image/gif",
        _ => "image/png",
    };
    let object_path = format!("courses/{}.{ext}", Uuid::new_v4());
    ctx.storage().upload(&object_path, bytes, content_type).await?;
    Ok(object_path)
}
