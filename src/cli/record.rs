//! `paceline record` subcommands.

use clap::{Args, Subcommand};
use tabled::{Table, Tabled};

use super::context::AppContext;
use super::output;
use crate::domain::{pace, CourseId, NewRecord, RecordId};
use crate::error::Result;

#[derive(Subcommand, Debug)]
pub enum RecordCommand {
    /// List running records
    List(ListArgs),
    /// Log a run against a course
    Add(AddArgs),
    /// Delete a record
    Delete {
        /// Record id
        id: RecordId,
    },
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only records for this course
    #[arg(long)]
    pub course: Option<CourseId>,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Course the run was on
    pub course_id: CourseId,
    /// Distance in kilometers, e.g. "5" or "10.2"
    pub distance: String,
    #[arg(long, default_value = "0")]
    pub hours: String,
    #[arg(long, default_value = "0")]
    pub minutes: String,
    #[arg(long, default_value = "0")]
    pub seconds: String,
    /// Optional title for the run
    #[arg(long)]
    pub title: Option<String>,
}

#[derive(Tabled)]
struct RecordRow {
    id: String,
    course: String,
    km: f64,
    duration: String,
    pace: String,
    title: String,
}

pub async fn run(command: RecordCommand, ctx: &AppContext) -> Result<()> {
    let cache = ctx.record_cache();
    match command {
        RecordCommand::List(args) => {
            cache.refresh().await?;
            let rows: Vec<RecordRow> = cache
                .entities()
                .into_iter()
                .filter(|r| args.course.map_or(true, |c| r.course_id == c))
                .map(|r| RecordRow {
                    id: r.id.to_string(),
                    course: r.course_id.to_string(),
                    km: r.distance_km,
                    duration: r.duration(),
                    pace: r.pace(),
                    title: r.title.unwrap_or_default(),
                })
                .collect();
            if rows.is_empty() {
                output::note("no records yet");
            } else {
                output::note(&Table::new(rows).to_string());
            }
        }
        RecordCommand::Add(args) => {
            let distance_km = pace::parse_distance_km(&args.distance)?;
            let duration_secs =
                pace::duration_from_parts(&args.hours, &args.minutes, &args.seconds)?;
            let mut draft = NewRecord::try_new(args.course_id, distance_km, duration_secs)?;
            if let Some(title) = args.title {
                draft = draft.with_title(title);
            }
            let record = cache.create(draft).await?;
            output::ok(&format!(
                "logged {} km in {} ({})",
                record.distance_km,
                record.duration(),
                record.pace()
            ));
        }
        RecordCommand::Delete { id } => {
            cache.refresh().await?;
            cache.remove(&id).await?;
            output::ok("record deleted");
        }
    }
    Ok(())
}
