//! Shared test collaborators: a scripted in-memory course gateway with
//! failure injection, call recording, and a hold gate for observing
//! in-flight state.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use parking_lot::Mutex;
use tokio::sync::oneshot;

use paceline::domain::sort::SortKey;
use paceline::domain::{Course, CourseId, CoursePatch, NewCourse, RoutePath};
use paceline::error::{Result, StoreError};
use paceline::port::outbound::store::{Entity, EntityGateway};

/// Build a course row the way the server would return it.
pub fn course(name: &str, created_secs: i64) -> Course {
    Course {
        id: CourseId::new(),
        created_at: Utc.timestamp_opt(created_secs, 0).unwrap(),
        name: name.into(),
        description: None,
        path: RoutePath::empty(),
        image_path: None,
    }
}

/// In-memory stand-in for the remote row store.
pub struct MockCourseGateway {
    rows: Mutex<Vec<Course>>,
    fail_ops: Mutex<VecDeque<&'static str>>,
    calls: Mutex<Vec<String>>,
    gate: Mutex<Option<oneshot::Receiver<()>>>,
    update_override: Mutex<Option<Course>>,
}

impl MockCourseGateway {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            rows: Mutex::new(Vec::new()),
            fail_ops: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
            gate: Mutex::new(None),
            update_override: Mutex::new(None),
        })
    }

    pub fn seed(&self, rows: Vec<Course>) {
        *self.rows.lock() = rows;
    }

    /// Fail the next operation with the given name.
    pub fn fail_next(&self, op: &'static str) {
        self.fail_ops.lock().push_back(op);
    }

    /// Hold the next operation until the returned sender fires.
    pub fn hold_next(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.gate.lock() = Some(rx);
        tx
    }

    /// Make the next update respond with this exact server row.
    pub fn respond_update_with(&self, row: Course) {
        *self.update_override.lock() = Some(row);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().push(call);
    }

    async fn pass_gate(&self) {
        let gate = self.gate.lock().take();
        if let Some(rx) = gate {
            let _ = rx.await;
        }
    }

    fn maybe_fail(&self, op: &'static str) -> Result<()> {
        let mut fail_ops = self.fail_ops.lock();
        if fail_ops.front() == Some(&op) {
            fail_ops.pop_front();
            return Err(StoreError::Rejected {
                status: 500,
                message: format!("injected {op} failure"),
            }
            .into());
        }
        Ok(())
    }
}

#[async_trait]
impl EntityGateway<Course> for MockCourseGateway {
    async fn fetch_all(&self, sort: SortKey) -> Result<Vec<Course>> {
        self.record(format!("fetch_all:{}", sort.order_param()));
        self.pass_gate().await;
        self.maybe_fail("fetch_all")?;
        let mut rows = self.rows.lock().clone();
        sort.sort(&mut rows);
        Ok(rows)
    }

    async fn insert(&self, draft: NewCourse) -> Result<Course> {
        self.record(format!("insert:{}", draft.name()));
        self.pass_gate().await;
        self.maybe_fail("insert")?;
        let row = Course {
            id: CourseId::new(),
            created_at: Utc::now(),
            name: draft.name().to_string(),
            description: draft.description().map(String::from),
            path: draft.path().clone(),
            image_path: draft.image_path().map(String::from),
        };
        self.rows.lock().push(row.clone());
        Ok(row)
    }

    async fn update(&self, id: &CourseId, patch: CoursePatch) -> Result<Course> {
        self.record(format!("update:{id}"));
        self.pass_gate().await;
        self.maybe_fail("update")?;

        if let Some(row) = self.update_override.lock().take() {
            let mut rows = self.rows.lock();
            if let Some(slot) = rows.iter_mut().find(|r| r.id == *id) {
                *slot = row.clone();
            }
            return Ok(row);
        }

        let mut rows = self.rows.lock();
        let row = rows
            .iter_mut()
            .find(|r| r.id == *id)
            .ok_or_else(|| StoreError::NotFound {
                table: "courses".into(),
                id: id.to_string(),
            })?;
        row.apply_patch(&patch);
        Ok(row.clone())
    }

    async fn delete(&self, id: &CourseId) -> Result<()> {
        self.record(format!("delete:{id}"));
        self.pass_gate().await;
        self.maybe_fail("delete")?;
        let mut rows = self.rows.lock();
        let position = rows
            .iter()
            .position(|r| r.id == *id)
            .ok_or_else(|| StoreError::NotFound {
                table: "courses".into(),
                id: id.to_string(),
            })?;
        rows.remove(position);
        Ok(())
    }
}
