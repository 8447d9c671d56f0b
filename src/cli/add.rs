//! ttt add command implementation
//!
//! Title and assignee are validated at this boundary, before anything
//! reaches the store.

use std::path::PathBuf;

use crate::cli::{emit_event, open_shell, resolve_storage};
use crate::error::{Error, Result};
use crate::events::{Event, EventKind};
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::task::Task;
use crate::team;

pub struct AddOptions {
    pub title: String,
    pub assignee: Option<String>,
    pub events: Option<String>,
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(serde::Serialize)]
struct AddReport {
    task: Task,
}

pub fn run(opts: AddOptions) -> Result<()> {
    let storage = resolve_storage(opts.data_dir)?;
    let mut shell = open_shell(storage)?;

    let assignee_id = match opts.assignee {
        Some(id) => id,
        None => shell
            .selected_user()
            .map(|member| member.id.to_string())
            .ok_or(Error::NoUserSelected)?,
    };

    let task = shell.create_task(&opts.title, &assignee_id)?;

    let report = AddReport { task: task.clone() };

    emit_event(
        opts.events.as_deref(),
        Event::new(EventKind::TaskCreated).with_data(&task)?,
    )?;

    let assignee_name = team::get_by_id(&task.assignee_id)
        .map(|member| member.name)
        .unwrap_or("unknown");

    let mut human = HumanOutput::new("ttt add: created task");
    human.push_summary("title", task.title.as_str());
    human.push_summary("assignee", assignee_name);
    human.push_summary("id", task.id.as_str());
    human.push_next_step(format!("ttt toggle {}", task.id));

    emit_success(
        OutputOptions {
            json: opts.json,
            quiet: opts.quiet,
        },
        "add",
        &report,
        Some(&human),
    )
}
