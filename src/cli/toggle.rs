//! ttt toggle command implementation

use std::path::PathBuf;

use crate::cli::{emit_event, open_shell, resolve_storage};
use crate::error::Result;
use crate::events::{Event, EventKind};
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::task::Task;

pub struct ToggleOptions {
    pub id: String,
    pub events: Option<String>,
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(serde::Serialize)]
struct ToggleReport {
    task: Task,
}

pub fn run(opts: ToggleOptions) -> Result<()> {
    let storage = resolve_storage(opts.data_dir)?;
    let mut shell = open_shell(storage)?;

    let task = shell.toggle_task(&opts.id)?;

    let report = ToggleReport { task: task.clone() };

    emit_event(
        opts.events.as_deref(),
        Event::new(EventKind::TaskToggled).with_data(&task)?,
    )?;

    let state = if task.completed { "completed" } else { "open" };
    let mut human = HumanOutput::new(format!("ttt toggle: {} is now {state}", task.title));
    human.push_summary("id", task.id.as_str());
    human.push_summary("completed", task.completed.to_string());

    emit_success(
        OutputOptions {
            json: opts.json,
            quiet: opts.quiet,
        },
        "toggle",
        &report,
        Some(&human),
    )
}
