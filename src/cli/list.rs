//! ttt list command implementation

use std::path::PathBuf;

use crate::cli::{open_shell, open_store, resolve_storage};
use crate::error::{Error, Result};
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::task::Task;
use crate::team;

pub struct ListOptions {
    pub assignee: Option<String>,
    pub all: bool,
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(serde::Serialize)]
struct ListReport {
    scope: String,
    count: usize,
    tasks: Vec<Task>,
}

pub fn run(opts: ListOptions) -> Result<()> {
    let storage = resolve_storage(opts.data_dir)?;

    let (scope, tasks) = if opts.all {
        let store = open_store(&storage);
        ("all".to_string(), store.list()?)
    } else if let Some(assignee_id) = opts.assignee {
        let store = open_store(&storage);
        let tasks = store.list_by_assignee(&assignee_id)?;
        (format!("assignee:{assignee_id}"), tasks)
    } else {
        let mut shell = open_shell(storage)?;
        let member = shell.selected_user().ok_or(Error::NoUserSelected)?;
        let scope = format!("assignee:{}", member.id);
        (scope, shell.tasks()?)
    };

    let report = ListReport {
        scope: scope.clone(),
        count: tasks.len(),
        tasks: tasks.clone(),
    };

    let mut human = HumanOutput::new(format!("ttt list: {} task(s)", tasks.len()));
    human.push_summary("scope", scope);
    for task in &tasks {
        let mark = if task.completed { "x" } else { " " };
        let assignee = team::get_by_id(&task.assignee_id)
            .map(|member| member.name)
            .unwrap_or(task.assignee_id.as_str());
        human.push_detail(format!("[{mark}] {}  {} ({assignee})", task.id, task.title));
    }
    if tasks.is_empty() {
        human.push_next_step("ttt add <title>");
    }

    emit_success(
        OutputOptions {
            json: opts.json,
            quiet: opts.quiet,
        },
        "list",
        &report,
        Some(&human),
    )
}
