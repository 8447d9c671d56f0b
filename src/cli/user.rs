//! ttt user command implementations

use std::path::PathBuf;

use crate::cli::{emit_event, open_shell, resolve_storage};
use crate::error::Result;
use crate::events::{Event, EventKind};
use crate::output::{emit_success, HumanOutput, OutputOptions};

pub struct SetOptions {
    pub id: String,
    pub events: Option<String>,
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct ShowOptions {
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(serde::Serialize)]
struct UserReport {
    id: String,
    name: String,
}

#[derive(serde::Serialize)]
struct ShowReport {
    selected: Option<UserReport>,
}

pub fn run_set(opts: SetOptions) -> Result<()> {
    let storage = resolve_storage(opts.data_dir)?;
    let mut shell = open_shell(storage)?;

    let member = shell.select_user(&opts.id)?;

    let report = UserReport {
        id: member.id.to_string(),
        name: member.name.to_string(),
    };

    emit_event(
        opts.events.as_deref(),
        Event::new(EventKind::UserSelected).with_data(&report)?,
    )?;

    let mut human = HumanOutput::new(format!("ttt user set: {}", member.name));
    human.push_summary("id", member.id);
    human.push_next_step("ttt list");

    emit_success(
        OutputOptions {
            json: opts.json,
            quiet: opts.quiet,
        },
        "user set",
        &report,
        Some(&human),
    )
}

pub fn run_show(opts: ShowOptions) -> Result<()> {
    let storage = resolve_storage(opts.data_dir)?;
    let shell = open_shell(storage)?;

    let selected = shell.selected_user();
    let report = ShowReport {
        selected: selected.map(|member| UserReport {
            id: member.id.to_string(),
            name: member.name.to_string(),
        }),
    };

    let mut human = match selected {
        Some(member) => {
            let mut human = HumanOutput::new(format!("ttt user: {}", member.name));
            human.push_summary("id", member.id);
            human
        }
        None => {
            let mut human = HumanOutput::new("ttt user: none selected");
            human.push_next_step("ttt user set <id>");
            human
        }
    };
    human.push_next_step("ttt team");

    emit_success(
        OutputOptions {
            json: opts.json,
            quiet: opts.quiet,
        },
        "user show",
        &report,
        Some(&human),
    )
}
