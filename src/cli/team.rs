//! ttt team command implementation

use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::team::{self, TeamMember};

pub struct TeamOptions {
    pub json: bool,
    pub quiet: bool,
}

#[derive(serde::Serialize)]
struct TeamReport {
    members: &'static [TeamMember],
}

pub fn run(opts: TeamOptions) -> Result<()> {
    // The roster is compiled in; no storage is touched here.
    let members = team::list();
    let report = TeamReport { members };

    let mut human = HumanOutput::new(format!("ttt team: {} members", members.len()));
    for member in members {
        human.push_detail(format!("{}  {}", member.id, member.name));
    }
    human.push_next_step("ttt user set <id>");

    emit_success(
        OutputOptions {
            json: opts.json,
            quiet: opts.quiet,
        },
        "team",
        &report,
        Some(&human),
    )
}
