// List registered actions

use serde::Serialize;
use todobench_harness::Action;

use crate::output::OutputFormat;

#[derive(Serialize)]
struct ActionInfo {
    name: &'static str,
    stack: &'static str,
}

pub fn run(format: OutputFormat) -> anyhow::Result<()> {
    let infos: Vec<ActionInfo> = Action::ALL
        .iter()
        .map(|a| ActionInfo {
            name: a.wire_name(),
            stack: a.stack().label(),
        })
        .collect();

    if format.is_text() {
        for info in &infos {
            println!("{:<28} {}", info.name, info.stack);
        }
    } else {
        format.print_value(&infos);
    }

    Ok(())
}
