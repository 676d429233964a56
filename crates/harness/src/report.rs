//! Comparative report over a settled run
//!
//! Pure formatting: reads the results table, mutates nothing. Rendering the
//! same context twice yields byte-identical output.

use crate::action::Stack;
use crate::stats::RunContext;

const STACK_W: usize = 11;
const ACTION_W: usize = 28;

/// Mean of the per-action average latencies for one stack.
///
/// Only actions with recorded stats contribute; an action whose batch never
/// ran or never succeeded is a gap, not a zero. `None` when the whole group
/// has no data.
pub fn group_mean(ctx: &RunContext, stack: Stack) -> Option<f64> {
    let avgs: Vec<f64> = stack
        .actions()
        .iter()
        .filter_map(|a| ctx.summary(*a))
        .filter_map(|s| s.stats)
        .map(|s| s.avg_ms)
        .collect();

    if avgs.is_empty() {
        None
    } else {
        Some(avgs.iter().sum::<f64>() / avgs.len() as f64)
    }
}

/// Which stack came out ahead, if either group produced data.
///
/// Fixed tie policy: the ORM stack wins only on a strictly lower mean, so a
/// tie goes to the CMS stack.
pub fn faster_stack(ctx: &RunContext) -> Option<Stack> {
    match (group_mean(ctx, Stack::Cms), group_mean(ctx, Stack::Orm)) {
        (Some(cms), Some(orm)) => Some(if orm < cms { Stack::Orm } else { Stack::Cms }),
        (Some(_), None) => Some(Stack::Cms),
        (None, Some(_)) => Some(Stack::Orm),
        (None, None) => None,
    }
}

/// Render the full comparison table plus verdict.
pub fn render_comparison(ctx: &RunContext) -> String {
    let mut out = String::new();
    let rule = format!("{}\n", "-".repeat(STACK_W + ACTION_W + 40));

    out.push_str(&format!(
        "Performance comparison ({} concurrent users)\n",
        ctx.concurrency
    ));
    out.push_str(&rule);
    out.push_str(&format!(
        "| {:<sw$} | {:<aw$} | {:>8} | {:>8} | {:>8} | {:>7} |\n",
        "Stack",
        "Action",
        "Avg (ms)",
        "Min (ms)",
        "Max (ms)",
        "Samples",
        sw = STACK_W,
        aw = ACTION_W,
    ));
    out.push_str(&rule);

    for stack in [Stack::Cms, Stack::Orm] {
        for action in stack.actions() {
            // No entry at all: the action was never run, skip the row
            let Some(summary) = ctx.summary(*action) else {
                continue;
            };

            match summary.stats {
                Some(stats) => out.push_str(&format!(
                    "| {:<sw$} | {:<aw$} | {:>8.0} | {:>8.0} | {:>8.0} | {:>7} |\n",
                    stack.label(),
                    action.wire_name(),
                    stats.avg_ms,
                    stats.min_ms,
                    stats.max_ms,
                    summary.succeeded,
                    sw = STACK_W,
                    aw = ACTION_W,
                )),
                None => out.push_str(&format!(
                    "| {:<sw$} | {:<aw$} | {:>30} | {:>7} |\n",
                    stack.label(),
                    action.wire_name(),
                    "no successful samples",
                    0,
                    sw = STACK_W,
                    aw = ACTION_W,
                )),
            }
        }
        out.push_str(&rule);
    }

    let fmt_mean = |mean: Option<f64>| match mean {
        Some(m) => format!("{m:.0} ms"),
        None => "no data".to_string(),
    };
    out.push_str(&format!(
        "{}: {}\n",
        Stack::Cms.label(),
        fmt_mean(group_mean(ctx, Stack::Cms))
    ));
    out.push_str(&format!(
        "{}: {}\n",
        Stack::Orm.label(),
        fmt_mean(group_mean(ctx, Stack::Orm))
    ));
    out.push_str(&match faster_stack(ctx) {
        Some(stack) => format!("Faster stack: {}\n", stack.label()),
        None => "Faster stack: no data\n".to_string(),
    });

    out
}
