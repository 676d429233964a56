// Benchmark a single action by wire name

use todobench_harness::{Action, LoadRunner, RunConfig, RunContext};

use crate::output::OutputFormat;

pub async fn run(config: RunConfig, format: OutputFormat, name: &str) -> anyhow::Result<()> {
    // Unknown names fail here, before any network call
    let Some(action) = Action::from_wire(name) else {
        let known: Vec<&str> = Action::ALL.iter().map(|a| a.wire_name()).collect();
        anyhow::bail!(
            "unknown action '{}' (known actions: {})",
            name,
            known.join(", ")
        );
    };

    let runner = LoadRunner::new(&config);
    let mut ctx = RunContext::new(config.concurrency);
    let summary = runner.run_action(&mut ctx, action).await;

    if format.is_text() {
        match summary.stats {
            Some(stats) => println!(
                "{} ({} users): avg={:.0}ms | min={:.0}ms | max={:.0}ms | {}/{} ok | total={:.0}ms",
                action,
                summary.requested,
                stats.avg_ms,
                stats.min_ms,
                stats.max_ms,
                summary.succeeded,
                summary.requested,
                summary.batch_duration.as_secs_f64() * 1000.0,
            ),
            None => println!(
                "{} ({} users): no successful samples ({} failed)",
                action,
                summary.requested,
                summary.failed(),
            ),
        }
    } else {
        format.print_value(&summary);
    }

    Ok(())
}
