// Full comparison run: cleanup, both stacks, report, cleanup

use todobench_harness::{render_comparison, run_cleanup, CleanupPhase, LoadRunner, RunConfig};

use crate::output::OutputFormat;

pub async fn run(
    config: RunConfig,
    format: OutputFormat,
    quiet: bool,
    no_cleanup: bool,
) -> anyhow::Result<()> {
    if format.is_text() && !quiet {
        println!(
            "Running {} users against {}",
            config.concurrency, config.base_url
        );
    }

    let runner = LoadRunner::new(&config);

    if !no_cleanup {
        // Best effort: the run proceeds whether or not cleanup worked
        if let Err(err) =
            run_cleanup(runner.client(), CleanupPhase::Before, config.cleanup_timeout).await
        {
            tracing::warn!(error = %err, "pre-run cleanup failed, continuing");
        }
    }

    let ctx = runner.run_all().await;

    if !no_cleanup {
        if let Err(err) =
            run_cleanup(runner.client(), CleanupPhase::After, config.cleanup_timeout).await
        {
            tracing::warn!(error = %err, "post-run cleanup failed");
        }
    }

    if format.is_text() {
        println!("{}", render_comparison(&ctx));
    } else {
        format.print_value(&ctx);
    }

    Ok(())
}
