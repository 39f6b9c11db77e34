/*!
 * CPU Scheduling Simulator - Main Entry Point
 *
 * sched-sim <policy> <inputFile>
 * - Loads the process descriptions
 * - Simulates them under the chosen policy
 * - Writes the trace and summary to <policy>-<inputFile>
 */

use sched_sim::core::limits::ENV_REPORT_JSON;
use sched_sim::process::load_file;
use sched_sim::trace::{output_path, write_json_report, write_output};
use sched_sim::{
    init_tracing, ConfigError, SchedulerBuilder, SchedulingPolicy, SimError, SimulationConfig,
};
use std::path::{Path, PathBuf};
use tracing::info;

fn main() -> miette::Result<()> {
    // Logs go to stderr; stay quiet unless RUST_LOG says otherwise
    init_tracing("warn");

    let args: Vec<String> = std::env::args().collect();
    let program = args
        .first()
        .map(|arg| {
            Path::new(arg)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| arg.clone())
        })
        .unwrap_or_else(|| "sched-sim".to_string());

    if args.len() != 3 {
        return Err(SimError::from(ConfigError::Usage { program }).into());
    }

    run(&args[1], Path::new(&args[2])).map_err(Into::into)
}

fn run(policy_arg: &str, input: &Path) -> Result<(), SimError> {
    let policy: SchedulingPolicy = policy_arg.parse()?;
    let config = SimulationConfig::from_env(policy)?;
    let descriptors = load_file(input)?;

    info!(
        policy = %policy,
        input = %input.display(),
        processes = descriptors.len(),
        "Simulating"
    );

    let mut scheduler = SchedulerBuilder::new()
        .with_config(config)
        .build(&descriptors)?;
    let output = scheduler.run()?;

    let out_path = output_path(policy, input);
    write_output(&output, &out_path)?;
    info!(output = %out_path.display(), "Trace written");

    if report_json_enabled() {
        let mut json_path = out_path.into_os_string();
        json_path.push(".json");
        let json_path = PathBuf::from(json_path);
        write_json_report(&output.report, &json_path)?;
        info!(output = %json_path.display(), "JSON report written");
    }

    Ok(())
}

fn report_json_enabled() -> bool {
    std::env::var(ENV_REPORT_JSON)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}
