/*!
 * Trace Rendering
 * Writes the cycle trace and summary in the output file format
 */

use super::snapshot::CycleSnapshot;
use crate::core::types::SimResult;
use crate::process::scheduler::SimulationReport;
use crate::scheduler::SchedulingPolicy;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Everything a finished run produces
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationOutput {
    pub snapshots: Vec<CycleSnapshot>,
    pub report: SimulationReport,
}

impl SimulationOutput {
    /// Trace lines, a blank line, then the summary block
    pub fn render(&self) -> String {
        let mut out = String::new();
        for snapshot in &self.snapshots {
            out.push_str(&format!("{}\n", snapshot));
        }
        out.push('\n');
        out.push_str(&render_summary(&self.report));
        out
    }

    pub fn write_to<W: Write>(&self, mut writer: W) -> SimResult<()> {
        writer.write_all(self.render().as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

/// ```text
/// Finishing time: <N>
/// CPU utilization: <F.2>
/// Turnaround process <id>: <T>
/// ```
pub fn render_summary(report: &SimulationReport) -> String {
    let mut out = format!(
        "Finishing time: {}\nCPU utilization: {:.2}\n",
        report.finishing_time, report.cpu_utilization
    );
    for process in &report.processes {
        if let Some(turnaround) = process.turnaround {
            out.push_str(&format!(
                "Turnaround process {}: {}\n",
                process.pid, turnaround
            ));
        }
    }
    out
}

/// `<policy>-<fileName>`, next to the input file
pub fn output_path(policy: SchedulingPolicy, input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{}-{}", policy.code(), name))
}

/// Write the rendered output to `path`, creating or truncating it
pub fn write_output(output: &SimulationOutput, path: &Path) -> SimResult<()> {
    let file = std::fs::File::create(path)?;
    output.write_to(std::io::BufWriter::new(file))
}

/// Write the summary as pretty JSON to `path`
pub fn write_json_report(report: &SimulationReport, path: &Path) -> SimResult<()> {
    let json = report.to_json()?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::scheduler::ProcessSummary;

    #[test]
    fn test_summary_skips_unfinished_processes() {
        let report = SimulationReport {
            policy: SchedulingPolicy::Fcfs,
            quantum: None,
            finishing_time: 7,
            cpu_busy_cycles: 5,
            idle_cycles: 2,
            cpu_utilization: 5.0 / 7.0,
            context_switches: 1,
            preemptions: 0,
            average_turnaround: 7.0,
            processes: vec![
                ProcessSummary {
                    pid: 3,
                    arrival: 0,
                    finish_time: Some(7),
                    turnaround: Some(7),
                    waiting_cycles: 0,
                },
                ProcessSummary {
                    pid: 8,
                    arrival: 2,
                    finish_time: None,
                    turnaround: None,
                    waiting_cycles: 4,
                },
            ],
        };
        assert_eq!(
            render_summary(&report),
            "Finishing time: 7\nCPU utilization: 0.71\nTurnaround process 3: 7\n"
        );

        let output = SimulationOutput {
            snapshots: Vec::new(),
            report,
        };
        assert!(output.render().starts_with("\nFinishing time: 7\n"));
    }

    #[test]
    fn test_output_path_prefixes_file_name() {
        assert_eq!(
            output_path(SchedulingPolicy::RoundRobin, Path::new("input1.txt")),
            PathBuf::from("1-input1.txt")
        );
        assert_eq!(
            output_path(SchedulingPolicy::Srtf, Path::new("data/runs/in")),
            PathBuf::from("data/runs/2-in")
        );
    }
}
