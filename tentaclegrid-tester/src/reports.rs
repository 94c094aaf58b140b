use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::io::Write;
use std::time::Duration;

use crate::catalog::CatalogResult;
use crate::scenarios::ScenarioResult;

#[derive(Debug, Serialize)]
pub struct AuditReport<'a> {
    pub catalog: &'a [CatalogResult],
    pub scenarios: &'a [ScenarioResult],
}

impl AuditReport<'_> {
    fn totals(&self) -> (usize, usize) {
        let total = self.catalog.len() + self.scenarios.len();
        let passed = self.catalog.iter().filter(|r| r.passed).count()
            + self.scenarios.iter().filter(|r| r.passed).count();
        (total, passed)
    }

    #[must_use]
    pub fn all_passed(&self) -> bool {
        let (total, passed) = self.totals();
        total == passed
    }
}

#[allow(clippy::cast_precision_loss)]
fn success_rate(passed: usize, total: usize) -> f64 {
    if total == 0 {
        return 100.0;
    }
    (passed as f64 / total as f64) * 100.0
}

pub fn generate_console_report<W: Write + ?Sized>(
    writer: &mut W,
    report: &AuditReport<'_>,
    total_duration: Duration,
) -> Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", "📊 Device Audit Summary".bright_cyan().bold())?;
    writeln!(writer, "{}", "=======================".cyan())?;

    let (total, passed) = report.totals();
    writeln!(writer, "Total checks: {total}")?;
    writeln!(writer, "Passed: {}", passed.to_string().green())?;
    writeln!(writer, "Failed: {}", (total - passed).to_string().red())?;
    writeln!(writer, "Success rate: {:.1}%", success_rate(passed, total))?;
    writeln!(writer, "Total time: {total_duration:?}")?;
    writeln!(writer)?;

    if !report.catalog.is_empty() {
        writeln!(writer, "{}", "📱 User-Agent Catalog".bright_yellow().bold())?;
        for result in report.catalog {
            let status = if result.passed {
                "✅ PASS".green()
            } else {
                "❌ FAIL".red()
            };
            writeln!(writer, "{} {}", status, result.key.bold())?;
            writeln!(
                writer,
                "   mobile={} safari={} grid={}x{} effects={}",
                result.snapshot.is_mobile_user_agent,
                result.snapshot.is_safari_engine,
                result.profile.grid_columns,
                result.profile.grid_rows,
                result.profile.max_concurrent_effects
            )?;
            write_failures(writer, &result.failures)?;
        }
        writeln!(writer)?;
    }

    if !report.scenarios.is_empty() {
        writeln!(writer, "{}", "🔄 Shell Scenarios".bright_yellow().bold())?;
        for result in report.scenarios {
            let status = if result.passed {
                "✅ PASS".green()
            } else {
                "❌ FAIL".red()
            };
            writeln!(writer, "{} {}", status, result.scenario_name.bold())?;
            writeln!(
                writer,
                "   Steps: {}, transitions: {}",
                result.steps_run, result.transitions
            )?;
            write_failures(writer, &result.failures)?;
        }
    }
    Ok(())
}

fn write_failures<W: Write + ?Sized>(writer: &mut W, failures: &[String]) -> Result<()> {
    if failures.is_empty() {
        return Ok(());
    }
    writeln!(writer, "   Failures:")?;
    for failure in failures {
        writeln!(writer, "     • {}", failure.red())?;
    }
    Ok(())
}

pub fn generate_json_report<W: Write + ?Sized>(
    writer: &mut W,
    report: &AuditReport<'_>,
) -> Result<()> {
    let json_output = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json_output}")?;
    Ok(())
}

pub fn generate_markdown_report<W: Write + ?Sized>(
    writer: &mut W,
    report: &AuditReport<'_>,
) -> Result<()> {
    writeln!(writer, "# Tentacle Grid Device Audit\n")?;

    let (total, passed) = report.totals();
    writeln!(writer, "## Summary\n")?;
    writeln!(writer, "- **Total checks**: {total}")?;
    writeln!(writer, "- **Passed**: {passed}")?;
    writeln!(writer, "- **Failed**: {}", total - passed)?;
    writeln!(
        writer,
        "- **Success rate**: {:.1}%\n",
        success_rate(passed, total)
    )?;

    if !report.catalog.is_empty() {
        writeln!(writer, "## User-Agent Catalog\n")?;
        writeln!(writer, "| | Fixture | Mobile | Safari | Grid | Effects |")?;
        writeln!(writer, "|---|---|---|---|---|---|")?;
        for result in report.catalog {
            let status = if result.passed { "✅" } else { "❌" };
            writeln!(
                writer,
                "| {status} | {} | {} | {} | {}x{} | {} |",
                result.key,
                result.snapshot.is_mobile_user_agent,
                result.snapshot.is_safari_engine,
                result.profile.grid_columns,
                result.profile.grid_rows,
                result.profile.max_concurrent_effects
            )?;
        }
        writeln!(writer)?;
    }

    if !report.scenarios.is_empty() {
        writeln!(writer, "## Shell Scenarios\n")?;
        for result in report.scenarios {
            let status = if result.passed { "✅" } else { "❌" };
            writeln!(writer, "### {status} {}\n", result.scenario_name)?;
            writeln!(writer, "- **Steps**: {}", result.steps_run)?;
            writeln!(writer, "- **Transitions**: {}", result.transitions)?;
            if !result.failures.is_empty() {
                writeln!(writer, "- **Failures**:")?;
                for failure in &result.failures {
                    writeln!(writer, "  - {failure}")?;
                }
            }
            writeln!(writer)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::run_catalog;
    use crate::scenarios::{get_scenario, run_scenario};

    fn sample() -> (Vec<CatalogResult>, Vec<ScenarioResult>) {
        let catalog = run_catalog();
        let scenario = get_scenario("iphone-rotation").expect("scenario");
        (catalog, vec![run_scenario(&scenario)])
    }

    #[test]
    fn json_report_lists_both_sections() {
        let (catalog, scenarios) = sample();
        let report = AuditReport {
            catalog: &catalog,
            scenarios: &scenarios,
        };
        let mut buffer = Vec::new();
        generate_json_report(&mut buffer, &report).expect("json");
        let value: serde_json::Value = serde_json::from_slice(&buffer).expect("parse");
        assert_eq!(
            value["catalog"].as_array().map(Vec::len),
            Some(catalog.len())
        );
        assert_eq!(value["scenarios"][0]["transitions"], 3);
    }

    #[test]
    fn markdown_report_has_table_rows() {
        let (catalog, scenarios) = sample();
        let report = AuditReport {
            catalog: &catalog,
            scenarios: &scenarios,
        };
        let mut buffer = Vec::new();
        generate_markdown_report(&mut buffer, &report).expect("markdown");
        let text = String::from_utf8(buffer).expect("utf8");
        assert!(text.contains("# Tentacle Grid Device Audit"));
        assert!(text.contains("| ✅ | iphone-safari | true | true | 70x35 | 10 |"));
        assert!(text.contains("### ✅ Phone rotates portrait to landscape and back"));
    }

    #[test]
    fn console_report_flags_failures() {
        colored::control::set_override(false);
        let scenarios = vec![ScenarioResult {
            scenario_name: "broken".to_string(),
            steps_run: 1,
            transitions: 0,
            passed: false,
            failures: vec!["step 1 (mount): expected transition=true, got false".to_string()],
        }];
        let report = AuditReport {
            catalog: &[],
            scenarios: &scenarios,
        };
        assert!(!report.all_passed());
        let mut buffer = Vec::new();
        generate_console_report(&mut buffer, &report, Duration::from_millis(3))
            .expect("console");
        let text = String::from_utf8(buffer).expect("utf8");
        assert!(text.contains("❌ FAIL broken"));
        assert!(text.contains("Failed: 1"));
    }

    #[test]
    fn empty_report_counts_as_passing() {
        let report = AuditReport {
            catalog: &[],
            scenarios: &[],
        };
        assert!(report.all_passed());
        assert!((success_rate(0, 0) - 100.0).abs() < f64::EPSILON);
    }
}
