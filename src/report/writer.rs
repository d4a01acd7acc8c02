//! Report writers: JSON, Markdown and terminal renderings of
//! [`ScenarioResults`].

use crate::core::{ScenarioResults, SavingsCategory};
use crate::report::plausibility_warning;
use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Table};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_results(&mut self, results: &ScenarioResults) -> anyhow::Result<()>;
}

pub fn create_writer(format: OutputFormat, writer: Box<dyn Write>) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new()),
    }
}

// ---------------------------------------------------------------- formatting

/// `1234567.4` → `"1,234,567"`. Rounds to whole units.
pub fn group_thousands(value: f64) -> String {
    let rounded = value.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if negative && rounded.abs() > 0.0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

pub fn format_currency(amount: f64) -> String {
    if amount.round() < 0.0 {
        format!("-${}", group_thousands(amount.abs()))
    } else {
        format!("${}", group_thousands(amount.abs()))
    }
}

pub fn format_hours(hours: f64) -> String {
    group_thousands(hours)
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

// ---------------------------------------------------------------- JSON

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_results(&mut self, results: &ScenarioResults) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(results)?;
        self.writer.write_all(json.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

// ---------------------------------------------------------------- Markdown

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_results(&mut self, results: &ScenarioResults) -> anyhow::Result<()> {
        self.write_header(results)?;
        self.write_kpis(results)?;
        self.write_phase_table(results)?;
        self.write_role_table(results)?;
        self.write_category_table(results)?;
        self.write_initiative_table(results)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, results: &ScenarioResults) -> anyhow::Result<()> {
        writeln!(self.writer, "# Shiftmap Scenario Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer, "Matrix: {}", results.matrix_version)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_kpis(&mut self, results: &ScenarioResults) -> anyhow::Result<()> {
        let kpis = &results.kpis;
        writeln!(self.writer, "## Key Figures")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(
            self.writer,
            "| Baseline hours | {} |",
            format_hours(kpis.total_baseline_hours)
        )?;
        writeln!(
            self.writer,
            "| Modeled hours | {} |",
            format_hours(kpis.total_modeled_hours)
        )?;
        writeln!(
            self.writer,
            "| Hours saved | {} ({}) |",
            format_hours(kpis.total_hours_saved),
            format_percent(kpis.total_hours_saved_pct)
        )?;
        writeln!(
            self.writer,
            "| Cost savings | {} |",
            format_currency(kpis.total_cost_savings)
        )?;
        writeln!(
            self.writer,
            "| Cost avoidance | {} |",
            format_currency(kpis.total_cost_avoidance)
        )?;
        writeln!(
            self.writer,
            "| Total financial benefit | {} |",
            format_currency(kpis.total_financial_benefit)
        )?;
        writeln!(self.writer)?;

        if let Some(warning) = plausibility_warning(kpis) {
            writeln!(self.writer, "> ⚠️ {}", warning)?;
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_phase_table(&mut self, results: &ScenarioResults) -> anyhow::Result<()> {
        writeln!(self.writer, "## Phase Summary")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Phase | Baseline Hours | Modeled Hours | Variance | Variance % | Baseline Cost | Modeled Cost | Risk-Adjusted Hours |"
        )?;
        writeln!(
            self.writer,
            "|-------|----------------|---------------|----------|------------|---------------|--------------|---------------------|"
        )?;
        for row in results.summary.iter() {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} | {} | {} | {} |",
                row.phase,
                format_hours(row.baseline_hours),
                format_hours(row.modeled_hours),
                format_hours(row.hour_variance),
                format_percent(row.hour_variance_pct),
                format_currency(row.baseline_cost),
                format_currency(row.modeled_cost),
                format_hours(row.risk_adjusted_hours),
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_role_table(&mut self, results: &ScenarioResults) -> anyhow::Result<()> {
        writeln!(self.writer, "## Role Savings")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Role | Group | Baseline Hours | Modeled Hours | Hours Saved | % Saved | Rate | Cost Savings |"
        )?;
        writeln!(
            self.writer,
            "|------|-------|----------------|---------------|-------------|---------|------|--------------|"
        )?;
        for row in results.roles.summary.iter() {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} | {} | {} | {} |",
                row.role,
                row.group,
                format_hours(row.baseline_hours),
                format_hours(row.modeled_hours),
                format_hours(row.hours_saved),
                format_percent(row.pct_saved),
                format_currency(row.hourly_rate),
                format_currency(row.cost_savings),
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_category_table(&mut self, results: &ScenarioResults) -> anyhow::Result<()> {
        writeln!(self.writer, "## Strategic Savings Categories")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Role | Configuration Reuse | Methodology & Process | AI & Automation |"
        )?;
        writeln!(
            self.writer,
            "|------|---------------------|-----------------------|-----------------|"
        )?;
        for (role, cells) in &results.categories.by_role {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} |",
                role,
                format_currency(cells[&SavingsCategory::ConfigurationReuse].cost),
                format_currency(cells[&SavingsCategory::Methodology].cost),
                format_currency(cells[&SavingsCategory::AiAutomation].cost),
            )?;
        }
        let totals = &results.categories.totals;
        writeln!(
            self.writer,
            "| **Total** | {} | {} | {} |",
            format_currency(totals[&SavingsCategory::ConfigurationReuse].cost),
            format_currency(totals[&SavingsCategory::Methodology].cost),
            format_currency(totals[&SavingsCategory::AiAutomation].cost),
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_initiative_table(&mut self, results: &ScenarioResults) -> anyhow::Result<()> {
        if results.initiative_impacts.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "## Initiative Impact")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Initiative | Maturity | Delivery Hours | Post Go-Live Hours | Total Financial Impact |"
        )?;
        writeln!(
            self.writer,
            "|------------|----------|----------------|--------------------|------------------------|"
        )?;
        for impact in results.initiative_impacts.iter() {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} |",
                impact.initiative,
                format_percent(impact.maturity_pct),
                format_hours(impact.delivery_hours),
                format_hours(impact.post_go_live_hours),
                format_currency(impact.total_financial_impact),
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

// ---------------------------------------------------------------- Terminal

pub struct TerminalWriter;

impl Default for TerminalWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalWriter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputWriter for TerminalWriter {
    fn write_results(&mut self, results: &ScenarioResults) -> anyhow::Result<()> {
        print_header(results);
        print_kpis(results);
        print_phase_table(results);
        print_role_table(results);
        print_category_totals(results);
        Ok(())
    }
}

fn print_header(results: &ScenarioResults) {
    println!("{}", "Shiftmap Scenario Report".bold().blue());
    println!("{}", "========================".blue());
    println!("Matrix: {}", results.matrix_version);
    println!();
}

fn print_kpis(results: &ScenarioResults) {
    let kpis = &results.kpis;
    println!("{}", "Summary:".bold());
    println!(
        "  Hours: {} baseline → {} modeled ({} saved, {})",
        format_hours(kpis.total_baseline_hours),
        format_hours(kpis.total_modeled_hours),
        format_hours(kpis.total_hours_saved),
        format_percent(kpis.total_hours_saved_pct).green(),
    );
    println!(
        "  Cost savings: {}   Cost avoidance: {}",
        format_currency(kpis.total_cost_savings).green(),
        format_currency(kpis.total_cost_avoidance).cyan(),
    );
    println!(
        "  Total financial benefit: {}",
        format_currency(kpis.total_financial_benefit).bold().green()
    );
    if let Some(warning) = plausibility_warning(kpis) {
        println!("  {} {}", "warning:".bold().yellow(), warning.yellow());
    }
    println!();
}

fn numeric_cell(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

fn print_phase_table(results: &ScenarioResults) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Phase",
        "Baseline Hours",
        "Modeled Hours",
        "Variance",
        "Baseline Cost",
        "Modeled Cost",
        "Risk-Adjusted",
    ]);
    for row in results.summary.iter() {
        table.add_row(vec![
            Cell::new(row.phase.label()),
            numeric_cell(format_hours(row.baseline_hours)),
            numeric_cell(format_hours(row.modeled_hours)),
            numeric_cell(format!(
                "{} ({})",
                format_hours(row.hour_variance),
                format_percent(row.hour_variance_pct)
            )),
            numeric_cell(format_currency(row.baseline_cost)),
            numeric_cell(format_currency(row.modeled_cost)),
            numeric_cell(format_hours(row.risk_adjusted_hours)),
        ]);
    }
    println!("{table}");
    println!();
}

fn print_role_table(results: &ScenarioResults) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Role",
        "Group",
        "Baseline Hours",
        "Modeled Hours",
        "Hours Saved",
        "% Saved",
        "Cost Savings",
    ]);
    for row in results.roles.summary.iter() {
        table.add_row(vec![
            Cell::new(&row.role),
            Cell::new(row.group.label()),
            numeric_cell(format_hours(row.baseline_hours)),
            numeric_cell(format_hours(row.modeled_hours)),
            numeric_cell(format_hours(row.hours_saved)),
            numeric_cell(format_percent(row.pct_saved)),
            numeric_cell(format_currency(row.cost_savings)),
        ]);
    }
    println!("{table}");
    println!();
}

fn print_category_totals(results: &ScenarioResults) {
    println!("{}", "Strategic savings categories:".bold());
    for category in SavingsCategory::ALL {
        let cell = results
            .categories
            .totals
            .get(&category)
            .copied()
            .unwrap_or_default();
        println!(
            "  {:<24} {:>12} hours   {:>14}",
            category.label(),
            format_hours(cell.hours),
            format_currency(cell.cost),
        );
    }
    println!();
}
