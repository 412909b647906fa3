// src/output.rs
use absence_days_domain::{MAX_FIVE_YEAR_ABSENCE, MAX_TWELVE_MONTH_ABSENCE};
use absence_days_shared_kernel::Result;
use absence_days_usecase::EligibilityAssessment;
use chrono::NaiveDate;

/// How the assessment is rendered on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

pub fn emit(assessment: &EligibilityAssessment, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            print_table(assessment);
            Ok(())
        }
        OutputFormat::Json => print_json(assessment),
    }
}

/// ANSI clear before each watch cycle.
pub fn print_clear_screen() {
    print!("\x1B[2J\x1B[1;1H");
}

fn print_json(assessment: &EligibilityAssessment) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(assessment)?);
    Ok(())
}

/// Dates are displayed in UK day/month/year form.
fn uk_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

fn tick(ok: bool) -> &'static str {
    if ok { "✓" } else { "✗" }
}

fn print_table(assessment: &EligibilityAssessment) {
    println!(
        "absence_days v{} · application date {}",
        crate::VERSION,
        uk_date(assessment.application_date)
    );
    println!();

    println!("   DEPARTURE        RETURN       DAYS   NOTE");
    println!("----------------------------------------------");
    for trip in &assessment.trips {
        println!(
            "  {:>10}    {:>10}   {:>6}   {}",
            uk_date(trip.departure),
            uk_date(trip.return_date),
            trip.days_absent.value(),
            trip.note
        );
    }
    if assessment.trips.is_empty() {
        println!("  (no trips on record)");
    }
    println!();

    println!("Eligibility signals:");
    println!(
        "  [{}] {} days absent in the last 12 months (limit {}, since {})",
        tick(assessment.within_twelve_month_limit),
        assessment.twelve_month_total,
        MAX_TWELVE_MONTH_ABSENCE,
        uk_date(assessment.twelve_month_window_start)
    );
    println!(
        "  [{}] {} days absent in the last 5 years (limit {}, since {})",
        tick(assessment.within_five_year_limit),
        assessment.five_year_total,
        MAX_FIVE_YEAR_ABSENCE,
        uk_date(assessment.five_year_window_start)
    );
    println!(
        "  [{}] in the UK on {} (five years before application)",
        tick(assessment.present_on_anchor_day),
        uk_date(assessment.anchor_day)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uk_date_is_day_month_year() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert_eq!(uk_date(date), "15/06/2024");
    }

    #[test]
    fn ticks_render_pass_and_fail() {
        assert_eq!(tick(true), "✓");
        assert_eq!(tick(false), "✗");
    }
}
