use chrono::{DateTime, NaiveDate, Utc};
use crate::domain::models::goal::Goal;

/// Share of `target` reached by `current`, clamped to `[0, 100]`.
/// A non-positive target yields 0 rather than dividing by it.
pub fn progress_percent(current: f64, target: f64) -> f64 {
    if !target.is_finite() || target <= 0.0 || !current.is_finite() {
        return 0.0;
    }
    ((current / target) * 100.0).clamp(0.0, 100.0)
}

pub fn format_percent(percent: f64) -> String {
    format!("{:.1}%", percent)
}

pub fn goal_progress(goal: &Goal) -> f64 {
    progress_percent(goal.current_amount, goal.target_amount)
}

/// "$250.00 / $1000.00"
pub fn goal_progress_label(goal: &Goal) -> String {
    format!("{} / {}", format_money(goal.current_amount), format_money(goal.target_amount))
}

pub fn format_money(amount: f64) -> String {
    format!("${:.2}", amount)
}

pub fn format_expense_amount(amount: f64) -> String {
    format!("-{}", format_money(amount))
}

pub fn format_income_amount(amount: f64) -> String {
    format!("+{}", format_money(amount))
}

pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Value for a date input: `YYYY-MM-DD`, or empty when there is no deadline.
pub fn deadline_input_value(deadline: Option<NaiveDate>) -> String {
    deadline.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
}

pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_progress_is_clamped() {
        assert_eq!(progress_percent(250.0, 1000.0), 25.0);
        assert_eq!(progress_percent(1500.0, 1000.0), 100.0);
        assert_eq!(progress_percent(-10.0, 1000.0), 0.0);
        assert_eq!(progress_percent(50.0, 0.0), 0.0);
        assert_eq!(progress_percent(50.0, -3.0), 0.0);
    }

    #[test]
    fn test_percent_and_money_strings() {
        assert_eq!(format_percent(progress_percent(1.0, 3.0)), "33.3%");
        assert_eq!(format_percent(100.0), "100.0%");
        assert_eq!(format_money(12.5), "$12.50");
        assert_eq!(format_expense_amount(12.5), "-$12.50");
        assert_eq!(format_income_amount(1200.0), "+$1200.00");
    }

    #[test]
    fn test_goal_label() {
        let mut goal = Goal::new(1, "Viaje".into(), 1000.0, 250.0, None);
        assert_eq!(goal_progress_label(&goal), "$250.00 / $1000.00");
        assert_eq!(goal_progress(&goal), 25.0);

        goal.current_amount = 1000.0;
        assert_eq!(format_percent(goal_progress(&goal)), "100.0%");
    }

    #[test]
    fn test_dates() {
        let date = Utc.with_ymd_and_hms(2025, 3, 7, 23, 15, 0).unwrap();
        assert_eq!(format_date(date), "07/03/2025");
        assert_eq!(deadline_input_value(NaiveDate::from_ymd_opt(2026, 12, 31)), "2026-12-31");
        assert_eq!(deadline_input_value(None), "");
    }

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(0.1 + 0.2), 0.3);
        assert_eq!(round_cents(10.005_1), 10.01);
    }
}
