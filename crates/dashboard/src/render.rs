//! Plain-text rendering of every page for the demo binary.
//!
//! This is the only presentation layer in the crate: it maps page
//! responses to stdout lines (and optionally JSON) so the pipeline can
//! be exercised end to end without a UI.

use anyhow::Result;

use contracts::dashboards::d100_activity_feed::ActivityFeedRequest;
use contracts::dashboards::d101_transaction_register::TransactionRegisterRequest;
use contracts::dashboards::d102_loyalty_summary::LoyaltySummaryRequest;
use contracts::dashboards::d103_room_occupancy::RoomOccupancyRequest;
use contracts::dashboards::d104_student_roster::StudentRosterRequest;
use contracts::dashboards::d105_member_directory::MemberDirectoryRequest;
use contracts::shared::list_pipeline::FilterState;

use crate::dashboards::{
    d100_activity_feed, d101_transaction_register, d102_loyalty_summary, d103_room_occupancy,
    d104_student_roster, d105_member_directory,
};
use crate::datasets;
use crate::error::PageError;
use crate::shared::config::Config;
use crate::shared::format::{format_currency, format_percent};

/// Page codes accepted by the binary
pub const PAGES: &[&str] = &[
    "activity",
    "transactions",
    "loyalty",
    "occupancy",
    "students",
    "members",
];

/// Render one page with an unconstrained filter.
///
/// `json` switches to the raw response serialization.
pub fn render_page(config: &Config, page: &str, json: bool) -> Result<String> {
    match page {
        "activity" => render_activity(config, json),
        "transactions" => render_transactions(config, json),
        "loyalty" => render_loyalty(config, json),
        "occupancy" => render_occupancy(json),
        "students" => render_students(config, json),
        "members" => render_members(config, json),
        other => Err(PageError::UnknownPage(other.to_string()).into()),
    }
}

/// Render every page in order
pub fn render_all(config: &Config, json: bool) -> Result<String> {
    let mut out = String::new();
    for page in PAGES {
        out.push_str(&render_page(config, page, json)?);
        out.push('\n');
    }
    Ok(out)
}

fn render_activity(config: &Config, json: bool) -> Result<String> {
    let scope = config.pages.scope(&config.pages.activity_feed_scope)?;
    let request = ActivityFeedRequest::default();
    let response =
        d100_activity_feed::service::get_activity_feed(&datasets::activity::ACTIVITY_LOG, &request, scope);
    if json {
        return Ok(serde_json::to_string_pretty(&response)?);
    }

    let mut out = String::from("== Activity feed ==\n");
    out.push_str(&format!(
        "Events ({}): {}\n",
        response.headline.scope.code(),
        response.headline.total_events
    ));
    for (status, count) in &response.headline.by_status.entries {
        out.push_str(&format!("  {}: {}\n", status, count));
    }
    for entry in &response.items {
        out.push_str(&format!(
            "  {}  {:<14} {:<30} [{}]\n",
            entry.timestamp, entry.user, entry.action, entry.status
        ));
    }
    Ok(out)
}

fn render_transactions(config: &Config, json: bool) -> Result<String> {
    let scope = config.pages.scope(&config.pages.transaction_register_scope)?;
    let request = TransactionRegisterRequest::default();
    let response = d101_transaction_register::service::get_transaction_register(
        &datasets::transactions::CARD_TRANSACTIONS,
        &request,
        scope,
    );
    if json {
        return Ok(serde_json::to_string_pretty(&response)?);
    }

    let mut out = String::from("== Transaction register ==\n");
    out.push_str(&format!(
        "Total ({}): {} over {} transactions\n",
        response.summary.scope.code(),
        format_currency(response.summary.total_amount),
        response.summary.count
    ));
    for (status, sum) in &response.summary.by_status.entries {
        out.push_str(&format!(
            "  {}: {} ({})\n",
            status,
            format_currency(sum.total),
            sum.count
        ));
    }
    for tx in &response.items {
        out.push_str(&format!(
            "  {}  {:<16} {:<16} {:>12} [{}]\n",
            tx.date,
            tx.merchant,
            tx.cardholder,
            format_currency(tx.amount),
            tx.status
        ));
    }
    Ok(out)
}

fn render_loyalty(config: &Config, json: bool) -> Result<String> {
    let request = LoyaltySummaryRequest {
        filter: FilterState::new(),
        top_n: config.pages.loyalty_top_n,
    };
    let response = d102_loyalty_summary::service::get_loyalty_summary(
        &datasets::loyalty::LOYALTY_ACCOUNTS,
        &request,
    );
    if json {
        return Ok(serde_json::to_string_pretty(&response)?);
    }

    let mut out = String::from("== Loyalty summary ==\n");
    for tier in &response.tiers {
        out.push_str(&format!(
            "  {}: {} accounts, {} points ({})\n",
            tier.tier,
            tier.accounts,
            tier.points_earned,
            format_percent(tier.percent_of_total)
        ));
    }
    out.push_str(&format!(
        "Breakage: {} of {} points earned\n",
        format_percent(response.breakage_percent),
        response.total_earned
    ));
    out.push_str("Top earners:\n");
    for account in &response.top_earners {
        out.push_str(&format!(
            "  {:<16} {:>10} points [{}]\n",
            account.member_name, account.points_earned, account.tier
        ));
    }
    Ok(out)
}

fn render_occupancy(json: bool) -> Result<String> {
    let request = RoomOccupancyRequest::default();
    let response =
        d103_room_occupancy::service::get_room_occupancy(&datasets::rooms::GUEST_ROOMS, &request);
    if json {
        return Ok(serde_json::to_string_pretty(&response)?);
    }

    let mut out = String::from("== Room occupancy ==\n");
    out.push_str(&format!("Rooms: {}\n", response.total_rooms));
    for (status, count) in &response.by_status.entries {
        let revenue = response.revenue_by_status.get(status);
        out.push_str(&format!(
            "  {}: {} rooms, {}\n",
            status,
            count,
            format_currency(revenue.total)
        ));
    }
    for bar in &response.occupancy_bars {
        out.push_str(&format!(
            "  {:<8} {:>5} nights  {}\n",
            bar.room_type,
            bar.occupied_nights,
            format_percent(bar.percent_of_max)
        ));
    }
    Ok(out)
}

fn render_students(config: &Config, json: bool) -> Result<String> {
    let scope = config.pages.scope(&config.pages.student_roster_scope)?;
    let request = StudentRosterRequest::default();
    let response = d104_student_roster::service::get_student_roster(
        &datasets::students::STUDENTS,
        &request,
        scope,
    );
    if json {
        return Ok(serde_json::to_string_pretty(&response)?);
    }

    let mut out = String::from("== Student roster ==\n");
    out.push_str(&format!(
        "Students ({}): {}, outstanding {}\n",
        response.headline.scope.code(),
        response.headline.total_students,
        format_currency(response.headline.balance_due_total)
    ));
    for student in &response.items {
        out.push_str(&format!(
            "  {:<16} {:<20} [{}]\n",
            student.name, student.course, student.status
        ));
    }
    Ok(out)
}

fn render_members(config: &Config, json: bool) -> Result<String> {
    let scope = config.pages.scope(&config.pages.member_directory_scope)?;
    let request = MemberDirectoryRequest::default();
    let response = d105_member_directory::service::get_member_directory(
        &datasets::fitness::FITNESS_MEMBERS,
        &request,
        scope,
    );
    if json {
        return Ok(serde_json::to_string_pretty(&response)?);
    }

    let mut out = String::from("== Member directory ==\n");
    for (status, count) in &response.summary.by_status.entries {
        out.push_str(&format!("  {}: {}\n", status, count));
    }
    for (plan, sum) in &response.summary.fees_by_plan.entries {
        out.push_str(&format!(
            "  plan {}: {} members, {}/month\n",
            plan,
            sum.count,
            format_currency(sum.total)
        ));
    }
    for member in &response.items {
        out.push_str(&format!(
            "  {:<16} {:<10} {:>3} visits [{}]\n",
            member.name, member.plan, member.visits_this_month, member.status
        ));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config;

    fn test_config() -> Config {
        config::load_config().expect("default config loads")
    }

    #[test]
    fn test_unknown_page_is_rejected() {
        let err = render_page(&test_config(), "payroll", false).unwrap_err();
        assert!(err.to_string().contains("unknown page"));
    }

    #[test]
    fn test_every_page_renders() {
        let config = test_config();
        let out = render_all(&config, false).unwrap();
        assert!(out.contains("== Activity feed =="));
        assert!(out.contains("== Transaction register =="));
        assert!(out.contains("== Loyalty summary =="));
        assert!(out.contains("== Room occupancy =="));
        assert!(out.contains("== Student roster =="));
        assert!(out.contains("== Member directory =="));
    }

    #[test]
    fn test_json_output_is_valid() {
        let config = test_config();
        let out = render_page(&config, "transactions", true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(value.get("summary").is_some());
    }
}
