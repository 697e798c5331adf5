//! Dashboard command: stat cards built from concurrent list calls

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tabled::Tabled;

use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::client::models::{Appointment, AppointmentStatus, Hub, Partner, Slot, UserProfile};
use crate::client::{ResourceApi, ResourceGroups};
use crate::error::{Result, describe_error};
use crate::models::AppointmentDisplay;
use crate::output::json;
use crate::output::table::format_table;
use crate::session::Route;

/// How many upcoming appointments the dashboard lists
const UPCOMING_LIMIT: usize = 5;

/// Raw results of the dashboard's list calls. Each one succeeds or fails on its own.
pub struct DashboardData {
    pub partners: Result<Vec<Partner>>,
    pub hubs: Result<Vec<Hub>>,
    pub slots: Result<Vec<Slot>>,
    pub appointments: Result<Vec<Appointment>>,
}

/// One headline number
#[derive(Debug, Clone, Serialize)]
pub struct StatCard {
    pub label: &'static str,
    pub value: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Table row for a stat card
#[derive(Debug, Tabled)]
struct StatRow {
    #[tabled(rename = "METRIC")]
    label: String,
    #[tabled(rename = "VALUE")]
    value: String,
    #[tabled(rename = "ERROR")]
    error: String,
}

impl From<&StatCard> for StatRow {
    fn from(card: &StatCard) -> Self {
        Self {
            label: card.label.to_string(),
            value: card
                .value
                .map(|v| v.to_string())
                .unwrap_or_else(|| "-".to_string()),
            error: card.error.clone().unwrap_or_default(),
        }
    }
}

impl StatCard {
    fn from_result<T>(
        label: &'static str,
        result: &Result<Vec<T>>,
        count: impl Fn(&[T]) -> usize,
    ) -> Self {
        match result {
            Ok(items) => Self {
                label,
                value: Some(count(items.as_slice())),
                error: None,
            },
            Err(e) => Self {
                label,
                value: None,
                error: Some(describe_error(e)),
            },
        }
    }
}

/// Everything the dashboard shows
#[derive(Debug, Serialize)]
pub struct Dashboard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserProfile>,
    pub cards: Vec<StatCard>,
    pub appointments_by_status: BTreeMap<String, usize>,
    pub upcoming: Vec<AppointmentDisplay>,
}

/// Fetch the four collections concurrently
pub async fn fetch<C: ResourceApi>(client: &C) -> DashboardData {
    let (partners, hubs, slots, appointments) = futures::join!(
        client.partners().get_all(),
        client.hubs().get_all(),
        client.slots().get_all(),
        client.appointments().get_all(),
    );

    DashboardData {
        partners,
        hubs,
        slots,
        appointments,
    }
}

fn is_open(status: AppointmentStatus) -> bool {
    !matches!(
        status,
        AppointmentStatus::Completed | AppointmentStatus::Cancelled
    )
}

impl DashboardData {
    /// Whether not a single call succeeded
    pub fn all_failed(&self) -> bool {
        self.partners.is_err()
            && self.hubs.is_err()
            && self.slots.is_err()
            && self.appointments.is_err()
    }

    /// Reduce the raw lists to cards, a status breakdown and the next appointments
    pub fn summarize(&self, user: Option<UserProfile>, now: DateTime<Utc>) -> Dashboard {
        let cards = vec![
            StatCard::from_result("Partners", &self.partners, |p| p.len()),
            StatCard::from_result("Hubs", &self.hubs, |h| h.len()),
            StatCard::from_result("Slots", &self.slots, |s| s.len()),
            StatCard::from_result("Open slots", &self.slots, |s| {
                s.iter()
                    .filter(|slot| slot.available && slot.end_time > now)
                    .count()
            }),
            StatCard::from_result("Appointments", &self.appointments, |a| a.len()),
        ];

        let mut appointments_by_status = BTreeMap::new();
        let mut upcoming: Vec<&Appointment> = Vec::new();

        if let Ok(appointments) = &self.appointments {
            for appt in appointments {
                *appointments_by_status
                    .entry(appt.status.to_string())
                    .or_insert(0) += 1;
            }

            upcoming = appointments
                .iter()
                .filter(|a| is_open(a.status))
                .filter(|a| a.scheduled_time.is_some_and(|at| at >= now))
                .collect();
            upcoming.sort_by_key(|a| a.scheduled_time);
            upcoming.truncate(UPCOMING_LIMIT);
        }

        Dashboard {
            user,
            cards,
            appointments_by_status,
            upcoming: upcoming.into_iter().map(AppointmentDisplay::from).collect(),
        }
    }
}

fn print_pretty(dashboard: &Dashboard) {
    match &dashboard.user {
        Some(user) => println!(
            "{} {} [{}]\n",
            "Welcome back,".bold(),
            user.name.bold(),
            user.initials()
        ),
        None => println!("{}\n", "Dashboard".bold()),
    }

    for card in &dashboard.cards {
        match (&card.value, &card.error) {
            (Some(v), _) => println!("  {:<14} {}", card.label, v.to_string().cyan().bold()),
            (None, Some(e)) => println!("  {:<14} {}", card.label, e.red()),
            (None, None) => println!("  {:<14} -", card.label),
        }
    }

    if !dashboard.appointments_by_status.is_empty() {
        println!("\n{}", "Appointments by status".bold());
        for (status, count) in &dashboard.appointments_by_status {
            println!("  {:<14} {}", status, count);
        }
    }

    println!("\n{}", "Upcoming appointments".bold());
    println!("{}", format_table(&dashboard.upcoming));
}

fn spinner() -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.set_message("Loading dashboard...");
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

/// Run the dashboard command
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.require_route(Route::Dashboard)?;

    let bar = (ctx.format != OutputFormat::Json).then(spinner);
    let data = fetch(ctx.client.as_ref()).await;
    if let Some(bar) = bar {
        bar.finish_and_clear();
    }

    if data.all_failed() {
        return data.appointments.map(|_| ());
    }

    let dashboard = data.summarize(ctx.session.user(), Utc::now());

    match ctx.format {
        OutputFormat::Pretty => print_pretty(&dashboard),
        OutputFormat::Table => {
            let rows: Vec<StatRow> = dashboard.cards.iter().map(StatRow::from).collect();
            println!("{}", format_table(&rows));
        }
        OutputFormat::Json => println!("{}", json::format_json(&dashboard)?),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockGateway;
    use crate::client::{Appointments, Hubs, Partners, Slots};
    use crate::error::ApiError;
    use chrono::Duration as ChronoDuration;
    use serde_json::json;

    fn appointment(id: &str, status: &str, at: Option<DateTime<Utc>>) -> Appointment {
        serde_json::from_value(json!({
            "id": id,
            "type": "pickup",
            "status": status,
            "scheduledTime": at,
            "customer": { "name": "Jane Doe" },
        }))
        .unwrap()
    }

    fn slot(id: &str, available: bool, end: DateTime<Utc>) -> Slot {
        serde_json::from_value(json!({
            "id": id,
            "hubId": "h-1",
            "startTime": end - ChronoDuration::hours(1),
            "endTime": end,
            "available": available,
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_dashboard_counts() {
        let now = Utc::now();
        let mock = MockGateway::new()
            .with_records::<Partners>(vec![
                serde_json::from_value(json!({"id": "p-1", "name": "Acme"})).unwrap(),
            ])
            .await
            .with_records::<Slots>(vec![
                slot("s-1", true, now + ChronoDuration::hours(2)),
                slot("s-2", false, now + ChronoDuration::hours(2)),
                slot("s-3", true, now - ChronoDuration::hours(2)),
            ])
            .await
            .with_records::<Appointments>(vec![
                appointment("a-1", "scheduled", Some(now + ChronoDuration::hours(3))),
                appointment("a-2", "scheduled", Some(now + ChronoDuration::hours(1))),
                appointment("a-3", "cancelled", Some(now + ChronoDuration::hours(1))),
                appointment("a-4", "completed", Some(now - ChronoDuration::hours(5))),
                appointment("a-5", "in-progress", Some(now + ChronoDuration::minutes(30))),
            ])
            .await;

        let dashboard = fetch(&mock).await.summarize(None, now);

        let values: Vec<Option<usize>> = dashboard.cards.iter().map(|c| c.value).collect();
        assert_eq!(values, vec![Some(1), Some(0), Some(3), Some(1), Some(5)]);
        assert_eq!(dashboard.appointments_by_status["scheduled"], 2);
        assert_eq!(dashboard.appointments_by_status["cancelled"], 1);
        assert_eq!(dashboard.appointments_by_status["in-progress"], 1);

        let upcoming: Vec<&str> = dashboard.upcoming.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(upcoming, vec!["a-5", "a-2", "a-1"]);
    }

    #[tokio::test]
    async fn test_one_failure_does_not_hide_the_rest() {
        let mock = MockGateway::new()
            .with_records::<Partners>(vec![
                serde_json::from_value(json!({"id": "p-1", "name": "Acme"})).unwrap(),
            ])
            .await
            .with_failure::<Hubs>(ApiError::Status {
                status: 503,
                body: Some(json!({"message": "Hub service unavailable"})),
            })
            .await;

        let data = fetch(&mock).await;
        assert!(!data.all_failed());

        let dashboard = data.summarize(None, Utc::now());
        assert_eq!(dashboard.cards[0].value, Some(1));
        assert_eq!(dashboard.cards[1].value, None);
        assert_eq!(
            dashboard.cards[1].error.as_deref(),
            Some("Error 503: Hub service unavailable")
        );
        assert_eq!(dashboard.cards[4].value, Some(0));
    }

    #[tokio::test]
    async fn test_all_failed() {
        let down = ApiError::NoResponse("connection refused".to_string());
        let mock = MockGateway::new()
            .with_failure::<Partners>(down.clone())
            .await
            .with_failure::<Hubs>(down.clone())
            .await
            .with_failure::<Slots>(down.clone())
            .await
            .with_failure::<Appointments>(down)
            .await;

        let data = fetch(&mock).await;
        assert!(data.all_failed());
    }

    #[test]
    fn test_dashboard_json_skips_missing_errors() {
        let data = DashboardData {
            partners: Ok(vec![]),
            hubs: Ok(vec![]),
            slots: Ok(vec![]),
            appointments: Ok(vec![]),
        };
        let dashboard = data.summarize(None, Utc::now());
        let value = serde_json::to_value(&dashboard).unwrap();

        assert!(value.get("user").is_none());
        assert!(value["cards"][0].get("error").is_none());
        assert_eq!(value["cards"][0]["value"], 0);
    }
}
