//! CRUD commands shared by the partner, hub, slot and appointment groups

use colored::Colorize;
use dialoguer::{Confirm, theme::ColorfulTheme};
use serde::Serialize;
use tabled::Tabled;

use crate::cli::{CommandContext, GlobalOptions, ResourceCommands};
use crate::client::{Appointments, Hubs, Partners, Resource, ResourceApi, ResourceGroup, Slots};
use crate::error::{Error, Result};
use crate::models::{AppointmentDisplay, HubDisplay, PartnerDisplay, SlotDisplay};
use crate::output::{Formattable, Record};
use crate::session::Route;

/// A collection that can be listed in a table and sits behind a guarded view
pub trait ResourceView: Resource {
    /// Table row for list output
    type Row: Tabled + Serialize + for<'a> From<&'a Self::Record>;

    /// View whose guard applies to this collection
    const ROUTE: Route;
}

impl ResourceView for Partners {
    type Row = PartnerDisplay;
    const ROUTE: Route = Route::Partners;
}

impl ResourceView for Hubs {
    type Row = HubDisplay;
    const ROUTE: Route = Route::Hubs;
}

// Slots are managed from the hubs view.
impl ResourceView for Slots {
    type Row = SlotDisplay;
    const ROUTE: Route = Route::Hubs;
}

impl ResourceView for Appointments {
    type Row = AppointmentDisplay;
    const ROUTE: Route = Route::Appointments;
}

/// What a CRUD subcommand produced
#[derive(Debug)]
pub enum Outcome<R: Resource> {
    Listed(Vec<R::Record>),
    Found(R::Record),
    Created(R::Record),
    Updated(R::Record),
    Deleted(String),
    Cancelled,
}

/// Execute one CRUD subcommand against `client`.
///
/// `confirm` is asked before a delete unless `--yes` was given.
pub async fn execute<R, C>(
    client: &C,
    command: ResourceCommands,
    confirm: impl FnOnce(&str) -> Result<bool>,
) -> Result<Outcome<R>>
where
    R: Resource,
    C: ResourceApi,
{
    let group = ResourceGroup::<C, R>::new(client);

    match command {
        ResourceCommands::List { limit } => {
            let mut records = group.get_all().await?;
            if let Some(limit) = limit {
                records.truncate(limit);
            }
            Ok(Outcome::Listed(records))
        }
        ResourceCommands::Get { id } => Ok(Outcome::Found(group.get_by_id(&id).await?)),
        ResourceCommands::Create { data } => {
            let draft: R::Draft = data.parse()?;
            log::debug!("Creating {}: {:?}", R::NAME, draft);
            Ok(Outcome::Created(group.create(&draft).await?))
        }
        ResourceCommands::Update { id, data } => {
            let draft: R::Draft = data.parse()?;
            log::debug!("Updating {} {}: {:?}", R::NAME, id, draft);
            Ok(Outcome::Updated(group.update(&id, &draft).await?))
        }
        ResourceCommands::Delete { id, yes } => {
            if !yes && !confirm(&id)? {
                return Ok(Outcome::Cancelled);
            }
            group.delete(&id).await?;
            Ok(Outcome::Deleted(id))
        }
    }
}

fn confirm_delete<R: Resource>(id: &str) -> Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Delete {} {}?", R::NAME, id))
        .default(false)
        .interact()?)
}

fn render<R: ResourceView>(outcome: Outcome<R>, ctx: &CommandContext) -> Result<()> {
    match outcome {
        Outcome::Listed(records) => {
            let rows: Vec<R::Row> = records.iter().map(R::Row::from).collect();
            rows.print(ctx.format)
        }
        Outcome::Found(record) => Record(&record).print(ctx.format),
        Outcome::Created(record) => {
            eprintln!("{} Created {}", "✓".green(), R::NAME);
            Record(&record).print(ctx.format)
        }
        Outcome::Updated(record) => {
            eprintln!("{} Updated {}", "✓".green(), R::NAME);
            Record(&record).print(ctx.format)
        }
        Outcome::Deleted(id) => {
            println!("{} Deleted {} {}", "✓".green(), R::NAME, id);
            Ok(())
        }
        Outcome::Cancelled => {
            println!("{} Cancelled", "○".dimmed());
            Ok(())
        }
    }
}

/// Run a CRUD subcommand for collection `R`
pub async fn run<R: ResourceView>(opts: &GlobalOptions, command: ResourceCommands) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.require_route(R::ROUTE)?;

    let outcome = execute::<R, _>(ctx.client.as_ref(), command, confirm_delete::<R>)
        .await
        .inspect_err(|e| {
            if let Error::Api(api) = e {
                if api.is_not_found() {
                    eprintln!(
                        "{} Run 'slotctl {} list' to see available IDs",
                        "→".dimmed(),
                        R::NAME
                    );
                }
            }
        })?;
    render(outcome, &ctx)
}
