//! Sector Report
//!
//! Loads a scenario and prints what one ship perceives: visible contacts,
//! the route preview toward the selection, and the targeting overlay.

use clap::Parser;
use sector_tactics::core::error::{Result, TacticsError};
use sector_tactics::core::types::{EntityId, Position};
use sector_tactics::core::{set_config, TacticsConfig};
use sector_tactics::sector::SectorState;
use sector_tactics::tactical::{
    compute_path, hex_center, path_distance, ConcealmentEngine, SensorGeometry, TargetingOverlay,
};
use serde::Serialize;

/// Sector Report - per-observer tactical view of a scenario
#[derive(Parser, Debug)]
#[command(name = "sector_report")]
#[command(about = "Print the visible contacts, route and targeting overlay for one ship")]
struct Args {
    /// Scenario TOML file
    #[arg(long)]
    scenario: String,

    /// Id of the observing ship
    #[arg(long)]
    observer: String,

    /// Selected entity (defaults to the observer's current target)
    #[arg(long)]
    select: Option<String>,

    /// Tactics config TOML (defaults when omitted)
    #[arg(long)]
    config: Option<String>,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

/// JSON output structure
#[derive(Debug, Serialize)]
struct Report {
    observer: EntityId,
    visible: Vec<EntityId>,
    hidden: Vec<EntityId>,
    route: Vec<Position>,
    route_distance: u32,
    destination_px: Option<(f64, f64)>,
    overlay: TargetingOverlay,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sector_tactics=info".into()),
        )
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => TacticsConfig::load(path)?,
        None => TacticsConfig::default(),
    };
    if set_config(config.clone()).is_err() {
        tracing::warn!("Global tactics config was already initialized");
    }

    let sector = SectorState::load_with(&args.scenario, &config).inspect_err(|e| {
        tracing::warn!("Rejected scenario {}: {}", args.scenario, e);
    })?;
    tracing::info!(
        "Loaded {} entities from {}",
        sector.entities.len(),
        args.scenario
    );

    let report = build_report(&sector, &args.observer, args.select.as_deref(), &config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_text(&report);
    }

    Ok(())
}

/// Perception of one observing ship
///
/// Without an explicit selection the observer's current target is used.
fn build_report(
    sector: &SectorState,
    observer: &str,
    select: Option<&str>,
    config: &TacticsConfig,
) -> Result<Report> {
    let observer_id = EntityId::new(observer);
    let observer = sector
        .ship(&observer_id)
        .ok_or_else(|| TacticsError::EntityNotFound(observer_id.clone()))?;

    let selected = match select {
        Some(id) => Some(EntityId::new(id)),
        None => observer.current_target_id.clone(),
    };

    let engine = ConcealmentEngine::new(SensorGeometry::new(config.clone()));
    let visible = engine.visible_entities(observer, sector);
    let hidden: Vec<EntityId> = sector
        .entities
        .iter()
        .filter(|e| !visible.iter().any(|v| v.id() == e.id()))
        .map(|e| e.id().clone())
        .collect();

    // Only route toward something the observer can actually see
    let destination = selected
        .as_ref()
        .and_then(|id| visible.iter().find(|e| e.id() == id))
        .map(|e| e.position());
    let route = compute_path(observer.position, destination);

    let overlay = match &selected {
        Some(id) => TargetingOverlay::derive(&sector.entities, id),
        None => TargetingOverlay::default(),
    };

    Ok(Report {
        observer: observer_id,
        visible: visible.iter().map(|e| e.id().clone()).collect(),
        hidden,
        route_distance: path_distance(&route),
        route,
        destination_px: destination.map(|p| {
            let px = hex_center(p, config.hex_size);
            (px.x, px.y)
        }),
        overlay,
    })
}

fn print_text(report: &Report) {
    let join = |ids: &[EntityId]| {
        ids.iter()
            .map(|id| id.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    println!("\n=== SECTOR REPORT: {} ===", report.observer);
    println!("Visible: {}", join(&report.visible));
    println!("Hidden:  {}", join(&report.hidden));

    if report.route.is_empty() {
        println!("Route:   (none)");
    } else {
        let cells: Vec<String> = report.route.iter().map(|p| p.to_string()).collect();
        println!("Route:   {} [{} hexes]", cells.join(" -> "), report.route_distance);
    }

    match &report.overlay.selected {
        Some(selected) => {
            println!("Selected {}:", selected);
            println!("  attackers: {}", join(&report.overlay.attackers));
            println!(
                "  target:    {}",
                report.overlay.target.as_ref().map(|t| t.as_str()).unwrap_or("-")
            );
            println!("  inbound:   {}", join(&report.overlay.inbound_projectiles));
        }
        None => println!("Nothing selected"),
    }
}
