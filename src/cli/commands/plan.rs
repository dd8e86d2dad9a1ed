use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::cli::{print_instructions, print_summary, save_export, validate};
use crate::export::ExportFormat;
use crate::model::TransportMode;
use crate::routing::error::RoutingError;
use crate::routing::osrm::OsrmClient;
use crate::routing::planner::RoutePlanner;
use crate::ui;

pub fn run(
    service_url: &str,
    via: &[String],
    mode: TransportMode,
    route: Option<usize>,
    export: Option<ExportFormat>,
    out: Option<&Path>,
) -> Result<()> {
    validate::validate_via(via)?;
    if let Some(r) = route {
        validate::validate_route_choice(r)?;
    }

    let waypoints = via
        .iter()
        .map(|s| validate::parse_lat_lng(s))
        .collect::<Result<Vec<_>>>()?;

    let backend = OsrmClient::new(service_url)?;
    let mut planner = RoutePlanner::new(backend);
    planner
        .set_mode(mode)
        .context("Failed to set transport mode")?;

    for (i, wp) in waypoints.iter().enumerate() {
        match planner.add_waypoint(*wp) {
            Ok(()) => {}
            // Intermediate legs may be unroutable while later waypoints fix
            // it; only the final state matters for a one-shot plan.
            Err(RoutingError::NoRouteFound) if i + 1 < waypoints.len() => {}
            Err(e) => return Err(e).context("Route calculation failed"),
        }
    }

    let options = planner.route_option_labels();
    if let Some(r) = route {
        planner
            .select_route(r - 1)
            .with_context(|| format!("Route option {r} is not available"))?;
    }

    let Some(summary) = planner.current_summary() else {
        bail!("No route could be computed through the given waypoints");
    };

    print_summary(summary);

    if options.len() > 1 {
        println!();
        ui::info("Alternatives");
        for (i, label) in options.iter().enumerate() {
            let marker = if i == planner.active_index() { "*" } else { " " };
            println!(" {marker} {label}");
        }
    }

    print_instructions(summary);

    if let Some(format) = export {
        println!();
        let file = planner.export_current(format)?;
        save_export(&file, out)?;
    }

    Ok(())
}
