use std::io::{self, BufRead, Write};
use std::path::Path;
use std::str::FromStr;

use anyhow::Result;

use crate::cli::{print_instructions, print_summary, save_export, validate};
use crate::export::ExportFormat;
use crate::geolocate::{GeoLocator, IpApiLocator};
use crate::model::TransportMode;
use crate::routing::error::RoutingError;
use crate::routing::osrm::{OsrmClient, mode_for_name};
use crate::routing::planner::RoutePlanner;
use crate::routing::service::RoutingBackend;
use crate::ui;

const HELP: &str = "\
Commands:
  add LAT,LNG          append a waypoint (route recalculates from 2 points)
  move N LAT,LNG       drag waypoint N (1-based) to a new position
  mode NAME            switch transport mode (car, motorcycle, foot, public_transport)
  routes               list route alternatives
  select N             activate route alternative N (1-based)
  show                 print the current summary and instructions
  export FORMAT [DIR]  export as pdf, csv or geojson
  locate               add your approximate position as a waypoint
  clear                reset everything
  help                 this text
  quit                 leave the session";

/// Interactive event loop. Every line is one external trigger; failures
/// become notices and the loop carries on.
pub fn run(service_url: &str, mode: TransportMode) -> Result<()> {
    let backend = OsrmClient::new(service_url)?;
    let mut planner = RoutePlanner::new(backend);
    // No waypoints yet, so this cannot hit the network.
    let _ = planner.set_mode(mode);

    ui::info(format!("Planning session started (mode: {mode})"));
    ui::info("Type 'help' for commands");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let tokens = match shell_words::split(line.trim()) {
            Ok(t) => t,
            Err(e) => {
                ui::warning(format!("Could not parse input: {e}"));
                continue;
            }
        };
        let Some((cmd, rest)) = tokens.split_first() else {
            continue;
        };

        match cmd.as_str() {
            "quit" | "exit" => break,
            "help" => println!("{HELP}"),
            "clear" => {
                planner.clear_all();
                ui::success("Cleared waypoints and route");
            }
            "add" => cmd_add(&mut planner, rest),
            "move" => cmd_move(&mut planner, rest),
            "mode" => cmd_mode(&mut planner, rest),
            "routes" => cmd_routes(&planner),
            "select" => cmd_select(&mut planner, rest),
            "show" => cmd_show(&planner),
            "export" => cmd_export(&planner, rest),
            "locate" => cmd_locate(&mut planner),
            other => ui::warning(format!("Unknown command '{other}' — try 'help'")),
        }
    }

    Ok(())
}

/// Shared handling for any mutation that may recalculate the route.
fn report_recalc<B: RoutingBackend>(
    planner: &RoutePlanner<B>,
    outcome: Result<(), RoutingError>,
) {
    match outcome {
        Ok(()) => {
            if let Some(s) = planner.current_summary() {
                ui::success(format!(
                    "Route: {} in {} ({})",
                    s.distance_text(),
                    s.duration_text,
                    s.speed_text()
                ));
                let options = planner.route_option_labels();
                if options.len() > 1 {
                    ui::info(format!("Alternatives: {}", options.join(" | ")));
                }
            } else {
                ui::info(format!(
                    "{} waypoint(s) — add another to compute a route",
                    planner.waypoints().len()
                ));
            }
        }
        Err(RoutingError::NoRouteFound) => {
            ui::warning("No route found between these waypoints");
        }
        Err(e) if e.is_transient() => {
            ui::warning(format!("{e} — previous route kept, try again"));
        }
        Err(e) => ui::error(e.to_string()),
    }
}

fn cmd_add<B: RoutingBackend>(
    planner: &mut RoutePlanner<B>,
    rest: &[String],
) {
    let Some(coord) = rest.first() else {
        ui::warning("Usage: add LAT,LNG");
        return;
    };
    match validate::parse_lat_lng(coord) {
        Ok(p) => {
            let outcome = planner.add_waypoint(p);
            report_recalc(planner, outcome);
        }
        Err(e) => ui::warning(e.to_string()),
    }
}

fn cmd_move<B: RoutingBackend>(
    planner: &mut RoutePlanner<B>,
    rest: &[String],
) {
    let (Some(idx_s), Some(coord)) = (rest.first(), rest.get(1)) else {
        ui::warning("Usage: move N LAT,LNG");
        return;
    };
    let Ok(idx) = idx_s.parse::<usize>() else {
        ui::warning(format!("Invalid waypoint number '{idx_s}'"));
        return;
    };
    if idx == 0 {
        ui::warning("Waypoint numbers are 1-based");
        return;
    }
    match validate::parse_lat_lng(coord) {
        Ok(p) => {
            let outcome = planner.update_waypoint(idx - 1, p);
            report_recalc(planner, outcome);
        }
        Err(e) => ui::warning(e.to_string()),
    }
}

fn cmd_mode<B: RoutingBackend>(
    planner: &mut RoutePlanner<B>,
    rest: &[String],
) {
    let Some(name) = rest.first() else {
        ui::warning("Usage: mode NAME (car, motorcycle, foot, public_transport)");
        return;
    };
    let mode = mode_for_name(name);
    if TransportMode::parse(name).is_none() {
        ui::warning(format!(
            "Unknown mode '{name}' — falling back to {mode} \
             (car, motorcycle, foot, public_transport)"
        ));
    }
    let outcome = planner.set_mode(mode);
    ui::info(format!("Mode set to {mode}"));
    report_recalc(planner, outcome);
}

fn cmd_routes<B: RoutingBackend>(planner: &RoutePlanner<B>) {
    let options = planner.route_option_labels();
    if options.is_empty() {
        ui::info("No route options — add at least two waypoints");
        return;
    }
    for (i, label) in options.iter().enumerate() {
        let marker = if i == planner.active_index() { "*" } else { " " };
        println!(" {marker} {label}");
    }
}

fn cmd_select<B: RoutingBackend>(
    planner: &mut RoutePlanner<B>,
    rest: &[String],
) {
    let Some(Ok(n)) = rest.first().map(|s| s.parse::<usize>()) else {
        ui::warning("Usage: select N (1-based)");
        return;
    };
    if n == 0 {
        ui::warning("Route numbers are 1-based");
        return;
    }
    match planner.select_route(n - 1) {
        Ok(()) => {
            if let Some(s) = planner.current_summary() {
                ui::success(format!(
                    "Route {n} active: {} in {}",
                    s.distance_text(),
                    s.duration_text
                ));
            }
        }
        Err(e) => ui::warning(e.to_string()),
    }
}

fn cmd_show<B: RoutingBackend>(planner: &RoutePlanner<B>) {
    match planner.current_summary() {
        Some(s) => {
            print_summary(s);
            print_instructions(s);
        }
        None => ui::info("No route yet — add at least two waypoints"),
    }
}

fn cmd_export<B: RoutingBackend>(
    planner: &RoutePlanner<B>,
    rest: &[String],
) {
    let Some(fmt_s) = rest.first() else {
        ui::warning("Usage: export pdf|csv|geojson [DIR]");
        return;
    };
    let format = match ExportFormat::from_str(fmt_s) {
        Ok(f) => f,
        Err(e) => {
            ui::warning(e.to_string());
            return;
        }
    };
    let out_dir = rest.get(1).map(Path::new);

    match planner.export_current(format) {
        Ok(file) => {
            if let Err(e) = save_export(&file, out_dir) {
                ui::error(e.to_string());
            }
        }
        Err(e) => ui::warning(e.to_string()),
    }
}

fn cmd_locate<B: RoutingBackend>(planner: &mut RoutePlanner<B>) {
    let locator = match IpApiLocator::new() {
        Ok(l) => l,
        Err(e) => {
            ui::warning(format!("Geolocation unavailable: {e}"));
            return;
        }
    };

    match locator.locate() {
        Ok(p) => {
            ui::info(format!("You appear to be near {:.4},{:.4}", p.lat, p.lng));
            let outcome = planner.add_waypoint(p);
            report_recalc(planner, outcome);
        }
        Err(e) => ui::warning(format!("Unable to determine your location: {e}")),
    }
}
