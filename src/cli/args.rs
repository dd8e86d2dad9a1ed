use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::export::ExportFormat;
use crate::model::TransportMode;
use crate::routing::osrm::DEFAULT_SERVICE_URL;

#[derive(Parser)]
#[command(
    name = "trip_router",
    version,
    about = "Plan trips through waypoints with an OSRM routing service and export the result"
)]
pub struct Cli {
    /// Base URL of the OSRM-compatible route/v1 endpoint
    #[arg(long, default_value = DEFAULT_SERVICE_URL)]
    pub service_url: String,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute a route through the given waypoints and print the summary
    Plan {
        /// Waypoint as LAT,LNG (repeat at least twice, in visiting order)
        #[arg(long = "via", value_name = "LAT,LNG", required = true)]
        via: Vec<String>,

        /// Transport mode
        #[arg(long, value_enum, default_value_t = TransportMode::Car)]
        mode: TransportMode,

        /// Pick a route alternative (1-based) instead of the best one
        #[arg(long)]
        route: Option<usize>,

        /// Also export the summary in this format
        #[arg(long, value_enum)]
        export: Option<ExportFormat>,

        /// Directory for exported files (defaults to the current directory)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Interactive planning session: add and drag waypoints, switch modes,
    /// pick alternatives, export
    Session {
        /// Initial transport mode
        #[arg(long, value_enum, default_value_t = TransportMode::Car)]
        mode: TransportMode,
    },

    /// List transport modes with their routing profiles and fallback speeds
    Modes,
}
