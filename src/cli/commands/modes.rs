use anyhow::Result;

use crate::model::TransportMode;
use crate::ui;

pub fn run() -> Result<()> {
    ui::info("Transport modes");
    println!();
    println!("{:<18} {:<18} {}", "Mode", "Routing profile", "Fallback speed");
    for mode in TransportMode::ALL {
        println!(
            "{:<18} {:<18} {} km/h",
            mode.label(),
            mode.profile(),
            mode.fallback_speed_kmh()
        );
    }
    println!();
    ui::info("The fallback speed applies only when the service reports no usable duration");
    Ok(())
}
