use anyhow::Result;

fn main() -> Result<()> {
    env_logger::init();
    trip_router::cli::run()
}
