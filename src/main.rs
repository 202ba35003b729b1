use clap::Parser;

mod backend;
mod config;
mod draw;
mod input;
mod ui;
mod util;

#[derive(Parser, Debug)]
#[command(name = "waycompass")]
#[command(
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("WAYCOMPASS_GIT_HASH"), ")"),
    about = "Compass and straightedge drawing overlay for Wayland compositors"
)]
struct Cli {
    /// Tool active on startup (overrides the config default)
    #[arg(long, short = 't', value_name = "NAME")]
    tool: Option<String>,

    /// List the available tools and exit
    #[arg(long)]
    list_tools: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.list_tools {
        let registry = input::ToolRegistry::with_default_tools();
        for name in registry.names() {
            println!("{name}");
        }
        return Ok(());
    }

    // Check for Wayland environment
    if std::env::var("WAYLAND_DISPLAY").is_err() {
        log::error!("WAYLAND_DISPLAY not set - this application requires Wayland.");
        log::error!("Please run on a Wayland compositor (Hyprland, Sway, etc.).");
        return Err(anyhow::anyhow!("WAYLAND_DISPLAY not set"));
    }

    log::info!("Starting construction overlay...");
    log::info!("Controls:");
    log::info!("  - Compass: press to plant, drag the radius, place the arm, sweep");
    log::info!("  - Line: drag");
    log::info!("  - Tools: C (compass), L (line)");
    log::info!(
        "  - Colors: R (red), G (green), B (blue), Y (yellow), O (orange), P (pink), W (white), K (black)"
    );
    log::info!("  - Thickness: scroll");
    log::info!("  - Cancel gesture: right-click");
    log::info!("  - Help: F10");
    log::info!("  - Exit: Escape");

    backend::run_wayland(cli.tool)?;

    log::info!("Construction overlay closed.");

    Ok(())
}
