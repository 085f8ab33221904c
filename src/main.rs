//! DevToolbox - small developer utilities in one window
//!
//! JSON formatter, JWT decoder, regex tester, UUID generator, Base64
//! converter and Markdown previewer behind a tool-switching sidebar.

mod app;

use std::env;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use eframe::egui;
use tracing::{debug, error, info, warn};

use devtoolbox::config::loader::ConfigLoader;
use devtoolbox::config::{Config, ThemeName, WindowConfig};
use devtoolbox::error::Result;
use devtoolbox::tools::ToolKey;

use app::DevToolboxApp;

/// Command line arguments
#[derive(Debug, Default, PartialEq)]
struct AppArgs {
    /// Configuration file path
    config_path: Option<PathBuf>,
    /// Enable debug logging
    debug: bool,
    /// Window width
    width: Option<f32>,
    /// Window height
    height: Option<f32>,
    /// Initial theme
    theme: Option<String>,
    /// Tool selected at start-up
    tool: Option<String>,
    help: bool,
    version: bool,
}

impl AppArgs {
    /// Parse command line arguments
    fn parse() -> Result<Self> {
        Self::parse_from(env::args().skip(1))
    }

    fn parse_from<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut app_args = AppArgs::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" | "-c" => match args.next() {
                    Some(path) => app_args.config_path = Some(PathBuf::from(path)),
                    None => return Err("Missing config file path".into()),
                },
                "--debug" | "-d" => {
                    app_args.debug = true;
                }
                "--width" | "-w" => {
                    app_args.width = Some(parse_dimension("width", args.next())?);
                }
                "--height" | "-h" => {
                    app_args.height = Some(parse_dimension("height", args.next())?);
                }
                "--theme" | "-t" => match args.next() {
                    Some(theme) => app_args.theme = Some(theme),
                    None => return Err("Missing theme name".into()),
                },
                "--tool" => match args.next() {
                    Some(tool) => app_args.tool = Some(tool),
                    None => return Err("Missing tool id".into()),
                },
                "--help" | "-?" => {
                    app_args.help = true;
                }
                "--version" | "-v" => {
                    app_args.version = true;
                }
                other if other.starts_with('-') => {
                    return Err(format!("Unknown option: {}", other).into());
                }
                other => {
                    warn!("Ignoring positional argument: {}", other);
                }
            }
        }

        Ok(app_args)
    }
}

fn parse_dimension(name: &str, value: Option<String>) -> Result<f32> {
    let value = value.ok_or_else(|| format!("Missing window {}", name))?;
    value
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
        .ok_or_else(|| format!("Invalid window {}: {}", name, value).into())
}

/// Print help information
fn print_help() {
    println!("DevToolbox - small developer utilities in one window");
    println!();
    println!("USAGE:");
    println!("    devtoolbox [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <PATH>    Path to configuration file");
    println!("    -d, --debug            Enable debug logging");
    println!("    -w, --width <WIDTH>    Initial window width");
    println!("    -h, --height <HEIGHT>  Initial window height");
    println!("    -t, --theme <THEME>    Color theme (dark, light)");
    println!("        --tool <TOOL>      Tool to open (json, jwt, regex, uuid, base64, markdown)");
    println!("    -?, --help             Print this help message");
    println!("    -v, --version          Print version information");
    println!();
    println!("CONFIGURATION:");
    println!("    DevToolbox looks for configuration files in the following order:");
    println!("    1. Path specified with --config");
    println!("    2. $DEVTOOLBOX_CONFIG");
    println!("    3. <config dir>/devtoolbox/config.toml (or config.json)");
    println!("    4. ~/.devtoolbox/config.toml (or config.json)");
    println!("    5. Built-in defaults");
    println!();
    println!("ENVIRONMENT:");
    println!("    DEVTOOLBOX_CONFIG      Path to configuration file");
    println!("    DEVTOOLBOX_DEBUG       Enable debug logging (1 or true)");
    println!("    RUST_LOG               Set logging level (error, warn, info, debug, trace)");
}

fn init_logging(debug: bool) {
    let debug = debug
        || env::var("DEVTOOLBOX_DEBUG")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
    let log_level = if debug { "debug" } else { "info" };

    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(env_filter))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = AppArgs::parse().unwrap_or_else(|e| {
        eprintln!("{}", e);
        print_help();
        process::exit(1);
    });

    if args.help {
        print_help();
        return Ok(());
    }
    if args.version {
        println!("{} v{}", devtoolbox::NAME, devtoolbox::VERSION);
        return Ok(());
    }

    init_logging(args.debug);
    info!("Starting {} v{}", devtoolbox::NAME, devtoolbox::VERSION);
    debug!("Arguments: {:?}", args);

    let config = load_configuration(&args);
    let native_options = create_native_options(&config.window);

    info!("Initializing GUI...");
    eframe::run_native(
        devtoolbox::NAME,
        native_options,
        Box::new(move |_cc| Ok(Box::new(DevToolboxApp::with_config(&config)))),
    )
    .map_err(|e| {
        error!("Application failed: {}", e);
        anyhow::anyhow!("Application failed: {}", e)
    })?;

    info!("{} shutdown complete", devtoolbox::NAME);
    Ok(())
}

/// Load configuration from file or use defaults, then apply command line
/// overrides
fn load_configuration(args: &AppArgs) -> Config {
    info!("Loading configuration...");

    let mut config = match ConfigLoader::load(args.config_path.as_deref()) {
        Ok((config, Some(path))) => {
            info!("Configuration loaded from: {}", path.display());
            config
        }
        Ok((config, None)) => {
            debug!("No configuration file found, using defaults");
            config
        }
        Err(e) => {
            warn!("Failed to load configuration: {}", e);
            info!("Falling back to default configuration");
            Config::default()
        }
    };

    apply_overrides(&mut config, args);
    config
}

fn apply_overrides(config: &mut Config, args: &AppArgs) {
    if let Some(theme) = &args.theme {
        match theme.parse::<ThemeName>() {
            Ok(theme) => config.ui.theme = theme,
            Err(e) => warn!("{}", e),
        }
    }

    if let Some(tool) = &args.tool {
        match tool.parse::<ToolKey>() {
            Ok(key) => config.tools.default_tool = key,
            Err(e) => warn!("{}", e),
        }
    }

    if let Some(width) = args.width {
        config.window.width = width;
    }
    if let Some(height) = args.height {
        config.window.height = height;
    }

    if let Err(e) = config.validate() {
        warn!("Ignoring window size override: {}", e);
        config.window = WindowConfig::default();
    }
}

/// Create native options for the application window
fn create_native_options(window: &WindowConfig) -> eframe::NativeOptions {
    debug!("Window {}x{}", window.width, window.height);

    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(devtoolbox::NAME)
            .with_app_id("devtoolbox")
            .with_icon(Arc::new(load_or_create_window_icon()))
            .with_inner_size([window.width, window.height])
            .with_min_inner_size([window.min_width, window.min_height])
            .with_resizable(true)
            .with_drag_and_drop(true),
        renderer: eframe::Renderer::Glow,
        ..Default::default()
    }
}

/// Draw a 32x32 icon: a rounded tile with a pair of braces
fn create_window_icon() -> egui::IconData {
    const SIZE: u32 = 32;
    let background = [24, 26, 33, 255];
    let tile = [97, 175, 239, 255];
    let glyph = [24, 26, 33, 255];
    let clear = [0, 0, 0, 0];

    let mut rgba = Vec::with_capacity((SIZE * SIZE * 4) as usize);
    for y in 0..SIZE {
        for x in 0..SIZE {
            let corner = (x < 3 || x > 28) && (y < 3 || y > 28);
            let pixel = if corner {
                clear
            } else if !(2..30).contains(&x) || !(2..30).contains(&y) {
                background
            } else {
                let left_brace = (x == 10 && (8..24).contains(&y)) || (x == 9 && y == 16);
                let right_brace = (x == 21 && (8..24).contains(&y)) || (x == 22 && y == 16);
                let serif = (y == 8 || y == 23) && (x == 11 || x == 20);
                if left_brace || right_brace || serif {
                    glyph
                } else {
                    tile
                }
            };
            rgba.extend_from_slice(&pixel);
        }
    }

    egui::IconData {
        rgba,
        width: SIZE,
        height: SIZE,
    }
}

/// Try loading `icon.png` from the working directory; fall back to the
/// generated icon
fn load_or_create_window_icon() -> egui::IconData {
    let candidates: [&Path; 2] = [Path::new("icon.png"), Path::new("assets/icon.png")];

    for path in candidates.iter().filter(|p| p.exists()) {
        match image::open(path) {
            Ok(img) => {
                let rgba = img.to_rgba8();
                let (width, height) = rgba.dimensions();
                return egui::IconData {
                    rgba: rgba.into_raw(),
                    width,
                    height,
                };
            }
            Err(e) => warn!("Could not load icon {}: {}", path.display(), e),
        }
    }

    create_window_icon()
}
