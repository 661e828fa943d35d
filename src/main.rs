//! Button Icons CLI
//!
//! Usage:
//!   button-icons [OPTIONS] <COMMAND>
//!
//! Commands:
//!   style      Print the mask-image CSS rule for an icon
//!   inject     Add an icon to rendered button markup
//!   render     Run the block render filter with a TOML attribute bag
//!   icons      List the icon catalog
//!   variables  Print the catalog as CSS custom properties
//!
//! Options:
//!   -c, --config <FILE>  Settings file (TOML format)
//!   -d, --debug          Log diagnostics to stderr

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use button_icons::block::{render_block_button, Block};
use button_icons::markup::parse_root_tag;
use button_icons::style::{catalog_variables, try_generate_icon_style};
use button_icons::{catalog, inject_icon_with_config, IconAttributes, RenderError, Settings};

#[derive(Parser)]
#[command(name = "button-icons")]
#[command(about = "Icon styles and markup for button blocks")]
struct Cli {
    /// Settings file (TOML format)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log diagnostics to stderr
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the mask-image CSS rule for an icon
    Style {
        /// Selector of the rendered block; may be a comma-separated list
        #[arg(short, long)]
        selector: String,

        #[command(flatten)]
        icon: IconArgs,

        /// Icon color
        #[arg(long)]
        color: Option<String>,

        /// Fail on an unknown icon name instead of printing nothing
        #[arg(long)]
        strict: bool,
    },

    /// Add an icon to rendered button markup
    Inject {
        /// Fragment file (reads from stdin if not provided)
        input: Option<PathBuf>,

        #[command(flatten)]
        icon: IconArgs,

        /// Fail when the root tag cannot be parsed
        #[arg(long)]
        strict: bool,
    },

    /// Run the block render filter with a TOML attribute bag
    Render {
        /// Fragment file (reads from stdin if not provided)
        input: Option<PathBuf>,

        /// Attribute bag (TOML format)
        #[arg(short, long)]
        attrs: PathBuf,

        /// Block type name
        #[arg(short, long)]
        block: Option<String>,
    },

    /// List the icon catalog
    Icons,

    /// Print the catalog as CSS custom properties
    Variables,
}

#[derive(Args)]
struct IconArgs {
    /// Catalog icon name
    #[arg(short = 'n', long)]
    icon_name: Option<String>,

    /// File with custom SVG markup
    #[arg(short = 'f', long)]
    icon_file: Option<PathBuf>,

    /// Place the icon before the text
    #[arg(short, long)]
    left: bool,
}

impl IconArgs {
    fn markup(&self) -> Result<Option<String>, RenderError> {
        match &self.icon_file {
            Some(path) => Ok(Some(fs::read_to_string(path)?)),
            None => Ok(None),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), RenderError> {
    let settings = match &cli.config {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };
    debug!(?settings, "settings loaded");

    match cli.command {
        Command::Style {
            selector,
            icon,
            color,
            strict,
        } => {
            let markup = icon.markup()?;
            let config = settings.style.for_position(icon.left);
            let result = try_generate_icon_style(
                &selector,
                markup.as_deref(),
                icon.icon_name.as_deref(),
                color.as_deref(),
                &config,
            );
            let css = match result {
                Ok(css) => css,
                Err(e) if strict => return Err(e.into()),
                Err(e) => {
                    tracing::warn!(%e, "no style generated");
                    String::new()
                }
            };
            if !css.is_empty() {
                println!("{}", css);
            }
        }
        Command::Inject {
            input,
            icon,
            strict,
        } => {
            let fragment = read_input(input.as_deref())?;
            if strict {
                if let Err(e) = parse_root_tag(&fragment) {
                    let name = input
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "<stdin>".to_string());
                    eprintln!("{}", e.format(&fragment, &name));
                    return Err(e.into());
                }
            }
            let markup = icon.markup()?.unwrap_or_default();
            let html = inject_icon_with_config(
                &fragment,
                &markup,
                icon.icon_name.as_deref().unwrap_or_default(),
                icon.left,
                &settings.markup,
            );
            print!("{}", html);
        }
        Command::Render {
            input,
            attrs,
            block,
        } => {
            let fragment = read_input(input.as_deref())?;
            let attrs = IconAttributes::from_toml(&fs::read_to_string(&attrs)?)?;
            let name = block.unwrap_or_else(|| settings.block_name.clone());
            let block = Block::new(name, attrs);
            print!("{}", render_block_button(&fragment, &block, &settings));
        }
        Command::Icons => {
            for icon in catalog::flatten() {
                println!("{}\t{}", icon.name, icon.label);
            }
        }
        Command::Variables => {
            println!("{}", catalog_variables());
        }
    }

    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String, RenderError> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
