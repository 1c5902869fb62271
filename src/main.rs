//! Icon Stencil CLI
//!
//! Usage:
//!   icon-stencil [OPTIONS]
//!
//! Options:
//!   -o, --out-dir <DIR>    Output directory for the generated icons
//!   -p, --palette <FILE>   Palette file overriding the default colors (TOML format)
//!   -h, --help             Print help

use std::path::PathBuf;

use clap::Parser;

use icon_stencil::{write_icons, GenerateConfig, IconSpec, Palette};

#[derive(Parser)]
#[command(name = "icon-stencil")]
#[command(about = "Placeholder SVG icon generator for extension assets")]
struct Cli {
    /// Output directory for the generated icons
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Palette file overriding the default colors (TOML format)
    #[arg(short, long)]
    palette: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    // Load palette
    let palette = match &cli.palette {
        Some(path) => match Palette::from_file(path) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Error loading palette '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Palette::default(),
    };

    let config = GenerateConfig::new().with_palette(palette);
    match write_icons(&cli.out_dir, &IconSpec::default_set(), &config) {
        Ok(written) => {
            println!(
                "Created {} SVG icons in {}",
                written.len(),
                cli.out_dir.display()
            );
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
