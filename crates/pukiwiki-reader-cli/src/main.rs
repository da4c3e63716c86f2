use anyhow::{Context, Result};
use pukiwiki_reader_config::Config;
use pukiwiki_reader_engine::{Document, WikiConfig};
use std::{
    env, fs,
    path::{Path, PathBuf},
    process,
};

/// Engine settings from the config file, or the defaults when there is none.
fn wiki_config(config: Option<Config>) -> WikiConfig {
    let Some(config) = config else {
        return WikiConfig::default();
    };
    WikiConfig {
        convert_line_break: config.convert_line_break,
        source_root: config.source_root,
        include_depth_limit: config.include_depth_limit,
        ..WikiConfig::default()
    }
}

/// `argv[0]`, which a launcher may leave out.
fn program_name(args: &[String]) -> &str {
    args.first().map_or("pukiwiki-reader-cli", String::as_str)
}

fn render_page(page_file: &Path, config: &WikiConfig) -> Result<String> {
    let document = Document::from_file(page_file)
        .with_context(|| format!("Failed to load {}", page_file.display()))?;
    if let Some(title) = document.display_title() {
        log::info!("Rendering {title}");
    }
    document
        .render(config)
        .with_context(|| format!("Failed to render {}", page_file.display()))
}

fn run(page_file: &Path, output_file: Option<&Path>) -> Result<()> {
    let config = Config::load().with_context(|| {
        format!(
            "Failed to load config file '{}'",
            Config::config_path().display()
        )
    })?;
    if config.is_none() {
        log::debug!("No config file found, using defaults");
    }

    let html = render_page(page_file, &wiki_config(config))?;
    match output_file {
        Some(path) => {
            fs::write(path, html).with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Wrote {}", path.display());
        }
        None => println!("{html}"),
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    if !(2..=3).contains(&args.len()) {
        eprintln!("Usage: {} <page-file> [output-file]", program_name(&args));
        process::exit(1);
    }

    let page_file = PathBuf::from(&args[1]);
    let output_file = args.get(2).map(PathBuf::from);

    if let Err(e) = run(&page_file, output_file.as_deref()) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
