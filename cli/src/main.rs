//! docedit CLI - render document templates to HTML pages

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use docedit::templates::SAMPLE;
use docedit::{DocError, HtmlConfig, RenderConfig, TemplateRegistry, render_page};

#[derive(Parser)]
#[command(name = "docedit")]
#[command(version)]
#[command(about = "Render document templates to standalone HTML pages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered template names
    List {
        /// Extra JSON templates to register (name = file stem)
        #[arg(long, value_name = "FILE")]
        load: Vec<PathBuf>,
    },

    /// Render a template to an HTML page
    Render {
        /// Template name
        #[arg(value_name = "TEMPLATE", default_value = SAMPLE)]
        template: String,

        /// Render a JSON template file instead of a registered one
        #[arg(short, long, value_name = "FILE", conflicts_with = "template")]
        file: Option<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Indent the HTML, one element per line
        #[arg(long)]
        pretty: bool,

        /// Emit data-doc-id attributes on sections and subsections
        #[arg(long)]
        ids: bool,

        /// Use each list's requested marker instead of numbering items
        #[arg(long)]
        honor_list_style: bool,

        /// Maximum subsection nesting depth
        #[arg(long, env = "DOCEDIT_MAX_DEPTH", default_value_t = docedit::render::DEFAULT_MAX_DEPTH)]
        max_depth: usize,
    },

    /// Print a registered template as JSON
    Export {
        /// Template name
        #[arg(value_name = "TEMPLATE")]
        template: String,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List { load } => cmd_list(&load),
        Commands::Render {
            template,
            file,
            output,
            pretty,
            ids,
            honor_list_style,
            max_depth,
        } => {
            let render = RenderConfig {
                emit_ids: ids,
                max_depth,
                honor_list_style,
            };
            let html = if pretty {
                HtmlConfig::pretty()
            } else {
                HtmlConfig::minified()
            };
            cmd_render(&template, file.as_deref(), output.as_deref(), &render, &html)
        }
        Commands::Export {
            template,
            output,
            compact,
        } => cmd_export(&template, output.as_deref(), compact),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_list(load: &[PathBuf]) -> Result<(), Box<dyn std::error::Error>> {
    let mut registry = TemplateRegistry::builtin();
    for path in load {
        registry.load_file(path)?;
    }
    for name in registry.names() {
        println!("{}", name);
    }
    Ok(())
}

fn cmd_render(
    template: &str,
    file: Option<&Path>,
    output: Option<&Path>,
    render: &RenderConfig,
    html: &HtmlConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let page = match file {
        Some(path) => {
            let doc = docedit::Doc::from_json_file(path)?;
            render_page(&doc, render, html)?
        }
        None => {
            let registry = TemplateRegistry::builtin();
            render_page(registry.get(template)?, render, html)?
        }
    };
    log::info!("rendered {} bytes of html", page.len());
    write_output(output, &page)
}

fn cmd_export(
    template: &str,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let registry = TemplateRegistry::builtin();
    let doc = registry.get(template)?;
    let json = if compact {
        doc.to_json()?
    } else {
        doc.to_json_pretty()?
    };
    write_output(output, &json)
}

/// Write to a file, or to stdout when no path is given
fn write_output(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| DocError::io(parent, e))?;
            }
            fs::write(path, content).map_err(|e| DocError::io(path, e))?;
            log::info!("wrote {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}
