use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use textbox_styler::config::{load_config, to_json};
use textbox_styler::{
    BackgroundMode, EditorSession, FieldEdit, GradientDirection, StyleConfiguration, TextboxType,
};

const DEFAULT_LOG_DIRECTIVE: &str = "textbox_styler=info";

#[derive(Parser)]
#[command(name = "textbox-styler", version)]
#[command(about = "Pressbooks Textbox Styler: generate textbox stylesheets")]
struct Cli {
    /// Log filter directive, e.g. `textbox_styler=debug` (RUST_LOG also applies)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a configuration and print its stylesheet
    Generate {
        #[command(flatten)]
        style: StyleArgs,

        /// Write output to file instead of stdout
        #[arg(short)]
        o: Option<PathBuf>,

        /// Output a self-contained HTML preview page instead of the stylesheet
        #[arg(long)]
        html: bool,
    },

    /// Validate a configuration without producing output
    Check {
        #[command(flatten)]
        style: StyleArgs,
    },

    /// Print the default configuration as JSON
    Defaults {
        /// Header-only variant (no text, body or border colors)
        #[arg(long)]
        simple: bool,
    },

    /// Start the local editor (form, live preview, copyable output)
    Serve {
        #[command(flatten)]
        style: StyleArgs,

        /// Server port
        #[arg(long, env = "TEXTBOX_STYLER_PORT", default_value_t = 3434)]
        port: u16,
    },
}

/// Where the configuration comes from, plus per-field overrides.
#[derive(Args)]
struct StyleArgs {
    /// JSON configuration file (defaults when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Header-only variant (no text, body or border colors)
    #[arg(long)]
    simple: bool,

    /// Textbox type: examples, exercises, key-takeaways, learning-objectives
    #[arg(long = "type")]
    textbox_type: Option<TextboxType>,

    /// Background mode: solid, image, gradient, both
    #[arg(long)]
    mode: Option<BackgroundMode>,

    #[arg(long)]
    title: Option<String>,

    #[arg(long)]
    content: Option<String>,

    #[arg(long)]
    image_url: Option<String>,

    #[arg(long)]
    solid_color: Option<String>,

    /// Gradient direction, e.g. "to right" or "to bottom left"
    #[arg(long)]
    direction: Option<GradientDirection>,

    /// First gradient stop
    #[arg(long)]
    gradient_from: Option<String>,

    /// Second gradient stop
    #[arg(long)]
    gradient_to: Option<String>,

    #[arg(long)]
    header_text_color: Option<String>,

    #[arg(long)]
    body_background_color: Option<String>,

    #[arg(long)]
    body_text_color: Option<String>,

    /// Enable the container border with this color
    #[arg(long, conflicts_with = "no_border")]
    border: Option<String>,

    /// Disable the container border
    #[arg(long)]
    no_border: bool,
}

impl StyleArgs {
    /// Overrides as session edits. Type and mode go first so an explicit
    /// solid color is not replaced by the type default afterwards.
    fn edits(&self) -> Vec<FieldEdit> {
        let mut edits = Vec::new();
        if let Some(t) = self.textbox_type {
            edits.push(FieldEdit::TextboxType(t));
        }
        if let Some(m) = self.mode {
            edits.push(FieldEdit::BackgroundMode(m));
        }
        let text_fields: [(&Option<String>, fn(String) -> FieldEdit); 7] = [
            (&self.title, FieldEdit::Title),
            (&self.content, FieldEdit::Content),
            (&self.image_url, FieldEdit::ImageUrl),
            (&self.solid_color, FieldEdit::SolidColor),
            (&self.header_text_color, FieldEdit::HeaderTextColor),
            (&self.body_background_color, FieldEdit::BodyBackgroundColor),
            (&self.body_text_color, FieldEdit::BodyTextColor),
        ];
        for (value, edit) in text_fields {
            if let Some(v) = value {
                edits.push(edit(v.clone()));
            }
        }
        if let Some(d) = self.direction {
            edits.push(FieldEdit::GradientDirection(d));
        }
        for (index, color) in [&self.gradient_from, &self.gradient_to].into_iter().enumerate() {
            if let Some(color) = color {
                edits.push(FieldEdit::GradientColor {
                    index,
                    color: color.clone(),
                });
            }
        }
        if let Some(color) = &self.border {
            edits.push(FieldEdit::BorderEnabled(true));
            edits.push(FieldEdit::BorderColor(color.clone()));
        }
        if self.no_border {
            edits.push(FieldEdit::BorderEnabled(false));
        }
        edits
    }

    fn session(&self) -> Result<EditorSession, String> {
        let mut session = match &self.config {
            Some(path) => {
                let mut config = load_config(path).map_err(|e| e.to_string())?;
                if self.simple {
                    config.palette = None;
                }
                EditorSession::from_saved(config)
            }
            None if self.simple => EditorSession::new(StyleConfiguration::simple()),
            None => EditorSession::new(StyleConfiguration::default()),
        };
        for edit in self.edits() {
            session.apply(edit).map_err(|e| e.to_string())?;
        }
        Ok(session)
    }
}

/// `--log-level` wins; otherwise the crate default applies only when
/// RUST_LOG is unset, so RUST_LOG directives are not overridden.
fn log_directive(level: Option<&str>, env_set: bool) -> Option<&str> {
    match level {
        Some(level) => Some(level),
        None if env_set => None,
        None => Some(DEFAULT_LOG_DIRECTIVE),
    }
}

fn init_logging(level: Option<&str>) {
    let env_set = std::env::var_os(EnvFilter::DEFAULT_ENV).is_some();
    let mut filter = EnvFilter::from_default_env();
    if let Some(directive) = log_directive(level, env_set) {
        match directive.parse::<Directive>() {
            Ok(d) => filter = filter.add_directive(d),
            Err(e) => eprintln!("warning: invalid log level '{directive}': {e}"),
        }
    }
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn session_or_exit(style: &StyleArgs) -> EditorSession {
    match style.session() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    match cli.command {
        Commands::Generate { style, o, html } => {
            let mut session = session_or_exit(&style);
            if session.generate().is_none() {
                eprintln!("error: {}", session.error().unwrap_or("validation failed"));
                process::exit(1);
            }
            let css = session.output().unwrap_or_default();

            let (output_str, kind) = if html {
                (
                    textbox_styler::runtime::preview_page(session.config(), Some(css)),
                    "HTML preview",
                )
            } else {
                (css.to_string(), "stylesheet")
            };

            if let Some(out_path) = o {
                match fs::write(&out_path, &output_str) {
                    Ok(()) => {
                        eprintln!(
                            "wrote {kind} to {} ({} bytes)",
                            out_path.display(),
                            output_str.len()
                        );
                    }
                    Err(e) => {
                        eprintln!("error: cannot write '{}': {e}", out_path.display());
                        process::exit(1);
                    }
                }
            } else {
                print!("{output_str}");
            }
        }

        Commands::Check { style } => {
            let session = session_or_exit(&style);
            match textbox_styler::validate(session.config()) {
                Ok(()) => eprintln!("ok"),
                Err(e) => {
                    eprintln!("error: {e}");
                    process::exit(1);
                }
            }
        }

        Commands::Defaults { simple } => {
            let config = if simple {
                StyleConfiguration::simple()
            } else {
                StyleConfiguration::default()
            };
            println!("{}", to_json(&config));
        }

        Commands::Serve { style, port } => {
            let session = session_or_exit(&style);
            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    eprintln!("error: failed to create tokio runtime: {e}");
                    process::exit(1);
                }
            };
            rt.block_on(async {
                if let Err(e) = textbox_styler::server::run_editor_server(session, port).await {
                    eprintln!("error: editor server failed: {e}");
                    process::exit(1);
                }
            });
        }
    }
}
