use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use docset_core::config::Config;
use docset_core::template::{
    bind_sets, parse_binding, render_particle_doc, Template, PARTICLE_DOC_INDENTATION,
    PARTICLE_DOC_TEMPLATE,
};
use docset_core::{CategorySetFormatter, DocsetError, FormatOptions, QuoteStyle, Result};

mod args;
use args::{Cli, Commands, ConfigAction, FormatArgs, SetsAction, Shell};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let base_dir = resolve_base_dir(cli.base_dir);

    let result = match cli.command {
        Some(Commands::Format {
            categories,
            sets,
            format,
        }) => handle_format(&base_dir, &categories, &sets, &format),
        Some(Commands::Sets { action }) => handle_sets(action, &base_dir),
        Some(Commands::Render {
            template,
            bind,
            output,
            format,
        }) => handle_render(
            &base_dir,
            template.as_deref(),
            &bind,
            output.as_deref(),
            &format,
            cli.quiet,
        ),
        Some(Commands::Config { action }) => handle_config(action, &base_dir),
        Some(Commands::Completions { shell }) => {
            handle_completions(shell);
            Ok(())
        }
        None => {
            Cli::command().print_help().ok();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// `RUST_LOG` wins; otherwise `-v` enables debug output for docset itself.
fn init_tracing(verbose: bool, quiet: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("docset_core=debug,docset=debug")
        } else if quiet {
            EnvFilter::new("error")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(verbose)
        .init();
}

fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let shell = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };
    generate(shell, &mut cmd, "docset", &mut io::stdout());
}

fn resolve_base_dir(cli_base: Option<PathBuf>) -> PathBuf {
    if let Some(base) = cli_base {
        return base;
    }

    if let Ok(base) = std::env::var("DOCSET_BASE") {
        return PathBuf::from(base);
    }

    dirs::home_dir()
        .map(|h| h.join(".docset"))
        .unwrap_or_else(|| PathBuf::from(".docset"))
}

/// Formatting defaults that take precedence over config.toml but not over flags.
#[derive(Default)]
struct Defaults {
    quote: Option<QuoteStyle>,
    indentation: Option<i64>,
}

/// Config defaults overlaid with command-line flags.
fn resolve_options(config: &Config, args: &FormatArgs, defaults: Defaults) -> Result<FormatOptions> {
    let quote = args
        .quote
        .map(QuoteStyle::from)
        .or(defaults.quote)
        .unwrap_or(config.format.quote);
    let indentation = args
        .indent
        .or(defaults.indentation)
        .unwrap_or(config.format.indentation);
    let options = FormatOptions::new(args.width.unwrap_or(config.format.width), indentation)?
        .with_quote(quote);
    debug!(?options, "resolved format options");
    Ok(options)
}

fn handle_format(
    base_dir: &Path,
    categories: &[String],
    sets: &[String],
    args: &FormatArgs,
) -> Result<()> {
    let config = Config::load(base_dir)?;
    let options = resolve_options(&config, args, Defaults::default())?;
    let store = config.category_store();

    let mut members: BTreeSet<String> = store.union(sets)?;
    members.extend(categories.iter().cloned());

    let formatter = CategorySetFormatter::with_options(&members, &options)?;
    info!(
        categories = formatter.sorted().len(),
        lines = formatter.lines().len(),
        "formatted"
    );
    println!("{}", formatter);
    Ok(())
}

fn handle_sets(action: SetsAction, base_dir: &Path) -> Result<()> {
    let config = Config::load(base_dir)?;
    let store = config.category_store();

    match action {
        SetsAction::List { json } => {
            let all = store.all();
            if json {
                println!("{}", serde_json::to_string_pretty(&all)?);
                return Ok(());
            }
            if all.is_empty() {
                println!("No category sets found.");
                return Ok(());
            }
            println!("{}", "Category sets:".bold());
            for def in all {
                let origin = if def.builtin {
                    "builtin".dimmed()
                } else {
                    "config".yellow()
                };
                println!(
                    "  {} ({} members, {})",
                    def.name.cyan(),
                    def.members.len(),
                    origin
                );
                if !def.description.is_empty() {
                    println!("    {}", def.description.dimmed());
                }
            }
        }
        SetsAction::Show { name, json } => {
            let def = store.require(&name)?;
            if json {
                println!("{}", serde_json::to_string_pretty(def)?);
                return Ok(());
            }
            println!("{} {}", "Set:".green(), def.name.cyan());
            if !def.description.is_empty() {
                println!("{}", def.description);
            }
            for member in &def.members {
                println!("  {}", member);
            }
        }
    }

    Ok(())
}

fn handle_render(
    base_dir: &Path,
    template_path: Option<&Path>,
    bind: &[String],
    output: Option<&Path>,
    args: &FormatArgs,
    quiet: bool,
) -> Result<()> {
    let config = Config::load(base_dir)?;
    let store = config.category_store();

    // The builtin particle doc quotes names as rst literals at the placeholder's depth.
    let defaults = match template_path {
        Some(_) => Defaults::default(),
        None => Defaults {
            quote: Some(QuoteStyle::Rst),
            indentation: Some(PARTICLE_DOC_INDENTATION as i64),
        },
    };
    let options = resolve_options(&config, args, defaults)?;

    let rendered = match template_path {
        None if bind.is_empty() => render_particle_doc(&store, &options)?,
        _ => {
            let source = match template_path {
                Some(path) => fs::read_to_string(path)?,
                None => PARTICLE_DOC_TEMPLATE.to_string(),
            };
            let explicit = bind
                .iter()
                .map(|spec| parse_binding(spec))
                .collect::<Result<Vec<_>>>()?;

            let template = Template::parse(&source)?;
            let bindings = bind_sets(&template, &store, &explicit, &options)?;
            template.render(&bindings)?
        }
    };

    match output {
        Some(path) => {
            fs::write(path, &rendered)?;
            if !quiet {
                println!("{} {}", "Rendered:".green(), path.display());
            }
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

fn handle_config(action: ConfigAction, base_dir: &Path) -> Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load(base_dir)?;
            match config.get(&key) {
                Some(value) => println!("{}", value),
                None => {
                    return Err(DocsetError::ConfigKeyNotFound { key });
                }
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load(base_dir)?;
            config.set(&key, &value)?;
            config.save(base_dir)?;
            println!("{} {} = {}", "Set:".green(), key, value);
        }
        ConfigAction::List => {
            let config = Config::load(base_dir)?;
            for (key, value) in config.list() {
                println!("{} = {}", key.cyan(), value);
            }
        }
        ConfigAction::Init => {
            let path = Config::init(base_dir)?;
            println!("{} {}", "Initialized:".green(), path.display());
        }
        ConfigAction::Path => {
            println!("{}", Config::path(base_dir).display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use args::Quote;

    #[test]
    fn test_resolve_options_uses_config() {
        let options =
            resolve_options(&Config::default(), &FormatArgs::default(), Defaults::default())
                .unwrap();
        assert_eq!(options, FormatOptions::default());
    }

    #[test]
    fn test_resolve_options_builtin_defaults_then_flags() {
        let builtin = || Defaults {
            quote: Some(QuoteStyle::Rst),
            indentation: Some(PARTICLE_DOC_INDENTATION as i64),
        };
        let options =
            resolve_options(&Config::default(), &FormatArgs::default(), builtin()).unwrap();
        assert_eq!(options.indentation, PARTICLE_DOC_INDENTATION);
        assert_eq!(options.quote, QuoteStyle::Rst);

        let args = FormatArgs {
            indent: Some(3),
            width: None,
            quote: Some(Quote::Plain),
        };
        let options = resolve_options(&Config::default(), &args, builtin()).unwrap();
        assert_eq!(options.indentation, 3);
        assert_eq!(options.quote, QuoteStyle::Plain);
    }

    #[test]
    fn test_resolve_options_rejects_huge_indent() {
        let args = FormatArgs {
            indent: Some(i64::MAX),
            ..FormatArgs::default()
        };
        let err = resolve_options(&Config::default(), &args, Defaults::default()).unwrap_err();
        assert!(matches!(err, DocsetError::IndentationTooLarge { .. }));
        assert_eq!(err.exit_code(), 2);
    }
}
