//! # Command Dispatch
//!
//! 1. **Argument Parsing**: clap, see [`super::setup`]
//! 2. **Logging**: `tracing-subscriber` on stderr, `RUST_LOG` or `--verbose`
//! 3. **Context Setup**: configuration, screen, decorated groups
//! 4. **Dispatch**: one handler per command
//! 5. **Output**: text via [`super::render`], or JSON with `--json`

use super::render::{self, ChangeReport};
use super::setup::{parse_cli, Cli, Commands};
use anyhow::{bail, Context, Result};
use directories::ProjectDirs;
use readerprefs::catalog;
use readerprefs::config::{PrefsConfig, CONFIG_FILE_NAME};
use readerprefs::{
    InMemoryRegistry, PrefValue, PreferenceNode, PreferenceRegistry, PreferencesDecorator,
    PrefsError, SettingsGroup,
};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Everything a handler needs: the screen, its decorator and the groups
/// that were decorated.
struct AppState {
    screen: InMemoryRegistry,
    decorator: PreferencesDecorator,
    groups: Vec<SettingsGroup>,
    json: bool,
}

pub fn run() -> Result<()> {
    let cli = parse_cli();
    init_logging(cli.verbose);

    let command = cli.command.clone().unwrap_or(Commands::Show);
    let strict = matches!(command, Commands::Set { strict: true, .. });
    let mut ctx = create_context(&cli, strict)?;

    match command {
        Commands::Show => handle_show(&ctx, &[]),
        Commands::Set { assignments, .. } => handle_set(&mut ctx, &assignments),
        Commands::Groups => handle_groups(&ctx),
        Commands::Reactions => handle_reactions(&ctx),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Config files in priority order: `--config`, then the per-user file.
fn config_files(cli: &Cli) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if let Some(path) = &cli.config {
        files.push(path.clone());
    }
    if let Some(dirs) = ProjectDirs::from("org", "readerprefs", "readerprefs") {
        files.push(dirs.config_dir().join(CONFIG_FILE_NAME));
    }
    files
}

fn load_config(cli: &Cli) -> Result<PrefsConfig> {
    if let Some(path) = &cli.config {
        if !path.exists() {
            bail!("config file {} does not exist", path.display());
        }
    }
    let files = config_files(cli);
    debug!(?files, "loading configuration");
    PrefsConfig::load(&files).context("failed to load configuration")
}

fn load_screen(cli: &Cli, config: &PrefsConfig) -> Result<InMemoryRegistry> {
    let path = cli.screen.as_deref().or(config.screen());
    let mut screen = match path {
        Some(path) => InMemoryRegistry::load(path)
            .with_context(|| format!("failed to load screen {}", path.display()))?,
        None if cli.no_book => catalog::app_screen()?,
        None => catalog::default_screen()?,
    };
    if cli.no_book {
        for key in SettingsGroup::Book.keys() {
            screen.remove(key);
        }
    }
    Ok(screen)
}

fn create_context(cli: &Cli, strict: bool) -> Result<AppState> {
    let config = load_config(cli)?;
    let groups = if cli.groups.is_empty() {
        config.groups()
    } else {
        cli.groups.clone()
    };
    let mut screen = load_screen(cli, &config)?;

    let mut decorator = PreferencesDecorator::new();
    if strict {
        for key in screen.keys() {
            decorator.guard_slider_range(&mut screen, &key);
        }
    }
    decorator.decorate_groups(&mut screen, &groups);

    Ok(AppState {
        screen,
        decorator,
        groups,
        json: cli.json,
    })
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn handle_show(ctx: &AppState, changes: &[ChangeReport]) -> Result<()> {
    if ctx.json {
        return print_json(&render::screen_json(&ctx.screen, &ctx.groups, changes));
    }
    if !changes.is_empty() {
        print!("{}", render::render_changes(changes));
        println!();
    }
    print!("{}", render::render_screen(&ctx.screen, &ctx.groups));
    Ok(())
}

/// Split `key=value` on the first `=`.
fn parse_assignment(assignment: &str) -> Result<(&str, &str)> {
    match assignment.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value)),
        _ => bail!("expected KEY=VALUE, got '{}'", assignment),
    }
}

fn handle_set(ctx: &mut AppState, assignments: &[String]) -> Result<()> {
    let mut changes = Vec::new();
    for assignment in assignments {
        let (key, raw) = parse_assignment(assignment)?;
        let node = ctx
            .screen
            .find(key)
            .ok_or_else(|| PrefsError::UnknownKey(key.to_string()))?;
        let value = PrefValue::parse_for(key, node.kind(), raw)?;
        let outcome = ctx.decorator.change(&mut ctx.screen, key, value.clone());
        changes.push(ChangeReport {
            key: key.to_string(),
            value,
            outcome,
        });
    }
    handle_show(ctx, &changes)
}

fn handle_groups(ctx: &AppState) -> Result<()> {
    if ctx.json {
        return print_json(&render::groups_json(&ctx.screen));
    }
    print!("{}", render::render_groups(&ctx.screen));
    Ok(())
}

fn handle_reactions(ctx: &AppState) -> Result<()> {
    if ctx.json {
        return print_json(&render::reactions_json(&ctx.screen, &ctx.decorator));
    }
    print!("{}", render::render_reactions(&ctx.screen, &ctx.decorator));
    Ok(())
}
