//! Dispatch from parsed arguments to the API, and from `CmdResult` to the
//! terminal.
//!
//! Handlers follow one shape: call the API, then hand the result to
//! [`AppContext::print_result`], which prints messages, any listed items, and
//! the counters line. Validation problems arrive as error messages inside an
//! `Ok` result and exit 0; only real failures propagate as `Err`.

use super::render::Renderer;
use super::setup::{Cli, Commands, ConfigCommands, ThemeArg};
use chrono::Local;
use clap::Parser;
use shoplist::api::ShoplistApi;
use shoplist::commands::config::ConfigAction;
use shoplist::commands::export::ExportTarget;
use shoplist::commands::import::ImportSource;
use shoplist::commands::theme::ThemeAction;
use shoplist::commands::CmdResult;
use shoplist::config::{ColorChoice, ShoplistConfig};
use shoplist::error::{Result, ShoplistError};
use shoplist::init::initialize;
use shoplist::model::Theme;
use shoplist::sort::SortOrder;
use shoplist::store::fs_backend::FsBackend;
use std::io::Read;
use std::path::{Path, PathBuf};

struct AppContext {
    api: ShoplistApi<FsBackend>,
    config: ShoplistConfig,
    use_color: bool,
    renderer: Renderer,
}

impl AppContext {
    fn print_result(&self, result: &CmdResult) {
        print!("{}", self.renderer.render_messages(&result.messages));
        if !result.listed_items.is_empty() {
            print!("{}", self.renderer.render_list(&result.listed_items));
        }
        if let Some(stats) = &result.stats {
            println!("{}", self.renderer.render_stats(stats));
        }
    }

    /// Re-renders with the palette of a theme that just changed.
    fn switch_theme(&mut self, theme: Theme) {
        self.renderer = Renderer::new(theme, self.use_color);
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add { name, qty }) => handle_add(&ctx, name, qty),
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Edit {
            selector,
            name,
            qty,
        }) => handle_edit(&ctx, selector, name, qty),
        Some(Commands::Check { selectors }) => {
            let result = ctx.api.check_items(&selectors)?;
            ctx.print_result(&result);
            Ok(())
        }
        Some(Commands::Uncheck { selectors }) => {
            let result = ctx.api.uncheck_items(&selectors)?;
            ctx.print_result(&result);
            Ok(())
        }
        Some(Commands::Toggle { selectors }) => {
            let result = ctx.api.toggle_items(&selectors)?;
            ctx.print_result(&result);
            Ok(())
        }
        Some(Commands::Delete { selectors }) => {
            let result = ctx.api.delete_items(&selectors)?;
            ctx.print_result(&result);
            Ok(())
        }
        Some(Commands::Clear) => {
            let result = ctx.api.clear()?;
            ctx.print_result(&result);
            Ok(())
        }
        Some(Commands::Sort { order }) => handle_sort(&ctx, order),
        Some(Commands::Export { stdout, dir }) => handle_export(&ctx, stdout, dir),
        Some(Commands::Import { file }) => handle_import(&ctx, file),
        Some(Commands::Stats) => {
            let result = ctx.api.stats()?;
            ctx.print_result(&result);
            Ok(())
        }
        Some(Commands::Theme { action }) => handle_theme(&mut ctx, action),
        Some(Commands::Config { action }) => handle_config(&ctx, action),
        Some(Commands::Doctor) => {
            let result = ctx.api.doctor()?;
            ctx.print_result(&result);
            Ok(())
        }
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let ctx = initialize(cli.data_dir.clone())?;
    let use_color = color_enabled(cli.no_color, ctx.config.color);
    let theme = ctx.api.store().theme()?;

    Ok(AppContext {
        api: ctx.api,
        config: ctx.config,
        use_color,
        renderer: Renderer::new(theme, use_color),
    })
}

fn color_enabled(no_color: bool, choice: ColorChoice) -> bool {
    if no_color {
        return false;
    }
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => console::colors_enabled(),
    }
}

/// Joins positional words into one name; no words means no name.
fn join_words(words: Vec<String>) -> Option<String> {
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

fn handle_add(ctx: &AppContext, name: Vec<String>, qty: Option<String>) -> Result<()> {
    let name = name.join(" ");
    let result = ctx.api.add_item(&name, qty.as_deref())?;
    ctx.print_result(&result);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_items()?;
    if result.listed_items.is_empty() {
        print!("{}", ctx.renderer.render_list(&[]));
    }
    ctx.print_result(&result);
    Ok(())
}

fn handle_edit(
    ctx: &AppContext,
    selector: String,
    name: Vec<String>,
    qty: Option<String>,
) -> Result<()> {
    let name = join_words(name);
    let result = ctx
        .api
        .edit_item(&selector, name.as_deref(), qty.as_deref())?;
    ctx.print_result(&result);
    Ok(())
}

fn handle_sort(ctx: &AppContext, order: SortOrder) -> Result<()> {
    let result = ctx.api.sort(order)?;
    ctx.print_result(&result);
    Ok(())
}

fn handle_export(ctx: &AppContext, stdout: bool, dir: Option<PathBuf>) -> Result<()> {
    let target = if stdout {
        ExportTarget::Stdout
    } else {
        ExportTarget::Directory(dir.unwrap_or_else(|| ctx.config.export_dir.clone()))
    };
    let today = Local::now().date_naive();
    let result = ctx.api.export(target, today)?;

    // Raw text only, so the output can be redirected into a file.
    if let Some(text) = &result.exported_text {
        println!("{}", text);
        return Ok(());
    }
    ctx.print_result(&result);
    Ok(())
}

fn handle_import(ctx: &AppContext, file: Option<PathBuf>) -> Result<()> {
    let source = match file {
        Some(path) if path != Path::new("-") => ImportSource::File(path),
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(ShoplistError::Io)?;
            ImportSource::Text(buffer)
        }
    };
    let result = ctx.api.import(source)?;
    ctx.print_result(&result);
    Ok(())
}

fn handle_theme(ctx: &mut AppContext, action: Option<ThemeArg>) -> Result<()> {
    let action = match action {
        None => ThemeAction::Show,
        Some(ThemeArg::Light) => ThemeAction::Set(Theme::Light),
        Some(ThemeArg::Dark) => ThemeAction::Set(Theme::Dark),
        Some(ThemeArg::Toggle) => ThemeAction::Toggle,
    };
    let result = ctx.api.theme(action)?;
    if let Some(theme) = result.theme {
        ctx.switch_theme(theme);
    }
    ctx.print_result(&result);
    Ok(())
}

fn handle_config(ctx: &AppContext, action: Option<ConfigCommands>) -> Result<()> {
    let action = match action {
        None => ConfigAction::ShowAll,
        Some(ConfigCommands::Get { key }) => ConfigAction::ShowKey(key),
        Some(ConfigCommands::Set { key, value }) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);
    let result = ctx.api.config(action)?;

    ctx.print_result(&result);
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", ctx.renderer.render_config(&config.list_all()));
        }
    }
    Ok(())
}
