use super::logging;
use super::render::{print_config, print_documents, print_messages};
use super::setup::{Cli, Commands};
use clap::Parser;
use docwatch::api::{ConfigAction, DocumentPatch, DocwatchApi};
use docwatch::error::Result;
use docwatch::init::initialize;
use docwatch::store::fs::FileBlobStore;
use docwatch::view::SortKey;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

struct AppContext {
    api: DocwatchApi<FileBlobStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let ctx = initialize(cli.data_dir.as_deref())?;
    let mut ctx = AppContext { api: ctx.api };

    match cli.command {
        Some(Commands::Add {
            name,
            expires,
            alert,
        }) => handle_add(&mut ctx, name.join(" "), expires, alert),
        Some(Commands::List { search, sort }) => handle_list(&ctx, search, sort),
        Some(Commands::Alerts) => handle_alerts(&ctx),
        Some(Commands::Edit {
            selector,
            name,
            expires,
            alert,
        }) => handle_edit(
            &mut ctx,
            selector,
            DocumentPatch {
                name,
                expiration: expires,
                alert_lead_days: alert,
            },
        ),
        Some(Commands::Remove { selectors }) => handle_remove(&mut ctx, selectors),
        Some(Commands::Export {
            selectors,
            all,
            output,
        }) => handle_export(&ctx, selectors, all, output),
        Some(Commands::Clear { yes }) => handle_clear(&mut ctx, yes),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&ctx, None, None),
    }
}

fn handle_add(
    ctx: &mut AppContext,
    name: String,
    expires: String,
    alert: Option<String>,
) -> Result<()> {
    let result = ctx.api.add_document(&name, &expires, alert.as_deref())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, search: Option<String>, sort: Option<SortKey>) -> Result<()> {
    let result = ctx.api.list_documents(search.as_deref(), sort)?;
    let empty_message = if search.is_some() {
        "No documents match."
    } else {
        "No documents yet. Add one with `docwatch add <name> --expires YYYY-MM-DD`."
    };
    print_documents(&result.listed_documents, empty_message);
    print_messages(&result.messages);
    Ok(())
}

fn handle_alerts(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.alerts()?;
    if !result.listed_documents.is_empty() {
        print_documents(&result.listed_documents, "");
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, selector: String, patch: DocumentPatch) -> Result<()> {
    let result = ctx.api.update_document(&selector, &patch)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, selectors: Vec<String>) -> Result<()> {
    let result = ctx.api.remove_documents(&selectors)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(
    ctx: &AppContext,
    selectors: Vec<String>,
    all: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    let out_dir = output.unwrap_or_else(|| PathBuf::from("."));
    let result = if all {
        ctx.api.export_all(&out_dir)?
    } else {
        ctx.api.export_documents(&selectors, &out_dir)?
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(ctx: &mut AppContext, yes: bool) -> Result<()> {
    let count = ctx.api.documents().len();
    let confirmed = yes || (count > 0 && confirm(&format!("Remove all {} documents?", count))?);
    let result = ctx.api.clear(confirmed)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

/// Asks a yes/no question on the terminal. Non-interactive stdin answers no.
fn confirm(question: &str) -> Result<bool> {
    if !io::stdin().is_terminal() {
        return Ok(false);
    }

    print!("{} [y/N] ", question);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
