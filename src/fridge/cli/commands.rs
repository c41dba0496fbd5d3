//! # CLI Dispatch
//!
//! - `run()`: parses arguments, sets up logging and the context, dispatches
//! - `handle_*()`: per-command handlers that drive the [`FridgeView`] and print
//!
//! Handlers never touch the store directly. Adds and removes go through
//! `propose_*` and `commit`, with the terminal [`Prompt`] or [`AssumeYes`]
//! deciding.

use super::prompt::Prompt;
use super::render::{
    print_config, print_groceries, print_grocery, print_items, print_messages,
};
use super::setup::{Cli, Commands, ListArgs};
use clap::Parser;
use colored::*;
use fridge::api::{CmdMessage, ConfigAction};
use fridge::config::FridgeConfig;
use fridge::error::{FridgeError, Result};
use fridge::init::{data_dir, initialize};
use fridge::presenter::{consume_remedy, AssumeYes, Confirm, FridgeView, Outcome};
use fridge::store::sqlite::SqliteStore;
use fridge::view::{GroceryFilter, Sort};
use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

struct AppContext {
    view: FridgeView<SqliteStore>,
    config: FridgeConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let dir = data_dir()?;
    let ctx = initialize(&dir)?;
    let mut ctx = AppContext {
        view: ctx.view,
        config: ctx.config,
    };
    debug!(command = ?cli.command, "dispatching");

    match cli.command {
        Some(Commands::List(args)) => handle_list(&ctx, args),
        Some(Commands::Items { json }) => handle_items(&ctx, json),
        Some(Commands::Show { id }) => handle_show(&ctx, id),
        Some(Commands::Add {
            item,
            section,
            quantity,
            yes,
        }) => handle_add(&mut ctx, &item, &section, &quantity, yes),
        Some(Commands::Use { id }) => handle_use(&mut ctx, id),
        Some(Commands::Remove { id, yes }) => handle_remove(&mut ctx, id, yes),
        Some(Commands::Init { no_seed }) => handle_init(&mut ctx, no_seed),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, ListArgs::default()),
    }
}

/// `RUST_LOG` wins; otherwise `warn`, or `debug` with `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}

fn confirmer(ctx: &AppContext, yes: bool) -> Box<dyn Confirm> {
    if yes || !ctx.config.confirm {
        Box::new(AssumeYes)
    } else {
        Box::new(Prompt)
    }
}

fn handle_list(ctx: &AppContext, args: ListArgs) -> Result<()> {
    let filter = GroceryFilter::new(args.by.into(), args.filter.unwrap_or_default())
        .expiring_only(args.expiring);
    let mut order = Sort::by(args.sort.into());
    if args.desc {
        order = order.descending();
    }

    let rows = ctx.view.visible(&filter, order);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print_groceries(&rows, ctx.view.api().today());
    }
    Ok(())
}

fn handle_items(ctx: &AppContext, json: bool) -> Result<()> {
    let items = ctx.view.items()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        print_items(&items);
    }
    Ok(())
}

fn handle_show(ctx: &AppContext, id: i64) -> Result<()> {
    let grocery = ctx
        .view
        .find(id)?
        .ok_or_else(|| FridgeError::not_found(format!("grocery id {} does not exist", id)))?;
    print_grocery(&grocery, ctx.view.api().today());
    Ok(())
}

fn handle_add(
    ctx: &mut AppContext,
    item: &str,
    section: &str,
    quantity: &str,
    yes: bool,
) -> Result<()> {
    let proposal = ctx.view.propose_add(item, section, quantity)?;
    let mut confirm = confirmer(ctx, yes);

    match ctx.view.commit(proposal, confirm.as_mut())? {
        Outcome::Added(grocery) => {
            print_messages(&[CmdMessage::success(format!(
                "Added {} x {} to {} (id {})",
                grocery.quantity,
                grocery.item_name(),
                grocery.section,
                grocery.id
            ))]);
            print_snapshot(ctx);
        }
        _ => print_messages(&[CmdMessage::info("Cancelled.")]),
    }
    Ok(())
}

fn handle_use(ctx: &mut AppContext, id: i64) -> Result<()> {
    match ctx.view.consume(id) {
        Ok(grocery) => {
            print_messages(&[CmdMessage::success(format!(
                "Used one {}, {} left",
                grocery.item_name(),
                grocery.quantity
            ))]);
            print_snapshot(ctx);
            Ok(())
        }
        Err(err) => {
            if let Some(remedy) = consume_remedy(&err, id) {
                eprintln!("{}", format!("{} Run `fridge remove {}`.", remedy, id).yellow());
            }
            Err(err)
        }
    }
}

fn handle_remove(ctx: &mut AppContext, id: i64, yes: bool) -> Result<()> {
    let proposal = ctx.view.propose_remove(id)?;
    let mut confirm = confirmer(ctx, yes);

    match ctx.view.commit(proposal, confirm.as_mut())? {
        Outcome::Removed(grocery) => {
            print_messages(&[CmdMessage::success(format!(
                "Removed {} {}",
                grocery.id,
                grocery.item_name()
            ))]);
            print_snapshot(ctx);
        }
        _ => print_messages(&[CmdMessage::info("Cancelled.")]),
    }
    Ok(())
}

fn handle_init(ctx: &mut AppContext, no_seed: bool) -> Result<()> {
    let result = ctx.view.api_mut().init(!no_seed)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.view.api().config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_snapshot(ctx: &AppContext) {
    println!();
    print_groceries(ctx.view.snapshot(), ctx.view.api().today());
}
