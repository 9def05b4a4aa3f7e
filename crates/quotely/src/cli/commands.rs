//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin prompts)
//! - Installs the tracing subscriber
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with the API
//! - `handle_*()`: Per-command handlers that call the API and print results

use super::render::{
    print_messages, render_config, render_customer, render_customer_list, render_import_preview,
};
use super::setup::{Cli, Commands, CreateArgs, CustomerCommands};
use chrono::Local;
use clap::Parser;
use quotelyapp::api::QuotelyApi;
use quotelyapp::document::{DocumentDetails, DocumentRequest, LineItems};
use quotelyapp::error::{QuotelyError, Result};
use quotelyapp::init::initialize;
use quotelyapp::model::Customer;
use quotelyapp::numbering::DocNumber;
use quotelyapp::store::fs_backend::FsBackend;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LOG_ENV: &str = "QUOTELY_LOG";

struct AppContext {
    api: QuotelyApi<FsBackend>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = init_context(&cli)?;
    debug!(command = ?cli.command, "dispatching");

    match cli.command {
        Commands::Create(args) => handle_create(&ctx, args),
        Commands::Customers { action } => match action {
            CustomerCommands::List => handle_list_customers(&ctx),
            CustomerCommands::Show { name } => handle_show_customer(&ctx, &name),
            CustomerCommands::Add {
                name,
                email,
                address,
            } => handle_add_customer(&ctx, name, email, address),
            CustomerCommands::Delete { name, yes } => handle_delete_customer(&ctx, &name, yes),
        },
        Commands::Next => handle_next(&ctx),
        Commands::Reset { yes } => handle_reset(&ctx, yes),
        Commands::Export { dir } => handle_export(&ctx, dir),
        Commands::Import {
            file,
            yes,
            restore_counter,
        } => handle_import(&ctx, file, yes, restore_counter),
        Commands::Config => handle_config(&ctx),
    }
}

/// `--verbose` forces debug; otherwise `QUOTELY_LOG` decides, defaulting to warn.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let ctx = initialize(cli.data_dir.clone())?;
    Ok(AppContext { api: ctx.api })
}

/// Asks a yes/no question on stdin. End of input counts as no.
fn confirm(question: &str) -> Result<bool> {
    print!("{} [y/N] ", question);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

/// Typed addresses use a literal `\n` for line breaks.
fn unescape_lines(s: String) -> String {
    s.replace("\\n", "\n")
}

fn handle_create(ctx: &AppContext, args: CreateArgs) -> Result<()> {
    // Fill in contact details from the saved customer when not given.
    let saved = ctx
        .api
        .show_customer(&args.client)?
        .customers
        .into_iter()
        .next();
    let email = args
        .email
        .or_else(|| saved.as_ref().and_then(|c| c.email.clone()));
    let address = args
        .address
        .map(unescape_lines)
        .or_else(|| saved.as_ref().and_then(|c| c.address.clone()));

    let details = if args.quote {
        let total = args
            .total
            .ok_or_else(|| QuotelyError::Validation("A quote needs a total (--total)".into()))?;
        DocumentDetails::Quote {
            work_description: args.description.map(unescape_lines).unwrap_or_default(),
            total,
        }
    } else {
        let number = match args.number.as_deref() {
            Some(raw) => Some(DocNumber::from_input(raw).ok_or_else(|| {
                QuotelyError::Validation("Invoice number must contain digits".into())
            })?),
            None => None,
        };
        DocumentDetails::Invoice {
            number,
            items: LineItems::from_vec(args.items)?,
        }
    };

    let request = DocumentRequest {
        client: Customer::new(args.client, email, address),
        date: args.date.unwrap_or_else(|| Local::now().date_naive()),
        notes: args.notes.map(unescape_lines),
        details,
    };

    let result = ctx.api.create_document(request, args.save)?;
    if let Some(generated) = &result.document {
        println!("{}", generated.rendered);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_list_customers(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_customers()?;
    print!("{}", render_customer_list(&result.customers));
    print_messages(&result.messages);
    Ok(())
}

fn handle_show_customer(ctx: &AppContext, name: &str) -> Result<()> {
    let result = ctx.api.show_customer(name)?;
    for customer in &result.customers {
        print!("{}", render_customer(customer));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_add_customer(
    ctx: &AppContext,
    name: String,
    email: Option<String>,
    address: Option<String>,
) -> Result<()> {
    let customer = Customer::new(name, email, address.map(unescape_lines));
    let result = ctx.api.save_customer(customer)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete_customer(ctx: &AppContext, name: &str, yes: bool) -> Result<()> {
    if !yes && !confirm(&format!("Delete customer \"{}\"?", name))? {
        println!("Aborted.");
        return Ok(());
    }
    let result = ctx.api.delete_customer(name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_next(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.next_number()?;
    if let Some(number) = result.doc_number {
        println!("Next invoice: {}", number);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_reset(ctx: &AppContext, yes: bool) -> Result<()> {
    if !yes && !confirm("Reset Invoice counter to 0001?")? {
        println!("Aborted.");
        return Ok(());
    }
    let result = ctx.api.reset_counter()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, dir: Option<PathBuf>) -> Result<()> {
    let result = ctx.api.export_backup(dir.as_deref())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &AppContext, file: PathBuf, yes: bool, restore_counter: bool) -> Result<()> {
    let preview = ctx.api.preview_import(&file)?;
    print!("{}", render_import_preview(&preview));

    if !yes
        && !confirm(&format!(
            "Import {} customers? Existing customers with the same name will be updated.",
            preview.customer_count()
        ))?
    {
        println!("Aborted.");
        return Ok(());
    }

    // Restoring the counter is a separate decision from merging customers.
    let restore = match (&preview.snapshot.last_invoice_number, restore_counter, yes) {
        (None, _, _) => false,
        (Some(_), true, _) => true,
        (Some(_), false, true) => false,
        (Some(counter), false, false) => {
            confirm(&format!("Also restore the invoice counter to {}?", counter))?
        }
    };

    let result = ctx.api.import_backup(&preview, restore)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.show_config()?;
    if let Some(config) = &result.config {
        print!("{}", render_config(&config.entries()));
    }
    print_messages(&result.messages);
    Ok(())
}
