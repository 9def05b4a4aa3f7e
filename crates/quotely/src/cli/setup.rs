use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use quotelyapp::document::LineItem;
use quotelyapp::money::Money;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "quotely",
    bin_name = "quotely",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Quotes and numbered invoices with a small customer book", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Use this data directory instead of the default
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an invoice (default) or a quote
    #[command(alias = "new", display_order = 1)]
    Create(CreateArgs),

    /// Manage saved customers
    #[command(display_order = 2)]
    Customers {
        #[command(subcommand)]
        action: CustomerCommands,
    },

    /// Show the next invoice number without using it
    #[command(display_order = 10)]
    Next,

    /// Reset the invoice counter so the next invoice is 0001
    #[command(display_order = 11)]
    Reset {
        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Export customers and the invoice counter to a backup file
    #[command(display_order = 20)]
    Export {
        /// Directory to write into (defaults to the output directory)
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },

    /// Merge customers from a backup file
    #[command(display_order = 21)]
    Import {
        /// Backup file to read
        file: PathBuf,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,

        /// Also restore the invoice counter from the backup
        #[arg(long)]
        restore_counter: bool,
    },

    /// Show the effective configuration
    #[command(display_order = 30)]
    Config,
}

#[derive(clap::Args, Debug)]
pub struct CreateArgs {
    /// Create a quote instead of an invoice
    #[arg(long)]
    pub quote: bool,

    /// Client name
    #[arg(long, short = 'c')]
    pub client: String,

    /// Client email
    #[arg(long)]
    pub email: Option<String>,

    /// Client address (use \n for line breaks)
    #[arg(long)]
    pub address: Option<String>,

    /// Document date, YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Free-form notes printed at the bottom
    #[arg(long)]
    pub notes: Option<String>,

    /// Invoice number to use instead of the next one
    #[arg(long, conflicts_with = "quote")]
    pub number: Option<String>,

    /// Invoice line, "description|quantity|price" (repeatable)
    #[arg(long = "item", short = 'i', value_name = "DESC|QTY|PRICE", conflicts_with = "quote")]
    pub items: Vec<LineItem>,

    /// Scope of work for a quote
    #[arg(long, requires = "quote")]
    pub description: Option<String>,

    /// Quote total
    #[arg(long, requires = "quote")]
    pub total: Option<Money>,

    /// Also write the document to the output directory
    #[arg(long, short = 's')]
    pub save: bool,
}

#[derive(Subcommand, Debug)]
pub enum CustomerCommands {
    /// List saved customers
    #[command(alias = "ls")]
    List,

    /// Show one customer
    Show { name: String },

    /// Save or update a customer
    Add {
        name: String,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        address: Option<String>,
    },

    /// Delete a customer
    #[command(alias = "rm")]
    Delete {
        name: String,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },
}
