use anyhow::Result;
use clap::{Parser, Subcommand};

use relocate::cli::{
    handle_backup_command, handle_baggage_command, handle_cost_command, handle_document_command,
    handle_export_command, handle_family_command, handle_import_command, handle_rates_command,
    handle_task_command,
};
use relocate::config::{paths::RelocatePaths, settings::Settings};
use relocate::display::cost::format_cost_summary;
use relocate::display::checklist::{format_baggage_progress, format_document_progress};
use relocate::display::task::format_task_progress;
use relocate::models::Currency;
use relocate::reports::CostSummaryReport;
use relocate::services::{BaggageService, DocumentService, RateService, TaskService};
use relocate::storage::Storage;

#[derive(Parser)]
#[command(
    name = "relocate",
    version,
    about = "Terminal-based relocation planning dashboard",
    long_about = "RelocateCLI tracks everything an international move involves: \
                  the costs (with payments in multiple currencies), the visa and \
                  document paperwork, the to-do list, the family roster, and the \
                  baggage checklist."
)]
struct Cli {
    /// Display currency for this invocation (BRL, USD, EUR)
    #[arg(long, value_name = "CURRENCY")]
    currency: Option<Currency>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Cost management commands
    #[command(subcommand)]
    Cost(relocate::cli::CostCommands),

    /// Task management commands
    #[command(subcommand)]
    Task(relocate::cli::TaskCommands),

    /// Document checklist commands
    #[command(subcommand, alias = "document")]
    Doc(relocate::cli::DocumentCommands),

    /// Family roster commands
    #[command(subcommand)]
    Family(relocate::cli::FamilyCommands),

    /// Baggage checklist commands
    #[command(subcommand, alias = "baggage")]
    Bag(relocate::cli::BaggageCommands),

    /// Exchange-rate commands
    #[command(subcommand)]
    Rates(relocate::cli::RatesCommands),

    /// Export the plan to CSV, JSON, or YAML
    #[command(subcommand)]
    Export(relocate::cli::ExportCommands),

    /// Import data from external files
    #[command(subcommand)]
    Import(relocate::cli::ImportCommands),

    /// Backup management commands
    #[command(subcommand)]
    Backup(relocate::cli::BackupCommands),

    /// Show the plan-wide dashboard
    Summary,

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = RelocatePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let display = cli.currency.unwrap_or(settings.display_currency);

    let storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Cost(cmd)) => {
            handle_cost_command(&storage, cmd, display)?;
        }
        Some(Commands::Task(cmd)) => {
            handle_task_command(&storage, cmd)?;
        }
        Some(Commands::Doc(cmd)) => {
            handle_document_command(&storage, cmd)?;
        }
        Some(Commands::Family(cmd)) => {
            handle_family_command(&storage, cmd)?;
        }
        Some(Commands::Bag(cmd)) => {
            handle_baggage_command(&storage, cmd)?;
        }
        Some(Commands::Rates(cmd)) => {
            handle_rates_command(&storage, cmd)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&storage, cmd, display)?;
        }
        Some(Commands::Import(cmd)) => {
            handle_import_command(&storage, cmd, display)?;
        }
        Some(Commands::Backup(cmd)) => {
            handle_backup_command(&paths, &settings, cmd)?;
        }
        Some(Commands::Summary) | None => {
            print_summary(&storage, display)?;
        }
        Some(Commands::Init) => {
            println!(
                "Initializing RelocateCLI at: {}",
                paths.base_dir().display()
            );
            relocate::storage::init::initialize_storage(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Next steps:");
            println!("  relocate rates update --brl 5.40 --usd 1.09");
            println!("  relocate cost add \"Flight tickets\" -p 250 -q 4 -c travel");
            println!("  relocate summary");
        }
        Some(Commands::Config) => {
            println!("RelocateCLI Configuration");
            println!("=========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Backup directory: {}", paths.backup_dir().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Display currency: {}", settings.display_currency);
            println!(
                "Backup retention: {} backups",
                settings.backup_retention.max_count
            );
        }
    }

    Ok(())
}

/// Print the plan-wide dashboard: costs, tasks, documents, baggage
fn print_summary(storage: &Storage, display: Currency) -> Result<()> {
    let rate_service = RateService::new(storage);
    let rates = rate_service.snapshot()?;
    let today = chrono::Utc::now().date_naive();

    let report = CostSummaryReport::generate(storage, display, &rates)?;
    print!("{}", format_cost_summary(&report));

    if rate_service.is_stale()? && display != Currency::PIVOT {
        println!("(exchange rates are stale; run `relocate rates update`)");
    }
    println!();

    print!(
        "{}",
        format_task_progress(&TaskService::new(storage).progress(today)?)
    );
    print!(
        "{}",
        format_document_progress(&DocumentService::new(storage).progress(today)?)
    );
    print!(
        "{}",
        format_baggage_progress(&BaggageService::new(storage).progress()?)
    );

    Ok(())
}
