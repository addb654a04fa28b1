use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;
mod config;
mod preview;
mod render;
mod store;

use store::ItemKind;

#[derive(Parser)]
struct Args {
    /// The command to execute
    #[command(subcommand)]
    command: MdfillCommand,
}

#[derive(Parser)]
struct InitArgs {
    /// The path to initialize the project in
    path: PathBuf,

    /// Whether to create the directory if it doesn't exist
    #[arg(short, long, default_value = "false")]
    create: bool,
}

#[derive(Parser)]
struct RenderArgs {
    /// The template file to render (defaults to the configured working file)
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// The data file to render with (defaults to the configured working file)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Write the output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Wrap the output in a standalone HTML page
    #[arg(short, long, default_value = "false")]
    page: bool,

    /// The path to the configuration file
    #[arg(short, long)]
    config_file: Option<PathBuf>,
}

#[derive(Parser)]
struct ServeArgs {
    /// The address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// The port to bind to
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Open the preview in the default browser
    #[arg(short, long, default_value = "false")]
    open: bool,

    /// The template file to preview (defaults to the configured working file)
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// The data file to preview (defaults to the configured working file)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Sampling interval in milliseconds
    #[arg(short, long)]
    interval: Option<u64>,

    /// The path to the configuration file
    #[arg(short, long)]
    config_file: Option<PathBuf>,
}

#[derive(Parser)]
struct ListArgs {
    /// Limit the listing to one kind of item
    #[arg(value_enum)]
    kind: Option<ItemKind>,

    /// The path to the configuration file
    #[arg(short, long)]
    config_file: Option<PathBuf>,
}

#[derive(Parser)]
struct SaveArgs {
    /// The kind of item to save
    #[arg(value_enum)]
    kind: ItemKind,

    /// The name to save under
    name: String,

    /// The path to the configuration file
    #[arg(short, long)]
    config_file: Option<PathBuf>,
}

#[derive(Parser)]
struct LoadArgs {
    /// The kind of item to load
    #[arg(value_enum)]
    kind: ItemKind,

    /// The saved name to load
    name: String,

    /// The path to the configuration file
    #[arg(short, long)]
    config_file: Option<PathBuf>,
}

#[derive(Parser)]
struct DeleteArgs {
    /// The kind of item to delete
    #[arg(value_enum)]
    kind: ItemKind,

    /// The saved name to delete
    name: String,

    /// Confirm the deletion; nothing is deleted without this flag
    #[arg(short, long, default_value = "false")]
    yes: bool,

    /// The path to the configuration file
    #[arg(short, long)]
    config_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum MdfillCommand {
    /// Initialize a new mdfill project
    Init(InitArgs),

    /// Render the template and data to HTML once
    Render(RenderArgs),

    /// Serve a live preview on a local port
    Serve(ServeArgs),

    /// List saved templates and data records
    List(ListArgs),

    /// Save a working file into the store
    Save(SaveArgs),

    /// Load a saved item into the working file
    Load(LoadArgs),

    /// Delete a saved item from the store
    Delete(DeleteArgs),
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();

    match args.command {
        MdfillCommand::Init(args) => {
            commands::init::run(&args).await?;
        }
        MdfillCommand::Render(args) => {
            commands::render::run(&args).await?;
        }
        MdfillCommand::Serve(args) => {
            commands::serve::run(&args).await?;
        }
        MdfillCommand::List(args) => {
            commands::list::run(&args).await?;
        }
        MdfillCommand::Save(args) => {
            commands::save::run(&args).await?;
        }
        MdfillCommand::Load(args) => {
            commands::load::run(&args).await?;
        }
        MdfillCommand::Delete(args) => {
            commands::delete::run(&args).await?;
        }
    }

    Ok(())
}
