//! querydeck CLI - search a backend endpoint and render result cards.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use querydeck::{
    render, Category, ClientError, Contract, ControllerConfig, HttpTransport, InputEvent,
    QueryController, SearchRequest, TextTarget, Transport, TriggerMode,
};

/// querydeck - search results client
#[derive(Parser)]
#[command(name = "querydeck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single search and print the result cards
    Search(SearchArgs),

    /// Read queries from stdin and search after input pauses
    Live(EndpointArgs),
}

#[derive(Parser)]
struct SearchArgs {
    /// Search query
    query: String,

    #[command(flatten)]
    opts: EndpointArgs,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,
}

#[derive(Parser)]
struct EndpointArgs {
    /// Search endpoint URL
    #[arg(short, long, default_value = "http://localhost:5000/search")]
    endpoint: String,

    /// Result category
    #[arg(short = 'c', long, default_value = "web")]
    category: CategoryArg,

    /// Number of results to request
    #[arg(short = 'n', long, default_value = "10")]
    count: u32,

    /// Request timeout in seconds
    #[arg(short, long, default_value = "10")]
    timeout: u64,

    /// Backend wire contract
    #[arg(long, default_value = "get")]
    contract: ContractArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum CategoryArg {
    Web,
    Images,
    News,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Web => Category::Web,
            CategoryArg::Images => Category::Images,
            CategoryArg::News => Category::News,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ContractArg {
    /// GET with a query string, flat JSON array response
    Get,
    /// POST with a form-encoded body, status-wrapped response
    Post,
}

impl From<ContractArg> for Contract {
    fn from(arg: ContractArg) -> Self {
        match arg {
            ContractArg::Get => Contract::Get,
            ContractArg::Post => Contract::Post,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON card descriptors
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    }

    match cli.command {
        Commands::Search(args) => run_search(args).await,
        Commands::Live(args) => run_live(args).await,
    }
}

fn build_transport(args: &EndpointArgs) -> Result<HttpTransport> {
    Ok(HttpTransport::new(&args.endpoint)?
        .with_contract(args.contract.into())
        .with_timeout(Duration::from_secs(args.timeout)))
}

async fn run_search(args: SearchArgs) -> Result<()> {
    let transport = build_transport(&args.opts)?;
    let category = Category::from(args.opts.category);

    let request = SearchRequest::new(&args.query)
        .with_category(category)
        .with_result_count(args.opts.count);

    let outcome = if request.allows_submit_trigger() {
        transport.send(&request).await
    } else {
        Err(ClientError::InvalidQuery("Query cannot be empty".into()))
    };

    let cards = render::render_cards(category, &outcome);
    match args.format {
        OutputFormat::Text => {
            let mut target = TextTarget::stdout();
            render::draw(&mut target, cards);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&cards)?);
        }
    }

    Ok(())
}

async fn run_live(args: EndpointArgs) -> Result<()> {
    let category = Category::from(args.category);
    let config = ControllerConfig {
        trigger_mode: TriggerMode::Live,
        result_count: args.count,
        ..Default::default()
    };
    let transport = Arc::new(build_transport(&args)?);
    let controller = QueryController::new(config, transport, TextTarget::stdout());

    let (events, rx) = mpsc::channel(32);
    events.send(InputEvent::CategorySelected(category)).await?;

    let controller_task = tokio::spawn(controller.run(rx));

    eprintln!("Type to search ({} results per query, Ctrl-D to quit)", args.count);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        events.send(InputEvent::InputChanged(line)).await?;
    }
    drop(events);

    controller_task.await?;
    Ok(())
}
