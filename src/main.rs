use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kanban_api::{api, board::Board, client::BoardClient, config::Config, render};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;

#[derive(Parser)]
#[command(name = "kanban-api")]
#[command(about = "HTTP API over a Markdown kanban board")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Address to bind
        #[arg(long, default_value = DEFAULT_HOST)]
        host: String,

        /// Port for HTTP API
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Board directory (overrides KANBAN_DIR)
        #[arg(long)]
        board_dir: Option<PathBuf>,

        /// Active-ticket pointer file (overrides KANBAN_LAST_TICKET)
        #[arg(long)]
        pointer_file: Option<PathBuf>,
    },
    /// List tickets on a running server
    Tickets {
        /// Server URL (overrides KANBAN_URL)
        #[arg(long)]
        url: Option<String>,
    },
    /// Show a ticket's tasks
    Ticket {
        id: String,

        #[arg(long)]
        url: Option<String>,
    },
    /// Show the active ticket's tasks
    Current {
        #[arg(long)]
        url: Option<String>,
    },
    /// Print a task's metadata
    Task {
        name: String,

        #[arg(long)]
        url: Option<String>,
    },
}

/// Initialize tracing with output to stderr (for inspection commands) or stdout
fn init_tracing(use_stderr: bool) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "kanban_api=debug,tower_http=debug".into()),
    );

    if use_stderr {
        // Inspection output goes to stdout, keep logs out of it
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn serve(
    host: &str,
    port: u16,
    board_dir: Option<PathBuf>,
    pointer_file: Option<PathBuf>,
) -> anyhow::Result<()> {
    let config = Config::from_env()?.with_overrides(board_dir, pointer_file)?;
    tracing::info!(
        "Serving board {} (active ticket from {})",
        config.board_dir.display(),
        config.pointer_file.display()
    );

    let app = api::create_router(Board::new(config));

    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    tracing::info!("Kanban API listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}

fn client(url: Option<String>) -> BoardClient {
    url.map(BoardClient::new)
        .unwrap_or_else(BoardClient::from_env)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let use_stderr = !matches!(cli.command, None | Some(Commands::Serve { .. }));
    init_tracing(use_stderr);

    match cli.command {
        Some(Commands::Serve {
            host,
            port,
            board_dir,
            pointer_file,
        }) => serve(&host, port, board_dir, pointer_file).await?,
        Some(Commands::Tickets { url }) => {
            let tickets = client(url).list_tickets().await?;
            print!("{}", render::render_ticket_list(&tickets));
        }
        Some(Commands::Ticket { id, url }) => {
            let ticket = client(url).get_ticket(&id).await?;
            print!("{}", render::render_ticket(&ticket));
        }
        Some(Commands::Current { url }) => {
            let ticket = client(url).current_ticket().await?;
            print!("{}", render::render_ticket(&ticket));
        }
        Some(Commands::Task { name, url }) => {
            let task = client(url).get_task(&name).await?;
            println!("{}", task.metadata);
        }
        None => serve(DEFAULT_HOST, DEFAULT_PORT, None, None).await?,
    }

    Ok(())
}
