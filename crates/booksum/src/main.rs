use anyhow::{bail, Context, Result};
use booksum_client::{FormView, HttpSummaryApi, SubmitError, SummaryForm};
use booksum_common::{logger, AppConfig};
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

/// Find project root by looking for .git directory
fn find_project_root() -> Option<PathBuf> {
    let mut current_dir = std::env::current_dir().ok()?;

    loop {
        if current_dir.join(".git").exists() {
            return Some(current_dir);
        }

        if !current_dir.pop() {
            break;
        }
    }

    None
}

/// Load .env file from project root
fn load_dotenv_from_project_root() {
    match find_project_root().map(|root| root.join(".env")) {
        Some(env_path) if env_path.exists() => {
            dotenv::from_path(&env_path).ok();
        }
        _ => {
            dotenv::dotenv().ok();
        }
    }
}

#[derive(Parser)]
#[command(name = "booksum")]
#[command(about = "booksum - book summaries from an LLM provider", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (form page + summary endpoint)
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(long)]
        port: Option<u16>,
    },

    /// Fill in the summary form from the terminal and submit it once
    Summarize {
        /// Base URL of a running booksum server
        #[arg(long, default_value = "http://127.0.0.1:8080")]
        server: String,

        /// Book title (prompted for when omitted)
        #[arg(long)]
        book_name: Option<String>,

        /// Book author (prompted for when omitted)
        #[arg(long)]
        author: Option<String>,

        /// Seconds to wait for the server
        #[arg(long, default_value = "120")]
        timeout: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    load_dotenv_from_project_root();

    match cli.command {
        Some(Commands::Serve { host, port }) => serve(host, port).await,
        Some(Commands::Summarize {
            server,
            book_name,
            author,
            timeout,
        }) => summarize(&server, book_name, author, timeout).await,
        None => serve(None, None).await,
    }
}

async fn serve(host: Option<String>, port: Option<u16>) -> Result<()> {
    let mut config = AppConfig::from_env()?;

    // CLI arguments win over the environment
    if let Some(host) = host {
        config.server_host = host;
    }
    if let Some(port) = port {
        config.server_port = port;
    }

    logger::setup_logging(&config.log_dir, &config.log_level)?;

    tracing::info!("booksum starting...");
    tracing::info!("  Bind: {}", config.server_bind_address());
    tracing::info!("  Provider: {}", config.openai_base_url);
    tracing::info!("  Model: {}", config.llm_model);

    println!("Server listening on http://{}", config.server_bind_address());

    booksum_server::start_server(config)
        .await
        .context("server exited with an error")?;

    Ok(())
}

async fn summarize(
    server: &str,
    book_name: Option<String>,
    author: Option<String>,
    timeout: u64,
) -> Result<()> {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());
    logger::setup_console_logging(&log_level)?;

    let api = HttpSummaryApi::new(server, Duration::from_secs(timeout))?;
    let mut form = SummaryForm::new();

    form.set_book_name(match book_name {
        Some(value) => value,
        None => prompt("Book Name")?,
    });
    form.set_author(match author {
        Some(value) => value,
        None => prompt("Author")?,
    });

    eprintln!("Summarizing...");
    match form.submit(&api).await {
        Ok(()) => {}
        Err(SubmitError::Invalid(errors)) => {
            for message in [errors.book_name, errors.author].into_iter().flatten() {
                eprintln!("{}", message);
            }
            bail!("form is incomplete");
        }
        Err(SubmitError::Busy) => bail!("a request is already in flight"),
    }

    match form.view() {
        FormView::Summary(summary) => {
            println!("{}", summary);
            Ok(())
        }
        FormView::Error(message) => {
            println!("{}", form.output_text());
            bail!("{}", message)
        }
        FormView::Idle | FormView::Loading => bail!("request did not settle"),
    }
}

fn prompt(label: &str) -> Result<String> {
    let mut stderr = io::stderr();
    write!(stderr, "{}: ", label)?;
    stderr.flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .with_context(|| format!("failed to read {}", label))?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_summarize_args() {
        let cli = Cli::try_parse_from([
            "booksum",
            "summarize",
            "--book-name",
            "Dune",
            "--author",
            "Frank Herbert",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Summarize {
                server,
                book_name,
                author,
                timeout,
            }) => {
                assert_eq!(server, "http://127.0.0.1:8080");
                assert_eq!(book_name.as_deref(), Some("Dune"));
                assert_eq!(author.as_deref(), Some("Frank Herbert"));
                assert_eq!(timeout, 120);
            }
            _ => panic!("expected summarize"),
        }
    }

    #[test]
    fn test_serve_overrides() {
        let cli = Cli::try_parse_from(["booksum", "serve", "--port", "9000"]).unwrap();
        match cli.command {
            Some(Commands::Serve { host, port }) => {
                assert_eq!(host, None);
                assert_eq!(port, Some(9000));
            }
            _ => panic!("expected serve"),
        }
    }
}
