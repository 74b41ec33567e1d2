#![forbid(unsafe_code)]

//! Praisal terminal client
//!
//! Drives the template listing view from a terminal: list the templates
//! your role can see, delete one, and manage the locally stored session
//! token.

mod ui;

use anyhow::Result;
use clap::{Parser, Subcommand};

use praisal_client::{ApiClient, FileTokenStore};
use praisal_core::{Role, TemplateId};
use praisal_view::TemplateListView;

/// Praisal - performance review templates from the terminal
#[derive(Parser, Debug)]
#[command(name = "praisal")]
#[command(about = "Performance review template management", long_about = None)]
struct Args {
    /// Base URL of the performance API
    #[arg(long, env = "PRAISAL_API_URL", default_value = "http://localhost:5000")]
    api_url: String,

    /// Role to act as (hr, manager, employee)
    #[arg(long, env = "PRAISAL_ROLE", default_value = "hr")]
    role: Role,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the template listing for your role
    List,
    /// Delete a template by identifier
    Delete {
        /// Identifier of the template to delete
        id: String,

        /// Skip the interactive confirmation
        #[arg(long)]
        yes: bool,
    },
    /// Manage the locally stored session token
    Session {
        #[command(subcommand)]
        command: SessionCommand,
    },
}

#[derive(Subcommand, Debug)]
enum SessionCommand {
    /// Store a session token obtained from the login flow
    Login {
        /// The opaque bearer token
        token: String,
    },
    /// Forget the stored session token
    Logout,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt::init();

    let tokens = FileTokenStore::default_path()?;

    match args.command {
        Command::Session { command } => run_session(command, &tokens),
        Command::List => run_list(args.role, &args.api_url, tokens).await,
        Command::Delete { id, yes } => {
            run_delete(args.role, &args.api_url, tokens, id, yes).await
        }
    }
}

fn run_session(command: SessionCommand, tokens: &FileTokenStore) -> Result<()> {
    match command {
        SessionCommand::Login { token } => {
            tokens.save(&token)?;
            println!("Session token stored at {}", tokens.path().display());
        }
        SessionCommand::Logout => {
            tokens.clear()?;
            println!("Session token cleared");
        }
    }
    Ok(())
}

async fn run_list(role: Role, api_url: &str, tokens: FileTokenStore) -> Result<()> {
    let mut view = TemplateListView::new(
        role,
        ApiClient::new(api_url),
        tokens,
        ui::Prompt::Stdin,
        ui::PrintedNav,
    );
    if !view.guard() {
        return Ok(());
    }

    view.load().await;
    ui::render_page(&view.page());
    Ok(())
}

async fn run_delete(
    role: Role,
    api_url: &str,
    tokens: FileTokenStore,
    id: String,
    yes: bool,
) -> Result<()> {
    let prompt = if yes { ui::Prompt::AlwaysYes } else { ui::Prompt::Stdin };
    let mut view = TemplateListView::new(
        role,
        ApiClient::new(api_url),
        tokens,
        prompt,
        ui::PrintedNav,
    );
    if !view.guard() {
        return Ok(());
    }

    // Load first so the confirmation can show the template's name and the
    // rendered listing reflects the delete.
    view.load().await;
    view.delete(&TemplateId::new(id)).await;
    ui::render_page(&view.page());
    Ok(())
}
