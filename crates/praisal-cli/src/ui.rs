//! Terminal rendering and interaction for the listing view.

use std::io::{self, Write};

use praisal_view::{ConfirmPrompt, Navigator, Notice, PageModel, Route};

/// Interactive or always-affirmative delete confirmation.
#[derive(Debug, Clone, Copy)]
pub enum Prompt {
    /// Ask on stdin with a y/N prompt.
    Stdin,
    /// Affirm without asking (`--yes`).
    AlwaysYes,
}

impl ConfirmPrompt for Prompt {
    fn confirm_delete(&mut self, label: &str) -> bool {
        match self {
            Prompt::AlwaysYes => true,
            Prompt::Stdin => {
                print!("Delete template '{label}'? This cannot be undone. [y/N] ");
                if io::stdout().flush().is_err() {
                    return false;
                }
                let mut answer = String::new();
                if io::stdin().read_line(&mut answer).is_err() {
                    return false;
                }
                matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
            }
        }
    }
}

/// Navigation sink that explains where the browser shell would send the
/// user.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrintedNav;

impl Navigator for PrintedNav {
    fn navigate(&mut self, route: Route) {
        match route {
            Route::Login => {
                eprintln!("Not signed in. Run `praisal session login <token>` and try again.");
            }
            Route::Home => {
                eprintln!("Your role does not have access to performance templates.");
            }
        }
    }
}

/// Print the page model as a table.
pub fn render_page(page: &PageModel) {
    if let Some(banner) = &page.banner {
        println!("{banner}");
    }
    match &page.notice {
        Some(Notice::Error(text)) => eprintln!("error: {text}"),
        Some(Notice::Info(text)) => println!("{text}"),
        None => {}
    }

    if let Some(empty) = page.empty_state {
        println!("{}", empty.message());
        return;
    }

    let id_width = column_width("ID", page.rows.iter().map(|row| row.id.as_str().len()));
    let name_width = column_width("NAME", page.rows.iter().map(|row| row.name.len()));
    let type_width = column_width("TYPE", page.rows.iter().map(|row| row.template_type.len()));
    let scale_width = column_width("SCALE", page.rows.iter().map(|row| row.scale_type.len()));

    println!(
        "{:<id_width$}  {:<name_width$}  {:<type_width$}  {:<scale_width$}  ACTIONS",
        "ID", "NAME", "TYPE", "SCALE"
    );
    for row in &page.rows {
        let actions = if row.delete_in_flight {
            "view, deleting…"
        } else if row.can_delete {
            "view, delete"
        } else {
            "view"
        };
        println!(
            "{:<id_width$}  {:<name_width$}  {:<type_width$}  {:<scale_width$}  {actions}",
            row.id.as_str(),
            row.name,
            row.template_type,
            row.scale_type
        );
    }

    if page.can_create {
        println!("\nCreate new templates with `praisal` on the web or POST /performance/templates.");
    }
}

fn column_width(header: &str, cells: impl Iterator<Item = usize>) -> usize {
    cells.chain(std::iter::once(header.len())).max().unwrap_or(0)
}
