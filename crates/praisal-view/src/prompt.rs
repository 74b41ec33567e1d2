//! Host-side seams: confirmation and navigation.
//!
//! The view decides *when* to confirm or leave; the host decides *how*.
//! Browser shells wire these to `window.confirm` and the router, the
//! terminal front-end to stdin and process exit, tests to recording fakes.

/// Where the host can send the user when the view gives up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The login entry point.
    Login,
    /// The default landing page for the user's role.
    Home,
}

/// Asks the user to confirm a destructive action.
pub trait ConfirmPrompt {
    /// Whether the user affirmed deleting the named template.
    ///
    /// `label` is the template's display name, falling back to its
    /// identifier when the name is blank.
    fn confirm_delete(&mut self, label: &str) -> bool;
}

/// Host-side navigation sink.
pub trait Navigator {
    /// Leave the listing for `route`.
    fn navigate(&mut self, route: Route);
}
