//! Render model for the template listing page.
//!
//! Hosts render this plain data; every role-dependent decision is made
//! before it leaves the view, so templates and terminal tables stay free of
//! policy.

use praisal_core::TemplateId;

use crate::view::Notice;

/// One row of the listing table.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateRow {
    /// Identifier the row's actions target.
    pub id: TemplateId,
    /// Display name.
    pub name: String,
    /// Review category tag, blank when the template has none.
    pub template_type: String,
    /// Rating-scale type tag, blank when absent.
    pub scale_type: String,
    /// Whether a delete control is offered on this row (HR only).
    pub can_delete: bool,
    /// The row's delete is outstanding; the control is disabled and shows a
    /// transient label.
    pub delete_in_flight: bool,
}

/// Wording for an empty listing, which differs by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// HR is invited to create the first template.
    CreateFirst,
    /// Read-only roles are directed to HR.
    ContactHr,
}

impl EmptyState {
    /// The user-visible empty-state message.
    pub fn message(self) -> &'static str {
        match self {
            EmptyState::CreateFirst => {
                "No templates yet. Create your first template to get started."
            }
            EmptyState::ContactHr => "No templates are available. Contact HR.",
        }
    }
}

/// Everything a host needs to render the listing page.
///
/// Every row carries a view link regardless of role; `can_delete` and
/// `can_create` are the role-gated affordances.
#[derive(Debug, Clone, PartialEq)]
pub struct PageModel {
    /// Informational banner for read-only roles.
    pub banner: Option<String>,
    /// Whether the create-new affordance is shown.
    pub can_create: bool,
    /// Table rows, in listing order.
    pub rows: Vec<TemplateRow>,
    /// Shown instead of the table when there are no rows.
    pub empty_state: Option<EmptyState>,
    /// The current notice, if any.
    pub notice: Option<Notice>,
    /// Whether the loading indicator is shown.
    pub loading: bool,
}
