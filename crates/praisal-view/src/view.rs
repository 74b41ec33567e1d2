//! The template listing view.

use std::collections::HashSet;

use praisal_core::{GatewayError, Role, TemplateGateway, TemplateId, TemplateSummary, TokenStore};

use crate::page::{EmptyState, PageModel, TemplateRow};
use crate::prompt::{ConfirmPrompt, Navigator, Route};

/// Message strings surfaced by the listing view.
pub mod messages {
    /// An operation was attempted with no stored session token.
    pub const NOT_LOGGED_IN: &str = "You are not logged in. Please log in to continue.";
    /// Listing request rejected with 403.
    pub const LIST_FORBIDDEN: &str =
        "You do not have permission to view performance templates.";
    /// Listing request rejected with 401.
    pub const SESSION_EXPIRED: &str = "Your session has expired. Please log in again.";
    /// Listing request failed for connectivity or unclassified reasons.
    pub const LIST_FAILED: &str =
        "Could not load templates. Please check your connection and try again.";
    /// Every fetched template was filtered out for this role.
    pub const NO_ACTIVE_TEMPLATES: &str =
        "No active templates are available right now. Contact HR if you were expecting one.";
    /// Delete rejected with 403.
    pub const DELETE_FORBIDDEN: &str = "You do not have permission to delete templates.";
    /// Delete failed and the server gave no usable message.
    pub const DELETE_FAILED: &str = "Could not delete the template. Please try again.";
    /// Banner shown to read-only roles above the listing.
    pub const READ_ONLY_BANNER: &str =
        "Templates are managed by HR. You have read-only access.";
}

/// The single user-visible message slot. At most one notice is shown at a
/// time; each operation replaces whatever was there before.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Something went wrong.
    Error(String),
    /// An informational condition that is not a failure.
    Info(String),
}

/// The template listing view.
///
/// Generic over its collaborators (gateway, token store, confirmation
/// prompt, navigator) so hosts and tests can substitute any of them. The
/// view is the only writer of its own state; hosts read it back through
/// [`TemplateListView::page`].
pub struct TemplateListView<G, T, C, N> {
    role: Role,
    gateway: G,
    tokens: T,
    confirm: C,
    nav: N,
    templates: Vec<TemplateSummary>,
    loading: bool,
    deleting: HashSet<TemplateId>,
    notice: Option<Notice>,
}

impl<G, T, C, N> TemplateListView<G, T, C, N>
where
    G: TemplateGateway,
    T: TokenStore,
    C: ConfirmPrompt,
    N: Navigator,
{
    /// Create a view for `role` with its collaborators.
    pub fn new(role: Role, gateway: G, tokens: T, confirm: C, nav: N) -> Self {
        Self {
            role,
            gateway,
            tokens,
            confirm,
            nav,
            templates: Vec::new(),
            loading: false,
            deleting: HashSet::new(),
            notice: None,
        }
    }

    /// Access check applied when the view is entered.
    ///
    /// Roles outside HR and Manager are sent to their landing page and get
    /// `false` back. This is a courtesy redirect, not access control; the
    /// server stays authoritative for every request.
    pub fn guard(&mut self) -> bool {
        if self.role.can_view_templates() {
            true
        } else {
            self.nav.navigate(Route::Home);
            false
        }
    }

    /// Fetch the listing and replace the displayed rows.
    ///
    /// The loading indicator is cleared on every path out of here.
    pub async fn load(&mut self) {
        self.loading = true;
        self.load_inner().await;
        self.loading = false;
    }

    async fn load_inner(&mut self) {
        let Some(token) = self.tokens.token() else {
            self.templates.clear();
            self.notice = Some(Notice::Error(messages::NOT_LOGGED_IN.into()));
            self.nav.navigate(Route::Login);
            return;
        };

        match self.gateway.list_templates(&token).await {
            Ok(fetched) => {
                let had_entries = !fetched.is_empty();
                let visible: Vec<TemplateSummary> = if self.role.sees_only_active() {
                    fetched
                        .into_iter()
                        .filter(|template| template.is_effectively_active())
                        .collect()
                } else {
                    fetched
                };

                self.notice = if had_entries && visible.is_empty() {
                    Some(Notice::Info(messages::NO_ACTIVE_TEMPLATES.into()))
                } else {
                    None
                };
                self.templates = visible;
            }
            Err(GatewayError::Forbidden) => {
                self.templates.clear();
                self.notice = Some(Notice::Error(messages::LIST_FORBIDDEN.into()));
            }
            Err(GatewayError::Unauthorized) => {
                self.templates.clear();
                self.notice = Some(Notice::Error(messages::SESSION_EXPIRED.into()));
                self.nav.navigate(Route::Login);
            }
            Err(other) => {
                log::warn!("Template listing failed: {other}");
                self.templates.clear();
                let text = other
                    .server_message()
                    .map(str::to_string)
                    .unwrap_or_else(|| messages::LIST_FAILED.to_string());
                self.notice = Some(Notice::Error(text));
            }
        }
    }

    /// Confirm and delete one template, then reload the listing.
    ///
    /// Declining the confirmation is a complete no-op, as is re-triggering
    /// an identifier whose delete is already outstanding. On failure the
    /// displayed rows are left untouched.
    pub async fn delete(&mut self, id: &TemplateId) {
        if self.deleting.contains(id) {
            return;
        }

        let label = self
            .templates
            .iter()
            .find(|template| template.id == *id)
            .map(|template| template.name.clone())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| id.to_string());
        if !self.confirm.confirm_delete(&label) {
            return;
        }

        let Some(token) = self.tokens.token() else {
            self.notice = Some(Notice::Error(messages::NOT_LOGGED_IN.into()));
            self.nav.navigate(Route::Login);
            return;
        };

        self.deleting.insert(id.clone());
        let result = self.gateway.delete_template(&token, id).await;
        self.deleting.remove(id);

        match result {
            Ok(()) => self.load().await,
            Err(GatewayError::Forbidden) => {
                self.notice = Some(Notice::Error(messages::DELETE_FORBIDDEN.into()));
            }
            Err(GatewayError::BadRequest { message }) => {
                self.notice = Some(Notice::Error(
                    message.unwrap_or_else(|| messages::DELETE_FAILED.to_string()),
                ));
            }
            Err(other) => {
                log::warn!("Template delete failed: {other}");
                self.notice = Some(Notice::Error(messages::DELETE_FAILED.into()));
            }
        }
    }

    /// The rows currently displayed.
    pub fn templates(&self) -> &[TemplateSummary] {
        &self.templates
    }

    /// Whether a listing fetch is outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the delete for `id` is outstanding.
    pub fn is_deleting(&self, id: &TemplateId) -> bool {
        self.deleting.contains(id)
    }

    /// The current notice, if any.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// The role this view was opened with.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Build the render model for the current state.
    pub fn page(&self) -> PageModel {
        let can_manage = self.role.can_manage_templates();

        let rows: Vec<TemplateRow> = self
            .templates
            .iter()
            .map(|template| TemplateRow {
                id: template.id.clone(),
                name: template.name.clone(),
                template_type: template
                    .template_type
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_default(),
                scale_type: template.scale_type().to_string(),
                can_delete: can_manage,
                delete_in_flight: self.deleting.contains(&template.id),
            })
            .collect();

        let empty_state = if rows.is_empty() && !self.loading {
            Some(if can_manage {
                EmptyState::CreateFirst
            } else {
                EmptyState::ContactHr
            })
        } else {
            None
        };

        PageModel {
            banner: (!can_manage).then(|| messages::READ_ONLY_BANNER.to_string()),
            can_create: can_manage,
            rows,
            empty_state,
            notice: self.notice.clone(),
            loading: self.loading,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use praisal_core::MemoryTokenStore;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    // ------------------------------------------------------------------
    // Fakes
    // ------------------------------------------------------------------

    #[derive(Default)]
    struct FakeGatewayState {
        list_results: VecDeque<Result<Vec<TemplateSummary>, GatewayError>>,
        delete_result: Option<Result<(), GatewayError>>,
        list_calls: usize,
        deleted: Vec<TemplateId>,
    }

    #[derive(Clone, Default)]
    struct FakeGateway {
        state: Arc<Mutex<FakeGatewayState>>,
    }

    impl FakeGateway {
        fn next_list(&self, result: Result<Vec<TemplateSummary>, GatewayError>) -> &Self {
            self.state.lock().unwrap().list_results.push_back(result);
            self
        }

        fn on_delete(&self, result: Result<(), GatewayError>) -> &Self {
            self.state.lock().unwrap().delete_result = Some(result);
            self
        }

        fn list_calls(&self) -> usize {
            self.state.lock().unwrap().list_calls
        }

        fn deleted(&self) -> Vec<TemplateId> {
            self.state.lock().unwrap().deleted.clone()
        }
    }

    #[async_trait]
    impl TemplateGateway for FakeGateway {
        async fn list_templates(
            &self,
            _token: &str,
        ) -> Result<Vec<TemplateSummary>, GatewayError> {
            let mut state = self.state.lock().unwrap();
            state.list_calls += 1;
            state.list_results.pop_front().unwrap_or_else(|| Ok(Vec::new()))
        }

        async fn delete_template(
            &self,
            _token: &str,
            id: &TemplateId,
        ) -> Result<(), GatewayError> {
            let mut state = self.state.lock().unwrap();
            state.deleted.push(id.clone());
            state.delete_result.take().unwrap_or(Ok(()))
        }
    }

    #[derive(Clone, Default)]
    struct FakeNav {
        routes: Arc<Mutex<Vec<Route>>>,
    }

    impl FakeNav {
        fn routes(&self) -> Vec<Route> {
            self.routes.lock().unwrap().clone()
        }
    }

    impl Navigator for FakeNav {
        fn navigate(&mut self, route: Route) {
            self.routes.lock().unwrap().push(route);
        }
    }

    #[derive(Clone)]
    struct FakePrompt {
        answer: bool,
        asked: Arc<Mutex<Vec<String>>>,
    }

    impl FakePrompt {
        fn answering(answer: bool) -> Self {
            Self {
                answer,
                asked: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn asked(&self) -> Vec<String> {
            self.asked.lock().unwrap().clone()
        }
    }

    impl ConfirmPrompt for FakePrompt {
        fn confirm_delete(&mut self, label: &str) -> bool {
            self.asked.lock().unwrap().push(label.to_string());
            self.answer
        }
    }

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    fn summary(id: &str, name: &str, active: Option<bool>) -> TemplateSummary {
        let mut value = serde_json::json!({"_id": id, "name": name});
        if let Some(active) = active {
            value["isActive"] = serde_json::json!(active);
        }
        serde_json::from_value(value).unwrap()
    }

    fn view_for(
        role: Role,
        gateway: &FakeGateway,
        prompt: &FakePrompt,
        nav: &FakeNav,
    ) -> TemplateListView<FakeGateway, MemoryTokenStore, FakePrompt, FakeNav> {
        TemplateListView::new(
            role,
            gateway.clone(),
            MemoryTokenStore::with_token("tok-1"),
            prompt.clone(),
            nav.clone(),
        )
    }

    fn default_parts() -> (FakeGateway, FakePrompt, FakeNav) {
        (FakeGateway::default(), FakePrompt::answering(true), FakeNav::default())
    }

    // ------------------------------------------------------------------
    // Guard
    // ------------------------------------------------------------------

    #[test]
    fn test_guard_allows_hr_and_manager() {
        for role in [Role::Hr, Role::Manager] {
            let (gateway, prompt, nav) = default_parts();
            let mut view = view_for(role, &gateway, &prompt, &nav);
            assert!(view.guard());
            assert!(nav.routes().is_empty());
        }
    }

    #[test]
    fn test_guard_sends_other_roles_home() {
        let (gateway, prompt, nav) = default_parts();
        let mut view = view_for(Role::Employee, &gateway, &prompt, &nav);
        assert!(!view.guard());
        assert_eq!(nav.routes(), vec![Route::Home]);
    }

    // ------------------------------------------------------------------
    // Load
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn test_missing_token_skips_network_and_redirects_to_login() {
        let (gateway, prompt, nav) = default_parts();
        let mut view = TemplateListView::new(
            Role::Hr,
            gateway.clone(),
            MemoryTokenStore::empty(),
            prompt,
            nav.clone(),
        );

        view.load().await;

        assert_eq!(gateway.list_calls(), 0);
        assert_eq!(nav.routes(), vec![Route::Login]);
        assert_eq!(
            view.notice(),
            Some(&Notice::Error(messages::NOT_LOGGED_IN.to_string()))
        );
        assert!(view.templates().is_empty());
        assert!(!view.is_loading());
    }

    #[tokio::test]
    async fn test_hr_sees_the_unfiltered_listing() {
        let (gateway, prompt, nav) = default_parts();
        gateway.next_list(Ok(vec![
            summary("1", "Q1 Review", Some(false)),
            summary("2", "Annual 360", Some(true)),
            summary("3", "Check-in", None),
        ]));
        let mut view = view_for(Role::Hr, &gateway, &prompt, &nav);

        view.load().await;

        assert_eq!(view.templates().len(), 3);
        assert_eq!(view.notice(), None);
    }

    #[tokio::test]
    async fn test_manager_only_sees_entries_not_explicitly_inactive() {
        let (gateway, prompt, nav) = default_parts();
        gateway.next_list(Ok(vec![
            summary("1", "Q1 Review", Some(false)),
            summary("2", "Annual 360", Some(true)),
            summary("3", "Check-in", None),
        ]));
        let mut view = view_for(Role::Manager, &gateway, &prompt, &nav);

        view.load().await;

        let ids: Vec<&str> = view.templates().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3"]);
        assert_eq!(view.notice(), None);
    }

    #[tokio::test]
    async fn test_manager_with_everything_filtered_gets_the_info_notice() {
        let (gateway, prompt, nav) = default_parts();
        gateway.next_list(Ok(vec![summary("1", "Q1 Review", Some(false))]));
        let mut view = view_for(Role::Manager, &gateway, &prompt, &nav);

        view.load().await;

        assert!(view.templates().is_empty());
        assert_eq!(
            view.notice(),
            Some(&Notice::Info(messages::NO_ACTIVE_TEMPLATES.to_string()))
        );
    }

    #[tokio::test]
    async fn test_same_inactive_fetch_differs_by_role() {
        // {data:[{_id:"1",name:"Q1 Review",templateType:"self",isActive:false}]}
        let entry: TemplateSummary = serde_json::from_value(serde_json::json!({
            "_id": "1", "name": "Q1 Review", "templateType": "self", "isActive": false
        }))
        .unwrap();

        let (gateway, prompt, nav) = default_parts();
        gateway.next_list(Ok(vec![entry.clone()]));
        let mut manager = view_for(Role::Manager, &gateway, &prompt, &nav);
        manager.load().await;
        assert!(manager.templates().is_empty());
        assert_eq!(
            manager.notice(),
            Some(&Notice::Info(messages::NO_ACTIVE_TEMPLATES.to_string()))
        );

        let (gateway, prompt, nav) = default_parts();
        gateway.next_list(Ok(vec![entry]));
        let mut hr = view_for(Role::Hr, &gateway, &prompt, &nav);
        hr.load().await;
        let page = hr.page();
        assert_eq!(page.rows.len(), 1);
        assert_eq!(page.rows[0].name, "Q1 Review");
        assert_eq!(page.rows[0].template_type, "self");
        assert_eq!(page.rows[0].scale_type, "");
    }

    #[tokio::test]
    async fn test_empty_source_listing_sets_no_notice() {
        let (gateway, prompt, nav) = default_parts();
        gateway.next_list(Ok(Vec::new()));
        let mut view = view_for(Role::Manager, &gateway, &prompt, &nav);

        view.load().await;

        assert!(view.templates().is_empty());
        assert_eq!(view.notice(), None);
    }

    #[tokio::test]
    async fn test_load_forbidden_clears_rows_with_permission_message() {
        let (gateway, prompt, nav) = default_parts();
        gateway
            .next_list(Ok(vec![summary("1", "Q1", None)]))
            .next_list(Err(GatewayError::Forbidden));
        let mut view = view_for(Role::Hr, &gateway, &prompt, &nav);

        view.load().await;
        assert_eq!(view.templates().len(), 1);

        view.load().await;
        assert!(view.templates().is_empty());
        assert_eq!(
            view.notice(),
            Some(&Notice::Error(messages::LIST_FORBIDDEN.to_string()))
        );
        assert!(nav.routes().is_empty());
    }

    #[tokio::test]
    async fn test_load_unauthorized_redirects_to_login() {
        let (gateway, prompt, nav) = default_parts();
        gateway.next_list(Err(GatewayError::Unauthorized));
        let mut view = view_for(Role::Hr, &gateway, &prompt, &nav);

        view.load().await;

        assert!(view.templates().is_empty());
        assert_eq!(
            view.notice(),
            Some(&Notice::Error(messages::SESSION_EXPIRED.to_string()))
        );
        assert_eq!(nav.routes(), vec![Route::Login]);
    }

    #[tokio::test]
    async fn test_load_failure_prefers_the_server_message() {
        let (gateway, prompt, nav) = default_parts();
        gateway.next_list(Err(GatewayError::Unexpected {
            status: 500,
            message: Some("database unavailable".to_string()),
        }));
        let mut view = view_for(Role::Hr, &gateway, &prompt, &nav);

        view.load().await;

        assert_eq!(
            view.notice(),
            Some(&Notice::Error("database unavailable".to_string()))
        );
    }

    #[tokio::test]
    async fn test_load_transport_failure_uses_the_generic_message() {
        let (gateway, prompt, nav) = default_parts();
        gateway.next_list(Err(GatewayError::Transport("connection refused".to_string())));
        let mut view = view_for(Role::Hr, &gateway, &prompt, &nav);

        view.load().await;

        assert_eq!(
            view.notice(),
            Some(&Notice::Error(messages::LIST_FAILED.to_string()))
        );
        assert!(!view.is_loading());
    }

    #[tokio::test]
    async fn test_successful_load_clears_a_prior_error() {
        let (gateway, prompt, nav) = default_parts();
        gateway
            .next_list(Err(GatewayError::Forbidden))
            .next_list(Ok(vec![summary("1", "Q1", None)]));
        let mut view = view_for(Role::Hr, &gateway, &prompt, &nav);

        view.load().await;
        assert!(view.notice().is_some());

        view.load().await;
        assert_eq!(view.notice(), None);
        assert_eq!(view.templates().len(), 1);
    }

    // ------------------------------------------------------------------
    // Delete
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn test_confirmed_delete_reloads_exactly_once() {
        let (gateway, prompt, nav) = default_parts();
        gateway
            .next_list(Ok(vec![summary("1", "Q1 Review", None)]))
            .next_list(Ok(Vec::new()));
        let mut view = view_for(Role::Hr, &gateway, &prompt, &nav);
        view.load().await;

        let id = TemplateId::new("1");
        view.delete(&id).await;

        assert_eq!(gateway.deleted(), vec![id.clone()]);
        assert_eq!(gateway.list_calls(), 2);
        assert!(!view.is_deleting(&id));
        assert!(view.templates().is_empty());
    }

    #[tokio::test]
    async fn test_declined_confirmation_is_a_complete_noop() {
        let (gateway, _, nav) = default_parts();
        let prompt = FakePrompt::answering(false);
        gateway.next_list(Ok(vec![summary("1", "Q1 Review", None)]));
        let mut view = view_for(Role::Hr, &gateway, &prompt, &nav);
        view.load().await;

        view.delete(&TemplateId::new("1")).await;

        assert!(gateway.deleted().is_empty());
        assert_eq!(gateway.list_calls(), 1);
        assert_eq!(view.templates().len(), 1);
        assert_eq!(view.notice(), None);
    }

    #[tokio::test]
    async fn test_delete_forbidden_keeps_rows_and_sets_permission_message() {
        let (gateway, prompt, nav) = default_parts();
        gateway
            .next_list(Ok(vec![summary("1", "Q1 Review", None)]))
            .on_delete(Err(GatewayError::Forbidden));
        let mut view = view_for(Role::Hr, &gateway, &prompt, &nav);
        view.load().await;

        let id = TemplateId::new("1");
        view.delete(&id).await;

        assert_eq!(view.templates().len(), 1);
        assert_eq!(
            view.notice(),
            Some(&Notice::Error(messages::DELETE_FORBIDDEN.to_string()))
        );
        assert!(!view.is_deleting(&id));
        assert_eq!(gateway.list_calls(), 1);
    }

    #[tokio::test]
    async fn test_delete_bad_request_surfaces_the_server_message() {
        let (gateway, prompt, nav) = default_parts();
        gateway
            .next_list(Ok(vec![summary("1", "Q1 Review", None)]))
            .on_delete(Err(GatewayError::BadRequest {
                message: Some("template is in use".to_string()),
            }));
        let mut view = view_for(Role::Hr, &gateway, &prompt, &nav);
        view.load().await;

        view.delete(&TemplateId::new("1")).await;

        assert_eq!(
            view.notice(),
            Some(&Notice::Error("template is in use".to_string()))
        );
        assert_eq!(view.templates().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_bad_request_without_message_uses_the_generic_one() {
        let (gateway, prompt, nav) = default_parts();
        gateway
            .next_list(Ok(vec![summary("1", "Q1 Review", None)]))
            .on_delete(Err(GatewayError::BadRequest { message: None }));
        let mut view = view_for(Role::Hr, &gateway, &prompt, &nav);
        view.load().await;

        view.delete(&TemplateId::new("1")).await;

        assert_eq!(
            view.notice(),
            Some(&Notice::Error(messages::DELETE_FAILED.to_string()))
        );
    }

    #[tokio::test]
    async fn test_delete_transport_failure_uses_the_generic_message() {
        let (gateway, prompt, nav) = default_parts();
        gateway
            .next_list(Ok(vec![summary("1", "Q1 Review", None)]))
            .on_delete(Err(GatewayError::Transport("reset by peer".to_string())));
        let mut view = view_for(Role::Hr, &gateway, &prompt, &nav);
        view.load().await;

        view.delete(&TemplateId::new("1")).await;

        assert_eq!(
            view.notice(),
            Some(&Notice::Error(messages::DELETE_FAILED.to_string()))
        );
        assert_eq!(view.templates().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_without_token_redirects_without_a_network_call() {
        let (gateway, prompt, nav) = default_parts();
        let mut view = TemplateListView::new(
            Role::Hr,
            gateway.clone(),
            MemoryTokenStore::empty(),
            prompt,
            nav.clone(),
        );

        view.delete(&TemplateId::new("1")).await;

        assert!(gateway.deleted().is_empty());
        assert_eq!(nav.routes(), vec![Route::Login]);
        assert_eq!(
            view.notice(),
            Some(&Notice::Error(messages::NOT_LOGGED_IN.to_string()))
        );
    }

    #[tokio::test]
    async fn test_confirmation_label_prefers_the_template_name() {
        let (gateway, prompt, nav) = default_parts();
        gateway.next_list(Ok(vec![summary("1", "Q1 Review", None)]));
        let mut view = view_for(Role::Hr, &gateway, &prompt, &nav);
        view.load().await;

        view.delete(&TemplateId::new("1")).await;
        assert_eq!(prompt.asked(), vec!["Q1 Review".to_string()]);
    }

    #[tokio::test]
    async fn test_confirmation_label_falls_back_to_the_identifier() {
        let (gateway, prompt, nav) = default_parts();
        gateway.next_list(Ok(vec![summary("66a1f0", "", None)]));
        let mut view = view_for(Role::Hr, &gateway, &prompt, &nav);
        view.load().await;

        view.delete(&TemplateId::new("66a1f0")).await;
        assert_eq!(prompt.asked(), vec!["66a1f0".to_string()]);
    }

    // ------------------------------------------------------------------
    // Page model
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn test_hr_page_offers_create_and_delete() {
        let (gateway, prompt, nav) = default_parts();
        gateway.next_list(Ok(vec![summary("1", "Q1 Review", None)]));
        let mut view = view_for(Role::Hr, &gateway, &prompt, &nav);
        view.load().await;

        let page = view.page();
        assert!(page.can_create);
        assert_eq!(page.banner, None);
        assert_eq!(page.rows.len(), 1);
        assert!(page.rows[0].can_delete);
        assert!(!page.rows[0].delete_in_flight);
        assert_eq!(page.empty_state, None);
    }

    #[tokio::test]
    async fn test_manager_page_is_read_only_with_banner() {
        let (gateway, prompt, nav) = default_parts();
        gateway.next_list(Ok(vec![summary("1", "Q1 Review", Some(true))]));
        let mut view = view_for(Role::Manager, &gateway, &prompt, &nav);
        view.load().await;

        let page = view.page();
        assert!(!page.can_create);
        assert_eq!(page.banner, Some(messages::READ_ONLY_BANNER.to_string()));
        assert!(!page.rows[0].can_delete);
    }

    #[test]
    fn test_empty_state_wording_differs_by_role() {
        let (gateway, prompt, nav) = default_parts();
        let hr = view_for(Role::Hr, &gateway, &prompt, &nav);
        assert_eq!(hr.page().empty_state, Some(EmptyState::CreateFirst));

        let manager = view_for(Role::Manager, &gateway, &prompt, &nav);
        assert_eq!(manager.page().empty_state, Some(EmptyState::ContactHr));
        assert!(
            EmptyState::ContactHr.message().contains("Contact HR"),
            "manager wording should point at HR"
        );
    }
}
