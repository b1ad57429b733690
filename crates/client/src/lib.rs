pub mod api;
pub mod errors;
pub mod models;
pub mod services;
pub mod storage;

use chrono::Utc;
use tracing::warn;

use api::traits::{FinanceApi, LoginRequest};
use errors::ClientError;
use models::analytics::NormalizedAnalytics;
use models::entry::{OcrDraft, TransactionEntry, TransactionType};
use models::filter::AnalyticsFilter;
use models::notification::Notification;
use models::session::Session;
use services::chart_renderer::ChartRenderer;
use services::normalizer::ResponseNormalizer;
use storage::kv::KeyValueStore;
use storage::session_store::SessionStore;

/// Which dashboard tab is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveTab {
    Dashboard,
    Entry,
    Upload,
    Analytics,
}

/// The two screens of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    LoggedOut,
    LoggedIn { active_tab: ActiveTab },
}

/// Main entry point for the finance tracker client.
///
/// Owns all application state — session, screen, notifications, cached
/// analytics views, chart slots — and the injected collaborators (API and
/// durable storage). The frontend calls these operations from its single
/// event loop and renders whatever the accessors expose; there is no hidden
/// global state.
///
/// Network calls are independent and unsequenced: a slow analytics response
/// finishing after a newer one simply wins the write. No cancellation
/// semantics exist.
#[must_use]
pub struct TrackerApp {
    api: Box<dyn FinanceApi>,
    sessions: SessionStore,
    normalizer: ResponseNormalizer,
    charts: ChartRenderer,
    screen: Screen,
    session: Option<Session>,
    notifications: Vec<Notification>,
    /// True while a request round trip is in flight (the loading overlay).
    loading: bool,
    dashboard: Option<NormalizedAnalytics>,
    analytics: Option<NormalizedAnalytics>,
    /// OCR extraction awaiting explicit user confirmation.
    ocr_draft: Option<OcrDraft>,
}

impl std::fmt::Debug for TrackerApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrackerApp")
            .field("screen", &self.screen)
            .field("logged_in", &self.session.is_some())
            .field("loading", &self.loading)
            .field("notifications", &self.notifications.len())
            .finish()
    }
}

impl TrackerApp {
    /// Build an app in the logged-out state with injected collaborators.
    pub fn new(api: Box<dyn FinanceApi>, store: Box<dyn KeyValueStore>) -> Self {
        Self {
            api,
            sessions: SessionStore::new(store),
            normalizer: ResponseNormalizer::new(),
            charts: ChartRenderer::new(),
            screen: Screen::LoggedOut,
            session: None,
            notifications: Vec::new(),
            loading: false,
            dashboard: None,
            analytics: None,
            ocr_draft: None,
        }
    }

    // ── Session & Screen ────────────────────────────────────────────

    /// Startup path: restore a persisted session and validate its token.
    ///
    /// A restorable, valid session lands directly on the dashboard.
    /// Validation failure tears the session down (forced logout) — it is
    /// never retried and never surfaced as an error.
    pub async fn startup(&mut self) -> Result<(), ClientError> {
        let Some(session) = self.sessions.restore() else {
            return Ok(());
        };

        match self.api.validate_token(&session.token).await {
            Ok(()) => {
                self.session = Some(session);
                self.screen = Screen::LoggedIn {
                    active_tab: ActiveTab::Dashboard,
                };
                self.refresh_dashboard_logged().await;
                Ok(())
            }
            Err(e) => {
                warn!("Token validation failed: {e}");
                self.logout()
            }
        }
    }

    /// Log in with credentials. Success persists the session and lands on
    /// the dashboard; failure stays logged out with the server's error text
    /// surfaced as a transient notification.
    pub async fn login(
        &mut self,
        email: &str,
        password: &str,
        role: &str,
    ) -> Result<(), ClientError> {
        self.loading = true;
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
            role: role.to_string(),
        };

        let result = self.api.login(&request).await;
        self.loading = false;

        match result {
            Ok(response) => {
                let session = Session::new(response.token, response.user_id, email);
                self.sessions.save(&session)?;
                self.session = Some(session);
                self.screen = Screen::LoggedIn {
                    active_tab: ActiveTab::Dashboard,
                };
                self.refresh_dashboard_logged().await;
                Ok(())
            }
            Err(e) => {
                self.session = None;
                self.notify_error(e.to_string());
                Err(e)
            }
        }
    }

    /// Log out: wipe the in-memory session, the durable keys, and all
    /// transient state accumulated while logged in.
    pub fn logout(&mut self) -> Result<(), ClientError> {
        self.session = None;
        self.sessions.clear()?;
        self.notifications.clear();
        self.dashboard = None;
        self.analytics = None;
        self.ocr_draft = None;
        self.charts.clear();
        self.screen = Screen::LoggedOut;
        Ok(())
    }

    /// Switch to another dashboard tab. Entering Analytics triggers a
    /// reload with the default (current month) filter; other tabs do not
    /// load anything.
    pub async fn select_tab(&mut self, tab: ActiveTab) -> Result<(), ClientError> {
        if matches!(self.screen, Screen::LoggedOut) {
            return Err(ClientError::Validation("Not logged in".into()));
        }
        self.screen = Screen::LoggedIn { active_tab: tab };
        if tab == ActiveTab::Analytics {
            if let Err(e) = self.load_analytics(None).await {
                warn!("Failed to load analytics data: {e}");
            }
        }
        Ok(())
    }

    // ── Dashboard & Analytics ───────────────────────────────────────

    /// Reload the dashboard view (stats + recent transactions) for the
    /// current user, with no date or type constraints.
    pub async fn refresh_dashboard(&mut self) -> Result<(), ClientError> {
        let session = self.session_or_err()?.clone();
        let filter = AnalyticsFilter::for_user(&session.user_id);
        let payload = self
            .api
            .comprehensive_analytics(&session.token, &filter)
            .await?;
        self.dashboard = Some(self.normalizer.normalize(&payload));
        Ok(())
    }

    /// Reload analytics and re-render both charts. `filter` defaults to the
    /// current calendar month.
    pub async fn load_analytics(
        &mut self,
        filter: Option<AnalyticsFilter>,
    ) -> Result<(), ClientError> {
        let session = self.session_or_err()?.clone();
        let filter = filter.unwrap_or_else(|| {
            AnalyticsFilter::current_month(&session.user_id, Utc::now().date_naive())
        });

        self.loading = true;
        let result = self
            .api
            .comprehensive_analytics(&session.token, &filter)
            .await;
        self.loading = false;

        let payload = result?;
        let normalized = self.normalizer.normalize(&payload);
        self.charts.render_category(&normalized);
        self.charts.render_timeline(&normalized);
        self.analytics = Some(normalized);
        Ok(())
    }

    // ── Entry Creation ──────────────────────────────────────────────

    /// Submit a manually entered transaction. The category lands in the
    /// field matching `entry_type`; success resets to a clean state with a
    /// transient confirmation and refreshes the dashboard.
    pub async fn submit_entry(
        &mut self,
        name: &str,
        amount: f64,
        entry_type: TransactionType,
        currency: &str,
        description: Option<String>,
        category: &str,
    ) -> Result<(), ClientError> {
        let session = self.session_or_err()?.clone();
        let entry = TransactionEntry::new(
            &session.user_id,
            name,
            amount,
            entry_type,
            currency,
            description,
            category,
        );
        if let Err(e) = entry.validate() {
            self.notify_error(e.to_string());
            return Err(e);
        }

        self.loading = true;
        let result = self.api.create_entry(&session.token, &entry).await;
        self.loading = false;

        match result {
            Ok(()) => {
                self.notify_success("Entry created successfully!");
                self.refresh_dashboard_logged().await;
                Ok(())
            }
            Err(e) => {
                self.notify_error(e.to_string());
                Err(e)
            }
        }
    }

    // ── Bill Upload (OCR) ───────────────────────────────────────────

    /// Upload a bill for OCR extraction. Populates the review draft — no
    /// entry is created until the user confirms via [`Self::confirm_ocr`].
    pub async fn upload_bill(
        &mut self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<(), ClientError> {
        let session = self.session_or_err()?.clone();
        if bytes.is_empty() {
            self.notify_error("Please select a file");
            return Err(ClientError::Validation("Please select a file".into()));
        }

        self.loading = true;
        let result = self
            .api
            .process_bill(&session.token, &session.user_id, file_name, bytes)
            .await;
        self.loading = false;

        match result {
            Ok(draft) => {
                self.ocr_draft = Some(draft);
                self.notify_success("Bill processed successfully!");
                Ok(())
            }
            Err(e) => {
                self.notify_error(e.to_string());
                Err(e)
            }
        }
    }

    /// Confirm the (possibly user-edited) OCR draft, creating the entry via
    /// an independent create call.
    pub async fn confirm_ocr(&mut self, draft: OcrDraft) -> Result<(), ClientError> {
        let session = self.session_or_err()?.clone();
        let entry = match draft.into_entry(&session.user_id) {
            Ok(entry) => entry,
            Err(e) => {
                self.notify_error(e.to_string());
                return Err(e);
            }
        };

        match self.api.create_entry(&session.token, &entry).await {
            Ok(()) => {
                self.ocr_draft = None;
                self.notify_success("Entry created from bill successfully!");
                self.refresh_dashboard_logged().await;
                Ok(())
            }
            Err(e) => {
                self.notify_error(e.to_string());
                Err(e)
            }
        }
    }

    // ── Notifications ───────────────────────────────────────────────

    /// Live notifications, with expired ones pruned. The renderer polls
    /// this instead of running per-message timers.
    pub fn active_notifications(&mut self) -> &[Notification] {
        let now = Utc::now();
        self.notifications.retain(|n| !n.is_expired(now));
        &self.notifications
    }

    fn notify_success(&mut self, message: impl Into<String>) {
        self.notifications
            .push(Notification::success(message, Utc::now()));
    }

    fn notify_error(&mut self, message: impl Into<String>) {
        self.notifications
            .push(Notification::error(message, Utc::now()));
    }

    // ── Accessors ───────────────────────────────────────────────────

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn active_tab(&self) -> Option<ActiveTab> {
        match self.screen {
            Screen::LoggedIn { active_tab } => Some(active_tab),
            Screen::LoggedOut => None,
        }
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn dashboard(&self) -> Option<&NormalizedAnalytics> {
        self.dashboard.as_ref()
    }

    #[must_use]
    pub fn analytics(&self) -> Option<&NormalizedAnalytics> {
        self.analytics.as_ref()
    }

    #[must_use]
    pub fn ocr_draft(&self) -> Option<&OcrDraft> {
        self.ocr_draft.as_ref()
    }

    #[must_use]
    pub fn charts(&self) -> &ChartRenderer {
        &self.charts
    }

    // ── Internal ────────────────────────────────────────────────────

    fn session_or_err(&self) -> Result<&Session, ClientError> {
        self.session
            .as_ref()
            .ok_or_else(|| ClientError::Validation("No active session".into()))
    }

    /// Dashboard refreshes that run as a side effect of another action are
    /// logged, never surfaced to the user.
    async fn refresh_dashboard_logged(&mut self) {
        if let Err(e) = self.refresh_dashboard().await {
            warn!("Failed to load dashboard data: {e}");
        }
    }
}
