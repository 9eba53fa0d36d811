//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access and management.
//! State is split by update frequency: view transitions, language, toasts.

use std::sync::Arc;
use std::time::Duration;

use gpui::{App, AppContext, Entity, Global};

use crate::constants::TOAST_DISMISS_MS;
use crate::services::{HttpEnrollmentClient, PreferenceStore, TracingVisibilityObserver};
use crate::state::{I18nState, Toast, ToastState, ViewState};

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Tab, course selection, dialogs and the enrollment form
    pub view: Entity<ViewState>,
    /// Internationalization state
    pub i18n: Entity<I18nState>,
    /// On-screen notifications
    pub toasts: Entity<ToastState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities; the language comes from `store`
    pub fn init(store: Box<dyn PreferenceStore>, cx: &mut App) -> Self {
        Self {
            view: cx.new(|_| ViewState::new().with_observer(Arc::new(TracingVisibilityObserver))),
            i18n: cx.new(|_| I18nState::load(store)),
            toasts: cx.new(|_| ToastState::default()),
        }
    }

    /// Show a toast and dismiss it after a delay
    pub fn show_toast(&self, toast: Toast, cx: &mut App) {
        let id = self.toasts.update(cx, |toasts, cx| {
            let id = toasts.push(toast);
            cx.notify();
            id
        });

        let toasts = self.toasts.downgrade();
        cx.spawn(async move |cx| {
            cx.background_executor()
                .timer(Duration::from_millis(TOAST_DISMISS_MS))
                .await;
            let _ = toasts.update(cx, |toasts, cx| {
                toasts.dismiss(id);
                cx.notify();
            });
        })
        .detach();
    }
}

/// Shared enrollment client, reachable from any view
#[derive(Clone)]
pub struct EnrollmentService {
    client: Arc<HttpEnrollmentClient>,
}

impl Global for EnrollmentService {}

impl EnrollmentService {
    pub fn new(client: HttpEnrollmentClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    pub fn client(&self) -> Arc<HttpEnrollmentClient> {
        self.client.clone()
    }
}
