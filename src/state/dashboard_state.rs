//! Dashboard State
//!
//! GPUI entity around [`RefreshCoordinator`]. It runs fetches on the tokio
//! bridge and applies each settled result in a single update followed by a
//! single `notify`, so observers always see data and error state together.
//!
//! ```text
//! UI Action → refresh() → run_in_tokio(fetch) → complete() → notify → charts re-render
//! ```

use std::sync::Arc;
use std::time::{Duration, Instant};

use gpui::{Context, Task};

use crate::domain::TimeSpan;
use crate::services::{WindSource, run_in_tokio};
use crate::state::refresh::{
    ErrorState, FetchTicket, RefreshCoordinator, RefreshDecision, Settlement, Snapshot,
};

/// Shared dashboard state, observed by every chart
pub struct DashboardState {
    coordinator: RefreshCoordinator,
    source: Arc<dyn WindSource>,
    /// Periodic refresh loop
    auto_refresh_task: Option<Task<()>>,
    /// Deferred refresh for a span change that hit the debounce window
    deferred_task: Option<Task<()>>,
}

impl DashboardState {
    pub fn new(source: Arc<dyn WindSource>, time_span: TimeSpan) -> Self {
        Self {
            coordinator: RefreshCoordinator::new(time_span),
            source,
            auto_refresh_task: None,
            deferred_task: None,
        }
    }

    // ==================== Getters ====================

    pub fn snapshot(&self) -> &Snapshot {
        self.coordinator.snapshot()
    }

    pub fn time_span(&self) -> TimeSpan {
        self.coordinator.time_span()
    }

    pub fn error_state(&self) -> ErrorState {
        self.coordinator.error_state()
    }

    pub fn is_loading(&self) -> bool {
        self.coordinator.is_loading()
    }

    pub fn coordinator(&self) -> &RefreshCoordinator {
        &self.coordinator
    }

    // ==================== Actions ====================

    /// Request a refresh for `override_span`, or the selected span
    pub fn refresh(&mut self, override_span: Option<TimeSpan>, cx: &mut Context<Self>) {
        let decision = self.coordinator.request_refresh(Instant::now(), override_span);
        if let RefreshDecision::Dispatch(ticket) = decision {
            self.dispatch(ticket, cx);
        }
    }

    /// Select a span and fetch it
    ///
    /// A change inside the debounce window is retried once the window has
    /// passed, so the selected span is always fetched eventually.
    pub fn select_time_span(&mut self, span: TimeSpan, cx: &mut Context<Self>) {
        if span == self.coordinator.time_span() && !self.coordinator.needs_refresh() {
            return;
        }

        let decision = self.coordinator.set_time_span(span, Instant::now());
        self.follow(decision, cx);
    }

    /// Hide the overlay and fetch again, once the debounce window allows it
    pub fn retry(&mut self, cx: &mut Context<Self>) {
        let decision = self.coordinator.retry(Instant::now());
        self.follow(decision, cx);
    }

    /// Hide the overlay without fetching
    pub fn dismiss_error(&mut self, cx: &mut Context<Self>) {
        if self.coordinator.error_state().is_visible() {
            self.coordinator.dismiss_error();
            cx.notify();
        }
    }

    /// Start the periodic refresh loop; a running loop is replaced
    pub fn start_auto_refresh(&mut self, interval: Duration, cx: &mut Context<Self>) {
        let task = cx.spawn(async move |handle, cx| {
            loop {
                cx.background_executor().timer(interval).await;
                if handle
                    .update(cx, |this, cx| this.refresh(None, cx))
                    .is_err()
                {
                    break;
                }
            }
        });

        self.auto_refresh_task = Some(task);
        tracing::info!(interval_secs = interval.as_secs(), "Started auto refresh");
    }

    /// Stop the periodic refresh loop
    pub fn stop_auto_refresh(&mut self) {
        if self.auto_refresh_task.take().is_some() {
            tracing::info!("Stopped auto refresh");
        }
    }

    // ==================== Internals ====================

    fn dispatch(&mut self, ticket: FetchTicket, cx: &mut Context<Self>) {
        let fetch = self.source.fetch(ticket.minutes());
        let source_name = self.source.name().to_string();
        cx.notify();

        cx.spawn(async move |handle, cx| {
            let result = run_in_tokio(fetch).await;
            let applied = handle.update(cx, |this, cx| {
                match this.coordinator.complete(ticket, result) {
                    Settlement::Applied(error) => tracing::debug!(
                        generation = ticket.generation,
                        ?error,
                        source = %source_name,
                        "Applied wind data"
                    ),
                    Settlement::Superseded => {}
                }
                // Loading state changes even when the result is dropped
                cx.notify();
            });
            if applied.is_err() {
                tracing::debug!(
                    generation = ticket.generation,
                    "Dashboard released before fetch settled"
                );
            }
        })
        .detach();
    }

    fn schedule_deferred(&mut self, delay: Duration, cx: &mut Context<Self>) {
        let task = cx.spawn(async move |handle, cx| {
            cx.background_executor().timer(delay).await;
            let _ = handle.update(cx, |this, cx| {
                this.deferred_task = None;
                if this.coordinator.needs_refresh() {
                    let decision = this.coordinator.request_refresh(Instant::now(), None);
                    this.follow(decision, cx);
                }
            });
        });
        self.deferred_task = Some(task);
    }

    /// Start the fetch, or try again when the debounce window has passed
    fn follow(&mut self, decision: RefreshDecision, cx: &mut Context<Self>) {
        match decision {
            RefreshDecision::Dispatch(ticket) => self.dispatch(ticket, cx),
            RefreshDecision::Debounced { retry_in } => {
                self.schedule_deferred(retry_in, cx);
                cx.notify();
            }
        }
    }
}
