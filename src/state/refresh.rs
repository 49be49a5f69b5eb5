//! Refresh Coordinator
//!
//! Pure state machine deciding when to fetch and how results are applied.
//! It owns the selected time span, the dispatch clock, the request generation
//! and the displayed [`Snapshot`]. Time is passed in explicitly so every
//! transition can be exercised without a runtime.
//!
//! ```text
//! request_refresh ──▶ Dispatch(ticket) ──fetch──▶ complete(ticket, result)
//!        │                                              │
//!        └──▶ Debounced { retry_in }                    ├──▶ Applied(ErrorState)
//!                                                       └──▶ Superseded
//! ```

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};

use crate::constants::DEBOUNCE_WINDOW_MS;
use crate::domain::{DataClass, TimeSpan, WindData};
use crate::error::Error;

/// Classification shown to the user after a fetch settles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorState {
    #[default]
    None,
    /// The fetch failed
    Error,
    /// The fetch succeeded but carried nothing to show
    NoData,
}

impl ErrorState {
    pub fn is_visible(self) -> bool {
        self != ErrorState::None
    }
}

/// What the views render: data and error state always travel together
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    /// `None` while a fetch is pending or after a failure
    pub data: Option<Arc<WindData>>,
    /// Span the data belongs to
    pub span: TimeSpan,
    pub error: ErrorState,
}

impl Snapshot {
    pub fn data(&self) -> Option<&WindData> {
        self.data.as_deref()
    }
}

/// Guards the minimum interval between two dispatches
#[derive(Debug, Clone)]
pub struct RefreshAttemptClock {
    window: Duration,
    last_dispatch: Option<Instant>,
    last_dispatch_at: Option<DateTime<Local>>,
}

impl RefreshAttemptClock {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_dispatch: None,
            last_dispatch_at: None,
        }
    }

    /// Time left before another dispatch is allowed, `None` if allowed now
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        let last = self.last_dispatch?;
        let elapsed = now.saturating_duration_since(last);
        (elapsed < self.window).then(|| self.window - elapsed)
    }

    /// Record a dispatch at `now`
    pub fn mark(&mut self, now: Instant) {
        self.last_dispatch = Some(now);
        self.last_dispatch_at = Some(Local::now());
    }

    /// Wall-clock time of the last dispatch
    pub fn last_dispatch_at(&self) -> Option<DateTime<Local>> {
        self.last_dispatch_at
    }
}

impl Default for RefreshAttemptClock {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEBOUNCE_WINDOW_MS))
    }
}

/// Handle for one dispatched fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub span: TimeSpan,
}

impl FetchTicket {
    /// Fetch parameter in minutes
    pub fn minutes(&self) -> u32 {
        self.span.minutes()
    }
}

/// Outcome of a refresh request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshDecision {
    /// A fetch must be started for this ticket
    Dispatch(FetchTicket),
    /// Too soon after the previous dispatch
    Debounced { retry_in: Duration },
}

impl RefreshDecision {
    pub fn ticket(self) -> Option<FetchTicket> {
        match self {
            RefreshDecision::Dispatch(ticket) => Some(ticket),
            RefreshDecision::Debounced { .. } => None,
        }
    }
}

/// Outcome of applying a settled fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    /// The snapshot was replaced
    Applied(ErrorState),
    /// A newer request (or span) exists; the result was dropped
    Superseded,
}

/// Single source of truth for the dashboard's data
#[derive(Debug, Clone)]
pub struct RefreshCoordinator {
    time_span: TimeSpan,
    clock: RefreshAttemptClock,
    generation: u64,
    in_flight: Option<FetchTicket>,
    dispatched_span: Option<TimeSpan>,
    /// A retry was debounced and still owes a fetch
    retry_pending: bool,
    snapshot: Snapshot,
}

impl RefreshCoordinator {
    pub fn new(time_span: TimeSpan) -> Self {
        Self::with_clock(time_span, RefreshAttemptClock::default())
    }

    pub fn with_clock(time_span: TimeSpan, clock: RefreshAttemptClock) -> Self {
        Self {
            time_span,
            clock,
            generation: 0,
            in_flight: None,
            dispatched_span: None,
            retry_pending: false,
            snapshot: Snapshot {
                data: None,
                span: time_span,
                error: ErrorState::None,
            },
        }
    }

    // ==================== Getters ====================

    pub fn time_span(&self) -> TimeSpan {
        self.time_span
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn error_state(&self) -> ErrorState {
        self.snapshot.error
    }

    /// Latest dispatched generation (0 before the first dispatch)
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the latest dispatch has not settled yet
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn last_dispatch_at(&self) -> Option<DateTime<Local>> {
        self.clock.last_dispatch_at()
    }

    // ==================== Transitions ====================

    /// Request a fetch for `override_span`, or the selected span
    pub fn request_refresh(
        &mut self,
        now: Instant,
        override_span: Option<TimeSpan>,
    ) -> RefreshDecision {
        if let Some(retry_in) = self.clock.remaining(now) {
            tracing::debug!(?retry_in, "Refresh debounced");
            return RefreshDecision::Debounced { retry_in };
        }

        // An override becomes the selected span so its result is not superseded
        if let Some(span) = override_span {
            self.time_span = span;
        }
        let span = self.time_span;
        self.retry_pending = false;
        self.clock.mark(now);
        self.generation += 1;
        let ticket = FetchTicket {
            generation: self.generation,
            span,
        };
        self.in_flight = Some(ticket);
        self.dispatched_span = Some(span);
        self.snapshot = Snapshot {
            data: None,
            span,
            error: self.snapshot.error,
        };

        tracing::info!(
            generation = self.generation,
            minutes = span.minutes(),
            "Dispatching wind data fetch"
        );

        RefreshDecision::Dispatch(ticket)
    }

    /// Select a new span and request data for it
    pub fn set_time_span(&mut self, span: TimeSpan, now: Instant) -> RefreshDecision {
        self.time_span = span;
        if self.snapshot.span != span {
            self.snapshot = Snapshot {
                data: None,
                span,
                error: self.snapshot.error,
            };
        }
        self.request_refresh(now, Some(span))
    }

    /// Whether a debounced retry or span change still owes a fetch
    pub fn needs_refresh(&self) -> bool {
        self.retry_pending || self.dispatched_span != Some(self.time_span)
    }

    /// Apply a settled fetch
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        result: Result<WindData, Error>,
    ) -> Settlement {
        if self.in_flight == Some(ticket) {
            self.in_flight = None;
        }
        if ticket.generation != self.generation || ticket.span != self.time_span {
            tracing::debug!(
                generation = ticket.generation,
                latest = self.generation,
                "Discarding superseded wind data"
            );
            return Settlement::Superseded;
        }

        let snapshot = match result {
            Ok(data) => {
                let error = match data.classify() {
                    DataClass::Usable => ErrorState::None,
                    DataClass::Empty(reason) => {
                        tracing::info!(?reason, "Wind data source returned no usable data");
                        ErrorState::NoData
                    }
                };
                Snapshot {
                    data: Some(Arc::new(data)),
                    span: ticket.span,
                    error,
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, minutes = ticket.minutes(), "Failed to fetch wind data");
                Snapshot {
                    data: None,
                    span: ticket.span,
                    error: ErrorState::Error,
                }
            }
        };

        let error = snapshot.error;
        self.snapshot = snapshot;
        Settlement::Applied(error)
    }

    /// Hide the error overlay, keeping the data
    pub fn dismiss_error(&mut self) {
        self.snapshot.error = ErrorState::None;
    }

    /// Hide the overlay and fetch the selected span again
    ///
    /// A debounced retry stays owed until the next dispatch.
    pub fn retry(&mut self, now: Instant) -> RefreshDecision {
        self.dismiss_error();
        let decision = self.request_refresh(now, None);
        if let RefreshDecision::Debounced { retry_in } = decision {
            tracing::debug!(?retry_in, "Retry deferred until debounce window passes");
            self.retry_pending = true;
        }
        decision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Gust, WindSample};
    use chrono::Utc;

    fn usable(gust: f64) -> WindData {
        WindData {
            wind_histogram: vec![WindSample {
                timestamp: Utc::now(),
                avg_wind: gust / 2.0,
                max_gust: Gust { value: gust, direction: Some(90.0) },
            }],
            max_gust: Gust { value: gust, direction: Some(90.0) },
        }
    }

    fn fetch_failed() -> Error {
        Error::Status { status: 503 }
    }

    #[test]
    fn burst_of_requests_dispatches_once() {
        let mut coordinator = RefreshCoordinator::new(TimeSpan::TenMinutes);
        let start = Instant::now();

        let dispatched = (0..10)
            .filter_map(|i| {
                coordinator
                    .request_refresh(start + Duration::from_millis(i * 40), None)
                    .ticket()
            })
            .count();

        assert_eq!(dispatched, 1);
        assert_eq!(coordinator.generation(), 1);
    }

    #[test]
    fn debounce_reports_remaining_window() {
        let mut coordinator = RefreshCoordinator::new(TimeSpan::TenMinutes);
        let start = Instant::now();
        coordinator.request_refresh(start, None);

        let decision = coordinator.request_refresh(start + Duration::from_millis(200), None);
        assert_eq!(
            decision,
            RefreshDecision::Debounced {
                retry_in: Duration::from_millis(300)
            }
        );
    }

    #[test]
    fn dispatch_allowed_once_window_has_passed() {
        let mut coordinator = RefreshCoordinator::new(TimeSpan::TenMinutes);
        let start = Instant::now();
        let first = coordinator.request_refresh(start, None).ticket().expect("first");
        coordinator.complete(first, Ok(usable(8.0)));

        let second = coordinator.request_refresh(start + Duration::from_millis(500), None);
        assert!(second.ticket().is_some());
    }

    #[test]
    fn completion_does_not_reset_the_clock() {
        let mut coordinator = RefreshCoordinator::new(TimeSpan::TenMinutes);
        let start = Instant::now();
        let ticket = coordinator.request_refresh(start, None).ticket().expect("ticket");
        coordinator.complete(ticket, Err(fetch_failed()));

        let decision = coordinator.request_refresh(start + Duration::from_millis(100), None);
        assert!(matches!(decision, RefreshDecision::Debounced { .. }));
    }

    #[test]
    fn dispatch_clears_snapshot_to_pending() {
        let mut coordinator = RefreshCoordinator::new(TimeSpan::TenMinutes);
        let start = Instant::now();
        let ticket = coordinator.request_refresh(start, None).ticket().expect("ticket");
        coordinator.complete(ticket, Ok(usable(8.0)));
        assert!(coordinator.snapshot().data.is_some());

        coordinator.request_refresh(start + Duration::from_secs(1), None);
        assert!(coordinator.snapshot().data.is_none());
        assert!(coordinator.is_loading());
    }

    #[test]
    fn empty_payload_is_no_data_not_error() {
        let mut coordinator = RefreshCoordinator::new(TimeSpan::TenMinutes);
        let ticket = coordinator.request_refresh(Instant::now(), None).ticket().expect("ticket");

        let settlement = coordinator.complete(ticket, Ok(WindData::default()));

        assert_eq!(settlement, Settlement::Applied(ErrorState::NoData));
        assert_eq!(coordinator.error_state(), ErrorState::NoData);
        assert_eq!(coordinator.snapshot().data.as_deref(), Some(&WindData::default()));
    }

    #[test]
    fn missing_direction_is_no_data() {
        let mut coordinator = RefreshCoordinator::new(TimeSpan::TenMinutes);
        let ticket = coordinator.request_refresh(Instant::now(), None).ticket().expect("ticket");
        let mut data = usable(9.0);
        data.max_gust.direction = None;

        assert_eq!(
            coordinator.complete(ticket, Ok(data)),
            Settlement::Applied(ErrorState::NoData)
        );
    }

    #[test]
    fn failed_fetch_sets_error_and_clears_stale_data() {
        let mut coordinator = RefreshCoordinator::new(TimeSpan::TenMinutes);
        let start = Instant::now();
        let first = coordinator.request_refresh(start, None).ticket().expect("first");
        coordinator.complete(first, Ok(usable(8.0)));

        let second = coordinator
            .request_refresh(start + Duration::from_secs(1), None)
            .ticket()
            .expect("second");
        coordinator.complete(second, Err(fetch_failed()));

        assert_eq!(coordinator.error_state(), ErrorState::Error);
        assert!(coordinator.snapshot().data.is_none());
        assert!(!coordinator.is_loading());
    }

    #[test]
    fn snapshot_and_error_change_together() {
        let mut coordinator = RefreshCoordinator::new(TimeSpan::TenMinutes);
        let start = Instant::now();
        let first = coordinator.request_refresh(start, None).ticket().expect("first");
        coordinator.complete(first, Err(fetch_failed()));
        let before = coordinator.snapshot().clone();

        coordinator.dismiss_error();
        let second = coordinator
            .request_refresh(start + Duration::from_secs(1), None)
            .ticket()
            .expect("second");
        coordinator.complete(second, Ok(usable(10.0)));
        let after = coordinator.snapshot();

        assert_eq!(before.error, ErrorState::Error);
        assert!(before.data.is_none());
        assert_eq!(after.error, ErrorState::None);
        assert_eq!(after.data().map(|d| d.max_gust.value), Some(10.0));
    }

    #[test]
    fn stale_generation_is_discarded() {
        let mut coordinator = RefreshCoordinator::new(TimeSpan::TenMinutes);
        let start = Instant::now();
        let slow = coordinator.request_refresh(start, None).ticket().expect("slow");
        let fast = coordinator
            .request_refresh(start + Duration::from_secs(1), None)
            .ticket()
            .expect("fast");

        assert_eq!(
            coordinator.complete(fast, Ok(usable(20.0))),
            Settlement::Applied(ErrorState::None)
        );
        assert_eq!(coordinator.complete(slow, Ok(usable(5.0))), Settlement::Superseded);
        assert_eq!(coordinator.snapshot().data().map(|d| d.max_gust.value), Some(20.0));
    }

    #[test]
    fn set_time_span_uses_new_span_for_fetch() {
        let mut coordinator = RefreshCoordinator::new(TimeSpan::TenMinutes);
        let ticket = coordinator
            .set_time_span(TimeSpan::Hour, Instant::now())
            .ticket()
            .expect("ticket");

        assert_eq!(ticket.minutes(), 60);
        assert_eq!(coordinator.time_span(), TimeSpan::Hour);
    }

    #[test]
    fn debounced_span_change_hides_old_span_data() {
        let mut coordinator = RefreshCoordinator::new(TimeSpan::TenMinutes);
        let start = Instant::now();
        let ticket = coordinator.request_refresh(start, None).ticket().expect("ticket");

        let decision = coordinator.set_time_span(TimeSpan::Hour, start + Duration::from_millis(50));
        assert!(matches!(decision, RefreshDecision::Debounced { .. }));
        assert!(coordinator.needs_refresh());

        // The ten-minute fetch settles after the user switched to an hour.
        assert_eq!(coordinator.complete(ticket, Ok(usable(9.0))), Settlement::Superseded);
        assert!(coordinator.snapshot().data.is_none());
        assert_eq!(coordinator.snapshot().span, TimeSpan::Hour);

        let retry = coordinator.request_refresh(start + Duration::from_millis(600), None);
        assert_eq!(retry.ticket().map(|t| t.span), Some(TimeSpan::Hour));
        assert!(!coordinator.needs_refresh());
    }

    #[test]
    fn dismiss_keeps_data() {
        let mut coordinator = RefreshCoordinator::new(TimeSpan::TenMinutes);
        let ticket = coordinator.request_refresh(Instant::now(), None).ticket().expect("ticket");
        coordinator.complete(ticket, Ok(WindData::default()));

        coordinator.dismiss_error();

        assert_eq!(coordinator.error_state(), ErrorState::None);
        assert!(coordinator.snapshot().data.is_some());
    }

    #[test]
    fn retry_after_dismiss_dispatches_exactly_once() {
        let mut coordinator = RefreshCoordinator::new(TimeSpan::TenMinutes);
        let start = Instant::now();
        let ticket = coordinator.request_refresh(start, None).ticket().expect("ticket");
        coordinator.complete(ticket, Err(fetch_failed()));

        coordinator.dismiss_error();
        let later = start + Duration::from_secs(2);
        let first = coordinator.request_refresh(later, None);
        let echo = coordinator.request_refresh(later, None);

        assert!(first.ticket().is_some());
        assert!(echo.ticket().is_none());
        assert_eq!(coordinator.generation(), 2);
    }

    #[test]
    fn refresh_with_override_applies_result() {
        let mut coordinator = RefreshCoordinator::new(TimeSpan::TenMinutes);
        let ticket = coordinator
            .request_refresh(Instant::now(), Some(TimeSpan::Hour))
            .ticket()
            .expect("ticket");
        assert_eq!(ticket.span, TimeSpan::Hour);

        let settlement = coordinator.complete(ticket, Ok(usable(9.0)));

        assert_eq!(settlement, Settlement::Applied(ErrorState::None));
        assert!(coordinator.snapshot().data.is_some());
        assert_eq!(coordinator.snapshot().span, TimeSpan::Hour);
        assert_eq!(coordinator.time_span(), TimeSpan::Hour);
        assert!(!coordinator.needs_refresh());
    }

    #[test]
    fn retry_inside_window_is_deferred_not_lost() {
        let mut coordinator = RefreshCoordinator::new(TimeSpan::TenMinutes);
        let start = Instant::now();
        let ticket = coordinator.request_refresh(start, None).ticket().expect("ticket");
        coordinator.complete(ticket, Err(fetch_failed()));
        assert!(!coordinator.needs_refresh());

        let decision = coordinator.retry(start + Duration::from_millis(100));

        assert_eq!(
            decision,
            RefreshDecision::Debounced {
                retry_in: Duration::from_millis(400)
            }
        );
        assert_eq!(coordinator.error_state(), ErrorState::None);
        assert!(coordinator.needs_refresh());

        let deferred = coordinator.request_refresh(start + Duration::from_millis(600), None);
        assert_eq!(deferred.ticket().map(|t| t.generation), Some(2));
        assert!(!coordinator.needs_refresh());
    }

    /// In-memory source: answers each span with a canned result
    struct CannedSource {
        gust: Option<f64>,
    }

    impl crate::services::WindSource for CannedSource {
        fn fetch(&self, minutes: u32) -> futures::future::BoxFuture<'static, Result<WindData, Error>> {
            let gust = self.gust;
            Box::pin(async move {
                tokio::time::sleep(Duration::from_millis(u64::from(minutes))).await;
                gust.map(usable).ok_or(Error::Status { status: 500 })
            })
        }

        fn name(&self) -> &str {
            "canned"
        }
    }

    #[tokio::test]
    async fn fetch_through_source_settles_snapshot() {
        use crate::services::WindSource;

        let source = CannedSource { gust: Some(14.0) };
        let mut coordinator = RefreshCoordinator::new(TimeSpan::TenMinutes);
        let ticket = coordinator.request_refresh(Instant::now(), None).ticket().expect("ticket");

        let result = source.fetch(ticket.minutes()).await;
        assert_eq!(coordinator.complete(ticket, result), Settlement::Applied(ErrorState::None));
        assert_eq!(crate::charts::gust_axis_max(coordinator.snapshot().data()), 15.0);
    }

    #[tokio::test]
    async fn out_of_order_source_results_keep_latest() {
        use crate::services::WindSource;

        let failing = CannedSource { gust: None };
        let working = CannedSource { gust: Some(22.0) };
        let mut coordinator = RefreshCoordinator::new(TimeSpan::Hour);
        let start = Instant::now();

        let early = coordinator.request_refresh(start, None).ticket().expect("early");
        let late = coordinator
            .request_refresh(start + Duration::from_secs(1), None)
            .ticket()
            .expect("late");

        let (early_result, late_result) =
            tokio::join!(failing.fetch(early.minutes()), working.fetch(late.minutes()));
        coordinator.complete(late, late_result);
        coordinator.complete(early, early_result);

        assert_eq!(coordinator.error_state(), ErrorState::None);
        assert_eq!(crate::charts::gust_axis_max(coordinator.snapshot().data()), 23.0);
    }
}
