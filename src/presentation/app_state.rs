// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::chart_registry::ChartRegistry;
use crate::presentation::views::{DashboardView, RecipesView};
use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::{watch, Mutex, MutexGuard};

type Dashboard = DashboardService<ChartRegistry>;

/// Views as of the last finished action.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub dashboard: DashboardView,
    pub recipes: RecipesView,
}

impl Snapshot {
    fn capture(dashboard: &Dashboard) -> Self {
        Self {
            dashboard: DashboardView::from_service(dashboard),
            recipes: RecipesView::from_service(dashboard),
        }
    }
}

/// One dashboard session. Actions hold the session lock until their fetches
/// resolve, so they never interleave. Reads are served from the published
/// snapshot and never wait behind an action.
pub struct AppState {
    dashboard: Mutex<Dashboard>,
    in_flight: AtomicUsize,
    snapshot: watch::Sender<Snapshot>,
}

impl AppState {
    pub fn new(dashboard: Dashboard) -> Self {
        let (snapshot, _) = watch::channel(Snapshot::capture(&dashboard));
        Self {
            dashboard: Mutex::new(dashboard),
            in_flight: AtomicUsize::new(0),
            snapshot,
        }
    }

    /// Waits for the session. The action counts as in flight from the moment
    /// it is queued until the returned guard drops.
    pub async fn begin_action(&self) -> Action<'_> {
        let in_flight = InFlight::enter(&self.in_flight);
        let dashboard = self.dashboard.lock().await;
        Action {
            state: self,
            dashboard,
            _in_flight: in_flight,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Latest published views, with `loading` raised while an action runs.
    pub fn snapshot(&self) -> Snapshot {
        let mut snapshot = self.snapshot.borrow().clone();
        snapshot.dashboard.loading = self.is_busy();
        snapshot
    }
}

/// Exclusive access to the session for one action. Publishes a fresh
/// snapshot when dropped.
pub struct Action<'a> {
    state: &'a AppState,
    dashboard: MutexGuard<'a, Dashboard>,
    _in_flight: InFlight<'a>,
}

impl Deref for Action<'_> {
    type Target = Dashboard;

    fn deref(&self) -> &Dashboard {
        &self.dashboard
    }
}

impl DerefMut for Action<'_> {
    fn deref_mut(&mut self) -> &mut Dashboard {
        &mut self.dashboard
    }
}

impl Drop for Action<'_> {
    fn drop(&mut self) {
        self.state
            .snapshot
            .send_replace(Snapshot::capture(&self.dashboard));
    }
}

struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}
