use crate::config::Config;
use crate::service::DashboardService;
use tokio_util::sync::CancellationToken;

pub struct AppState {
    pub config: Config,
    pub dashboard: DashboardService,
    /// Fired on shutdown; every in-flight service request watches it
    pub shutdown: CancellationToken,
}

impl AppState {
    pub fn new(config: Config, shutdown: CancellationToken) -> Self {
        let dashboard = DashboardService::from_config(&config);
        Self {
            config,
            dashboard,
            shutdown,
        }
    }
}
