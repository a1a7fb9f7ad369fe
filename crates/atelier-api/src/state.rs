use std::sync::Arc;

use atelier_db::Database;
use atelier_mailer::Notifier;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub db: Database,
    pub notifier: Arc<dyn Notifier>,
    pub admin_secret: String,
}
