use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer, SessionStore};

use crate::config::Config;

pub fn session_layer<S>(store: S, config: &Config) -> SessionManagerLayer<S>
where
    S: SessionStore + Clone,
{
    SessionManagerLayer::new(store)
        .with_secure(config.session_secure_cookie)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::minutes(
            config.session_ttl_minutes,
        )))
}
