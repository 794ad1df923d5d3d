use crate::config::SecurityConfig;
use actix_cors::Cors;

const ALLOWED_METHODS: [&str; 3] = ["GET", "POST", "OPTIONS"];

pub fn cors_middleware(config: &SecurityConfig) -> Cors {
    let base = Cors::default()
        .allow_any_header()
        .allowed_methods(ALLOWED_METHODS)
        .max_age(3600);

    if config.allows_any_origin() {
        return base.allow_any_origin();
    }

    let allowlist = config.cors_allowed_origins.clone();
    base.allowed_origin_fn(move |origin, _| {
        origin
            .to_str()
            .ok()
            .map(|value| allowlist.iter().any(|allowed| allowed == value))
            .unwrap_or(false)
    })
}
