use std::env;

const LOCAL_JWT_SECRET: &str = "academy-cms-local-development-secret";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_JWT_HOURS: i64 = 24;
const DEFAULT_MAX_BODY_BYTES: usize = 50 * 1024 * 1024;
const DEFAULT_MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// AppConfig
///
/// Everything the process reads from its environment, loaded once at startup
/// and shared read-only through `AppState` (handlers pull it with `FromRef`).
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Runtime environment marker. Controls log format, Swagger and defaults.
    pub env: Env,
    /// Postgres connection string. `None` selects the in-memory store (local only).
    pub database_url: Option<String>,
    /// HS256 signing secret for access tokens.
    pub jwt_secret: String,
    /// Access token lifetime.
    pub jwt_expires_in_hours: i64,
    pub bind_addr: String,
    /// Whether `POST /auth/register` is open.
    pub allow_admin_registration: bool,
    /// Global request body limit.
    pub max_body_bytes: usize,
    /// Per-image limit for gallery uploads.
    pub max_image_bytes: usize,
}

/// Env
///
/// Runtime context: `Local` favours convenience (pretty logs, in-memory store,
/// open registration), `Production` demands explicit secrets.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Env {
    Local,
    Production,
}

impl Env {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Env::Production,
            _ => Env::Local,
        }
    }
}

impl Default for AppConfig {
    /// default
    ///
    /// Safe, non-panicking values for tests: local env, in-memory store,
    /// registration open.
    fn default() -> Self {
        Self {
            env: Env::Local,
            database_url: None,
            jwt_secret: "super-secure-test-secret-value-local".to_string(),
            jwt_expires_in_hours: DEFAULT_JWT_HOURS,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            allow_admin_registration: true,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .unwrap_or_else(|_| panic!("FATAL: {name} has an invalid value: {raw}")),
        Err(_) => default,
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

impl AppConfig {
    /// load
    ///
    /// Reads the configuration from the environment (call `dotenv` first).
    ///
    /// # Panics
    /// Fails fast when a value required in production is missing or when a
    /// numeric/boolean variable cannot be parsed.
    pub fn load() -> Self {
        let env = Env::parse(&env::var("APP_ENV").unwrap_or_else(|_| "local".to_string()));

        let (database_url, jwt_secret) = match env {
            Env::Production => (
                Some(
                    non_empty_var("DATABASE_URL")
                        .expect("FATAL: DATABASE_URL must be set in production."),
                ),
                non_empty_var("JWT_SECRET").expect("FATAL: JWT_SECRET must be set in production."),
            ),
            Env::Local => (
                non_empty_var("DATABASE_URL"),
                non_empty_var("JWT_SECRET").unwrap_or_else(|| LOCAL_JWT_SECRET.to_string()),
            ),
        };

        let jwt_expires_in_hours = parse_var("JWT_EXPIRES_IN_HOURS", DEFAULT_JWT_HOURS);
        assert!(
            jwt_expires_in_hours > 0,
            "FATAL: JWT_EXPIRES_IN_HOURS must be positive."
        );

        Self {
            env,
            database_url,
            jwt_secret,
            jwt_expires_in_hours,
            bind_addr: non_empty_var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            allow_admin_registration: parse_var(
                "ALLOW_ADMIN_REGISTRATION",
                env == Env::Local,
            ),
            max_body_bytes: parse_var("MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES),
            max_image_bytes: parse_var("MAX_IMAGE_BYTES", DEFAULT_MAX_IMAGE_BYTES),
        }
    }

    pub fn is_production(&self) -> bool {
        self.env == Env::Production
    }
}
