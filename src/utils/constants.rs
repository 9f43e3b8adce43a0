use dotenvy::dotenv;
use lazy_static::lazy_static;
use secrecy::Secret;
use std::env as std_env;

lazy_static! {
    pub static ref DATABASE_URL: Secret<String> = get_db_url();
    pub static ref DATABASE_MAX_CONNECTIONS: u32 = load_or_default(
        env::DATABASE_MAX_CONNECTIONS_ENV_VAR,
        DEFAULT_DATABASE_MAX_CONNECTIONS
    );
}

fn load_env() {
    dotenv().ok();
}

fn get_db_url() -> Secret<String> {
    load_env();
    let db_url = std_env::var(env::DATABASE_URL_ENV_VAR)
        .expect("DATABASE_URL must be set.");
    if db_url.is_empty() {
        panic!("DATABASE_URL must not be empty.");
    }
    Secret::new(db_url)
}

fn load_or_default<T: std::str::FromStr>(
    variable_name: &str,
    default_value: T,
) -> T {
    load_env();

    match std_env::var(variable_name) {
        Ok(value) => value.trim().parse().unwrap_or(default_value),
        Err(_) => default_value,
    }
}

pub mod env {
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
    pub const DATABASE_MAX_CONNECTIONS_ENV_VAR: &str =
        "DATABASE_MAX_CONNECTIONS";
}

pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:5000";
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
