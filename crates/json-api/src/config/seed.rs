//! Seed Config

use clap::Args;

/// Data loaded into the in-memory store at startup.
#[derive(Debug, Args)]
pub struct SeedConfig {
    /// Load the bundled reference menu into an empty catalog
    #[arg(
        long,
        env = "SEED_MENU",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    pub seed_menu: bool,

    /// Username of the admin account to create
    #[arg(long, env = "ADMIN_USERNAME")]
    pub admin_username: Option<String>,

    /// Password of the admin account to create
    #[arg(long, env = "ADMIN_PASSWORD", hide_env_values = true)]
    pub admin_password: Option<String>,
}

impl SeedConfig {
    /// Admin credentials, when both halves are configured.
    pub fn admin(&self) -> Option<(&str, &str)> {
        self.admin_username
            .as_deref()
            .zip(self.admin_password.as_deref())
    }
}
