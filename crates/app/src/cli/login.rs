use clap::Args;
use thali::users::Credentials;

use super::ApiArgs;

#[derive(Debug, Args)]
pub(crate) struct LoginArgs {
    /// Account name
    #[arg(long)]
    username: String,

    /// Account password
    #[arg(long, env = "THALI_PASSWORD", hide_env_values = true)]
    password: String,

    #[command(flatten)]
    api: ApiArgs,
}

pub(crate) async fn run(args: LoginArgs) -> Result<(), String> {
    let session = args
        .api
        .client()
        .login(&Credentials {
            username: args.username,
            password: args.password,
        })
        .await
        .map_err(|error| format!("failed to sign in: {error}"))?;

    println!("signed in as {}", session.user.username);
    println!("export THALI_TOKEN={}", session.token);

    Ok(())
}
