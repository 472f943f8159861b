use cookapp::{
    config::Config,
    error::{AppError, Result},
    planner::Planner,
};
use cookapp_client::{AuthenticatedClient, ClientError, HttpTransport, RestApi};

pub type App = Planner<RestApi<HttpTransport>>;

/// Builds the planner against the configured backend.
///
/// With `authenticate` set and credentials configured, logs in first so the
/// command runs with a fresh credential.
pub async fn connect(config: &Config, authenticate: bool) -> Result<App> {
    let transport = HttpTransport::new(&config.api.base_url, config.api.timeout())
        .map_err(ClientError::from)?;
    let client = AuthenticatedClient::new(transport);

    if authenticate {
        match config.auth.credentials() {
            Some((email, password)) => {
                client.login(email, password).await?;
            }
            None => tracing::debug!("no credentials configured, continuing without login"),
        }
    }

    Ok(Planner::new(RestApi::new(client)))
}

pub async fn login(app: &App, config: &Config) -> Result<()> {
    let Some((email, password)) = config.auth.credentials() else {
        return Err(AppError::ValidationError(
            "auth.email and auth.password must be configured to log in".to_string(),
        ));
    };

    let response = app.source().client().login(email, password).await?;

    match response.user {
        Some(user) => println!(
            "Logged in as {} ({})",
            user.username.as_deref().unwrap_or(&user.email),
            user.email
        ),
        None => println!("Logged in as {email}"),
    }

    Ok(())
}
