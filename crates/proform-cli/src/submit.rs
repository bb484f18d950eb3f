use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use proform_api::CompanyClient;
use proform_core::profile::CompanyProfile;
use proform_core::{load_app_config, load_draft};
use proform_form::{
    AuthTokens, Navigator, Notifier, SubmitFlow, SubmitOutcome, HOME_ROUTE, LOGIN_ROUTE,
};

/// Prints transient messages to stderr, standing in for toast notifications.
struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn success(&self, message: &str) {
        eprintln!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("error: {message}");
    }
}

/// Stashes the draft to disk on a login hand-off so nothing typed is lost.
struct StashingNavigator {
    stash_path: PathBuf,
}

impl Navigator for StashingNavigator {
    fn to_login(&self, draft: &CompanyProfile) {
        tracing::info!(route = LOGIN_ROUTE, "login required");
        match serde_yaml::to_string(draft) {
            Ok(rendered) => {
                if let Err(e) = std::fs::write(&self.stash_path, rendered) {
                    tracing::warn!(error = %e, path = %self.stash_path.display(), "failed to stash draft");
                } else {
                    eprintln!(
                        "not logged in; draft stashed at {}. Set PROFORM_AUTH_TOKEN and resubmit.",
                        self.stash_path.display()
                    );
                }
            }
            Err(e) => tracing::warn!(error = %e, "failed to render draft for stashing"),
        }
    }

    fn to_home(&self) {
        tracing::info!(route = HOME_ROUTE, "navigating home");
    }
}

/// Bearer token sourced from application configuration.
struct ConfigTokens {
    token: Option<String>,
}

impl AuthTokens for ConfigTokens {
    fn bearer_token(&self) -> Option<String> {
        self.token.clone()
    }
}

/// Validate a draft and submit it to the configured backend.
pub(crate) async fn run_submit(file: &Path, stash: Option<&Path>) -> anyhow::Result<()> {
    let config = load_app_config().context("loading configuration")?;
    let profile = load_draft(file).context("loading profile draft")?;

    let client = CompanyClient::new(&config.backend_url, config.request_timeout_secs)
        .context("constructing backend client")?;
    let auth = ConfigTokens {
        token: config.auth_token.clone(),
    };
    let navigator = StashingNavigator {
        stash_path: stash.map_or_else(|| default_stash_path(file), Path::to_path_buf),
    };
    let notifier = StderrNotifier;
    let mut flow = SubmitFlow::new(
        &client,
        &auth,
        &navigator,
        &notifier,
        Duration::from_millis(config.redirect_delay_ms),
    );

    match flow.submit(&profile).await {
        SubmitOutcome::Created => {
            println!("company profile for '{}' created", profile.company_name);
            Ok(())
        }
        SubmitOutcome::RedirectedToLogin => anyhow::bail!("submission requires login"),
        SubmitOutcome::Invalid(violation) => anyhow::bail!("draft is not ready: {violation}"),
        SubmitOutcome::Failed => anyhow::bail!("backend rejected the submission"),
        SubmitOutcome::InFlight => anyhow::bail!("another submission is already running"),
    }
}

fn default_stash_path(file: &Path) -> PathBuf {
    file.with_extension("stash.yaml")
}
