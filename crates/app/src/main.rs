use std::sync::Arc;

use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::config::{API_URL_ENV, DEFAULT_API_URL};
use services::{ApiConfig, AppServices, AuthService, CatalogService, SessionGate};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, LoginRedirects, UiApp, build_app_context};

const DEFAULT_LOG_FILTER: &str = "app=info,services=info,ui=info,dioxus=warn";

#[derive(Parser, Debug)]
#[command(name = "campus")]
#[command(about = "Desktop client for the Campus e-learning platform")]
struct Cli {
    /// Base address of the backend API
    #[arg(long, env = API_URL_ENV, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Do not keep or send the session cookie
    #[arg(long)]
    no_credentials: bool,
}

struct DesktopApp {
    services: AppServices,
    redirects: LoginRedirects,
}

impl UiApp for DesktopApp {
    fn config(&self) -> ApiConfig {
        self.services.config().clone()
    }

    fn gate(&self) -> Arc<SessionGate> {
        self.services.gate()
    }

    fn auth(&self) -> Arc<AuthService> {
        self.services.auth()
    }

    fn catalog(&self) -> Arc<CatalogService> {
        self.services.catalog()
    }

    fn login_redirects(&self) -> LoginRedirects {
        self.redirects.clone()
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = ApiConfig::parse(&cli.api_url)?;
    if cli.no_credentials {
        config = config.without_credentials();
    }

    let redirects = LoginRedirects::new();
    let services = AppServices::connect(config, Arc::new(redirects.clone()))?;
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        services,
        redirects,
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Campus")
            .with_always_on_top(false),
    );

    tracing::info!(api = %cli.api_url, "launching desktop client");
    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
