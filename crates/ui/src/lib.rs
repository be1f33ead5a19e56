pub mod app;
pub mod context;
pub mod player;
pub mod routes;
pub mod vm;
pub mod views;

pub use app::App;
pub use context::{AppContext, LoginRedirects, UiApp, build_app_context};
