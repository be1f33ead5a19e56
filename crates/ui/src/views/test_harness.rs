use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use campus_core::playback::{
    MediaEvent, MediaEventSender, MediaWidget, MediaWidgetFactory, PlaybackError, WidgetMount,
};
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use serde_json::json;
use services::{
    ApiConfig, AppServices, AuthService, CatalogService, Method, SessionGate, StubBackend,
};

use crate::context::{LoginRedirects, UiApp, build_app_context};
use crate::player::PlayerHost;
use crate::views::{CourseView, CoursesView, LoginView, RequireSession, TopicView};

pub const TEST_PHONE: &str = "9876543210";

#[derive(Clone)]
struct TestApp {
    services: AppServices,
    redirects: LoginRedirects,
}

impl UiApp for TestApp {
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

#[derive(Default)]
struct PlayerLog {
    sources: Vec<String>,
    senders: Vec<MediaEventSender>,
    destroyed: usize,
}

/// Widget factory that records every mount instead of touching a webview.
#[derive(Clone, Default)]
pub struct FakePlayers {
    log: Rc<RefCell<PlayerLog>>,
}

impl FakePlayers {
    /// Sources of every widget constructed so far.
    pub fn sources(&self) -> Vec<String> {
        self.log.borrow().sources.clone()
    }

    pub fn destroyed(&self) -> usize {
        self.log.borrow().destroyed
    }

    /// Deliver a native event from the most recently mounted widget.
    pub fn fire(&self, event: MediaEvent) {
        if let Some(sender) = self.log.borrow().senders.last() {
            let _ = sender.unbounded_send(event);
        }
    }
}

impl MediaWidgetFactory for FakePlayers {
    fn construct(&self, mount: WidgetMount<'_>) -> Result<Box<dyn MediaWidget>, PlaybackError> {
        let mut log = self.log.borrow_mut();
        log.sources.push(mount.source.to_string());
        log.senders.push(mount.events);
        Ok(Box::new(FakeWidget {
            log: Rc::clone(&self.log),
        }))
    }
}

struct FakeWidget {
    log: Rc<RefCell<PlayerLog>>,
}

impl MediaWidget for FakeWidget {
    fn destroy(&mut self) {
        self.log.borrow_mut().destroyed += 1;
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Login,
    Courses,
    Course(u64),
    Topic(u64),
    /// The topic page behind the session guard, as the app routes it.
    GuardedTopic(u64),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    players: FakePlayers,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| PlayerHost::new(Rc::new(props.players.clone())));
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
    #[route("/login")]
    SignIn {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Login => rsx! { LoginView {} },
        ViewKind::Courses => rsx! { CoursesView {} },
        ViewKind::Course(course_id) => rsx! { CourseView { course_id } },
        ViewKind::Topic(topic_id) => rsx! { TopicView { topic_id } },
        ViewKind::GuardedTopic(topic_id) => rsx! {
            RequireSession {
                TopicView { topic_id }
            }
        },
    }
}

#[component]
fn SignIn() -> Element {
    rsx! {
        p { "Sign in page" }
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub backend: StubBackend,
    pub services: AppServices,
    pub redirects: LoginRedirects,
    pub players: FakePlayers,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drive until spawned work (fetches, event pumps, reports) has run.
    pub async fn settle(&mut self) {
        for _ in 0..6 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Build a harness over `backend`. With `signed_in`, a session is
/// established first through the regular login call.
pub async fn setup_view_harness(
    view: ViewKind,
    backend: StubBackend,
    signed_in: bool,
) -> ViewHarness {
    let redirects = LoginRedirects::new();
    let services = AppServices::with_backend(
        ApiConfig::default(),
        Arc::new(backend.clone()),
        Arc::new(redirects.clone()),
    );

    if signed_in {
        backend.respond(
            Method::POST,
            "/api/auth/login/",
            200,
            json!({"user": {"id": 1, "name": "Asha", "phone": TEST_PHONE, "payment_status": true}}),
        );
        services.auth().login(TEST_PHONE).await.expect("login");
    }

    let players = FakePlayers::default();
    let app = Arc::new(TestApp {
        services: services.clone(),
        redirects: redirects.clone(),
    });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            players: players.clone(),
        },
    );

    ViewHarness {
        dom,
        backend,
        services,
        redirects,
        players,
    }
}
