//! The `VideoPlayer` component and the widget it drives.

mod plyr;
mod scripts;

pub use plyr::PlyrFactory;

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use campus_core::playback::{
    MediaWidgetFactory, PlaybackController, PlaybackSignal, PlayerConfig,
};
use dioxus::prelude::*;
use futures_util::StreamExt;

/// Which widget implementation `VideoPlayer` mounts. Provide one as context
/// to replace the default Plyr factory.
#[derive(Clone)]
pub struct PlayerHost(Rc<dyn MediaWidgetFactory>);

impl PlayerHost {
    #[must_use]
    pub fn new(factory: Rc<dyn MediaWidgetFactory>) -> Self {
        Self(factory)
    }

    #[must_use]
    pub fn plyr() -> Self {
        Self(Rc::new(PlyrFactory))
    }
}

static NEXT_PLAYER_ID: AtomicU64 = AtomicU64::new(1);

fn next_element_id() -> String {
    format!("campus-player-{}", NEXT_PLAYER_ID.fetch_add(1, Ordering::Relaxed))
}

/// One widget per mount, bound to `source` for the component's lifetime.
///
/// Key the component by `source` to get a fresh widget when it changes.
#[component]
pub fn VideoPlayer(
    source: String,
    #[props(default)] config: PlayerConfig,
    on_progress: EventHandler<f64>,
    on_complete: EventHandler<()>,
) -> Element {
    let element_id = use_hook(next_element_id);

    let controller = use_hook(|| {
        let host = try_consume_context::<PlayerHost>().unwrap_or_else(PlayerHost::plyr);
        match PlaybackController::mount(host.0.as_ref(), &element_id, &source, &config) {
            Ok((controller, mut events)) => {
                let controller = Rc::new(RefCell::new(controller));
                let pump = Rc::clone(&controller);
                spawn(async move {
                    while let Some(event) = events.next().await {
                        let signal = pump.borrow_mut().handle(event);
                        match signal {
                            Some(PlaybackSignal::Progress(fraction)) => on_progress.call(fraction),
                            Some(PlaybackSignal::Complete) => on_complete.call(()),
                            None => {}
                        }
                    }
                });
                Some(controller)
            }
            Err(err) => {
                tracing::error!(source = %source, error = %err, "video player failed to start");
                None
            }
        }
    });

    use_drop({
        let controller = controller.clone();
        move || {
            if let Some(controller) = controller {
                controller.borrow_mut().unmount();
            }
        }
    });

    rsx! {
        div { class: "video-player",
            video {
                id: "{element_id}",
                class: "plyr",
                "crossorigin": "anonymous",
                "playsinline": "true",
                source { src: "{source}", r#type: "video/mp4" }
            }
        }
    }
}
