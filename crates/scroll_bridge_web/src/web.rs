use std::cell::RefCell;

use leptos::prelude::*;
use scroll_bridge::{
    BridgeConfig, BridgeError, EmbeddedApp, Port, Ports, ScrollBridge, ScrollRequest, SCROLL_PORT,
};
use tracing::{error, info, warn};
use wasm_bindgen::prelude::*;

use crate::payload::decode_payload;
use crate::sections::{NavEntry, Section};

mod document;
mod logging;

use document::WebDocument;

thread_local! {
    // One app per page; never torn down.
    static APP: RefCell<Option<DocsApp>> = const { RefCell::new(None) };
}

/// The embedded application. Its only way to reach the host is through its
/// ports.
struct DocsApp {
    ports: Ports,
}

impl EmbeddedApp for DocsApp {
    fn init() -> Self {
        mount_to_body(|| view! { <App /> });
        Self {
            ports: Ports::new(),
        }
    }

    fn ports(&self) -> &Ports {
        &self.ports
    }
}

pub fn start() {
    logging::init();

    let app = DocsApp::init();
    match WebDocument::current() {
        Ok(doc) => match ScrollBridge::with_config(doc, BridgeConfig::default())
            .attach(&app.ports().scroll_into_view)
        {
            Ok(_) => info!("scroll bridge listening on port {}", SCROLL_PORT),
            Err(e) => error!("scroll bridge not attached: {e}"),
        },
        Err(e) => error!("scroll bridge not attached: {e}"),
    }

    // Kept even without a bridge: sends then fail with `NoSubscriber`.
    APP.with(|a| *a.borrow_mut() = Some(app));
}

/// JS entry point: `scrollIntoView({ id, behavior?, block?, inline? })`.
///
/// Accepts either a plain object or its JSON text. Failures are thrown as JS
/// errors.
#[wasm_bindgen(js_name = scrollIntoView)]
pub fn scroll_into_view(payload: JsValue) -> Result<(), JsValue> {
    let raw = if payload.is_undefined() || payload.is_function() {
        None
    } else {
        payload.as_string().or_else(|| {
            js_sys::JSON::stringify(&payload)
                .ok()
                .and_then(|s| s.as_string())
        })
    };
    let request = decode_payload(raw).map_err(to_js_error)?;
    let port = scroll_port().ok_or_else(|| JsValue::from_str("scrollIntoView: app not started"))?;
    port.send_handled(request).map_err(to_js_error)
}

fn to_js_error(e: BridgeError) -> JsValue {
    js_sys::Error::new(&format!("{}: {e}", SCROLL_PORT)).into()
}

fn scroll_port() -> Option<Port<ScrollRequest>> {
    APP.with(|a| {
        a.borrow()
            .as_ref()
            .map(|app| app.ports().scroll_into_view.clone())
    })
}

/// Send from inside the app. Returns the status line for the page.
fn emit(request: ScrollRequest) -> String {
    let id = request.id.clone();
    let Some(port) = scroll_port() else {
        warn!("scroll request for #{id} before the app was started");
        return "app not started".to_string();
    };
    match port.send_handled(request) {
        Ok(()) => format!("scrolled to #{id}"),
        Err(e) => {
            error!("{}: {e}", SCROLL_PORT);
            String::new()
        }
    }
}

#[component]
fn App() -> impl IntoView {
    let (status, set_status) = signal(String::new());

    view! {
        <main style="font-family: system-ui, -apple-system, Segoe UI, Roboto, sans-serif; padding: 18px; max-width: 880px; margin: 0 auto;">
            <h1 style="margin: 0 0 8px 0;">"scroll_bridge"</h1>
            <nav style="position: sticky; top: 0; display: flex; gap: 10px; flex-wrap: wrap; padding: 10px 0; background: #fff; border-bottom: 1px solid #eee;">
                {NavEntry::all()
                    .into_iter()
                    .map(|entry| {
                        view! {
                            <button on:click=move |_| set_status.set(emit(entry.request()))>
                                {entry.label()}
                            </button>
                        }
                    })
                    .collect_view()}
                <span style="color: #777; align-self: center;">{move || status.get()}</span>
            </nav>
            {Section::all()
                .iter()
                .copied()
                .map(|section| view! { <SectionView section=section /> })
                .collect_view()}
        </main>
    }
}

#[component]
fn SectionView(section: Section) -> impl IntoView {
    view! {
        <section
            id=section.id()
            style="min-height: 80vh; padding: 16px 0; border-bottom: 1px solid #eee;"
        >
            <h2 style="margin: 0 0 8px 0;">{section.title()}</h2>
            <p style="white-space: pre-wrap; color: #333;">{section.body()}</p>
        </section>
    }
}
