use anyhow::{Context, Result};
use tao::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoopBuilder},
    window::WindowBuilder,
};
use vervoeger_fetch::{ConjugateError, Conjugator};
use wry::{WebView, WebViewBuilder};

mod chrome;

/// Posted from the webview's IPC bridge back to the event loop.
enum AppEvent {
    /// Raw text of the verb field at the moment the user triggered a search.
    Lookup(String),
}

fn main() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let event_loop = EventLoopBuilder::<AppEvent>::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title("Dutch Verb Conjugator")
        .with_inner_size(LogicalSize::new(800.0, 600.0))
        .with_min_inner_size(LogicalSize::new(800.0, 600.0))
        .build(&event_loop)
        .context("Failed to create window")?;

    let builder = WebViewBuilder::new()
        .with_html(chrome::CHROME_HTML)
        .with_ipc_handler(move |request: wry::http::Request<String>| {
            let _ = proxy.send_event(AppEvent::Lookup(request.body().clone()));
        });

    #[cfg(any(
        target_os = "windows",
        target_os = "macos",
        target_os = "ios",
        target_os = "android"
    ))]
    let webview = builder.build(&window).context("Failed to create webview")?;
    #[cfg(not(any(
        target_os = "windows",
        target_os = "macos",
        target_os = "ios",
        target_os = "android"
    )))]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window.default_vbox().context("Window has no default vbox")?;
        builder.build_gtk(vbox).context("Failed to create webview")?
    };

    let conjugator = Conjugator::new()?;

    event_loop.run(move |event, _target, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => *control_flow = ControlFlow::Exit,

            Event::UserEvent(AppEvent::Lookup(raw)) => {
                // Blocks the event loop until the lookup concludes; the
                // chrome script keeps both controls disabled meanwhile and
                // re-enables them when finishLookup runs.
                let html = match conjugator.lookup(&raw) {
                    Ok(document) => document,
                    Err(err) => {
                        match &err {
                            ConjugateError::EmptyVerb => tracing::debug!("Empty verb submitted"),
                            _ => tracing::warn!(%err, verb = raw.trim(), "Lookup failed"),
                        }
                        err.to_string()
                    }
                };
                show_result(&webview, &html);
            }

            _ => (),
        }

        // Keep the window alive for the whole run; it is dropped only when
        // the loop exits.
        let _ = &window;
    });
}

/// Hand the finished document (or message) to the chrome for display.
fn show_result(webview: &WebView, html: &str) {
    let payload = match serde_json::to_string(html) {
        Ok(payload) => payload,
        Err(err) => {
            tracing::error!(%err, "Failed to encode result for the view");
            return;
        }
    };
    if let Err(err) = webview.evaluate_script(&format!("window.finishLookup({payload});")) {
        tracing::error!(%err, "Failed to push result into the view");
    }
}
