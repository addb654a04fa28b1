use std::convert::Infallible;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::extract::State;
use axum::response::Html;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::routing::get;
use futures_util::stream::Stream;
use tokio::sync::{RwLock, broadcast};
use tower_http::services::ServeDir;

use crate::{
    ServeArgs,
    config::Config,
    preview::{Coordinator, render_page},
    render::Pipeline,
};

/// Shared state for the preview server.
#[derive(Clone)]
struct AppState {
    page: Arc<RwLock<String>>,
    reload_tx: broadcast::Sender<()>,
}

async fn preview_handler(State(state): State<AppState>) -> Html<String> {
    Html(state.page.read().await.clone())
}

/// SSE handler for live reload notifications.
async fn live_reload_handler(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = state.reload_tx.subscribe();
    let stream = async_stream::stream! {
        let mut rx = rx;
        loop {
            match rx.recv().await {
                Ok(_) => {
                    yield Ok(Event::default().event("reload").data("reload"));
                }
                Err(broadcast::error::RecvError::Lagged(_)) => {
                    // Missed some messages, but that's fine - we just need the latest
                    continue;
                }
                Err(broadcast::error::RecvError::Closed) => {
                    break;
                }
            }
        }
    };
    Sse::new(stream).keep_alive(KeepAlive::default())
}

pub async fn run(args: &ServeArgs) -> Result<(), anyhow::Error> {
    let (config, base) = Config::load_from_arg(args.config_file.as_deref()).await?;

    let template_path = args
        .template
        .clone()
        .unwrap_or_else(|| config.files.template_path(&base));
    let data_path = args
        .data
        .clone()
        .unwrap_or_else(|| config.files.data_path(&base));
    // interval(0) would panic
    let interval = args
        .interval
        .unwrap_or(config.preview.sample_interval_ms)
        .max(1);
    let live_reload = config.preview.live_reload;
    let title = page_title(&template_path);

    if !template_path.exists() {
        eprintln!(
            "Warning: template file {} does not exist yet",
            template_path.display()
        );
    }

    // Create broadcast channel for live reload
    let (reload_tx, _) = broadcast::channel::<()>(16);

    let state = AppState {
        page: Arc::new(RwLock::new(render_page(&title, "", live_reload)?)),
        reload_tx,
    };

    // Sample the working files on a fixed interval and publish new renders
    let sampler_state = state.clone();
    let pipeline = Pipeline::new(config.markdown.clone());
    let sampler_template = template_path.clone();
    let sampler_data = data_path.clone();
    let sampler_title = title.clone();
    tokio::spawn(async move {
        let mut coordinator = Coordinator::new(pipeline);
        let mut ticker = tokio::time::interval(Duration::from_millis(interval));
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let template = tokio::fs::read_to_string(&sampler_template)
                .await
                .unwrap_or_default();
            let data = tokio::fs::read_to_string(&sampler_data)
                .await
                .unwrap_or_default();
            if let Some(html) = coordinator.tick(&template, &data) {
                match render_page(&sampler_title, &html, live_reload) {
                    Ok(page) => {
                        *sampler_state.page.write().await = page;
                        let _ = sampler_state.reload_tx.send(());
                    }
                    Err(e) => eprintln!("Page error: {e}"),
                }
            }
        }
    });

    // Serve files next to the template so relative links keep working
    let static_dir = template_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let serve_dir = ServeDir::new(static_dir);

    let app = Router::new()
        .route("/", get(preview_handler))
        .route("/_mdfill/events", get(live_reload_handler))
        .with_state(state)
        .fallback_service(serve_dir);

    // Parse the address
    let addr: SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;

    // Determine the URL to display
    let display_host = if args.bind == "0.0.0.0" {
        "localhost"
    } else {
        &args.bind
    };
    let url = format!("http://{}:{}", display_host, args.port);

    println!("Previewing {} at {}", template_path.display(), url);
    println!("Press Ctrl+C to stop\n");

    // Open browser if requested
    if args.open
        && let Err(e) = open::that(&url)
    {
        eprintln!("Failed to open browser: {}", e);
    }

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn page_title(template_path: &Path) -> String {
    template_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("mdfill")
        .to_string()
}
