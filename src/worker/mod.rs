//! Job-dispatch worker process.
//!
//! A long-running HTTP listener accepts job dispatches from the orchestration
//! layer and runs one bootstrap per job. Job failures are logged with the job
//! id and never take the worker down.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

use crate::bootstrap::Bootstrapper;
use crate::config::WorkerConfig;
use crate::error::{MinervaError, Result};
use crate::realtime::OpenAiRealtime;
use crate::topic::PostgrestTopicStore;
use crate::transport::WsSignalingTransport;

/// Shared state behind the dispatch routes.
#[derive(Clone)]
pub struct WorkerState {
    bootstrapper: Arc<Bootstrapper>,
    default_signaling_url: Option<String>,
}

impl WorkerState {
    pub fn new(bootstrapper: Arc<Bootstrapper>, default_signaling_url: Option<String>) -> Self {
        Self {
            bootstrapper,
            default_signaling_url,
        }
    }
}

/// One job dispatch from the orchestration layer.
#[derive(Debug, Clone, Deserialize)]
pub struct JobRequest {
    /// Room identifier, also the topic lookup key.
    pub room: String,
    /// Signaling endpoint override; falls back to the configured default.
    #[serde(default)]
    pub signaling_url: Option<String>,
    /// Room access token, if the signaling endpoint requires one.
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Serialize)]
struct JobAccepted {
    job_id: Uuid,
    room: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Build the dispatch router.
pub fn router(state: WorkerState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/dispatch", post(dispatch))
        .with_state(state)
}

async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn dispatch(
    State(state): State<WorkerState>,
    Json(job): Json<JobRequest>,
) -> std::result::Result<(StatusCode, Json<JobAccepted>), (StatusCode, Json<ErrorBody>)> {
    let Some(signaling_url) = job
        .signaling_url
        .clone()
        .or_else(|| state.default_signaling_url.clone())
    else {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorBody {
                error: "no signaling_url in job and no default configured".into(),
            }),
        ));
    };

    let job_id = Uuid::new_v4();
    let room = job.room.clone();
    info!(%job_id, %room, "job accepted");

    let bootstrapper = Arc::clone(&state.bootstrapper);
    tokio::spawn(async move {
        let mut transport = WsSignalingTransport::new(signaling_url, job.room, job.token);
        match bootstrapper.bootstrap(&mut transport).await {
            Ok(report) => {
                info!(%job_id, room = %report.room, participant = %report.participant, has_topic = report.has_topic, "job finished");
            }
            Err(e) => {
                error!(%job_id, error = %e, "job failed");
            }
        }
    });

    Ok((StatusCode::ACCEPTED, Json(JobAccepted { job_id, room })))
}

/// Build the process-wide collaborators from config and serve until shutdown.
pub async fn run(config: WorkerConfig) -> Result<()> {
    config.validate()?;

    // Constructed once, injected into every bootstrap.
    let topics = Arc::new(PostgrestTopicStore::new(
        config
            .topic_store_url
            .clone()
            .ok_or_else(|| MinervaError::Configuration("TOPIC_STORE_URL is not set".into()))?,
        config
            .topic_store_key
            .clone()
            .ok_or_else(|| MinervaError::Configuration("TOPIC_STORE_KEY is not set".into()))?,
    ));
    let realtime = Arc::new(OpenAiRealtime::new(
        config.realtime_url.clone(),
        config
            .realtime_api_key
            .clone()
            .ok_or_else(|| MinervaError::Configuration("OPENAI_API_KEY is not set".into()))?,
    ));

    let bootstrapper = Arc::new(Bootstrapper::new(topics, realtime).with_config(&config));
    let state = WorkerState::new(bootstrapper, config.signaling_url.clone());

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!(addr = %config.bind_addr(), "worker listening for job dispatch");
    axum::serve(listener, router(state)).await?;
    Ok(())
}
