//! Shared helpers for in-crate tests.

use async_trait::async_trait;
use axum::Router;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::sync::Notify;

use crate::llm_client::LlmError;
use crate::models::{CareerSuggestion, Profile};
use crate::recommendation::{Recommender, RequestError};

/// Serves `app` on an ephemeral localhost port and returns its base URL.
pub async fn spawn_stub(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server");
    });
    format!("http://{addr}")
}

pub fn scenario_profile() -> Profile {
    Profile {
        passions: "I love solving logic puzzles and building things".to_string(),
        skills: "math, coding".to_string(),
        preferred_work_style: "remote".to_string(),
    }
}

/// `n` suggestions ranked by descending match score.
pub fn sample_suggestions(n: usize) -> Vec<CareerSuggestion> {
    const TITLES: [&str; 4] = [
        "Ingeniero de Software de Sistemas",
        "Científico de Datos",
        "Actuario",
        "Ingeniero de Robótica",
    ];
    (0..n)
        .map(|i| CareerSuggestion {
            title: TITLES[i % TITLES.len()].to_string(),
            description: format!("Descripción {i}"),
            match_score: 95 - 5 * i as i64,
            salary_range_usd: "$120k - $180k".to_string(),
            education_path: "Grado en Ingeniería".to_string(),
            required_skills: vec!["Rust".to_string(), "Matemáticas".to_string()],
            why_it_fits: "Combina lógica y construcción".to_string(),
            growth_outlook: "Very High".to_string(),
        })
        .collect()
}

pub enum Script {
    Suggestions(Vec<CareerSuggestion>),
    MissingKey,
    ProviderFailure,
    Panic,
}

/// Recommender that replays a fixed outcome and records every call.
pub struct ScriptedRecommender {
    script: Script,
    calls: AtomicUsize,
    profiles: Mutex<Vec<Profile>>,
    gate: Option<Notify>,
}

impl ScriptedRecommender {
    pub fn new(script: Script) -> Self {
        Self {
            script,
            calls: AtomicUsize::new(0),
            profiles: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    /// Holds every call open until `release` is called.
    pub fn gated(mut self) -> Self {
        self.gate = Some(Notify::new());
        self
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn profiles(&self) -> Vec<Profile> {
        self.profiles.lock().unwrap().clone()
    }
}

#[async_trait]
impl Recommender for ScriptedRecommender {
    async fn recommend(&self, profile: &Profile) -> Result<Vec<CareerSuggestion>, RequestError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.profiles.lock().unwrap().push(profile.clone());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        match &self.script {
            Script::Suggestions(suggestions) => Ok(suggestions.clone()),
            Script::MissingKey => Err(RequestError::MissingApiKey),
            Script::ProviderFailure => Err(RequestError::Provider(LlmError::Api {
                status: 503,
                message: "unavailable".to_string(),
            })),
            Script::Panic => panic!("scripted recommender panic"),
        }
    }
}
