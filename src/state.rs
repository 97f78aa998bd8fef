use crate::config::AppConfig;
use crate::credentials::CredentialStore;
use crate::db::DbPool;
use crate::quote::FinnhubClient;
use portable_atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

// ── Request counters (lock-free) ──

pub struct RequestCounters {
    pub quotes_fetched: AtomicU64,
    pub quote_failures: AtomicU64,
    pub puts_computed: AtomicU64,
    pub calls_computed: AtomicU64,
    pub inputs_rejected: AtomicU64,
}

impl RequestCounters {
    pub fn new() -> Self {
        Self {
            quotes_fetched: AtomicU64::new(0),
            quote_failures: AtomicU64::new(0),
            puts_computed: AtomicU64::new(0),
            calls_computed: AtomicU64::new(0),
            inputs_rejected: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn bump(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> serde_json::Value {
        use portable_atomic::Ordering::Relaxed;
        serde_json::json!({
            "quotes_fetched": self.quotes_fetched.load(Relaxed),
            "quote_failures": self.quote_failures.load(Relaxed),
            "puts_computed": self.puts_computed.load(Relaxed),
            "calls_computed": self.calls_computed.load(Relaxed),
            "inputs_rejected": self.inputs_rejected.load(Relaxed),
        })
    }
}

impl Default for RequestCounters {
    fn default() -> Self {
        Self::new()
    }
}

// ── Application shared state ──

pub struct AppState {
    pub config: AppConfig,
    pub credentials: CredentialStore,
    pub quotes: FinnhubClient,
    pub counters: RequestCounters,
}

impl AppState {
    pub fn new(config: AppConfig, db: DbPool) -> Arc<Self> {
        let quotes = FinnhubClient::new(
            &config.finnhub_base_url,
            Duration::from_secs(config.quote_timeout_secs),
        );
        Arc::new(Self {
            config,
            credentials: CredentialStore::new(db),
            quotes,
            counters: RequestCounters::new(),
        })
    }
}
