//! Fixtures and a scripted forecast source for tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tracing::subscriber::DefaultGuard;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use crate::source::{ForecastSource, SourceError};

/// One short-term dataset whose single area has fewer entries than
/// `timeDefines`.
pub const SHORT_TERM_ONLY: &str = r#"[
    {
        "publishingOffice": "大阪管区気象台",
        "reportDatetime": "2025-11-07T11:00:00+09:00",
        "timeSeries": [
            {
                "timeDefines": ["2025-11-07T11:00:00+09:00", "2025-11-08T00:00:00+09:00"],
                "areas": [
                    {
                        "area": { "name": "大阪府", "code": "270000" },
                        "weathers": ["晴れ"],
                        "winds": ["北の風"],
                        "waves": ["０．５メートル"]
                    }
                ]
            }
        ]
    }
]"#;

/// Short-term and weekly datasets, shaped like the provider's output. The
/// weekly temperature block names "大阪府" but not "兵庫県".
pub const TWO_HORIZONS: &str = r#"[
    {
        "publishingOffice": "大阪管区気象台",
        "reportDatetime": "2025-11-07T11:00:00+09:00",
        "timeSeries": [
            {
                "timeDefines": ["2025-11-07T11:00:00+09:00", "2025-11-08T00:00:00+09:00"],
                "areas": [
                    {
                        "area": { "name": "大阪府", "code": "270000" },
                        "weathers": ["晴れ", "くもり"],
                        "winds": ["北の風", "南の風"],
                        "waves": ["０．５メートル", "０．５メートル"]
                    },
                    {
                        "area": { "name": "兵庫県", "code": "280000" },
                        "weathers": ["くもり"]
                    }
                ]
            }
        ]
    },
    {
        "publishingOffice": "大阪管区気象台",
        "reportDatetime": "2025-11-07T11:00:00+09:00",
        "timeSeries": [
            {
                "timeDefines": [
                    "2025-11-08T00:00:00+09:00",
                    "2025-11-09T00:00:00+09:00",
                    "2025-11-10T00:00:00+09:00"
                ],
                "areas": [
                    {
                        "area": { "name": "大阪府", "code": "270000" },
                        "weathers": ["", "晴れ", "くもり"],
                        "pops": ["", "20", "30"],
                        "reliabilities": ["", "A", "B"]
                    },
                    {
                        "area": { "name": "兵庫県", "code": "280000" },
                        "pops": ["", "10"]
                    }
                ]
            },
            {
                "timeDefines": [
                    "2025-11-08T00:00:00+09:00",
                    "2025-11-09T00:00:00+09:00",
                    "2025-11-10T00:00:00+09:00"
                ],
                "areas": [
                    {
                        "area": { "name": "大阪府", "code": "62078" },
                        "tempsMin": ["", "12", "13"],
                        "tempsMax": ["", "21", "22"]
                    },
                    {
                        "area": { "name": "神戸", "code": "63518" },
                        "tempsMin": ["", "11", "12"],
                        "tempsMax": ["", "20", "21"]
                    }
                ]
            }
        ]
    }
]"#;

/// Source that answers every call with the same scripted result and records
/// the requested URLs.
pub struct StubSource {
    response: Result<String, SourceError>,
    calls: AtomicUsize,
    urls: Mutex<Vec<String>>,
}

impl StubSource {
    pub fn ok(body: &str) -> Self {
        Self::with(Ok(body.to_string()))
    }

    pub fn status(status: u16) -> Self {
        Self::with(Err(SourceError::Status(status)))
    }

    pub fn transport(message: &str) -> Self {
        Self::with(Err(SourceError::Transport(message.to_string())))
    }

    fn with(response: Result<String, SourceError>) -> Self {
        Self {
            response,
            calls: AtomicUsize::new(0),
            urls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ForecastSource for StubSource {
    async fn fetch(&self, url: &str) -> Result<String, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.urls.lock().unwrap().push(url.to_string());
        self.response.clone()
    }
}

/// Counts `ERROR` events seen on the current thread.
#[derive(Clone, Default)]
pub struct ErrorCounter {
    count: Arc<AtomicUsize>,
}

impl ErrorCounter {
    /// Installs the counter as the thread's default subscriber until the
    /// guard is dropped.
    pub fn install() -> (Self, DefaultGuard) {
        let counter = Self::default();
        let subscriber = tracing_subscriber::registry().with(counter.clone());
        let guard = tracing::subscriber::set_default(subscriber);
        (counter, guard)
    }

    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> Layer<S> for ErrorCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::ERROR {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }
}
