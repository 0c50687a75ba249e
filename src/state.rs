use crate::application::orchestrate::Orchestrator;
use crate::application::translate::Translator;
use crate::domain::error::AgriError;
use crate::domain::traits::{ConversationStore, TranslationProvider};
use crate::infrastructure::config::Config;
use crate::infrastructure::detect::WhatlangDetector;
use crate::infrastructure::network::google_web::GoogleWebTranslator;
use crate::infrastructure::network::http::create_client;
use crate::infrastructure::network::libre::LibreTranslator;
use crate::infrastructure::network::model_client::HttpModelGateway;
use crate::infrastructure::storage::history::MemoryHistory;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Orchestrator,
    pub history: Option<Arc<dyn ConversationStore>>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Wire the real detector, providers and model client from config.
    pub fn new(config: Config) -> Result<Self, AgriError> {
        let http_client = create_client()?;
        let translate_timeout = Duration::from_secs(config.translate.timeout_secs);

        let primary = config.translate_base().map(|base| {
            Arc::new(LibreTranslator::new(
                http_client.clone(),
                base,
                config.translate.api_key.clone(),
                translate_timeout,
            )) as Arc<dyn TranslationProvider>
        });
        let secondary = Arc::new(GoogleWebTranslator::new(
            http_client.clone(),
            config.translate.web_url.clone(),
            translate_timeout,
        ));

        let gateway = Arc::new(HttpModelGateway::new(
            http_client,
            config.model.url.clone(),
            Duration::from_secs(config.model.timeout_secs),
        ));

        let orchestrator = Orchestrator::new(
            Arc::new(WhatlangDetector::new()),
            Translator::new(primary, secondary),
            gateway,
            config.debug,
        );

        let history = config.history.enable.then(|| {
            Arc::new(MemoryHistory::new(
                config.history.max_per_user,
                config.history.max_users,
            )) as Arc<dyn ConversationStore>
        });

        Ok(Self::from_parts(orchestrator, history, config))
    }

    pub fn from_parts(
        orchestrator: Orchestrator,
        history: Option<Arc<dyn ConversationStore>>,
        config: Config,
    ) -> Self {
        Self {
            orchestrator,
            history,
            config: Arc::new(config),
        }
    }
}
