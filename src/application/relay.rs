//! The polling loop - receive, route, reply, advance the cursor.

use std::sync::Arc;
use std::time::Duration;

use crate::application::router::{IntentRouter, RouteOutcome};
use crate::domain::entities::IncomingMessage;
use crate::domain::traits::ChatPlatform;

/// Single-task sequential relay over one chat platform. The only
/// mutable state is the last-seen update cursor, held in memory; a
/// restart re-reads from the platform's default offset.
pub struct RelayService {
    chat: Arc<dyn ChatPlatform>,
    router: IntentRouter,
    poll_interval: Duration,
}

impl RelayService {
    pub fn new(chat: Arc<dyn ChatPlatform>, router: IntentRouter, poll_interval: Duration) -> Self {
        Self {
            chat,
            router,
            poll_interval,
        }
    }

    /// Cursor for the next poll: one past the highest update id seen.
    /// An empty batch keeps the previous cursor.
    pub fn next_cursor(batch: &[IncomingMessage]) -> Option<i64> {
        batch.iter().map(|m| m.update_id + 1).max()
    }

    /// Run forever. Poll failures are logged and retried on the next
    /// tick; per-message failures are logged and do not stop the rest
    /// of the batch.
    pub async fn run(&self) {
        let mut cursor: i64 = 0;
        tracing::info!("Starting message loop...");

        loop {
            self.tick(&mut cursor).await;
            tokio::time::sleep(self.poll_interval).await;
        }
    }

    /// One poll cycle. Split out from `run` so tests can drive cycles
    /// without the sleep.
    pub async fn tick(&self, cursor: &mut i64) {
        let batch = match self.chat.poll(*cursor).await {
            Ok(batch) => batch,
            Err(e) => {
                tracing::error!("Poll failed: {}", e);
                return;
            }
        };

        if let Some(next) = Self::next_cursor(&batch) {
            *cursor = next;
        }

        if !batch.is_empty() {
            tracing::info!("Received {} updates", batch.len());
        }

        for message in &batch {
            self.handle(message).await;
        }
    }

    async fn handle(&self, message: &IncomingMessage) {
        match self.router.route(&message.text).await {
            Ok(RouteOutcome::Reply(reply)) => {
                if let Err(e) = self.chat.send_text(&message.chat_id, &reply.text).await {
                    tracing::error!("Failed to send reply to {}: {}", message.chat_id, e);
                    return;
                }
                if let Some(ref url) = reply.photo_url {
                    if let Err(e) = self.chat.send_photo(&message.chat_id, url).await {
                        tracing::error!("Failed to send photo to {}: {}", message.chat_id, e);
                    }
                }
            }
            Ok(RouteOutcome::NoReply) => {
                tracing::debug!("No reply for message {}", message.update_id);
            }
            Err(e) => {
                // One bad message must not drop the rest of the batch.
                tracing::error!("Failed to handle message {}: {}", message.update_id, e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::time::Duration;

    use crate::application::errors::GatewayError;
    use crate::application::phrases;
    use crate::domain::entities::{Coordinates, ForecastBundle, Intent, RecognizedIntent};
    use crate::domain::traits::{
        Geocoder, ImageSearch, IntentClassifier, Translator, WeatherProvider,
    };

    /// Serves one pre-seeded batch and records everything sent back.
    struct ScriptedChat {
        batch: Mutex<Vec<IncomingMessage>>,
        sent: Mutex<Vec<(String, String)>>,
    }

    impl ScriptedChat {
        fn with_batch(batch: Vec<IncomingMessage>) -> Self {
            Self {
                batch: Mutex::new(batch),
                sent: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ChatPlatform for ScriptedChat {
        async fn poll(&self, _cursor: i64) -> Result<Vec<IncomingMessage>, GatewayError> {
            Ok(std::mem::take(&mut *self.batch.lock().unwrap()))
        }

        async fn send_text(&self, chat_id: &str, text: &str) -> Result<(), GatewayError> {
            self.sent
                .lock()
                .unwrap()
                .push((chat_id.to_string(), text.to_string()));
            Ok(())
        }

        async fn send_photo(&self, _chat_id: &str, _photo_url: &str) -> Result<(), GatewayError> {
            Ok(())
        }
    }

    /// Fails on one trigger word, echoes everything else.
    struct FlakyTranslator;

    #[async_trait]
    impl Translator for FlakyTranslator {
        async fn translate(&self, text: &str) -> Result<String, GatewayError> {
            if text == "boom" {
                Err(GatewayError::Network("translator down".to_string()))
            } else {
                Ok(text.to_string())
            }
        }
    }

    struct GreetingClassifier;

    #[async_trait]
    impl IntentClassifier for GreetingClassifier {
        async fn classify(&self, _text: &str) -> Result<RecognizedIntent, GatewayError> {
            Ok(RecognizedIntent {
                intent: Intent::Greeting,
                confidence: 0.9,
                entities: vec![],
            })
        }
    }

    struct UnusedGeocoder;

    #[async_trait]
    impl Geocoder for UnusedGeocoder {
        async fn geocode(&self, _address: &str) -> Result<Option<Coordinates>, GatewayError> {
            Ok(None)
        }
    }

    struct UnusedWeather;

    #[async_trait]
    impl WeatherProvider for UnusedWeather {
        async fn forecast(
            &self,
            _coords: Coordinates,
            _limit: Option<u8>,
        ) -> Result<ForecastBundle, GatewayError> {
            Err(GatewayError::Schema("not in this test".to_string()))
        }
    }

    struct UnusedImages;

    #[async_trait]
    impl ImageSearch for UnusedImages {
        async fn search(&self, _query: &str) -> Result<Vec<String>, GatewayError> {
            Ok(vec![])
        }
    }

    fn relay_over(chat: Arc<ScriptedChat>) -> RelayService {
        let router = IntentRouter::new(
            Arc::new(FlakyTranslator),
            Arc::new(GreetingClassifier),
            Arc::new(UnusedGeocoder),
            Arc::new(UnusedWeather),
            Arc::new(UnusedImages),
        );
        RelayService::new(chat, router, Duration::from_secs(0))
    }

    #[tokio::test]
    async fn test_tick_isolates_a_failing_message() {
        let chat = Arc::new(ScriptedChat::with_batch(vec![
            IncomingMessage::new("1", "boom", 5),
            IncomingMessage::new("2", "hello", 6),
        ]));
        let relay = relay_over(chat.clone());

        let mut cursor = 0;
        relay.tick(&mut cursor).await;

        // The failing first message is logged and dropped; the second
        // still gets its reply and the cursor covers both.
        assert_eq!(cursor, 7);
        let sent = chat.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "2");
        assert!(phrases::GREETINGS.contains(&sent[0].1.as_str()));
    }

    #[tokio::test]
    async fn test_tick_poll_failure_keeps_cursor() {
        struct DownChat;

        #[async_trait]
        impl ChatPlatform for DownChat {
            async fn poll(&self, _cursor: i64) -> Result<Vec<IncomingMessage>, GatewayError> {
                Err(GatewayError::Network("poll down".to_string()))
            }
            async fn send_text(&self, _chat_id: &str, _text: &str) -> Result<(), GatewayError> {
                Ok(())
            }
            async fn send_photo(&self, _chat_id: &str, _url: &str) -> Result<(), GatewayError> {
                Ok(())
            }
        }

        let router = IntentRouter::new(
            Arc::new(FlakyTranslator),
            Arc::new(GreetingClassifier),
            Arc::new(UnusedGeocoder),
            Arc::new(UnusedWeather),
            Arc::new(UnusedImages),
        );
        let relay = RelayService::new(Arc::new(DownChat), router, Duration::from_secs(0));

        let mut cursor = 42;
        relay.tick(&mut cursor).await;
        assert_eq!(cursor, 42);
    }

    #[test]
    fn test_next_cursor_advances_past_highest_id() {
        let batch = vec![
            IncomingMessage::new("1", "hi", 10),
            IncomingMessage::new("2", "hi", 12),
            IncomingMessage::new("3", "hi", 11),
        ];
        assert_eq!(RelayService::next_cursor(&batch), Some(13));
    }

    #[test]
    fn test_next_cursor_empty_batch_keeps_previous() {
        assert_eq!(RelayService::next_cursor(&[]), None);
    }
}
