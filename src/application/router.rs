//! Intent routing - one pass from raw message text to a reply.

use std::sync::Arc;

use chrono::{Datelike, Local};

use crate::application::errors::BotError;
use crate::application::timing::{self, ResolvedTime};
use crate::application::{phrases, rendering};
use crate::domain::entities::{EntityKind, ForecastBundle, Intent, Reply};
use crate::domain::traits::{Geocoder, ImageSearch, IntentClassifier, Translator, WeatherProvider};

/// What routing a message produced. The unknown-intent fallthrough
/// deliberately answers nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    Reply(Reply),
    NoReply,
}

/// Routes a classified message to a response strategy. Holds no state
/// between messages.
pub struct IntentRouter {
    translator: Arc<dyn Translator>,
    classifier: Arc<dyn IntentClassifier>,
    geocoder: Arc<dyn Geocoder>,
    weather: Arc<dyn WeatherProvider>,
    images: Arc<dyn ImageSearch>,
}

impl IntentRouter {
    pub fn new(
        translator: Arc<dyn Translator>,
        classifier: Arc<dyn IntentClassifier>,
        geocoder: Arc<dyn Geocoder>,
        weather: Arc<dyn WeatherProvider>,
        images: Arc<dyn ImageSearch>,
    ) -> Self {
        Self {
            translator,
            classifier,
            geocoder,
            weather,
            images,
        }
    }

    /// Handle one raw message. `/help` short-circuits before any
    /// gateway is touched.
    pub async fn route(&self, raw_text: &str) -> Result<RouteOutcome, BotError> {
        if raw_text.trim() == "/help" {
            return Ok(RouteOutcome::Reply(Reply::text(phrases::HELP)));
        }

        let translated = self.translator.translate(raw_text).await?;
        let recognized = self.classifier.classify(&translated).await?;
        tracing::debug!(
            "Classified as {:?} (score {:.2})",
            recognized.intent,
            recognized.confidence
        );

        let reply = match &recognized.intent {
            Intent::Greeting => Reply::text(phrases::pick_one(&phrases::GREETINGS)),
            Intent::Parting => Reply::text(phrases::pick_one(&phrases::PARTINGS)),
            Intent::None => Reply::text(phrases::pick_one(&phrases::IF_NONE)),
            Intent::Weather => {
                let city = match recognized.first_entity(EntityKind::City) {
                    Some(city) => city,
                    None => return Ok(RouteOutcome::Reply(Reply::text(phrases::NO_CITY))),
                };
                let time = recognized.first_entity(EntityKind::Time);
                return self.weather_reply(city, time).await.map(RouteOutcome::Reply);
            }
            Intent::Other(label) => {
                // Labels outside the known set produce no reply at all.
                tracing::warn!("Unhandled intent label '{}', sending nothing", label);
                return Ok(RouteOutcome::NoReply);
            }
        };

        Ok(RouteOutcome::Reply(reply))
    }

    async fn weather_reply(&self, city: &str, time: Option<&str>) -> Result<Reply, BotError> {
        let today = Local::now().weekday();
        let resolved = timing::resolve(time, today);

        let coords = match self.geocoder.geocode(city).await? {
            Some(coords) => coords,
            None => return Ok(Reply::text(phrases::LOCATION_NOT_FOUND)),
        };

        let bundle = self
            .weather
            .forecast(coords, resolved.as_ref().map(|r| r.limit))
            .await?;

        let text =
            rendering::render(self.translator.as_ref(), city, resolved.as_ref(), &bundle).await?;

        let mut reply = Reply::text(text);
        if let Some(url) = self.find_photo(city, resolved.as_ref(), &bundle).await {
            reply = reply.with_photo(url);
        }
        Ok(reply)
    }

    /// Best-effort illustrative photo. Every failure here collapses to
    /// "no photo"; it never surfaces to the user.
    async fn find_photo(
        &self,
        city: &str,
        resolved: Option<&ResolvedTime>,
        bundle: &ForecastBundle,
    ) -> Option<String> {
        let day = rendering::selected_day(resolved, bundle).ok()?;
        let condition_name = bundle.condition_name(&day.condition)?;
        let condition_en = match self.translator.translate(condition_name).await {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!("Photo lookup skipped, translation failed: {}", e);
                return None;
            }
        };

        let query = format!("{}{}", city, condition_en);
        let results = match self.images.search(&query).await {
            Ok(results) => results,
            Err(e) => {
                tracing::debug!("Photo lookup skipped, search failed: {}", e);
                return None;
            }
        };

        // Uniform pick among the top eight; a pick past the end of a
        // short result list falls back to the top hit.
        let index = phrases::rand_index(8);
        results
            .get(index)
            .or_else(|| results.first())
            .cloned()
    }
}
