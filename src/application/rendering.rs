//! Weather response rendering - turns a forecast payload into the
//! natural-language paragraph sent back to the user.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex_lite::Regex;

use crate::application::errors::BotError;
use crate::application::timing::ResolvedTime;
use crate::domain::entities::{ForecastBundle, ForecastDay};
use crate::domain::traits::Translator;

static ISO_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{4}-\d{2}-\d{2}").unwrap());

/// First letter uppercased, the rest lowercased.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Pick the forecast day a resolved time points at. With an explicit
/// limit the gateway returned exactly that many days, so the target is
/// the last one; without it the current period is the first entry.
pub fn selected_day<'a>(
    resolved: Option<&ResolvedTime>,
    bundle: &'a ForecastBundle,
) -> Result<&'a ForecastDay, BotError> {
    let day = match resolved {
        Some(_) => bundle.days.last(),
        None => bundle.days.first(),
    };
    day.ok_or_else(|| BotError::Rendering("forecast payload contains no days".to_string()))
}

/// Label for the time clause when no explicit day was asked for: the
/// ISO date inside the gateway's current-observation timestamp,
/// formatted as full weekday + day + month.
fn label_from_now_dt(now_dt: &str) -> Result<String, BotError> {
    let matched = ISO_DATE
        .find(now_dt)
        .ok_or_else(|| BotError::Rendering(format!("no ISO date in timestamp '{}'", now_dt)))?;
    let date = NaiveDate::parse_from_str(matched.as_str(), "%Y-%m-%d")
        .map_err(|e| BotError::Rendering(format!("bad date '{}': {}", matched.as_str(), e)))?;
    Ok(date.format("%A %d %B").to_string())
}

/// Three-way comparative pressure phrasing. "upper" is the wording the
/// bot has always used; keep it verbatim.
pub fn pressure_clause(pressure_mm: i32, reference_mm: i32) -> String {
    let diff = pressure_mm - reference_mm;
    if diff == 0 {
        format!("Pressure is the same as normal and equals {}", pressure_mm)
    } else {
        let comparison = if diff < 0 { "lower" } else { "upper" };
        format!(
            "Pressure is {} than normal for {} mmHg and makes up {}.",
            comparison,
            diff.abs(),
            pressure_mm
        )
    }
}

/// Compose the full reply paragraph for one forecast day.
///
/// Makes one outbound translation call to render the condition
/// observation in English. The source string is always Russian-prefixed
/// regardless of the user's input language; this asymmetry is
/// deliberate and must not be made bidirectional.
pub async fn render(
    translator: &dyn Translator,
    city: &str,
    resolved: Option<&ResolvedTime>,
    bundle: &ForecastBundle,
) -> Result<String, BotError> {
    let day = selected_day(resolved, bundle)?;

    let in_city = format!(" in {}", capitalize(city));
    // Resolved labels arrive pre-capitalized; the date label is already
    // shaped by the formatter.
    let in_time = match resolved {
        Some(time) => format!(" for {}", time.label),
        None => format!(" for {}", label_from_now_dt(&bundle.now_dt)?),
    };

    let condition_name = bundle.condition_name(&day.condition).ok_or_else(|| {
        BotError::Rendering(format!(
            "condition code '{}' missing from localization table",
            day.condition
        ))
    })?;
    let observation = translator
        .translate(&format!("Наблюдается {}", condition_name))
        .await?;

    let pressure = pressure_clause(day.pressure_mm, bundle.reference_pressure_mm);

    Ok(format!(
        "The weather forecast{in_city}{in_time}:\n\
         During the day temperature is going to be about {temp} degrees, \
         but it feels like {feels_like} degrees. {obs}.\n\
         {pressure}\n\
         Humidity - {humidity}%",
        in_city = in_city,
        in_time = in_time,
        temp = day.temperature,
        feels_like = day.feels_like,
        obs = observation,
        pressure = pressure,
        humidity = day.humidity_percent,
    ))
}
