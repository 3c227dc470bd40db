//! Fixed reply texts and the uniform pick used for reply variety.

pub const HELP: &str = "This multilanguage bot is to provide you information about current \
weather or weather forecast in a region whatever you want. The bot does not require any \
specific form of requests and it completely understands all messages including city and \
date/time. If information about time have not been given, it will return you current \
weather in a region. The Moscow is considered to be default city.\n\
Due to usage of Yandex Weather API it is possible to show weather forecasts only for \
ten days in advance.\n\
/help";

pub const GREETINGS: [&str; 3] = ["Hi there!", "Hi!", "Hello)"];

pub const PARTINGS: [&str; 4] = ["Bye(", "Good luck!", "Goodbye!", "Have a nice day!"];

pub const IF_NONE: [&str; 3] = [
    "I do not know what to say...",
    "Please specify your request.",
    "I do not really understand what you meant by that.",
];

pub const NO_CITY: &str = "Please specify the location.";

pub const LOCATION_NOT_FOUND: &str = "Location not found.";

/// Uniform index into a non-empty list. The randomness only adds reply
/// variety, it carries no semantic weight.
pub fn rand_index(max: usize) -> usize {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    use std::time::SystemTime;

    let mut hasher = DefaultHasher::new();
    SystemTime::now().hash(&mut hasher);
    let seed = hasher.finish();

    (seed as usize) % max
}

pub fn pick_one(list: &[&str]) -> String {
    list[rand_index(list.len())].to_string()
}
