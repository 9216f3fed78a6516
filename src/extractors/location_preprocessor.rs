use regex::Regex;

/// Rewrites free-text filming locations ("Market St @ 5th Ave (lobby)")
/// into queries a geocoder resolves more reliably.
#[derive(Debug)]
pub struct LocationPreprocessor {
    separators: Vec<Regex>,
    parenthetical: Regex,
    street_suffixes: Vec<(Regex, &'static str)>,
    whitespace: Regex,
}

const NOISE_WORDS: [&str; 3] = ["Garage", "Building", "Complex"];

impl LocationPreprocessor {
    pub fn new() -> Self {
        let regex = |pattern: &str| Regex::new(pattern).expect("valid location pattern");

        LocationPreprocessor {
            separators: vec![
                regex(r"\s*@\s*"),
                regex(r"\s*btwn\s*"),
                regex(r"\s*between\s*"),
            ],
            parenthetical: regex(r"\(.*?\)"),
            street_suffixes: vec![
                (regex(r"(?i)\bSt\.?\b"), "Street"),
                (regex(r"(?i)\bAve\b"), "Avenue"),
                (regex(r"(?i)\bRd\b"), "Road"),
            ],
            whitespace: regex(r"\s+"),
        }
    }

    pub fn preprocess(&self, location: &str) -> String {
        let mut location = location.trim().to_string();

        for separator in &self.separators {
            location = separator.replace_all(&location, ", ").into_owned();
        }

        location = self
            .parenthetical
            .replace_all(&location, "")
            .trim()
            .to_string();

        // Slashes are kept, they usually mark intersections.
        location = location.replace('&', " and ").replace(';', ",");

        for (suffix, replacement) in &self.street_suffixes {
            location = suffix.replace_all(&location, *replacement).into_owned();
        }

        for word in NOISE_WORDS {
            location = location.replace(word, "").trim().to_string();
        }

        self.whitespace
            .replace_all(&location, " ")
            .trim()
            .to_string()
    }
}

impl Default for LocationPreprocessor {
    fn default() -> Self {
        Self::new()
    }
}
