use std::{borrow::Cow, fmt, str::FromStr};

use crate::model::movie::Movie;

/// The three fields a user can filter the dataset by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Title,
    Year,
    Location,
}

impl FilterField {
    pub const ALL: [FilterField; 3] = [FilterField::Title, FilterField::Year, FilterField::Location];

    pub fn name(self) -> &'static str {
        match self {
            FilterField::Title => "title",
            FilterField::Year => "year",
            FilterField::Location => "location",
        }
    }

    /// The record value this field compares against.
    pub fn value_of(self, movie: &Movie) -> Option<&str> {
        match self {
            FilterField::Title => movie.title(),
            FilterField::Year => movie.release_year(),
            FilterField::Location => movie.locations(),
        }
    }

    /// Prepares a filter string for repeated use by [`FilterField::matches`].
    pub fn normalize(self, filter: &str) -> Cow<'_, str> {
        match self {
            FilterField::Year => Cow::Borrowed(filter),
            FilterField::Title | FilterField::Location => Cow::Owned(filter.to_lowercase()),
        }
    }

    /// Visibility predicate. Title and location compare case-insensitively,
    /// the year is a plain textual contains. `needle` must come from
    /// [`FilterField::normalize`].
    pub fn matches(self, movie: &Movie, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }

        match self.value_of(movie) {
            None => false,
            Some(value) => match self {
                FilterField::Year => value.contains(needle),
                FilterField::Title | FilterField::Location => {
                    value.to_lowercase().contains(needle)
                }
            },
        }
    }

    /// Suggestion predicate: case-insensitive for every field. Returns the
    /// record value to offer when it contains `lowercase_input`.
    pub fn suggestion_for<'m>(self, movie: &'m Movie, lowercase_input: &str) -> Option<&'m str> {
        self.value_of(movie)
            .filter(|value| value.to_lowercase().contains(lowercase_input))
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "title" => Ok(FilterField::Title),
            "year" => Ok(FilterField::Year),
            "location" | "locations" => Ok(FilterField::Location),
            other => Err(format!(
                "Unknown field '{}', expected one of: title, year, location",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str, year: &str, locations: &str) -> Movie {
        Movie {
            title: Some(title.to_string()),
            release_year: Some(year.to_string()),
            locations: Some(locations.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn title_matching_ignores_case() {
        let batman = movie("The Dark Knight Batman Begins", "2005", "Chicago");
        let needle = FilterField::Title.normalize("batman");

        assert!(FilterField::Title.matches(&batman, &needle));
    }

    #[test]
    fn year_matching_is_textual() {
        let matrix = movie("The Matrix", "1999", "Sydney");

        assert!(FilterField::Year.matches(&matrix, "199"));
        assert!(FilterField::Year.matches(&matrix, "99"));
        assert!(!FilterField::Year.matches(&matrix, "2000"));
    }

    #[test]
    fn missing_values_never_match_a_non_empty_filter() {
        let untitled = Movie {
            release_year: Some("1999".to_string()),
            ..Default::default()
        };

        assert!(!FilterField::Title.matches(&untitled, "a"));
        assert!(FilterField::Title.matches(&untitled, ""));
        assert_eq!(FilterField::Title.suggestion_for(&untitled, "a"), None);
    }

    #[test]
    fn suggestions_keep_the_record_casing() {
        let rock = movie("The Rock", "1996", "Alcatraz Island");

        assert_eq!(
            FilterField::Location.suggestion_for(&rock, "alcatraz"),
            Some("Alcatraz Island")
        );
    }

    #[test]
    fn parses_field_names() {
        assert_eq!("Title".parse::<FilterField>(), Ok(FilterField::Title));
        assert_eq!("year".parse::<FilterField>(), Ok(FilterField::Year));
        assert_eq!("locations".parse::<FilterField>(), Ok(FilterField::Location));
        assert!("director".parse::<FilterField>().is_err());
    }
}
