//! Filtering and autocomplete over the movie dataset.
//!
//! The visible subset and the suggestion lists are pure functions of the
//! records and the filter text. [`engine::FilterEngine`] owns the filter
//! state and keeps the derived values in step with it.

use std::collections::HashSet;

use crate::model::movie::Movie;

pub mod engine;
pub mod field;

pub use engine::FilterEngine;
pub use field::FilterField;

pub const SUGGESTION_LIMIT: usize = 5;

/// One value per [`FilterField`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PerField<T> {
    pub title: T,
    pub year: T,
    pub location: T,
}

impl<T> PerField<T> {
    pub fn get(&self, field: FilterField) -> &T {
        match field {
            FilterField::Title => &self.title,
            FilterField::Year => &self.year,
            FilterField::Location => &self.location,
        }
    }

    pub fn get_mut(&mut self, field: FilterField) -> &mut T {
        match field {
            FilterField::Title => &mut self.title,
            FilterField::Year => &mut self.year,
            FilterField::Location => &mut self.location,
        }
    }
}

pub type Filters = PerField<String>;

impl Filters {
    pub fn is_empty(&self) -> bool {
        FilterField::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}

/// Distinct values of `field` containing `input` (case-insensitive), in the
/// order they first appear in `movies`, capped at [`SUGGESTION_LIMIT`].
pub fn suggest(movies: &[Movie], field: FilterField, input: &str) -> Vec<String> {
    if input.is_empty() {
        return vec![];
    }

    let lowercase_input = input.to_lowercase();
    let mut seen = HashSet::new();
    let mut suggestions = vec![];

    for value in movies
        .iter()
        .filter_map(|movie| field.suggestion_for(movie, &lowercase_input))
    {
        if seen.insert(value) {
            suggestions.push(value.to_string());
            if suggestions.len() == SUGGESTION_LIMIT {
                break;
            }
        }
    }

    suggestions
}

/// Indices of the movies passing every filter, in dataset order.
pub fn visible_indices(movies: &[Movie], filters: &Filters) -> Vec<usize> {
    let needles: Vec<_> = FilterField::ALL
        .iter()
        .filter(|field| !filters.get(**field).is_empty())
        .map(|field| (*field, field.normalize(filters.get(*field))))
        .collect();

    movies
        .iter()
        .enumerate()
        .filter(|(_, movie)| {
            needles
                .iter()
                .all(|(field, needle)| field.matches(movie, needle))
        })
        .map(|(index, _)| index)
        .collect()
}

/// "0 movies found", "1 movie found", "2 movies found", ...
pub fn results_label(count: usize) -> String {
    format!("{} movie{} found", count, if count == 1 { "" } else { "s" })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titled(titles: &[&str]) -> Vec<Movie> {
        titles
            .iter()
            .map(|title| Movie {
                title: Some(title.to_string()),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn suggestions_are_capped_at_five() {
        let movies = titled(&[
            "Star Trek", "Star Wars", "Starman", "A Star Is Born", "Dark Star", "Stardust",
            "Lone Star",
        ]);

        let suggestions = suggest(&movies, FilterField::Title, "star");
        assert_eq!(suggestions.len(), SUGGESTION_LIMIT);
    }

    #[test]
    fn suggestions_are_distinct_and_in_first_seen_order() {
        let movies = titled(&["Vertigo", "Bullitt", "Vertigo", "Blue Jasmine", "Bullitt"]);

        let suggestions = suggest(&movies, FilterField::Title, "i");
        assert_eq!(suggestions, vec!["Vertigo", "Bullitt", "Blue Jasmine"]);
    }

    #[test]
    fn empty_input_suggests_nothing() {
        let movies = titled(&["Vertigo"]);

        assert!(suggest(&movies, FilterField::Title, "").is_empty());
    }

    #[test]
    fn year_suggestions_use_the_text_form() {
        let movies = vec![
            Movie {
                release_year: Some("1999".to_string()),
                ..Default::default()
            },
            Movie {
                release_year: Some("1958".to_string()),
                ..Default::default()
            },
            Movie {
                release_year: Some("2019".to_string()),
                ..Default::default()
            },
        ];

        assert_eq!(
            suggest(&movies, FilterField::Year, "19"),
            vec!["1999", "1958", "2019"]
        );
    }

    #[test]
    fn empty_filters_pass_everything() {
        let movies = titled(&["Vertigo", "Bullitt", "Milk"]);

        assert_eq!(visible_indices(&movies, &Filters::default()), vec![0, 1, 2]);
    }

    #[test]
    fn pluralizes_results_label() {
        assert_eq!(results_label(0), "0 movies found");
        assert_eq!(results_label(1), "1 movie found");
        assert_eq!(results_label(2), "2 movies found");
    }
}
