use crate::model::movie::Movie;

use super::{results_label, suggest, visible_indices, FilterField, Filters, PerField};

/// Owns the fixed record set plus the filter state of one browsing session.
#[derive(Debug)]
pub struct FilterEngine {
    movies: Vec<Movie>,
    filters: Filters,
    suggestions: PerField<Vec<String>>,
    visible: Vec<usize>,
}

impl FilterEngine {
    pub fn new(movies: Vec<Movie>) -> Self {
        let visible = (0..movies.len()).collect();
        Self {
            movies,
            filters: Filters::default(),
            suggestions: PerField::default(),
            visible,
        }
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn filter(&self, field: FilterField) -> &str {
        self.filters.get(field)
    }

    pub fn suggestions(&self, field: FilterField) -> &[String] {
        self.suggestions.get(field)
    }

    /// Handles a keystroke in one of the filter inputs.
    pub fn set_filter(&mut self, field: FilterField, value: &str) {
        log::debug!("Setting {} filter to {:?}", field, value);
        *self.filters.get_mut(field) = value.to_string();
        self.recompute_suggestions(field, value);
        self.recompute_visible();
    }

    pub fn recompute_suggestions(&mut self, field: FilterField, value: &str) {
        *self.suggestions.get_mut(field) = suggest(&self.movies, field, value);
    }

    pub fn recompute_visible(&mut self) {
        self.visible = visible_indices(&self.movies, &self.filters);
        log::debug!("{} of {} movies visible", self.visible.len(), self.movies.len());
    }

    /// Commits a suggestion as the filter value of `field`. The other two
    /// fields keep their filters and suggestions.
    pub fn select_suggestion(&mut self, field: FilterField, suggestion: &str) {
        *self.filters.get_mut(field) = suggestion.to_string();
        self.suggestions.get_mut(field).clear();
        self.recompute_visible();
    }

    pub fn reset(&mut self) {
        self.filters = Filters::default();
        self.suggestions = PerField::default();
        self.recompute_visible();
    }

    pub fn visible(&self) -> impl Iterator<Item = &Movie> + '_ {
        self.visible.iter().map(move |index| &self.movies[*index])
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn results_label(&self) -> String {
        results_label(self.visible_count())
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

    fn sample_engine() -> FilterEngine {
        FilterEngine::new(vec![
            movie("Apollo 13", "1995", "Texas"),
            movie("Apollo 13", "1995", "Florida"),
            movie("The Matrix", "1999", "Sydney"),
            movie("Fight Club", "1999", "Los Angeles"),
            movie("Vertigo", "1958", "Mission Dolores"),
            Movie {
                release_year: Some("1999".to_string()),
                ..Default::default()
            },
        ])
    }

    fn visible_titles(engine: &FilterEngine) -> Vec<Option<&str>> {
        engine.visible().map(|movie| movie.title()).collect()
    }

    #[test]
    fn starts_with_everything_visible() {
        let engine = sample_engine();

        assert_eq!(engine.visible_count(), 6);
        assert!(engine.filters().is_empty());
        assert_eq!(engine.visible().collect::<Vec<_>>(), engine.movies().iter().collect::<Vec<_>>());
    }

    #[test]
    fn filters_combine_with_and() {
        let mut engine = sample_engine();
        engine.set_filter(FilterField::Title, "Apollo");
        engine.set_filter(FilterField::Location, "Texas");

        let visible: Vec<_> = engine.visible().collect();
        assert_eq!(visible, vec![&engine.movies()[0]]);
    }

    #[test]
    fn title_filter_ignores_case() {
        let mut engine = FilterEngine::new(vec![
            movie("The Dark Knight Batman Begins", "2005", "Chicago"),
            movie("Vertigo", "1958", "Fort Point"),
        ]);
        engine.set_filter(FilterField::Title, "batman");

        assert_eq!(visible_titles(&engine), vec![Some("The Dark Knight Batman Begins")]);
    }

    #[test]
    fn missing_title_is_excluded_by_title_filter() {
        let mut engine = sample_engine();
        engine.set_filter(FilterField::Year, "1999");
        assert_eq!(engine.visible_count(), 3);

        engine.set_filter(FilterField::Title, "t");
        assert_eq!(
            visible_titles(&engine),
            vec![Some("The Matrix"), Some("Fight Club")]
        );
    }

    #[test]
    fn strengthening_a_filter_never_grows_the_visible_set() {
        let mut engine = sample_engine();
        let all: Vec<Movie> = engine.visible().cloned().collect();

        for input in ["a", "ap", "apo", "apollo 13", "zzz"] {
            engine.set_filter(FilterField::Title, input);
            let filtered: Vec<Movie> = engine.visible().cloned().collect();
            assert!(filtered.iter().all(|movie| all.contains(movie)));
            assert!(filtered.len() <= all.len());
        }
    }

    #[test]
    fn typing_updates_only_that_fields_suggestions() {
        let mut engine = sample_engine();
        engine.set_filter(FilterField::Title, "apollo");
        engine.set_filter(FilterField::Year, "19");

        assert_eq!(engine.suggestions(FilterField::Title), ["Apollo 13"]);
        assert_eq!(engine.suggestions(FilterField::Year), ["1995", "1999", "1958"]);
        assert!(engine.suggestions(FilterField::Location).is_empty());

        engine.set_filter(FilterField::Title, "");
        assert!(engine.suggestions(FilterField::Title).is_empty());
        assert_eq!(engine.suggestions(FilterField::Year).len(), 3);
    }

    #[test]
    fn selecting_a_suggestion_commits_it() {
        let mut engine = sample_engine();
        engine.set_filter(FilterField::Title, "the");
        engine.set_filter(FilterField::Year, "199");
        assert!(!engine.suggestions(FilterField::Year).is_empty());

        engine.select_suggestion(FilterField::Year, "1999");

        assert_eq!(engine.filter(FilterField::Year), "1999");
        assert!(engine.suggestions(FilterField::Year).is_empty());
        assert_eq!(engine.filter(FilterField::Title), "the");
        assert_eq!(engine.suggestions(FilterField::Title), ["The Matrix"]);
        assert!(engine
            .visible()
            .all(|movie| movie.release_year().unwrap().contains("1999")));
        assert_eq!(visible_titles(&engine), vec![Some("The Matrix")]);
    }

    #[test]
    fn selecting_a_year_suggestion_alone() {
        let mut engine = sample_engine();
        engine.select_suggestion(FilterField::Year, "1999");

        assert_eq!(engine.visible_count(), 3);
        assert_eq!(engine.results_label(), "3 movies found");
    }

    #[test]
    fn reset_is_idempotent() {
        let mut engine = sample_engine();
        engine.set_filter(FilterField::Title, "apollo");
        engine.set_filter(FilterField::Location, "tex");

        engine.reset();
        let once: Vec<Movie> = engine.visible().cloned().collect();
        engine.reset();
        let twice: Vec<Movie> = engine.visible().cloned().collect();

        assert_eq!(once, twice);
        assert_eq!(twice, engine.movies().to_vec());
        assert!(engine.filters().is_empty());
        for field in FilterField::ALL {
            assert!(engine.suggestions(field).is_empty());
        }
    }

    #[test]
    fn results_label_follows_visible_count() {
        let mut engine = sample_engine();
        engine.set_filter(FilterField::Title, "nothing like this");
        assert_eq!(engine.results_label(), "0 movies found");

        engine.set_filter(FilterField::Title, "vertigo");
        assert_eq!(engine.results_label(), "1 movie found");

        engine.set_filter(FilterField::Title, "apollo");
        assert_eq!(engine.results_label(), "2 movies found");
    }
}
