use std::fmt;

use serde::Serialize;

use crate::model::movie::{present, Movie};

pub const NO_DATA: &str = "No data";

/// Details shown when a marker is activated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Popup {
    pub title: String,
    pub details: Vec<PopupLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopupLine {
    pub label: &'static str,
    pub value: String,
}

impl Popup {
    pub fn for_movie(movie: &Movie) -> Self {
        let details = [
            ("Actor 1", &movie.actor_1),
            ("Actor 2", &movie.actor_2),
            ("Actor 3", &movie.actor_3),
            ("Director", &movie.director),
            ("Distributor", &movie.distributor),
            ("Locations", &movie.locations),
            ("Production company", &movie.production_company),
            ("Release Year", &movie.release_year),
            ("Writer", &movie.writer),
        ]
        .into_iter()
        .map(|(label, value)| PopupLine {
            label,
            value: or_no_data(value),
        })
        .collect();

        Popup {
            title: or_no_data(&movie.title),
            details,
        }
    }

    pub fn detail(&self, label: &str) -> Option<&str> {
        self.details
            .iter()
            .find(|line| line.label == label)
            .map(|line| line.value.as_str())
    }
}

impl fmt::Display for Popup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        for line in &self.details {
            writeln!(f, "  {}: {}", line.label, line.value)?;
        }
        Ok(())
    }
}

fn or_no_data(value: &Option<String>) -> String {
    present(value).unwrap_or(NO_DATA).to_string()
}
