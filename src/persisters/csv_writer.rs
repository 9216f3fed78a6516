use std::path::Path;

use csv::Writer;

use crate::{error::Result, model::movie::Movie};

pub struct CsvWriter {}

impl CsvWriter {
    pub fn save_movies_to_csv<'a>(
        movies: impl IntoIterator<Item = &'a Movie>,
        file_name: impl AsRef<Path>,
    ) -> Result<usize> {
        let mut wrt = Writer::from_path(file_name.as_ref())?;
        wrt.write_record(Movie::csv_titles())?;

        let mut written = 0;
        for movie in movies {
            wrt.write_record(movie.to_csvable_array())?;
            written += 1;
        }

        wrt.flush().map_err(csv::Error::from)?;
        Ok(written)
    }
}
