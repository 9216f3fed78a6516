use std::{fs::File, io::BufWriter, io::Write, path::Path};

use crate::{
    error::{Error, Result},
    model::movie::Movie,
};

pub struct JsonWriter {}

impl JsonWriter {
    pub fn save_movies_to_json(movies: &[Movie], file_name: impl AsRef<Path>) -> Result<()> {
        let path = file_name.as_ref();
        let write_error = |source| Error::Write {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(write_error)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, movies)?;
        writer.write_all(b"\n").map_err(write_error)?;
        writer.flush().map_err(write_error)?;

        Ok(())
    }
}
