use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

use crate::{
    error::Result,
    filter::{FilterEngine, FilterField},
    map::{MapView, NO_DATA},
    persisters::map_writer::MapWriter,
};

use super::command::{Command, USAGE};

pub const DEFAULT_MAP_FILE: &str = "movies_map.html";

/// Reads commands from `input` and writes everything the user sees to
/// `output`.
pub struct Session<R, W> {
    engine: FilterEngine,
    map_view: MapView,
    map_file: PathBuf,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(engine: FilterEngine, input: R, output: W) -> Self {
        Session {
            engine,
            map_view: MapView::default(),
            map_file: PathBuf::from(DEFAULT_MAP_FILE),
            input,
            output,
        }
    }

    pub fn with_map_file(mut self, map_file: impl Into<PathBuf>) -> Self {
        self.map_file = map_file.into();
        self
    }

    pub fn engine(&self) -> &FilterEngine {
        &self.engine
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until `quit` or the end of the input.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "{}", self.engine.results_label())?;
        writeln!(self.output, "Type 'help' for the list of commands.")?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                break;
            }

            match Command::parse(&line) {
                Ok(command) => {
                    if !self.handle(command)? {
                        break;
                    }
                }
                Err(message) => writeln!(self.output, "{}", message)?,
            }
        }

        Ok(())
    }

    /// Returns `false` once the session should end.
    pub fn handle(&mut self, command: Command) -> Result<bool> {
        match command {
            Command::SetFilter(field, value) => {
                self.engine.set_filter(field, &value);
                self.print_suggestions(field)?;
                writeln!(self.output, "{}", self.engine.results_label())?;
            }
            Command::Pick(field, position) => {
                match self.engine.suggestions(field).get(position - 1).cloned() {
                    Some(suggestion) => {
                        self.engine.select_suggestion(field, &suggestion);
                        writeln!(self.output, "{} filter: {}", field, suggestion)?;
                    }
                    None => writeln!(self.output, "No {} suggestion #{}", field, position)?,
                }
                writeln!(self.output, "{}", self.engine.results_label())?;
            }
            Command::Reset => {
                self.engine.reset();
                writeln!(self.output, "{}", self.engine.results_label())?;
            }
            Command::List(count) => self.print_list(count)?,
            Command::Show(position) => self.print_details(position)?,
            Command::Map(file) => {
                let file = file.unwrap_or_else(|| self.map_file.clone());
                match MapWriter::save_map(&self.map_view, self.engine.visible(), &file) {
                    Ok(()) => writeln!(
                        self.output,
                        "Map of {} written to {}",
                        self.engine.results_label().replace(" found", ""),
                        file.display()
                    )?,
                    Err(e) => {
                        log::error!("Error when saving map: {}", e);
                        writeln!(self.output, "Could not write map: {}", e)?;
                    }
                }
            }
            Command::Help => writeln!(self.output, "{}", USAGE)?,
            Command::Quit => return Ok(false),
        }

        Ok(true)
    }

    fn print_suggestions(&mut self, field: FilterField) -> Result<()> {
        for (i, suggestion) in self.engine.suggestions(field).iter().enumerate() {
            writeln!(self.output, "  {}. {}", i + 1, suggestion)?;
        }
        Ok(())
    }

    fn print_list(&mut self, count: usize) -> Result<()> {
        for (i, movie) in self.engine.visible().take(count).enumerate() {
            writeln!(
                self.output,
                "{}. {} ({}) - {}",
                i + 1,
                movie.title().unwrap_or(NO_DATA),
                movie.release_year().unwrap_or(NO_DATA),
                movie.locations().unwrap_or(NO_DATA)
            )?;
        }

        let remaining = self.engine.visible_count().saturating_sub(count);
        if remaining > 0 {
            writeln!(self.output, "... and {} more", remaining)?;
        }
        Ok(())
    }

    fn print_details(&mut self, position: usize) -> Result<()> {
        let movie = match self.engine.visible().nth(position - 1) {
            Some(movie) => movie,
            None => {
                writeln!(
                    self.output,
                    "No movie #{}, {}",
                    position,
                    self.engine.results_label()
                )?;
                return Ok(());
            }
        };

        write!(self.output, "{}", crate::map::Popup::for_movie(movie))?;
        match movie.coordinates() {
            Some((lat, lng)) => writeln!(self.output, "  Position: {}, {}", lat, lng)?,
            None => writeln!(self.output, "  Position: unavailable")?,
        }
        Ok(())
    }
}
