#[cfg(test)]
#[path = "../../tests/unit/problem/sources_test.rs"]
mod sources_test;

use super::SourceFiles;
use crate::format::FormatError;
use fleet_core::utils::maybe_parallel_join;
use std::io::{BufReader, Read};

/// Keeps one value per problem source.
#[derive(Clone, Debug, PartialEq)]
pub struct ProblemSources<T> {
    /// Availability source.
    pub availability: T,
    /// Demand source.
    pub demand: T,
    /// Fleet attributes source.
    pub fleets: T,
    /// Productivity source.
    pub productivity: T,
    /// Deviation source.
    pub deviation: T,
}

/// A named source of a table.
pub struct TableSource<R: Read> {
    /// A source name used in errors, typically the file name.
    pub name: String,
    /// A source reader.
    pub reader: BufReader<R>,
}

impl<R: Read> TableSource<R> {
    /// Creates a new instance of `TableSource`.
    pub fn new(name: &str, reader: BufReader<R>) -> Self {
        Self { name: name.to_string(), reader }
    }
}

impl<T> ProblemSources<T> {
    /// Maps each source, potentially in parallel. The result keeps the source roles.
    pub fn map<U, F>(self, is_parallel: bool, map_fn: F) -> ProblemSources<U>
    where
        T: Send,
        U: Send,
        F: Fn(T) -> U + Sync,
    {
        let Self { availability, demand, fleets, productivity, deviation } = self;
        let map_fn = &map_fn;

        let ((availability, demand), (fleets, (productivity, deviation))) = maybe_parallel_join(
            is_parallel,
            move || maybe_parallel_join(is_parallel, move || map_fn(availability), move || map_fn(demand)),
            move || {
                maybe_parallel_join(
                    is_parallel,
                    move || map_fn(fleets),
                    move || maybe_parallel_join(is_parallel, move || map_fn(productivity), move || map_fn(deviation)),
                )
            },
        );

        ProblemSources { availability, demand, fleets, productivity, deviation }
    }

    /// Returns references to sources in fixed order: availability, demand, fleets, productivity,
    /// deviation.
    pub fn as_array(&self) -> [&T; 5] {
        [&self.availability, &self.demand, &self.fleets, &self.productivity, &self.deviation]
    }
}

impl<T> ProblemSources<Result<T, FormatError>> {
    /// Returns sources if all of them are ok, otherwise the first error in fixed source order.
    pub fn transpose(self) -> Result<ProblemSources<T>, FormatError> {
        Ok(ProblemSources {
            availability: self.availability?,
            demand: self.demand?,
            fleets: self.fleets?,
            productivity: self.productivity?,
            deviation: self.deviation?,
        })
    }
}

impl ProblemSources<String> {
    /// Creates source names from the file names configuration.
    pub fn from_files(files: &SourceFiles) -> Self {
        Self {
            availability: files.availability.clone(),
            demand: files.demand.clone(),
            fleets: files.fleets.clone(),
            productivity: files.productivity.clone(),
            deviation: files.deviation.clone(),
        }
    }
}
