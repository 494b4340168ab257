//! Input data for the visualizer
//!
//! Values come from one of three places: a random generator (integers in
//! `1..=100`, like bar heights), a literal list, or a text file of numbers
//! separated by commas or whitespace. Every source is validated, so a
//! loaded data set can always be handed to a stepper.

use crate::errors::SortError;
use crate::stepper::validate_input;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_COUNT: usize = 100;
pub const MIN_VALUE: u32 = 1;
pub const MAX_VALUE: u32 = 100;

/// `count` random integers in `MIN_VALUE..=MAX_VALUE`
pub fn random_values<R: Rng>(count: usize, rng: &mut R) -> Vec<f64> {
    (0..count)
        .map(|_| f64::from(rng.gen_range(MIN_VALUE..=MAX_VALUE)))
        .collect()
}

/// Parse numbers separated by commas and/or whitespace
pub fn parse_values(text: &str) -> Result<Vec<f64>, SortError> {
    let mut values = Vec::new();
    for (line_index, line) in text.lines().enumerate() {
        // Allow trailing comments in data files
        let content = line.split('#').next().unwrap_or("");
        for token in content
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            let value = token
                .parse::<f64>()
                .map_err(|_| SortError::InvalidValue {
                    line: line_index + 1,
                    token: token.to_string(),
                })?;
            values.push(value);
        }
    }
    validate_input(&values)?;
    Ok(values)
}

/// Read and parse a data file
pub fn load_values(path: &Path) -> Result<Vec<f64>, SortError> {
    let text = fs::read_to_string(path)?;
    parse_values(&text)
}

/// Where the data set comes from
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    Random { count: usize, seed: Option<u64> },
    Literal(Vec<f64>),
    File(PathBuf),
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource::Random {
            count: DEFAULT_COUNT,
            seed: None,
        }
    }
}

impl DataSource {
    pub fn load(&self) -> Result<Vec<f64>, SortError> {
        match self {
            DataSource::Random { count, seed } => {
                let mut rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(*seed),
                    None => StdRng::from_entropy(),
                };
                Ok(random_values(*count, &mut rng))
            }
            DataSource::Literal(values) => {
                validate_input(values)?;
                Ok(values.clone())
            }
            DataSource::File(path) => load_values(path),
        }
    }

    /// Whether loading again can produce different data
    pub fn is_random(&self) -> bool {
        matches!(self, DataSource::Random { seed: None, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_values_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let values = random_values(500, &mut rng);
        assert_eq!(values.len(), 500);
        assert!(values.iter().all(|v| (1.0..=100.0).contains(v)));
        assert!(values.iter().all(|v| v.fract() == 0.0));
    }

    #[test]
    fn test_seeded_source_is_reproducible() {
        let source = DataSource::Random {
            count: 20,
            seed: Some(42),
        };
        assert_eq!(source.load().unwrap(), source.load().unwrap());
        assert!(!source.is_random());
        assert!(DataSource::default().is_random());
    }

    #[test]
    fn test_parse_mixed_separators() {
        let values = parse_values("5, 3\n8 1 # tail\n\n-2.5,").unwrap();
        assert_eq!(values, vec![5.0, 3.0, 8.0, 1.0, -2.5]);
        assert_eq!(parse_values("").unwrap(), Vec::<f64>::new());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            parse_values("1 2\n3 x"),
            Err(SortError::InvalidValue { line: 2, ref token }) if token == "x"
        ));
        assert!(matches!(
            parse_values("1 NaN"),
            Err(SortError::InvalidInput { index: 1, .. })
        ));
        assert!(matches!(
            parse_values("inf"),
            Err(SortError::InvalidInput { index: 0, .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = load_values(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, SortError::Io(_)));
    }
}
