use std::path::PathBuf;

use clap::Parser;

use advent_grid::days::IMPLEMENTED;

/// Puzzle solutions built on a sparse grid.
#[derive(Parser, Debug)]
pub struct Options {
    /// Only solve day `NUMBER`.
    #[arg(short, long, value_name = "NUMBER")]
    day: Option<u8>,

    /// Read the input for `--day` from `PATH`.
    #[arg(short, long, value_name = "PATH", requires = "day")]
    input: Option<PathBuf>,

    /// Look for `dayNN.txt` inputs in `DIR`.
    #[arg(long, value_name = "DIR", default_value = "inputs")]
    inputs_dir: PathBuf,
}

impl Options {
    pub fn days(&self) -> Vec<u8> {
        if let Some(only) = self.day {
            vec![only]
        } else {
            IMPLEMENTED.to_vec()
        }
    }

    pub fn input_path(&self, day: u8) -> PathBuf {
        match &self.input {
            Some(path) if self.day == Some(day) => path.clone(),
            _ => self.inputs_dir.join(format!("day{day:02}.txt")),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_is_well_formed() {
        Options::command().debug_assert();
    }

    #[test]
    fn all_days_by_default() {
        let options = Options::try_parse_from(["advent-grid"]).unwrap();
        assert_eq!(options.days(), vec![3, 11, 24]);
        assert_eq!(options.input_path(11), PathBuf::from("inputs").join("day11.txt"));
    }

    #[test]
    fn single_day_with_explicit_input() {
        let options =
            Options::try_parse_from(["advent-grid", "--day", "3", "-i", "my.txt"]).unwrap();
        assert_eq!(options.days(), vec![3]);
        assert_eq!(options.input_path(3), PathBuf::from("my.txt"));

        let options =
            Options::try_parse_from(["advent-grid", "-d", "24", "--inputs-dir", "data"]).unwrap();
        assert_eq!(options.input_path(24), PathBuf::from("data").join("day24.txt"));
    }

    #[test]
    fn input_requires_day() {
        assert!(Options::try_parse_from(["advent-grid", "--input", "my.txt"]).is_err());
    }
}
