use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::slice;
use std::str::FromStr;

use crate::data::Dir;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathParseErr(pub char);

impl Display for PathParseErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown direction symbol {:?} - use arrow symbols like in the solver output (←→↑↓)",
            self.0
        )
    }
}

impl Error for PathParseErr {}

/// An ordered sequence of tilts; its length is the number of steps.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Path(Vec<Dir>);

impl Path {
    pub fn new(dirs: Vec<Dir>) -> Path {
        Path(dirs)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn dirs(&self) -> &[Dir] {
        &self.0
    }

    pub fn iter(&self) -> slice::Iter<'_, Dir> {
        self.0.iter()
    }

    pub(crate) fn extend(&mut self, dirs: &[Dir]) {
        self.0.extend_from_slice(dirs);
    }
}

impl IntoIterator for Path {
    type Item = Dir;
    type IntoIter = ::std::vec::IntoIter<Dir>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Dir;
    type IntoIter = slice::Iter<'a, Dir>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for dir in self {
            write!(f, "{}", dir)?;
        }
        Ok(())
    }
}

impl Debug for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl FromStr for Path {
    type Err = PathParseErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut dirs = Vec::new();
        for c in s.chars() {
            let dir = match c {
                '←' => Dir::Left,
                '→' => Dir::Right,
                '↑' => Dir::Up,
                '↓' => Dir::Down,
                _ => return Err(PathParseErr(c)),
            };
            dirs.push(dir);
        }
        Ok(Path(dirs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatting_path() {
        let path = Path::new(vec![Dir::Up, Dir::Right, Dir::Down, Dir::Left]);
        assert_eq!(path.to_string(), "↑→↓←");
        assert_eq!(format!("{:?}", path), "↑→↓←");
    }

    #[test]
    fn parsing_round_trips() {
        let path: Path = "←←↓→↑".parse().unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path.to_string(), "←←↓→↑");
    }

    #[test]
    fn parsing_rejects_unknown_symbols() {
        let err = "←x↓".parse::<Path>().unwrap_err();
        assert_eq!(err, PathParseErr('x'));
    }

    #[test]
    fn extending() {
        let mut path: Path = "←←".parse().unwrap();
        path.extend(&[Dir::Down, Dir::Right]);
        assert_eq!(path.to_string(), "←←↓→");
        assert_eq!(path.len(), 4);
    }

    #[test]
    fn iterating() {
        let path: Path = "←→".parse().unwrap();
        let dirs: Vec<Dir> = path.iter().cloned().collect();
        assert_eq!(dirs, [Dir::Left, Dir::Right]);
        let dirs: Vec<Dir> = path.into_iter().collect();
        assert_eq!(dirs, [Dir::Left, Dir::Right]);
    }
}
