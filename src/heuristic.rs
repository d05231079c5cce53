//! Distance estimates steering the informed engine.

use core::fmt;
use std::str::FromStr;

use grid_util::point::Point;

use crate::error::SearchConfigError;

/// The heuristics the informed engine can run with, selectable by name.
///
/// All three are admissible for cardinal movement with step costs of at least
/// one: Manhattan matches the uniform move geometry exactly, while Euclidean
/// and Chebyshev underestimate it and make the search noticeably less
/// focused. That spread is the point of offering a choice.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Heuristic {
    Manhattan,
    Euclidean,
    Chebyshev,
}

impl Heuristic {
    pub const ALL: [Heuristic; 3] = [
        Heuristic::Manhattan,
        Heuristic::Euclidean,
        Heuristic::Chebyshev,
    ];

    /// Estimated remaining distance from `from` to `to`.
    ///
    /// Manhattan and Chebyshev always produce whole numbers; the shared
    /// `f64` return keeps the three interchangeable when summed into `f`.
    pub fn evaluate(self, from: Point, to: Point) -> f64 {
        let dx = (from.x - to.x).abs() as f64;
        let dy = (from.y - to.y).abs() as f64;
        match self {
            Heuristic::Manhattan => dx + dy,
            Heuristic::Euclidean => (dx * dx + dy * dy).sqrt(),
            Heuristic::Chebyshev => dx.max(dy),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Heuristic::Manhattan => "manhattan",
            Heuristic::Euclidean => "euclidean",
            Heuristic::Chebyshev => "chebyshev",
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Heuristic {
    type Err = SearchConfigError;

    /// Exact lowercase names only; anything else fails fast.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "manhattan" => Ok(Heuristic::Manhattan),
            "euclidean" => Ok(Heuristic::Euclidean),
            "chebyshev" => Ok(Heuristic::Chebyshev),
            other => Err(SearchConfigError::UnknownHeuristic(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_distances() {
        let a = Point::new(0, 0);
        let b = Point::new(3, 4);
        assert_eq!(Heuristic::Manhattan.evaluate(a, b), 7.0);
        assert_eq!(Heuristic::Euclidean.evaluate(a, b), 5.0);
        assert_eq!(Heuristic::Chebyshev.evaluate(a, b), 4.0);
    }

    #[test]
    fn symmetric_and_zero_at_goal() {
        let a = Point::new(7, 2);
        let b = Point::new(1, 9);
        for h in Heuristic::ALL {
            assert_eq!(h.evaluate(a, b), h.evaluate(b, a));
            assert_eq!(h.evaluate(b, b), 0.0);
        }
    }

    #[test]
    fn parses_exact_names_only() {
        assert_eq!("manhattan".parse::<Heuristic>(), Ok(Heuristic::Manhattan));
        assert_eq!("euclidean".parse::<Heuristic>(), Ok(Heuristic::Euclidean));
        assert_eq!("chebyshev".parse::<Heuristic>(), Ok(Heuristic::Chebyshev));
        assert_eq!(
            "Manhattan".parse::<Heuristic>(),
            Err(SearchConfigError::UnknownHeuristic("Manhattan".into()))
        );
        assert_eq!(
            "octile".parse::<Heuristic>(),
            Err(SearchConfigError::UnknownHeuristic("octile".into()))
        );
    }
}
