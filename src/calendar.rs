use std::fmt;

use serde::{Deserialize, Serialize};

pub const DAYS_PER_SEASON: u32 = 28;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub fn next(self) -> Self {
        match self {
            Season::Spring => Season::Summer,
            Season::Summer => Season::Fall,
            Season::Fall => Season::Winter,
            Season::Winter => Season::Spring,
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
        };
        f.write_str(name)
    }
}

/// Source of the in-world date.
pub trait Calendar {
    fn season(&self) -> Season;
    fn day_of_month(&self) -> u32;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Date {
    pub year: u32,
    pub season: Season,
    pub day: u32,
}

impl Date {
    pub fn new(year: u32, season: Season, day: u32) -> Self {
        Self { year, season, day }
    }

    /// Moves to the next day, rolling over seasons and years.
    pub fn advance(&mut self) {
        if self.day >= DAYS_PER_SEASON {
            self.day = 1;
            if self.season == Season::Winter {
                self.year += 1;
            }
            self.season = self.season.next();
        } else {
            self.day += 1;
        }
    }
}

impl Default for Date {
    fn default() -> Self {
        Self::new(1, Season::Spring, 1)
    }
}

impl Calendar for Date {
    fn season(&self) -> Season {
        self.season
    }

    fn day_of_month(&self) -> u32 {
        self.day
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "year {} {} {}", self.year, self.season, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_rolls_over_season() {
        let mut date = Date::new(1, Season::Fall, DAYS_PER_SEASON);
        date.advance();
        assert_eq!(date, Date::new(1, Season::Winter, 1));
    }

    #[test]
    fn advance_rolls_over_year() {
        let mut date = Date::new(1, Season::Winter, DAYS_PER_SEASON);
        date.advance();
        assert_eq!(date, Date::new(2, Season::Spring, 1));
        assert_eq!(date.day_of_month(), 1);
    }
}
