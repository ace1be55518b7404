//! Supported seasons

use serde::Serialize;

/// Seasons offered for prediction
pub const SEASONS: [u16; 5] = [2021, 2022, 2023, 2024, 2025];

/// Last season with recorded race results
pub const LAST_HISTORICAL_SEASON: u16 = 2024;

/// Whether a season has ground truth to compare against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonKind {
    Historical,
    Future,
}

impl SeasonKind {
    pub fn label(self) -> &'static str {
        match self {
            SeasonKind::Historical => "📊 Historical",
            SeasonKind::Future => "🔮 Future",
        }
    }
}

pub fn is_supported_season(season: u16) -> bool {
    SEASONS.contains(&season)
}

pub fn is_historical(season: u16) -> bool {
    is_supported_season(season) && season <= LAST_HISTORICAL_SEASON
}

/// Classify a supported season; `None` for seasons outside [`SEASONS`]
pub fn season_kind(season: u16) -> Option<SeasonKind> {
    if !is_supported_season(season) {
        return None;
    }
    Some(if is_historical(season) {
        SeasonKind::Historical
    } else {
        SeasonKind::Future
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_kind() {
        for season in 2021..=2024 {
            assert_eq!(season_kind(season), Some(SeasonKind::Historical));
        }
        assert_eq!(season_kind(2025), Some(SeasonKind::Future));
        assert_eq!(season_kind(2020), None);
        assert_eq!(season_kind(2026), None);
    }

    #[test]
    fn test_is_historical() {
        assert!(is_historical(2021));
        assert!(!is_historical(2025));
        assert!(!is_historical(1999));
    }

    #[test]
    fn test_labels() {
        assert_eq!(SeasonKind::Historical.label(), "📊 Historical");
        assert_eq!(SeasonKind::Future.label(), "🔮 Future");
    }
}
