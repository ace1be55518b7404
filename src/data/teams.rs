//! Constructor codes and display colours

/// Constructor names indexed by team code
pub const TEAMS: [&str; 10] = [
    "Red Bull Racing",
    "Mercedes",
    "Ferrari",
    "McLaren",
    "Aston Martin",
    "Alpine",
    "Haas",
    "RB",
    "Williams",
    "Kick Sauber",
];

/// Team colours as RGB, indexed by team code
const TEAM_COLORS: [(u8, u8, u8); 10] = [
    (0x3B, 0x82, 0xF6),
    (0x6B, 0x72, 0x80),
    (0xDC, 0x26, 0x26),
    (0xF9, 0x73, 0x16),
    (0x16, 0xA3, 0x4A),
    (0xEC, 0x48, 0x99),
    (0xEF, 0x44, 0x44),
    (0x60, 0xA5, 0xFA),
    (0x1E, 0x40, 0xAF),
    (0x22, 0xC5, 0x5E),
];

const DEFAULT_COLOR: (u8, u8, u8) = (0x6B, 0x72, 0x80);

/// Constructor name for a team code
pub fn team_name(team_code: u8) -> String {
    TEAMS
        .get(team_code as usize)
        .map(|name| name.to_string())
        .unwrap_or_else(|| format!("Team {}", team_code))
}

/// Team code for a constructor name, including pre-2024 names
pub fn team_code(name: &str) -> Option<u8> {
    match name {
        "AlphaTauri" => Some(7),
        "Alfa Romeo" => Some(9),
        _ => TEAMS.iter().position(|t| *t == name).map(|i| i as u8),
    }
}

pub fn team_color(team_code: u8) -> (u8, u8, u8) {
    TEAM_COLORS
        .get(team_code as usize)
        .copied()
        .unwrap_or(DEFAULT_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_name() {
        assert_eq!(team_name(0), "Red Bull Racing");
        assert_eq!(team_name(9), "Kick Sauber");
        assert_eq!(team_name(12), "Team 12");
    }

    #[test]
    fn test_team_code_roundtrip() {
        for code in 0..10u8 {
            assert_eq!(team_code(&team_name(code)), Some(code));
        }
        assert_eq!(team_code("AlphaTauri"), Some(7));
        assert_eq!(team_code("Alfa Romeo"), Some(9));
        assert_eq!(team_code("Brawn GP"), None);
    }

    #[test]
    fn test_team_color() {
        assert_eq!(team_color(2), (0xDC, 0x26, 0x26));
        assert_eq!(team_color(42), DEFAULT_COLOR);
    }
}
