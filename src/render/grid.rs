//! Selection grids and form chrome

use std::collections::BTreeMap;

use colored::{ColoredString, Colorize};

use crate::data::{
    drivers_for_team, season_kind, team_code, team_color, team_name, DRIVERS, RACES, SEASONS,
};
use crate::form::Step;

const SELECTED: &str = "✓";

fn marker(selected: bool) -> &'static str {
    if selected {
        SELECTED
    } else {
        " "
    }
}

fn team_colored(text: &str, team_code: u8) -> ColoredString {
    let (r, g, b) = team_color(team_code);
    text.truecolor(r, g, b)
}

/// Title banner
pub fn banner() -> String {
    format!(
        "{}\n{}",
        "🏎️  F1 PULSE".red().bold(),
        "Advanced Position Prediction System".dimmed()
    )
}

/// Step progress: completed and current steps are filled
pub fn step_header(current: Step) -> String {
    Step::ALL
        .iter()
        .map(|&step| {
            let text = format!("{} {}", if step <= current { "●" } else { "○" }, step.label());
            if step == current {
                text.cyan().bold().to_string()
            } else if step < current {
                text.green().to_string()
            } else {
                text.dimmed().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ─ ")
}

pub fn season_picker(selected: Option<u16>) -> String {
    SEASONS
        .iter()
        .map(|&season| {
            let kind = season_kind(season).map(|k| k.label()).unwrap_or_default();
            format!("{} {}  {}", marker(selected == Some(season)), season, kind)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Driver cards: number, flag, name, team and default experience
pub fn driver_grid(selected: Option<&str>) -> String {
    let mut lines = vec![format!(
        "  {:>4} {:<2} {:<20} {:<16} {:>5}",
        "#", "", "Driver", "Team", "Exp"
    )];
    lines.push(format!("  {}", "-".repeat(52)));

    for driver in &DRIVERS {
        let team = format!("{:<16}", driver.team);
        lines.push(format!(
            "{} {:>4} {}  {:<20} {} {:>3}y",
            marker(selected == Some(driver.name)),
            format!("#{}", driver.number),
            driver.flag,
            driver.name,
            team_colored(&team, driver.team_code),
            driver.experience
        ));
    }

    lines.join("\n")
}

/// Circuit cards: round, flag, race, circuit and lap count
pub fn circuit_grid(selected: Option<&str>) -> String {
    let mut lines = vec![format!(
        "  {:>3} {:<2} {:<26} {:<36} {:>4}",
        "Rd", "", "Race", "Circuit", "Laps"
    )];
    lines.push(format!("  {}", "-".repeat(76)));

    for (idx, race) in RACES.iter().enumerate() {
        lines.push(format!(
            "{} {:>3} {}  {:<26} {:<36} {:>4}",
            marker(selected == Some(race.name)),
            idx + 1,
            race.flag,
            race.name,
            race.circuit,
            race.laps
        ));
    }

    lines.join("\n")
}

/// Teams reported by the service, ordered by code, with the local lineup
///
/// Names the service reports under a different code than the local table
/// (legacy names included) are flagged.
pub fn teams_table(teams: &BTreeMap<String, u8>) -> String {
    let mut rows: Vec<(&String, u8)> = teams.iter().map(|(name, &code)| (name, code)).collect();
    rows.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));

    let mut lines = vec![format!(
        "{:>5} {:<20} {:<16} {}",
        "Code", "Team", "Current name", "Drivers"
    )];
    lines.push("-".repeat(80));

    for (name, code) in rows {
        let drivers: Vec<_> = drivers_for_team(code).map(|d| d.name).collect();
        let current = format!("{:<16}", team_name(code));
        let mut line = format!(
            "{:>5} {:<20} {} {}",
            code,
            name,
            team_colored(&current, code),
            drivers.join(", ")
        );
        if let Some(local) = team_code(name).filter(|&local| local != code) {
            line.push_str(&format!(" {}", format!("(local code {})", local).yellow()));
        }
        lines.push(line);
    }

    lines.join("\n")
}

/// Short label for pickers, e.g. `#1 🇳🇱 Max Verstappen (Red Bull Racing)`
pub fn driver_label(name: &str) -> Option<String> {
    let driver = crate::data::find_driver(name)?;
    Some(format!(
        "#{} {} {} ({})",
        driver.number, driver.flag, driver.name, driver.team
    ))
}

/// Short label for pickers, e.g. `🇲🇨 Monaco Grand Prix - Circuit de Monaco, 78 laps`
pub fn race_label(name: &str) -> Option<String> {
    let race = crate::data::find_race(name)?;
    Some(format!(
        "{} {} - {}, {} laps",
        race.flag, race.name, race.circuit, race.laps
    ))
}
