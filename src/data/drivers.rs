//! Driver lookup table (2024 grid)

use serde::Serialize;

/// Driver reference data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Driver {
    pub name: &'static str,
    pub team: &'static str,
    /// Constructor code (0-9) expected by the prediction model
    pub team_code: u8,
    /// Years of F1 experience used when no override is given
    pub experience: u32,
    pub image_url: &'static str,
    pub flag: &'static str,
    pub number: &'static str,
}

macro_rules! driver {
    ($name:literal, $team:literal, $code:literal, $exp:literal, $img:literal, $flag:literal, $num:literal) => {
        Driver {
            name: $name,
            team: $team,
            team_code: $code,
            experience: $exp,
            image_url: concat!(
                "https://www.formula1.com/content/dam/fom-website/drivers/",
                $img,
                ".png.transform/1col/image.png"
            ),
            flag: $flag,
            number: $num,
        }
    };
}

/// All drivers, in grid order
#[rustfmt::skip]
pub static DRIVERS: [Driver; 20] = [
    driver!("Max Verstappen", "Red Bull Racing", 0, 10, "M/MAXVER01_Max_Verstappen/maxver01", "🇳🇱", "1"),
    driver!("Sergio Perez", "Red Bull Racing", 0, 13, "S/SERPER01_Sergio_Perez/serper01", "🇲🇽", "11"),
    driver!("Lewis Hamilton", "Mercedes", 1, 17, "L/LEWHAM01_Lewis_Hamilton/lewham01", "🇬🇧", "44"),
    driver!("George Russell", "Mercedes", 1, 3, "G/GEORUS01_George_Russell/georus01", "🇬🇧", "63"),
    driver!("Charles Leclerc", "Ferrari", 2, 6, "C/CHALEC01_Charles_Leclerc/chalec01", "🇲🇨", "16"),
    driver!("Carlos Sainz", "Ferrari", 2, 9, "C/CARSAI01_Carlos_Sainz/carsai01", "🇪🇸", "55"),
    driver!("Lando Norris", "McLaren", 3, 5, "L/LANNOR01_Lando_Norris/lannor01", "🇬🇧", "4"),
    driver!("Oscar Piastri", "McLaren", 3, 1, "O/OSCPIA01_Oscar_Piastri/oscpia01", "🇦🇺", "81"),
    driver!("Fernando Alonso", "Aston Martin", 4, 22, "F/FERALO01_Fernando_Alonso/feralo01", "🇪🇸", "14"),
    driver!("Lance Stroll", "Aston Martin", 4, 7, "L/LANSTR01_Lance_Stroll/lanstr01", "🇨🇦", "18"),
    driver!("Esteban Ocon", "Alpine", 5, 7, "E/ESTOCO01_Esteban_Ocon/estoco01", "🇫🇷", "31"),
    driver!("Pierre Gasly", "Alpine", 5, 6, "P/PIEGAS01_Pierre_Gasly/piegas01", "🇫🇷", "10"),
    driver!("Nico Hulkenberg", "Haas", 6, 8, "N/NICHUL01_Nico_Hulkenberg/nichul01", "🇩🇪", "27"),
    driver!("Kevin Magnussen", "Haas", 6, 8, "K/KEVMAG01_Kevin_Magnussen/kevmag01", "🇩🇰", "20"),
    driver!("Daniel Ricciardo", "RB", 7, 13, "D/DANRIC01_Daniel_Ricciardo/danric01", "🇦🇺", "3"),
    driver!("Yuki Tsunoda", "RB", 7, 3, "Y/YUKTSU01_Yuki_Tsunoda/yuktsu01", "🇯🇵", "22"),
    driver!("Alex Albon", "Williams", 8, 4, "A/ALEALB01_Alexander_Albon/alealb01", "🇹🇭", "23"),
    driver!("Logan Sargeant", "Williams", 8, 1, "L/LOGSAR01_Logan_Sargeant/logsar01", "🇺🇸", "2"),
    driver!("Valtteri Bottas", "Kick Sauber", 9, 11, "V/VALBOT01_Valtteri_Bottas/valbot01", "🇫🇮", "77"),
    driver!("Zhou Guanyu", "Kick Sauber", 9, 2, "G/GUAZHO01_Guanyu_Zhou/guazho01", "🇨🇳", "24"),
];

/// Look up a driver by exact name
pub fn find_driver(name: &str) -> Option<&'static Driver> {
    DRIVERS.iter().find(|d| d.name == name)
}

/// Drivers racing for the given constructor code
pub fn drivers_for_team(team_code: u8) -> impl Iterator<Item = &'static Driver> {
    DRIVERS.iter().filter(move |d| d.team_code == team_code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_find_driver() {
        let max = find_driver("Max Verstappen").unwrap();
        assert_eq!(max.team, "Red Bull Racing");
        assert_eq!(max.team_code, 0);
        assert_eq!(max.experience, 10);
        assert_eq!(max.number, "1");

        assert!(find_driver("max verstappen").is_none());
        assert!(find_driver("").is_none());
    }

    #[test]
    fn test_driver_names_unique() {
        let names: HashSet<_> = DRIVERS.iter().map(|d| d.name).collect();
        assert_eq!(names.len(), DRIVERS.len());
    }

    #[test]
    fn test_two_drivers_per_team() {
        for code in 0..10u8 {
            assert_eq!(drivers_for_team(code).count(), 2, "team code {}", code);
        }
        assert_eq!(drivers_for_team(10).count(), 0);
    }

    #[test]
    fn test_experience_positive() {
        assert!(DRIVERS.iter().all(|d| d.experience > 0));
    }

    #[test]
    fn test_image_url() {
        let zhou = find_driver("Zhou Guanyu").unwrap();
        assert!(zhou
            .image_url
            .starts_with("https://www.formula1.com/content/dam/fom-website/drivers/"));
        assert!(zhou.image_url.contains("GUAZHO01_Guanyu_Zhou"));
    }
}
