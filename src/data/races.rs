//! Race calendar lookup table

use serde::Serialize;

/// Race reference data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Race {
    pub name: &'static str,
    pub circuit: &'static str,
    pub image_url: &'static str,
    pub flag: &'static str,
    pub laps: u32,
}

macro_rules! race {
    ($name:literal, $circuit:literal, $map:literal, $flag:literal, $laps:literal) => {
        Race {
            name: $name,
            circuit: $circuit,
            image_url: concat!(
                "https://www.formula1.com/content/dam/fom-website/2018-redesign-assets/Circuit%20maps%2016x9/",
                $map,
                "_Circuit.png.transform/7col/image.png"
            ),
            flag: $flag,
            laps: $laps,
        }
    };
}

/// Calendar in round order
pub static RACES: [Race; 24] = [
    race!("Bahrain Grand Prix", "Bahrain International Circuit", "Bahrain", "🇧🇭", 57),
    race!("Saudi Arabian Grand Prix", "Jeddah Corniche Circuit", "Saudi_Arabia", "🇸🇦", 50),
    race!("Australian Grand Prix", "Albert Park Circuit", "Australia", "🇦🇺", 58),
    race!("Japanese Grand Prix", "Suzuka International Racing Course", "Japan", "🇯🇵", 53),
    race!("Chinese Grand Prix", "Shanghai International Circuit", "China", "🇨🇳", 56),
    race!("Miami Grand Prix", "Miami International Autodrome", "Miami", "🇺🇸", 57),
    race!("Emilia Romagna Grand Prix", "Autodromo Enzo e Dino Ferrari", "Emilia_Romagna", "🇮🇹", 63),
    race!("Monaco Grand Prix", "Circuit de Monaco", "Monaco", "🇲🇨", 78),
    race!("Canadian Grand Prix", "Circuit Gilles Villeneuve", "Canada", "🇨🇦", 70),
    race!("Spanish Grand Prix", "Circuit de Barcelona-Catalunya", "Spain", "🇪🇸", 66),
    race!("Austrian Grand Prix", "Red Bull Ring", "Austria", "🇦🇹", 71),
    race!("British Grand Prix", "Silverstone Circuit", "Great_Britain", "🇬🇧", 52),
    race!("Hungarian Grand Prix", "Hungaroring", "Hungary", "🇭🇺", 70),
    race!("Belgian Grand Prix", "Circuit de Spa-Francorchamps", "Belgium", "🇧🇪", 44),
    race!("Dutch Grand Prix", "Circuit Zandvoort", "Netherlands", "🇳🇱", 72),
    race!("Italian Grand Prix", "Autodromo Nazionale Monza", "Italy", "🇮🇹", 53),
    race!("Azerbaijan Grand Prix", "Baku City Circuit", "Azerbaijan", "🇦🇿", 51),
    race!("Singapore Grand Prix", "Marina Bay Street Circuit", "Singapore", "🇸🇬", 61),
    race!("United States Grand Prix", "Circuit of the Americas", "USA", "🇺🇸", 56),
    race!("Mexican Grand Prix", "Autodromo Hermanos Rodriguez", "Mexico", "🇲🇽", 71),
    race!("Brazilian Grand Prix", "Autodromo Jose Carlos Pace", "Brazil", "🇧🇷", 71),
    race!("Las Vegas Grand Prix", "Las Vegas Strip Circuit", "Las_Vegas", "🇺🇸", 50),
    race!("Qatar Grand Prix", "Lusail International Circuit", "Qatar", "🇶🇦", 57),
    race!("Abu Dhabi Grand Prix", "Yas Marina Circuit", "Abu_Dhabi", "🇦🇪", 58),
];

/// Look up a race by exact name
pub fn find_race(name: &str) -> Option<&'static Race> {
    RACES.iter().find(|r| r.name == name)
}

/// 1-based calendar round of a race
pub fn round_of(name: &str) -> Option<usize> {
    RACES.iter().position(|r| r.name == name).map(|i| i + 1)
}
