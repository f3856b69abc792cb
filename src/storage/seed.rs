//! Demo seed data
//!
//! A fixed set of sample dives inserted into a fresh deployment so the
//! front end has something to show. Not required for correctness of the
//! API; [`crate::storage::DiveStore::seed_if_empty`] skips it entirely
//! once the table has any rows.

use super::model::DiveInput;

fn dive(
    dive_number: i64,
    date: &str,
    location: &str,
    dive_site: &str,
    latitude: f64,
    longitude: f64,
    max_depth: f64,
    duration: i64,
    water_temp: f64,
    visibility: i64,
    notes: &str,
) -> DiveInput {
    DiveInput {
        dive_number,
        date: date.to_string(),
        location: location.to_string(),
        dive_site: dive_site.to_string(),
        latitude,
        longitude,
        max_depth: Some(max_depth),
        duration: Some(duration),
        water_temp: Some(water_temp),
        visibility: Some(visibility),
        notes: Some(notes.to_string()),
    }
}

/// The canonical demo dive set
pub fn sample_dives() -> Vec<DiveInput> {
    vec![
        dive(
            1,
            "2023-06-15",
            "Great Barrier Reef",
            "Cod Hole",
            -14.6919,
            145.6331,
            18.5,
            45,
            26.0,
            30,
            "Amazing dive! Saw potato cod and white tip reef sharks.",
        ),
        dive(
            2,
            "2023-06-16",
            "Great Barrier Reef",
            "Ribbon Reefs",
            -14.5833,
            145.5167,
            22.0,
            50,
            25.5,
            25,
            "Beautiful coral formations and schools of tropical fish.",
        ),
        dive(
            3,
            "2023-08-10",
            "Maldives",
            "Banana Reef",
            4.2744,
            73.5330,
            15.0,
            55,
            28.0,
            35,
            "Crystal clear water. Encountered manta rays!",
        ),
        dive(
            4,
            "2023-09-05",
            "Red Sea, Egypt",
            "Ras Mohammed",
            27.7395,
            34.2304,
            25.0,
            48,
            27.0,
            30,
            "Incredible wall dive with vibrant coral gardens.",
        ),
        dive(
            5,
            "2023-10-20",
            "Sipadan, Malaysia",
            "Barracuda Point",
            4.1128,
            118.6283,
            28.0,
            42,
            29.0,
            28,
            "Huge school of barracudas forming a tornado! Unforgettable.",
        ),
        dive(
            6,
            "2023-11-12",
            "Cenotes, Mexico",
            "Gran Cenote",
            20.2586,
            -87.4647,
            12.0,
            60,
            25.0,
            40,
            "Amazing freshwater cavern dive with incredible light beams.",
        ),
        dive(
            7,
            "2024-01-15",
            "Galapagos Islands",
            "Gordon Rocks",
            -0.6333,
            -90.3167,
            30.0,
            38,
            22.0,
            20,
            "Strong currents but worth it! Hammerhead sharks everywhere.",
        ),
        dive(
            8,
            "2024-03-08",
            "Bali, Indonesia",
            "USS Liberty Wreck",
            -8.2775,
            115.5942,
            20.0,
            52,
            27.5,
            22,
            "Historic wreck completely covered in coral. Beautiful!",
        ),
        dive(
            9,
            "2024-05-22",
            "Thailand",
            "Richelieu Rock",
            9.0833,
            97.8667,
            26.0,
            45,
            28.5,
            25,
            "Whale shark encounter! Plus countless colorful fish species.",
        ),
        dive(
            10,
            "2024-07-10",
            "Philippines",
            "Tubbataha Reef",
            8.8333,
            119.8333,
            24.0,
            47,
            28.0,
            32,
            "Pristine reef system. Saw tiger sharks and huge Napoleon wrasse.",
        ),
    ]
}
