//! Default depot list (major state-transport bus stands)

use std::sync::LazyLock;

use busfare_domain::model::{Depot, DepotDirectory};

fn depot(id: u32, name: &str, lat: f64, lon: f64) -> Depot {
    Depot {
        name: name.to_string(),
        lat,
        lon,
        id,
    }
}

pub static DEFAULT_DEPOTS: LazyLock<DepotDirectory> = LazyLock::new(|| {
    DepotDirectory::new(vec![
        depot(1, "Mumbai Central", 18.9690, 72.8205),
        depot(2, "Pune (Swargate)", 18.5018, 73.8636),
        depot(3, "Pune Station", 18.5284, 73.8739),
        depot(4, "Nashik (CBS)", 19.9975, 73.7898),
        depot(5, "Aurangabad", 19.8762, 75.3433),
        depot(6, "Nagpur", 21.1458, 79.0882),
        depot(7, "Kolhapur", 16.7050, 74.2433),
        depot(8, "Satara", 17.6805, 74.0183),
        depot(9, "Solapur", 17.6599, 75.9064),
        depot(10, "Ratnagiri", 16.9902, 73.3120),
        depot(11, "Amravati", 20.9374, 77.7796),
        depot(12, "Nanded", 19.1383, 77.3210),
        depot(13, "Jalgaon", 21.0077, 75.5626),
        depot(14, "Latur", 18.4088, 76.5604),
        depot(15, "Thane", 19.1860, 72.9756),
    ])
});

pub fn default_depots() -> &'static DepotDirectory {
    &DEFAULT_DEPOTS
}
