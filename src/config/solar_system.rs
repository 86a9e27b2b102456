use crate::models::body::{BodyParameters, BodyTable};
use lazy_static::lazy_static;

lazy_static! {
    /// The eight major planets at periapsis, in order from the Sun.
    pub static ref SOLAR_SYSTEM: BodyTable = build_solar_system();
}

fn build_solar_system() -> BodyTable {
    // Literal constants, validated by the tests below
    BodyTable::from_entries(planets()).expect("built-in body table should be valid")
}

//            mass (kg)  periapsis (m)  speed (m/s)  arg. periapsis  inclination  long. asc. node
fn planets() -> [(&'static str, BodyParameters); 8] {
    [
        (
            "mercury",
            BodyParameters::new(0.330e24, 46.0e9, 58.98e3, 77.45645, 7.004, 48.33167)
                .with_radius(2439.7e3)
                .with_color([0.55, 0.53, 0.50]),
        ),
        (
            "venus",
            BodyParameters::new(4.87e24, 107.480e9, 35.26e3, 131.53298, 3.395, 76.68069)
                .with_radius(6051.8e3)
                .with_color([0.90, 0.79, 0.55]),
        ),
        (
            "earth",
            BodyParameters::new(5.97e24, 147.0e9, 30.29e3, 85.9, 0.0, -11.26064)
                .with_radius(6371.0e3)
                .with_color([0.1, 0.25, 0.35]),
        ),
        (
            "mars",
            BodyParameters::new(0.642e24, 206.650e9, 26.50e3, 336.04084, 1.848, 49.57854)
                .with_radius(3389.5e3)
                .with_color([0.76, 0.36, 0.22]),
        ),
        (
            "jupiter",
            BodyParameters::new(1898e24, 740.595e9, 13.72e3, 14.75385, 1.304, 100.55615)
                .with_radius(69911.0e3)
                .with_color([0.80, 0.69, 0.56]),
        ),
        (
            "saturn",
            BodyParameters::new(568e24, 1357.554e9, 10.18e3, 92.43194, 2.486, 113.71504)
                .with_radius(58232.0e3)
                .with_color([0.89, 0.81, 0.62]),
        ),
        (
            "uranus",
            BodyParameters::new(86.8e24, 2732.696e9, 7.11e3, 170.96424, 0.770, 74.22988)
                .with_radius(25362.0e3)
                .with_color([0.62, 0.84, 0.88]),
        ),
        (
            "neptune",
            BodyParameters::new(102e24, 4471.050e9, 5.50e3, 44.97135, 1.770, 131.72169)
                .with_radius(24622.0e3)
                .with_color([0.25, 0.41, 0.88]),
        ),
    ]
}
