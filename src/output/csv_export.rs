use crate::constants::SUN_ID;
use crate::errors::StateErrors;
use crate::models::state::StateVector;
use crate::physics::system::SystemSolution;
use csv::Writer;
use std::io;

const HEADER: [&str; 8] = [
    "id",
    "mass",
    "position_x",
    "position_y",
    "position_z",
    "velocity_x",
    "velocity_y",
    "velocity_z",
];

fn record(id: &str, mass: f64, state: &StateVector) -> [String; 8] {
    [
        id.to_string(),
        mass.to_string(),
        state.position.x.to_string(),
        state.position.y.to_string(),
        state.position.z.to_string(),
        state.velocity.x.to_string(),
        state.velocity.y.to_string(),
        state.velocity.z.to_string(),
    ]
}

/// Writes one row per body in metres and m/s, then a final row for the Sun
pub fn write_state_csv<W: io::Write>(writer: W, solution: &SystemSolution) -> Result<(), StateErrors> {
    let mut wtr = Writer::from_writer(writer);
    wtr.write_record(HEADER)?;

    for body in &solution.bodies {
        wtr.write_record(record(&body.id, body.mass(), &body.state))?;
    }
    wtr.write_record(record(SUN_ID, solution.sun_mass, &solution.sun_state()))?;

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::solar_system::SOLAR_SYSTEM;
    use crate::constants::SUN_MASS;
    use csv::ReaderBuilder;

    #[test]
    fn writes_every_body_and_the_sun() {
        let solution = SystemSolution::solve(&SOLAR_SYSTEM, SUN_MASS).unwrap();
        let mut buffer = Vec::new();
        write_state_csv(&mut buffer, &solution).unwrap();

        let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(buffer.as_slice());
        assert_eq!(rdr.headers().unwrap(), HEADER.to_vec());

        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 9);
        assert_eq!(&rows[0][0], "mercury");
        assert_eq!(&rows[8][0], "sun");
        assert_eq!(rows[8][2].parse::<f64>().unwrap(), 0.0);

        let sun_vx: f64 = rows[8][5].parse().unwrap();
        assert_eq!(sun_vx, solution.sun_velocity.x);
    }
}
