//! CSV body tables.
//!
//! One row per body, with a header naming the columns:
//!
//! ```text
//! id,mass,periapsis,speed,argument_of_periapsis,inclination,longitude_of_ascending_node,radius,color_r,color_g,color_b
//! earth,5.97e24,147.0e9,30.29e3,85.9,0.0,-11.26064,6371.0e3,0.1,0.25,0.35
//! ```
//!
//! `radius` and the three colour columns are optional and may be left out
//! entirely or left empty per row. Rows keep their file order.

use crate::errors::StateErrors;
use crate::models::body::{BodyParameters, BodyTable};
use csv::{ReaderBuilder, Trim, Writer};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;

#[derive(Debug, Deserialize, Serialize)]
struct BodyRecord {
    id: String,
    mass: f64,
    periapsis: f64,
    speed: f64,
    argument_of_periapsis: f64,
    inclination: f64,
    longitude_of_ascending_node: f64,
    #[serde(default)]
    radius: Option<f64>,
    #[serde(default)]
    color_r: Option<f64>,
    #[serde(default)]
    color_g: Option<f64>,
    #[serde(default)]
    color_b: Option<f64>,
}

impl BodyRecord {
    fn into_entry(self) -> Result<(String, BodyParameters), StateErrors> {
        let mut body = BodyParameters::new(
            self.mass,
            self.periapsis,
            self.speed,
            self.argument_of_periapsis,
            self.inclination,
            self.longitude_of_ascending_node,
        );
        body.radius = self.radius;
        body.color = match (self.color_r, self.color_g, self.color_b) {
            (Some(r), Some(g), Some(b)) => Some([r, g, b]),
            (None, None, None) => None,
            (r, g, _) => {
                let component = if r.is_none() {
                    "color_r"
                } else if g.is_none() {
                    "color_g"
                } else {
                    "color_b"
                };
                return Err(StateErrors::MissingColorComponent {
                    body: self.id,
                    component,
                });
            }
        };
        Ok((self.id, body))
    }

    fn from_entry(id: &str, body: &BodyParameters) -> Self {
        let [color_r, color_g, color_b] = match body.color {
            Some([r, g, b]) => [Some(r), Some(g), Some(b)],
            None => [None, None, None],
        };
        BodyRecord {
            id: id.to_string(),
            mass: body.mass,
            periapsis: body.periapsis,
            speed: body.speed,
            argument_of_periapsis: body.argument_of_periapsis,
            inclination: body.inclination,
            longitude_of_ascending_node: body.longitude_of_ascending_node,
            radius: body.radius,
            color_r,
            color_g,
            color_b,
        }
    }
}

/// Loads and validates a body table from a CSV file.
pub fn load_body_table<P: AsRef<Path>>(path: P) -> Result<BodyTable, StateErrors> {
    let file = std::fs::File::open(path)?;
    read_body_table(file)
}

/// Parses in-memory CSV data.
pub fn read_body_table<R: io::Read>(reader: R) -> Result<BodyTable, StateErrors> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut table = BodyTable::new();
    for result in rdr.deserialize() {
        let record: BodyRecord = result?;
        let (id, body) = record.into_entry()?;
        table.insert(id, body)?;
    }
    Ok(table)
}

/// Writes a body table in the format `read_body_table` accepts.
pub fn write_body_table<W: io::Write>(writer: W, table: &BodyTable) -> Result<(), StateErrors> {
    let mut wtr = Writer::from_writer(writer);
    for (id, body) in table.iter() {
        wtr.serialize(BodyRecord::from_entry(id, body))?;
    }
    wtr.flush()?;
    Ok(())
}
