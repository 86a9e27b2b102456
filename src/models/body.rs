use crate::constants::SUN_ID;
use crate::errors::StateErrors;

/// Orbital elements and mass of one body, sampled at periapsis.
/// Angles are in degrees, distances in meters, speeds in m/s.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyParameters {
    pub mass: f64,
    pub periapsis: f64,
    pub speed: f64,
    pub argument_of_periapsis: f64,
    pub inclination: f64,
    pub longitude_of_ascending_node: f64,

    // Presentation only, used by scenario export
    pub radius: Option<f64>,
    pub color: Option<[f64; 3]>,
}

impl BodyParameters {
    pub fn new(
        mass: f64,
        periapsis: f64,
        speed: f64,
        argument_of_periapsis: f64,
        inclination: f64,
        longitude_of_ascending_node: f64,
    ) -> Self {
        BodyParameters {
            mass,
            periapsis,
            speed,
            argument_of_periapsis,
            inclination,
            longitude_of_ascending_node,
            radius: None,
            color: None,
        }
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn with_color(mut self, color: [f64; 3]) -> Self {
        self.color = Some(color);
        self
    }

    /// Checks that the elements describe a physical orbit.
    /// Mass, periapsis and speed must be finite and non-negative, angles finite.
    pub fn validate(&self, id: &str) -> Result<(), StateErrors> {
        let non_negative = [
            ("mass", self.mass),
            ("periapsis", self.periapsis),
            ("speed", self.speed),
        ];
        let angles = [
            ("argument_of_periapsis", self.argument_of_periapsis),
            ("inclination", self.inclination),
            ("longitude_of_ascending_node", self.longitude_of_ascending_node),
        ];

        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(id, field, value));
            }
        }
        for (field, value) in angles {
            if !value.is_finite() {
                return Err(invalid(id, field, value));
            }
        }
        if let Some(radius) = self.radius {
            if !radius.is_finite() || radius < 0.0 {
                return Err(invalid(id, "radius", radius));
            }
        }
        if let Some(color) = self.color {
            if let Some(&c) = color.iter().find(|c| !(0.0..=1.0).contains(*c)) {
                return Err(invalid(id, "color", c));
            }
        }
        Ok(())
    }
}

fn invalid(id: &str, field: &'static str, value: f64) -> StateErrors {
    StateErrors::InvalidParameter {
        body: id.to_string(),
        field,
        value,
    }
}

/// Bodies keyed by identifier, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BodyTable {
    entries: Vec<(String, BodyParameters)>,
}

impl BodyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a body after validating it. Identifiers must be unique and
    /// may not be the Sun's, which is solved for rather than given.
    pub fn insert(&mut self, id: impl Into<String>, body: BodyParameters) -> Result<(), StateErrors> {
        let id = id.into();
        if id.eq_ignore_ascii_case(SUN_ID) {
            return Err(StateErrors::ReservedBodyId(id));
        }
        if self.get(&id).is_some() {
            return Err(StateErrors::DuplicateBody(id));
        }
        body.validate(&id)?;
        self.entries.push((id, body));
        Ok(())
    }

    pub fn from_entries<I, S>(entries: I) -> Result<Self, StateErrors>
    where
        I: IntoIterator<Item = (S, BodyParameters)>,
        S: Into<String>,
    {
        let mut table = BodyTable::new();
        for (id, body) in entries {
            table.insert(id, body)?;
        }
        Ok(table)
    }

    pub fn get(&self, id: &str) -> Option<&BodyParameters> {
        self.entries
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, body)| body)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BodyParameters)> {
        self.entries.iter().map(|(id, body)| (id.as_str(), body))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
