use crate::errors::StateErrors;
use crate::physics::system::SystemSolution;
use nalgebra as na;
use std::io;

fn components(v: &na::Vector3<f64>) -> String {
    format!("{}, {}, {}", v.x, v.y, v.z)
}

/// Writes the plain-text report: each body's id, position and velocity
/// followed by a blank line, then the total momentum and Sun velocity.
pub fn write_report<W: io::Write>(mut w: W, solution: &SystemSolution) -> Result<(), StateErrors> {
    for body in &solution.bodies {
        writeln!(w, "{}", body.id)?;
        writeln!(w, "{}", components(&body.state.position))?;
        writeln!(w, "{}", components(&body.state.velocity))?;
        writeln!(w)?;
    }
    writeln!(w, "Total momentum: [{}]", components(&solution.total_momentum))?;
    writeln!(
        w,
        "Sun velocity for zero momentum: [{}]",
        components(&solution.sun_velocity)
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::body::{BodyParameters, BodyTable};

    #[test]
    fn report_layout() {
        let table = BodyTable::from_entries([
            ("a", BodyParameters::new(2.0, 10.0, 3.0, 0.0, 0.0, 0.0)),
            ("b", BodyParameters::new(1.0, 20.0, 4.0, 0.0, 0.0, 0.0)),
        ])
        .unwrap();
        let solution = SystemSolution::solve(&table, 5.0).unwrap();

        let mut out = Vec::new();
        write_report(&mut out, &solution).unwrap();
        let text = String::from_utf8(out).unwrap();

        let expected = "\
a
10, 0, 0
0, 0, 3

b
20, 0, 0
0, 0, 4

Total momentum: [0, 0, 10]
Sun velocity for zero momentum: [-0, -0, -2]
";
        assert_eq!(text, expected);
    }
}
