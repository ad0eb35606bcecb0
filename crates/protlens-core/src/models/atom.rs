use nalgebra::Point3;

/// Represents a single atom record from a coordinate file.
///
/// An atom is a leaf value in the containment hierarchy: identity (serial
/// number and name) plus a 3D position in Angstroms. It is immutable after
/// creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Serial number from columns 7-11 of the source record.
    pub serial: i32,
    /// Atom name (e.g., "CA", "FE").
    pub name: String,
    /// Position in Angstroms.
    pub position: Point3<f64>,
}

impl Atom {
    pub fn new(serial: i32, name: &str, position: Point3<f64>) -> Self {
        Self {
            serial,
            name: name.to_string(),
            position,
        }
    }

    /// Squared Euclidean distance to another atom.
    ///
    /// Geometric scans compare squared distances against squared thresholds
    /// so the square root is taken at most once per query, not per pair.
    pub fn distance_squared(&self, other: &Atom) -> f64 {
        (self.position - other.position).norm_squared()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_atom_stores_identity_and_position() {
        let atom = Atom::new(7, "CA", Point3::new(1.0, 2.0, 3.0));
        assert_eq!(atom.serial, 7);
        assert_eq!(atom.name, "CA");
        assert_eq!(atom.position, Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn distance_squared_is_symmetric() {
        let a = Atom::new(1, "N", Point3::new(0.0, 0.0, 0.0));
        let b = Atom::new(2, "O", Point3::new(3.0, 4.0, 0.0));
        assert_eq!(a.distance_squared(&b), 25.0);
        assert_eq!(b.distance_squared(&a), 25.0);
    }

    #[test]
    fn distance_squared_to_self_is_zero() {
        let a = Atom::new(1, "N", Point3::new(-1.5, 2.5, 0.25));
        assert_eq!(a.distance_squared(&a), 0.0);
    }
}
