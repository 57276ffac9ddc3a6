//! Bounding box derivation.

use serde::{Deserialize, Serialize};

use crate::geometry::Coordinate;

/// Axis-aligned bounding box enclosing a coordinate set.
///
/// `northeast` holds the maximum lat/lng observed, `southwest` the minimum,
/// so `northeast.lat >= southwest.lat` and `northeast.lng >= southwest.lng`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub northeast: Coordinate,
    pub southwest: Coordinate,
}

/// Compute the minimal bounding box of a coordinate sequence.
///
/// Returns `None` for an empty input. Non-finite entries are skipped; the
/// normalizer already rejects them, so over its output this is total.
pub fn bounds_of(coordinates: &[Coordinate]) -> Option<Bounds> {
    coordinates
        .iter()
        .filter(|c| c.lat.is_finite() && c.lng.is_finite())
        .fold(None, |acc: Option<Bounds>, c| {
            Some(match acc {
                None => Bounds {
                    northeast: *c,
                    southwest: *c,
                },
                Some(b) => Bounds {
                    northeast: Coordinate {
                        lat: b.northeast.lat.max(c.lat),
                        lng: b.northeast.lng.max(c.lng),
                    },
                    southwest: Coordinate {
                        lat: b.southwest.lat.min(c.lat),
                        lng: b.southwest.lng.min(c.lng),
                    },
                },
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lng: f64) -> Coordinate {
        Coordinate { lat, lng }
    }

    #[test]
    fn empty_input_has_no_bounds() {
        assert_eq!(bounds_of(&[]), None);
    }

    #[test]
    fn single_point_collapses_to_itself() {
        let b = bounds_of(&[coord(5.0, -3.0)]).unwrap();
        assert_eq!(b.northeast, coord(5.0, -3.0));
        assert_eq!(b.southwest, coord(5.0, -3.0));
    }

    #[test]
    fn corners_are_componentwise_extrema() {
        // Max lat and max lng come from different vertices.
        let b = bounds_of(&[
            coord(1.0, 8.0),
            coord(7.0, 2.0),
            coord(4.0, 4.0),
        ])
        .unwrap();
        assert_eq!(b.northeast, coord(7.0, 8.0));
        assert_eq!(b.southwest, coord(1.0, 2.0));
    }

    #[test]
    fn negative_coordinates_are_handled() {
        let b = bounds_of(&[coord(-10.0, -20.0), coord(-5.0, -30.0)]).unwrap();
        assert_eq!(b.northeast, coord(-5.0, -20.0));
        assert_eq!(b.southwest, coord(-10.0, -30.0));
    }

    #[test]
    fn non_finite_entries_are_skipped() {
        let b = bounds_of(&[coord(f64::NAN, 1.0), coord(2.0, 3.0)]).unwrap();
        assert_eq!(b.northeast, coord(2.0, 3.0));
        assert_eq!(b.southwest, coord(2.0, 3.0));

        assert_eq!(bounds_of(&[coord(f64::INFINITY, 0.0)]), None);
    }

    #[test]
    fn invariant_holds_for_any_non_empty_input() {
        let coords: Vec<Coordinate> = (0..50)
            .map(|i| coord((i as f64 * 7.3) % 90.0 - 45.0, (i as f64 * 13.7) % 360.0 - 180.0))
            .collect();
        let b = bounds_of(&coords).unwrap();
        assert!(b.northeast.lat >= b.southwest.lat);
        assert!(b.northeast.lng >= b.southwest.lng);
        for c in &coords {
            assert!(c.lat <= b.northeast.lat && c.lat >= b.southwest.lat);
            assert!(c.lng <= b.northeast.lng && c.lng >= b.southwest.lng);
        }
    }
}
