use crate::config::constants::EARTH_RADIUS_KM;
use crate::data::poi::GeoPoint;

/// Great-circle distance in kilometers (haversine).
pub fn distance_between(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let d_lat = (b.latitude() - a.latitude()).to_radians();
    let d_lon = (b.longitude() - a.longitude()).to_radians();

    let lat1 = a.latitude().to_radians();
    let lat2 = b.latitude().to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    // Rounding can push h a hair above 1 for antipodal points; NaN must pass through
    let h = if h > 1.0 { 1.0 } else { h };
    let c = 2.0 * h.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Sum of consecutive segment distances; 0 for fewer than two points.
pub fn route_distance(points: &[GeoPoint]) -> f64 {
    points
        .windows(2)
        .map(|pair| distance_between(&pair[0], &pair[1]))
        .sum()
}

/// All-pairs distance table. `matrix[i][j]` is the distance from point i to point j.
pub fn distance_matrix(points: &[GeoPoint]) -> Vec<Vec<f64>> {
    let n = points.len();
    let mut matrix = vec![vec![0.0; n]; n];

    for i in 0..n {
        for j in (i + 1)..n {
            let d = distance_between(&points[i], &points[j]);
            matrix[i][j] = d;
            matrix[j][i] = d;
        }
    }

    matrix
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delhi() -> GeoPoint {
        GeoPoint::new(28.6139, 77.2090, "Delhi")
    }

    fn mumbai() -> GeoPoint {
        GeoPoint::new(19.0760, 72.8777, "Mumbai")
    }

    fn nagpur() -> GeoPoint {
        GeoPoint::new(21.1458, 79.0882, "Nagpur")
    }

    #[test]
    fn test_delhi_mumbai() {
        // Haversine on a 6371 km sphere gives ~1148.1 km
        let distance = distance_between(&delhi(), &mumbai());
        assert!((distance - 1148.09).abs() < 0.5, "got {}", distance);
    }

    #[test]
    fn test_same_point_is_zero() {
        let point = delhi();
        assert_eq!(distance_between(&point, &point), 0.0);
    }

    #[test]
    fn test_symmetry() {
        let ab = distance_between(&delhi(), &nagpur());
        let ba = distance_between(&nagpur(), &delhi());
        assert!((ab - ba).abs() < 1e-9);
    }

    #[test]
    fn test_triangle_inequality() {
        let samples = [
            delhi(),
            mumbai(),
            nagpur(),
            GeoPoint::new(-33.8688, 151.2093, "Sydney"),
            GeoPoint::new(51.5074, -0.1278, "London"),
            GeoPoint::new(0.0, 179.9, "Dateline"),
        ];
        for a in &samples {
            for b in &samples {
                for c in &samples {
                    let direct = distance_between(a, c);
                    let via = distance_between(a, b) + distance_between(b, c);
                    assert!(direct <= via + 1e-3, "{} -> {} -> {}", a.label(), b.label(), c.label());
                }
            }
        }
    }

    #[test]
    fn test_antipodal_points() {
        let a = GeoPoint::new(0.0, 0.0, "a");
        let b = GeoPoint::new(0.0, 180.0, "b");
        let half_circumference = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!((distance_between(&a, &b) - half_circumference).abs() < 1e-6);
    }

    #[test]
    fn test_route_distance_short_inputs() {
        assert_eq!(route_distance(&[]), 0.0);
        assert_eq!(route_distance(&[delhi()]), 0.0);
    }

    #[test]
    fn test_route_distance_sums_segments() {
        let route = [delhi(), nagpur(), mumbai()];
        let expected = distance_between(&route[0], &route[1]) + distance_between(&route[1], &route[2]);
        assert!((route_distance(&route) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_nan_propagates() {
        let bad = GeoPoint::new(f64::NAN, 0.0, "bad");
        assert!(distance_between(&bad, &delhi()).is_nan());
    }

    #[test]
    fn test_distance_matrix() {
        let points = [delhi(), mumbai(), nagpur()];
        let matrix = distance_matrix(&points);

        assert_eq!(matrix.len(), 3);
        for i in 0..3 {
            assert_eq!(matrix[i][i], 0.0);
            for j in 0..3 {
                assert_eq!(matrix[i][j], matrix[j][i]);
            }
        }
        assert!((matrix[0][1] - distance_between(&points[0], &points[1])).abs() < 1e-9);
    }
}
