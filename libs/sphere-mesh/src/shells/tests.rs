//! Concentric shell mesh tests.

use super::*;
use crate::elements::{check_indices, Cell};
use approx::assert_relative_eq;

fn signed_volume(points: &[DVec3], tet: &Tetrahedron) -> f64 {
    let [a, b, c, d] = tet.nodes.map(|i| points[i as usize]);
    (b - a).cross(c - a).dot(d - a) / 6.0
}

#[test]
fn test_single_layer_counts() {
    let mesh = ShellParams::new(4, 3, vec![1.0, 2.0]).build().unwrap();
    assert_eq!(mesh.sphere_size(), 10);
    assert_eq!(mesh.point_count(), 20);
    assert_eq!(mesh.layer_count(), 1);
    assert_eq!(mesh.prisms().len(), 8);
    assert_eq!(mesh.parallelepipeds().len(), 4);
    assert_eq!(mesh.tetrahedra().len(), 48);
}

#[test]
fn test_counts_across_parameters() {
    for slices in 3..8u32 {
        for stacks in 2..6u32 {
            let radii = vec![1.0, 2.0, 3.5, 4.0];
            let mesh = ShellParams::new(slices, stacks, radii).build().unwrap();
            let (s, t, layers) = (slices as usize, stacks as usize, 3);
            assert_eq!(mesh.point_count(), 4 * ((t - 1) * s + 2));
            assert_eq!(mesh.prisms().len(), layers * 2 * s);
            assert_eq!(mesh.parallelepipeds().len(), layers * (t - 2) * s);
            assert_eq!(
                mesh.tetrahedra().len(),
                layers * (6 * s + 6 * (t - 2) * s)
            );
        }
    }
}

#[test]
fn test_outermost_sphere_first() {
    let mesh = ShellParams::new(5, 4, vec![1.0, 2.0, 3.0]).build().unwrap();
    assert_eq!(mesh.sphere(0).unwrap()[0], DVec3::new(0.0, 0.0, 3.0));
    assert_eq!(mesh.sphere(1).unwrap()[0], DVec3::new(0.0, 0.0, 2.0));
    let innermost = mesh.sphere(2).unwrap();
    assert_eq!(innermost[innermost.len() - 1], DVec3::new(0.0, 0.0, -1.0));
    assert!(mesh.sphere(3).is_none());

    for (k, radius) in [3.0, 2.0, 1.0].into_iter().enumerate() {
        for p in mesh.sphere(k).unwrap() {
            assert_relative_eq!(p.length(), radius, epsilon = 1e-12);
        }
    }
}

#[test]
fn test_first_cells_of_small_mesh() {
    let mesh = ShellParams::new(4, 3, vec![1.0, 2.0]).build().unwrap();
    assert_eq!(mesh.prisms()[0], Prism([0, 1, 2, 10, 11, 12]));
    assert_eq!(mesh.prisms()[1], Prism([19, 15, 16, 9, 5, 6]));
    // Last slice wraps back to slice 0
    assert_eq!(mesh.prisms()[6], Prism([0, 4, 1, 10, 14, 11]));
    assert_eq!(
        mesh.parallelepipeds()[0],
        Parallelepiped([5, 6, 15, 16, 1, 2, 11, 12])
    );
    assert_eq!(
        mesh.tetrahedra()[0],
        Tetrahedron::new([12, 11, 10, 1], Region::Inner)
    );
}

#[test]
fn test_indices_in_range() {
    let mesh = ShellParams::new(7, 5, vec![0.5, 1.0, 1.5]).build().unwrap();
    let n = mesh.point_count();
    assert!(check_indices(mesh.prisms(), n).is_ok());
    assert!(check_indices(mesh.parallelepipeds(), n).is_ok());
    assert!(check_indices(mesh.tetrahedra(), n).is_ok());
}

#[test]
fn test_tetrahedra_are_not_degenerate() {
    let mesh = ShellParams::new(6, 5, vec![1.0, 2.0, 3.0]).build().unwrap();
    for tet in mesh.tetrahedra() {
        assert!(signed_volume(mesh.points(), tet).abs() > 1e-9, "{tet:?}");
    }
}

#[test]
fn test_cells_span_exactly_one_layer() {
    let mesh = ShellParams::new(5, 4, vec![1.0, 2.0, 3.0, 4.0]).build().unwrap();
    let size = mesh.sphere_size() as u32;
    for tet in mesh.tetrahedra() {
        let spheres: Vec<u32> = tet.nodes.iter().map(|n| n / size).collect();
        let lo = *spheres.iter().min().unwrap();
        let hi = *spheres.iter().max().unwrap();
        assert_eq!(hi - lo, 1, "{tet:?}");
    }
}

#[test]
fn test_innermost_layer_is_inner_region() {
    let mesh = ShellParams::new(4, 3, vec![1.0, 2.0, 3.0]).build().unwrap();
    let size = mesh.sphere_size() as u32;
    for tet in mesh.tetrahedra() {
        let deepest = tet.nodes.iter().map(|n| n / size).max().unwrap();
        let expected = if deepest == 2 {
            Region::Inner
        } else {
            Region::Outer
        };
        assert_eq!(tet.region(), Some(expected));
    }
}

#[test]
fn test_center_offset() {
    let center = DVec3::new(5.0, -1.0, 2.0);
    let mesh = ShellParams::new(4, 3, vec![1.0, 2.0])
        .with_center(center)
        .build()
        .unwrap();
    assert_eq!(mesh.points()[0], DVec3::new(5.0, -1.0, 4.0));
    for p in mesh.points() {
        let r = (*p - center).length();
        assert!((r - 1.0).abs() < 1e-12 || (r - 2.0).abs() < 1e-12);
    }
}

#[test]
fn test_validation_errors() {
    assert!(ShellParams::new(2, 3, vec![1.0, 2.0]).build().is_err());
    assert!(ShellParams::new(4, 1, vec![1.0, 2.0]).build().is_err());
    assert!(ShellParams::new(4, 3, vec![1.0]).build().is_err());
    assert!(ShellParams::new(4, 3, vec![2.0, 1.0]).build().is_err());
    assert!(ShellParams::new(4, 3, vec![1.0, 1.0]).build().is_err());
    assert!(ShellParams::new(4, 3, vec![1.0, 1.0 + 1e-12]).build().is_err());
    assert!(ShellParams::new(4, 3, vec![-1.0, 1.0]).build().is_err());
    assert!(ShellParams::new(4, 3, vec![1.0, f64::NAN]).build().is_err());
}

#[test]
fn test_validation_message_names_problem() {
    let err = ShellParams::new(4, 3, vec![2.0, 1.0]).build().unwrap_err();
    assert!(err.to_string().contains("strictly increasing"));
}
