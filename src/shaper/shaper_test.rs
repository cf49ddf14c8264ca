use super::*;
use crate::test_helper::identical_floats;
use ndarray::{arr1, arr2, s, Array};
use quickcheck::TestResult;

#[test]
fn vector_to_matrix() {
    let v = arr1(&[0., 5., 10.]);
    let m = expand_vector_to_matrix(v.view());

    assert_eq!(m.dim(), (3, 3));
    assert_eq!(m, arr2(&[[0., 0., 0.], [5., 5., 5.], [10., 10., 10.]]));

    for column in m.axis_iter(Axis(1)) {
        assert_eq!(column, v);
    }
}

#[test]
fn matrix_to_volume() {
    let m = arr2(&[[1., 2., 3.], [4., 5., 6.]]);
    let v = expand_matrix_to_volume(m.view());

    assert_eq!(v.dim(), (2, 2, 3));
    for layer in v.outer_iter() {
        assert_eq!(layer, m);
    }
}

#[test]
fn channels() {
    let m = arr2(&[[1., 2.], [3., 4.]]);
    let c = expand_to_channels(m.view());

    assert_eq!(c.dim(), (3, 2, 2));
    assert_eq!(c.index_axis(Axis(0), 0), m);
    assert!(c.slice(s![1.., .., ..]).iter().all(|&x| x == 0.));
}

#[test]
fn stack() {
    let a = arr1(&[1., 2.]);
    let b = arr1(&[3., 4.]);
    let st = stack_timesteps(&[a, b]).unwrap();

    assert_eq!(st, arr2(&[[1., 2.], [3., 4.]]));
}

#[test]
fn stack_shape_mismatch() {
    let a = arr1(&[1., 2.]);
    let b = arr1(&[3., 4., 5.]);

    match stack_timesteps(&[a, b]) {
        Err(e) => match *e.kind() {
            ErrorKind::ShapeMismatch(ref expected, ref found) => {
                assert_eq!(expected, &vec![2]);
                assert_eq!(found, &vec![3]);
            }
            ref k => panic!("unexpected error kind {:?}", k),
        },
        Ok(_) => panic!("mismatching shapes were stacked"),
    }
}

#[test]
fn stack_empty() {
    let items: Vec<Array<Float, Ix2>> = vec![];

    match stack_timesteps(&items) {
        Err(e) => match *e.kind() {
            ErrorKind::EmptySequence => {}
            ref k => panic!("unexpected error kind {:?}", k),
        },
        Ok(_) => panic!("empty sequence was stacked"),
    }
}

#[test]
fn planes_and_volumes() {
    let profiles = arr2(&[[0., 0., 0.], [10., 4., 0.]]);

    let planes = profiles_to_planes(profiles.view());
    assert_eq!(planes.shape(), &[2, 3, 3, 3]);
    assert_eq!(planes.slice(s![1, 0, .., 2]), profiles.row(1));
    assert!(planes.slice(s![.., 1.., .., ..]).iter().all(|&x| x == 0.));

    let volumes = profiles_to_volumes(profiles.view());
    assert_eq!(volumes.shape(), &[2, 3, 3, 3, 3]);
    for depth in 0..3 {
        for column in 0..3 {
            assert_eq!(volumes.slice(s![1, 0, depth, .., column]), profiles.row(1));
        }
    }
    assert!(volumes.slice(s![.., 1.., .., .., ..]).iter().all(|&x| x == 0.));
}

#[test]
fn preallocated_expansion_matches_stacking() {
    let profiles = arr2(&[[0., 0., 0., 0.], [7., 3., 1., 0.], [10., 6.5, 2.5, 0.]]);

    let planes: Vec<Array<Float, Ix3>> = profiles
        .outer_iter()
        .map(|p| expand_to_channels(expand_vector_to_matrix(p).view()))
        .collect();
    assert_eq!(
        profiles_to_planes(profiles.view()),
        stack_timesteps(&planes).unwrap()
    );

    let volumes: Vec<Array<Float, Ix4>> = profiles
        .outer_iter()
        .map(|p| {
            let m = expand_vector_to_matrix(p);
            expand_to_channels(expand_matrix_to_volume(m.view()).view())
        })
        .collect();
    assert_eq!(
        profiles_to_volumes(profiles.view()),
        stack_timesteps(&volumes).unwrap()
    );
}

quickcheck! {
    fn every_column_is_the_profile(values: Vec<Float>) -> TestResult {
        if values.is_empty() {
            return TestResult::discard();
        }

        let v = Array::from(values);
        let m = expand_vector_to_matrix(v.view());

        TestResult::from_bool(m.axis_iter(Axis(1)).all(|c| {
            c.iter().zip(v.iter()).all(|(a, b)| identical_floats(*a, *b))
        }))
    }
}

quickcheck! {
    fn every_layer_is_the_matrix(values: Vec<Float>) -> TestResult {
        let rows = 1 + values.len() % 4;
        let cols = (values.len() / rows).min(8);
        if cols == 0 {
            return TestResult::discard();
        }

        let m = Array::from_shape_vec((rows, cols), values[..rows * cols].to_vec()).unwrap();
        let v = expand_matrix_to_volume(m.view());

        TestResult::from_bool(v.len_of(Axis(0)) == rows && v.outer_iter().all(|layer| {
            layer.iter().zip(m.iter()).all(|(a, b)| identical_floats(*a, *b))
        }))
    }
}
