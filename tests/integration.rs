use std::hash::{DefaultHasher, Hash, Hasher};

use game_geom::{BoundingBox, BoundsError, ContainmentType, Vector3};

fn unit_box() -> BoundingBox {
    BoundingBox::new(Vector3::new(0.0, 0.0, 0.0), Vector3::new(1.0, 1.0, 1.0))
}

#[test]
fn point_containment_examples() {
    let bbox = unit_box();
    assert_eq!(
        bbox.contains_point(Vector3::new(0.5, 0.5, 0.5)),
        ContainmentType::Contains
    );
    assert_eq!(
        bbox.contains_point(Vector3::new(2.0, 0.0, 0.0)),
        ContainmentType::Disjoint
    );
}

#[test]
fn box_intersection_examples() {
    let bbox = unit_box();
    let near = BoundingBox::new(Vector3::splat(0.5), Vector3::splat(2.0));
    let far = BoundingBox::new(Vector3::splat(5.0), Vector3::splat(6.0));
    assert!(bbox.intersects(&near));
    assert!(!bbox.intersects(&far));
}

#[test]
fn point_cloud_examples() {
    let single = BoundingBox::create_from_points(Some([Vector3::new(1.0, 2.0, 3.0)]))
        .expect("single point bounds");
    assert_eq!(
        single,
        BoundingBox::new(Vector3::new(1.0, 2.0, 3.0), Vector3::new(1.0, 2.0, 3.0))
    );

    assert_eq!(
        BoundingBox::create_from_points(Some(Vec::<Vector3>::new())),
        Err(BoundsError::EmptyPoints)
    );
    assert_eq!(
        BoundingBox::create_from_points(None::<Vec<Vector3>>),
        Err(BoundsError::NullPoints)
    );
}

#[test]
fn unit_box_corner_order() {
    let corners: Vec<[f32; 3]> = unit_box().corners().into_iter().map(Into::into).collect();
    assert_eq!(
        corners,
        vec![
            [0.0, 1.0, 1.0],
            [1.0, 1.0, 1.0],
            [1.0, 0.0, 1.0],
            [0.0, 0.0, 1.0],
            [0.0, 1.0, 0.0],
            [1.0, 1.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 0.0, 0.0],
        ]
    );
}

#[test]
fn error_messages_are_readable() {
    assert_eq!(BoundsError::NullPoints.to_string(), "point sequence is missing");
    assert_eq!(BoundsError::EmptyPoints.to_string(), "point sequence is empty");
    assert_eq!(
        BoundsError::CornerBufferTooSmall { len: 3, required: 8 }.to_string(),
        "corner buffer holds 3 elements, at least 8 are required"
    );
}

#[test]
fn equal_values_hash_alike() {
    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    let a = unit_box();
    let b = BoundingBox::new(Vector3::splat(-0.0), Vector3::ONE);
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
    assert_eq!(hash_of(&Vector3::UP), hash_of(&Vector3::UNIT_Y));
}

#[test]
fn equality_is_symmetric() {
    let a = Vector3::new(1.5, -2.0, 0.25);
    let b = Vector3::new(1.5, -2.0, 0.25);
    assert_eq!(a, b);
    assert_eq!(b, a);
    assert_ne!(a, Vector3::new(1.5, -2.0, 0.5));

    let x = unit_box();
    let y = BoundingBox::create_merged(unit_box(), unit_box());
    assert!(x == y && y == x);
}
