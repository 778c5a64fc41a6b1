use std::collections::HashMap;

use cgmath::Point3;
use voxel_world::{BlockType, World};

#[test]
fn set_then_get_round_trips_anywhere() {
    let mut rng = fastrand::Rng::with_seed(0x5eed);
    let mut world = World::new();
    let mut expected = HashMap::new();

    for _ in 0..2000 {
        let position = Point3::new(
            rng.i32(-1000..1000),
            rng.i32(-200..200),
            rng.i32(-1000..1000),
        );
        let value = rng.u8(1..=255);
        world.set_voxel(position, value);
        expected.insert(position, value);
    }

    for (position, value) in expected {
        assert_eq!(world.get_voxel(position), value, "at {position:?}");
    }
}

#[test]
fn unwritten_space_reads_as_air() {
    let mut world = World::new();
    world.set_voxel(Point3::new(0, 0, 0), BlockType::STONE.id());

    assert_eq!(world.get_voxel(Point3::new(1, 0, 0)), 0);
    assert_eq!(world.get_voxel(Point3::new(-40_000, 7, 12)), 0);
    assert_eq!(world.chunk_count(), 1);
}

#[test]
fn negative_coordinates_wrap_into_the_previous_chunk() {
    let world = World::new();
    let position = Point3::new(-1, -33, 32);

    assert_eq!(world.chunk_position_of(position), Point3::new(-1, -2, 1));
    assert_eq!(world.local_position_of(position), Point3::new(31, 31, 0));

    for x in -100..100 {
        let p = Point3::new(x, 0, 0);
        let chunk = world.chunk_position_of(p);
        let local = world.local_position_of(p);
        assert_eq!(chunk.x * 32 + local.x as i32, x);
    }
}

#[test]
fn writes_create_exactly_one_chunk() {
    let mut world = World::with_chunk_dimension(8);
    assert!(!world.chunk_exists(Point3::new(-1, 0, 0)));

    world.set_voxel(Point3::new(-8, 0, 7), 2);
    world.set_voxel(Point3::new(-1, 7, 0), 2);

    assert!(world.chunk_exists(Point3::new(-1, 0, 0)));
    assert_eq!(world.chunk_count(), 1);
    let chunk = world.get_chunk_at(Point3::new(-1, 0, 0)).unwrap();
    assert_eq!(chunk.blocks().len(), 8 * 8 * 8);
    assert_eq!(chunk.solid_count(), 2);
}

#[test]
fn chunk_bounds_cover_the_owned_voxels() {
    let world = World::with_chunk_dimension(16);
    let bounds = world.chunk_bounds(Point3::new(-2, 1, 0));

    assert_eq!(bounds.min, Point3::new(-32, 16, 0));
    assert_eq!(bounds.max, Point3::new(-16, 32, 16));
    assert_eq!(world.chunk_position_of(bounds.min), Point3::new(-2, 1, 0));
    assert_eq!(world.chunk_position_of(bounds.max), Point3::new(-1, 2, 1));
}

#[test]
fn overwriting_with_air_keeps_the_chunk() {
    let mut world = World::new();
    world.set_voxel(Point3::new(3, 3, 3), 5);
    world.set_voxel(Point3::new(3, 3, 3), 0);

    assert!(world.chunk_exists(Point3::new(0, 0, 0)));
    assert!(world.get_chunk_at(Point3::new(0, 0, 0)).unwrap().is_empty());
}
