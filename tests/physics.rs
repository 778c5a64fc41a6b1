use cgmath::{Point3, Vector3};
use voxel_world::{AgentDimensions, BlockType, Collision, GridRaycaster, World};

const STONE: u8 = BlockType::STONE as u8;

fn floor_world() -> World {
    let mut world = World::new();
    for x in -3..3 {
        for z in -3..3 {
            world.set_voxel(Point3::new(x, 0, z), STONE);
        }
    }
    world
}

#[test]
fn wall_blocks_only_the_axis_it_faces() {
    let mut world = floor_world();
    for y in 1..=2 {
        for z in -3..3 {
            world.set_voxel(Point3::new(1, y, z), STONE);
        }
    }
    let collision = Collision::new(&world, AgentDimensions::default());

    let adjusted = collision.check_collision(
        Point3::new(0.5, 2.6, 0.5),
        Vector3::new(1.0, 0.0, 1.0),
        0.2,
    );
    assert_eq!(adjusted, Vector3::new(0.0, 0.0, 1.0));
}

#[test]
fn falling_stops_at_the_floor_and_rising_at_the_ceiling() {
    let mut world = floor_world();
    world.set_voxel(Point3::new(0, 3, 0), STONE);
    let collision = Collision::new(&world, AgentDimensions::default());

    let eye = Point3::new(0.5, 2.65, 0.5);
    let fall = collision.check_collision(eye, Vector3::new(0.0, -1.0, 0.0), 0.1);
    assert_eq!(fall.y, 0.0);

    let low = Point3::new(0.5, 2.6, 0.5);
    let rise = collision.check_collision(low, Vector3::new(0.0, 5.0, 0.0), 0.1);
    assert_eq!(rise.y, 0.0);

    let open = Point3::new(2.5, 2.6, 2.5);
    let rise = collision.check_collision(open, Vector3::new(0.0, 5.0, 0.0), 0.1);
    assert_eq!(rise.y, 5.0);
}

#[test]
fn grounded_only_with_a_solid_cell_underfoot() {
    let world = floor_world();
    let collision = Collision::new(&world, AgentDimensions::default());

    assert!(collision.is_grounded(Point3::new(0.5, 2.6, 0.5)));
    assert!(collision.is_grounded(Point3::new(-2.5, 2.65, -2.5)));
    assert!(!collision.is_grounded(Point3::new(0.5, 3.0, 0.5)));
    assert!(!collision.is_grounded(Point3::new(3.5, 2.6, 0.5)));
}

#[test]
fn ground_level_is_one_above_the_top_solid_cell() {
    let mut world = floor_world();
    world.set_voxel(Point3::new(1, 7, 1), STONE);
    world.set_voxel(Point3::new(2, -9, 9), STONE);
    let collision = Collision::new(&world, AgentDimensions::default());

    assert_eq!(collision.ground_level(0.5, 0.5), Some(1));
    assert_eq!(collision.ground_level(1.2, 1.9), Some(8));
    assert_eq!(collision.ground_level(-0.5, -0.5), Some(1));
    assert_eq!(collision.ground_level(2.5, 9.5), Some(-8));
    assert_eq!(collision.ground_level(40.0, 40.0), None);
}

#[test]
fn box_overlap_respects_its_extents() {
    let mut world = World::new();
    world.set_voxel(Point3::new(1, 1, 0), STONE);
    let collision = Collision::new(&world, AgentDimensions::default());

    assert!(!collision.agent_intersects(Point3::new(0.5, 2.6, 0.5)));
    assert!(collision.agent_intersects(Point3::new(0.7, 2.6, 0.5)));
    assert!(collision.box_intersects(Point3::new(0.5, 2.6, 0.5), 0.6, 1.8));
    assert!(!collision.box_intersects(Point3::new(0.5, 2.6, 0.5), 0.5, 1.8));
}

#[test]
fn ray_reports_the_face_it_enters() {
    let mut world = World::new();
    world.set_voxel(Point3::new(0, 0, 0), STONE);
    let raycaster = GridRaycaster::new(&world);

    let hit = raycaster
        .cast(Point3::new(0.5, 0.5, -3.5), Vector3::new(0.0, 0.0, 1.0), 10.0)
        .unwrap();
    assert_eq!(hit.cell, Point3::new(0, 0, 0));
    assert_eq!(hit.normal, Vector3::new(0, 0, -1));
    assert!((hit.distance - 3.5).abs() < 1e-5);
    assert_eq!(hit.adjacent_cell(), Point3::new(0, 0, -1));
    assert_eq!(hit.voxel, STONE);
}

#[test]
fn ray_walks_into_negative_coordinates() {
    let mut world = World::new();
    world.set_voxel(Point3::new(-5, 0, 0), STONE);
    let raycaster = GridRaycaster::new(&world);

    let hit = raycaster
        .cast(Point3::new(0.5, 0.5, 0.5), Vector3::new(-2.0, 0.0, 0.0), 10.0)
        .unwrap();
    assert_eq!(hit.cell, Point3::new(-5, 0, 0));
    assert_eq!(hit.normal, Vector3::new(1, 0, 0));
    assert!((hit.distance - 4.5).abs() < 1e-5);
}

#[test]
fn ray_misses_beyond_reach() {
    let mut world = World::new();
    world.set_voxel(Point3::new(0, 0, 12), STONE);
    let raycaster = GridRaycaster::new(&world);

    let origin = Point3::new(0.5, 0.5, 0.5);
    let forward = Vector3::new(0.0, 0.0, 1.0);
    assert!(raycaster.cast(origin, forward, 10.0).is_none());
    assert!(raycaster.cast(origin, forward, 12.0).is_some());
}

#[test]
fn diagonal_rays_hit_what_a_fine_march_hits() {
    let mut rng = fastrand::Rng::with_seed(99);
    let mut world = World::with_chunk_dimension(8);
    for _ in 0..60 {
        let p = Point3::new(rng.i32(-6..6), rng.i32(-6..6), rng.i32(-6..6));
        world.set_voxel(p, STONE);
    }
    let raycaster = GridRaycaster::new(&world);

    for _ in 0..200 {
        let origin = Point3::new(
            rng.f32() * 0.8 + 0.1 + 10.0,
            rng.f32() * 0.8 + 0.1,
            rng.f32() * 0.8 + 0.1,
        );
        let direction = Vector3::new(-1.0, rng.f32() - 0.5, rng.f32() - 0.5);
        let Some(hit) = raycaster.cast(origin, direction, 20.0) else {
            continue;
        };

        // Everything strictly before the hit distance is empty.
        let len = (direction.x * direction.x + direction.y * direction.y + direction.z * direction.z).sqrt();
        let unit = direction / len;
        let mut t = 0.0;
        while t < hit.distance - 1e-3 {
            let p = origin + unit * t;
            let cell = Point3::new(p.x.floor() as i32, p.y.floor() as i32, p.z.floor() as i32);
            assert!(!world.is_solid(cell), "ray passed through {cell:?}");
            t += 0.01;
        }
        // The hit point lies on the surface of the reported cell.
        let entry = origin + unit * hit.distance;
        for (coordinate, cell) in [(entry.x, hit.cell.x), (entry.y, hit.cell.y), (entry.z, hit.cell.z)] {
            let cell = cell as f32;
            assert!(coordinate >= cell - 1e-3 && coordinate <= cell + 1.0 + 1e-3);
        }
    }
}
