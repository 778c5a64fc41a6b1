use cgmath::Point3;
use voxel_world::{BlockType, NoiseField, TerrainConfig, TerrainGenerator, World};

#[test]
fn fractal_sum_is_deterministic_per_seed() {
    let a = NoiseField::new(42);
    let b = NoiseField::new(42);
    for i in 0..200 {
        let x = i as f64 * 0.173 - 7.0;
        let y = i as f64 * -0.091 + 3.0;
        assert_eq!(a.fractal_sum(x, y, 4, 0.5), b.fractal_sum(x, y, 4, 0.5));
    }
}

#[test]
fn fill_chunk_is_deterministic() {
    let mut first = World::new();
    let mut second = World::new();
    TerrainGenerator::with_seed(42).fill_chunk(&mut first, Point3::new(0, 0, 0));
    TerrainGenerator::with_seed(42).fill_chunk(&mut second, Point3::new(0, 0, 0));

    let origin = Point3::new(0, 0, 0);
    assert_eq!(
        first.get_chunk_at(origin).unwrap().blocks(),
        second.get_chunk_at(origin).unwrap().blocks()
    );
}

#[test]
fn bedrock_floor_for_any_seed() {
    let mut rng = fastrand::Rng::with_seed(11);
    for _ in 0..8 {
        let seed = rng.i64(-1_000_000..1_000_000);
        let generator = TerrainGenerator::with_seed(seed);
        let mut world = World::with_chunk_dimension(16);
        generator.fill_chunk(&mut world, Point3::new(rng.i32(-50..50), 0, rng.i32(-50..50)));

        let chunk_position = world.chunk_positions().next().unwrap();
        let origin = world.chunk_bounds(chunk_position).min;
        for x in 0..16 {
            for z in 0..16 {
                let p = Point3::new(origin.x + x, 0, origin.z + z);
                assert_eq!(world.get_voxel(p), BlockType::BEDROCK.id(), "seed {seed} at {p:?}");
            }
        }
    }
}

#[test]
fn columns_follow_the_layer_rules() {
    let generator = TerrainGenerator::default();
    let config = generator.config().clone();
    let mut world = World::new();
    generator.fill_chunk(&mut world, Point3::new(0, 0, 0));

    for x in 0..32 {
        for z in 0..32 {
            let height = generator.height_at(x, z);
            assert!((config.min_height..=config.max_height).contains(&height));

            let surface = world.get_voxel(Point3::new(x, height, z));
            let expected = if height == 0 {
                BlockType::BEDROCK
            } else if height > config.sea_level + 2 {
                BlockType::GRASS
            } else if height >= config.sea_level - 2 {
                BlockType::SAND
            } else {
                BlockType::DIRT
            };
            assert_eq!(surface, expected.id(), "surface at ({x}, {height}, {z})");
            assert_eq!(world.get_voxel(Point3::new(x, height + 1, z)), 0);

            for y in 1..height {
                let block = world.get_voxel(Point3::new(x, y, z));
                let expected = if height - y < 4 { BlockType::DIRT } else { BlockType::STONE };
                assert_eq!(block, expected.id(), "at ({x}, {y}, {z})");
            }
        }
    }
}

#[test]
fn chunks_above_the_terrain_are_empty() {
    let generator = TerrainGenerator::default();
    let mut world = World::new();
    generator.fill_chunk(&mut world, Point3::new(2, 1, -3));

    let chunk = world.get_chunk_at(Point3::new(2, 1, -3)).unwrap();
    assert!(chunk.is_empty());
}

#[test]
fn chunks_below_the_surface_are_solid() {
    let generator = TerrainGenerator::default();
    let mut world = World::with_chunk_dimension(16);
    generator.fill_chunk(&mut world, Point3::new(0, -1, 0));

    let chunk = world.get_chunk_at(Point3::new(0, -1, 0)).unwrap();
    assert_eq!(chunk.solid_count(), 16 * 16 * 16);
}

#[test]
fn tunables_change_the_surface() {
    let flat = TerrainGenerator::new(TerrainConfig {
        height_amplitude: 0.0,
        ..TerrainConfig::default()
    });
    for x in -20..20 {
        assert_eq!(flat.height_at(x, x * 3), 8);
    }
}

#[test]
fn raw_chunk_data_has_full_volume() {
    let data = TerrainGenerator::default().generate_chunk_data(Point3::new(0, 0, 0), 32);
    assert_eq!(data.len(), 32 * 32 * 32);
    assert!(data[..32 * 32].iter().all(|&b| b == BlockType::BEDROCK.id()));
}
