use atlas::build_atlas;
use criterion::{Criterion, criterion_group, criterion_main};
use texture::{
    ChannelParams, PerlinNoise, TextureParams, accumulate_octaves, generate_sphere_texture,
    synthesize_channel,
};

const WIDTH: u32 = 256;
const HEIGHT: u32 = 128;
const SEED: u64 = 2025;

fn bench_noise_sampling(c: &mut Criterion) {
    let noise = PerlinNoise::new(SEED);
    c.bench_function("noise2d periodic 256x128 grid", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for y in 0..HEIGHT {
                for x in 0..WIDTH {
                    let sx = x as f64 / WIDTH as f64 * 24.0;
                    let sy = y as f64 / HEIGHT as f64 * 24.0;
                    acc += noise.noise2d(sx, sy, Some(24.0), None);
                }
            }
            acc
        })
    });
}

fn bench_channel_accumulation(c: &mut Criterion) {
    let noise = PerlinNoise::new(SEED);
    let params = ChannelParams {
        scale: 24.0,
        octaves: 4,
        persistence: 0.5,
    };
    c.bench_function("accumulate 4 octaves, one channel", |b| {
        b.iter(|| accumulate_octaves(&noise, &params, WIDTH, HEIGHT))
    });
    c.bench_function("synthesize + normalize, one channel", |b| {
        b.iter(|| synthesize_channel(&noise, &params, WIDTH, HEIGHT))
    });
}

fn bench_full_texture(c: &mut Criterion) {
    let params = TextureParams::default();
    c.bench_function("full 4-channel sphere texture", |b| {
        b.iter(|| {
            let noise = PerlinNoise::new(SEED);
            generate_sphere_texture(&noise, &params, WIDTH, HEIGHT, None)
        })
    });
}

fn bench_atlas_compose(c: &mut Criterion) {
    c.bench_function("atlas compose, all placeholder", |b| {
        b.iter(|| build_atlas(&[]))
    });
}

criterion_group!(
    texture_benchmarks,
    bench_noise_sampling,
    bench_channel_accumulation,
    bench_full_texture,
    bench_atlas_compose
);
criterion_main!(texture_benchmarks);
