use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use rand::{SeedableRng, rngs::SmallRng};
use vrpvcsd_generator::{
    generator::{
        generation_params::GenerationParams, instance_generator::InstanceGenerator,
        random_sources::RandomSources,
    },
    problem::instance_config::InstanceConfig,
    scenario::{demand_model::DiscreteSpreadDemand, scenario_sampler::ScenarioSampler},
};

fn generation_benchmark(c: &mut Criterion) {
    let generator = InstanceGenerator::default();
    let template = InstanceConfig::default();

    for class in [0u8, 4] {
        let params = GenerationParams {
            density_class_list: vec![class],
            capacity_list: vec![50.0],
            count: 100,
            ..GenerationParams::default()
        };

        c.bench_function(&format!("generate 100 instances (class {class})"), |b| {
            let mut rngs = RandomSources::<SmallRng>::seeded(42);
            b.iter(|| {
                generator
                    .generate(black_box(&template), black_box(&params), &mut rngs)
                    .unwrap()
            })
        });
    }
}

fn scenario_benchmark(c: &mut Criterion) {
    let generator = InstanceGenerator::default();
    let params = GenerationParams {
        density_class_list: vec![4],
        ..GenerationParams::default()
    };
    let mut rngs = RandomSources::<SmallRng>::seeded(7);
    let instance = generator
        .generate(&InstanceConfig::default(), &params, &mut rngs)
        .unwrap()
        .remove(0);

    let sampler = ScenarioSampler::new(DiscreteSpreadDemand::default());
    let mut rng = SmallRng::seed_from_u64(7);

    c.bench_function("sample 1000 scenarios (class 4)", |b| {
        b.iter(|| sampler.sample(black_box(&instance), 1000, &mut rng))
    });
}

criterion_group!(benches, generation_benchmark, scenario_benchmark);
criterion_main!(benches);
