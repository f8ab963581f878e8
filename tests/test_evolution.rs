use mkga::{
    error::GeneticError,
    evolution::{
        Challenge, Evolution, EvolutionLauncher, EvolutionOptions, EvolutionState,
        KnapsackChallenge, PoolStrategy,
    },
    population::{fittest, generate_population},
    rng::RandomNumberGenerator,
    solve,
    strategy::OnePointStrategy,
    EncodingMode, Instance, Item, Knapsack,
};

fn instance() -> Instance {
    Instance::new(
        vec![
            Item::new(100.0, vec![8.0, 10.0]),
            Item::new(600.0, vec![12.0, 20.0]),
            Item::new(1200.0, vec![13.0, 15.0]),
            Item::new(2400.0, vec![64.0, 40.0]),
            Item::new(500.0, vec![22.0, 30.0]),
            Item::new(2000.0, vec![41.0, 35.0]),
        ],
        vec![Knapsack::new(80.0), Knapsack::new(70.0)],
    )
    .unwrap()
}

fn options() -> EvolutionOptions {
    EvolutionOptions::builder()
        .generation_size(20)
        .iteration_budget(200)
        .mutation_rate(0.3)
        .build()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

#[test]
fn test_same_seed_same_result() {
    init_tracing();
    for mode in [EncodingMode::Tuple, EncodingMode::Single] {
        let first = solve(instance(), mode, &options(), Some(42)).unwrap();
        let second = solve(instance(), mode, &options(), Some(42)).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_result_is_feasible_and_consistent() {
    let challenge = KnapsackChallenge::new(instance(), EncodingMode::Tuple);
    let launcher = EvolutionLauncher::new(OnePointStrategy::new(), challenge.clone());
    let mut rng = RandomNumberGenerator::from_seed(7);

    let result = launcher.evolve(&options(), &mut rng).unwrap();

    assert_eq!(result.violation_count, 0);
    assert_eq!(result.iterations, 200);
    assert_eq!(result.rows.len(), 2);
    assert!(challenge.is_feasible(&result.genome).unwrap());
    assert_eq!(
        challenge.objective_value(&result.genome).unwrap(),
        result.objective_value
    );
    assert_eq!(result.cost, result.objective_value);
}

#[test]
fn test_incumbent_never_worse_than_initial_best() {
    let challenge = KnapsackChallenge::new(instance(), EncodingMode::Single);
    let options = options();

    let mut rng = RandomNumberGenerator::from_seed(11);
    let population = generate_population(&challenge, &options, &mut rng).unwrap();
    let initial_best = fittest(&population).unwrap().cost;

    let mut rng = RandomNumberGenerator::from_seed(11);
    let result = EvolutionLauncher::new(OnePointStrategy::new(), challenge)
        .evolve(&options, &mut rng)
        .unwrap();

    assert!(result.cost >= initial_best);
}

#[test]
fn test_state_machine_transitions() {
    let challenge = KnapsackChallenge::new(instance(), EncodingMode::Single);
    let strategy = OnePointStrategy::new();
    let options = EvolutionOptions::builder()
        .generation_size(10)
        .iteration_budget(3)
        .build();
    let mut rng = RandomNumberGenerator::from_seed(5);

    let mut evolution = Evolution::initialize(&challenge, &strategy, &options, &mut rng).unwrap();
    assert_eq!(evolution.state(), EvolutionState::Initialized);
    assert_eq!(evolution.population().len(), 10);
    let initial_cost = evolution.incumbent().cost;

    assert_eq!(evolution.step(&mut rng).unwrap(), EvolutionState::Iterating);
    assert_eq!(evolution.step(&mut rng).unwrap(), EvolutionState::Iterating);
    assert_eq!(evolution.step(&mut rng).unwrap(), EvolutionState::Terminated);
    assert_eq!(evolution.step(&mut rng).unwrap(), EvolutionState::Terminated);
    assert_eq!(evolution.iteration(), 3);
    assert!(evolution.incumbent().cost >= initial_cost);

    let result = evolution.into_result().unwrap();
    assert_eq!(result.iterations, 3);
}

#[test]
fn test_resampled_pool_runs() {
    let options = EvolutionOptions::builder()
        .generation_size(16)
        .iteration_budget(50)
        .pool_strategy(PoolStrategy::Resampled)
        .include_infeasible(true)
        .infeasible_fraction(0.25)
        .build();

    let first = solve(instance(), EncodingMode::Single, &options, Some(3)).unwrap();
    let second = solve(instance(), EncodingMode::Single, &options, Some(3)).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.violation_count, 0);
}

#[test]
fn test_zero_benefits_do_not_break_the_loop() {
    let instance = Instance::new(
        vec![Item::new(0.0, vec![1.0]); 4],
        vec![Knapsack::new(10.0)],
    )
    .unwrap();
    let result = solve(instance, EncodingMode::Single, &options(), Some(1)).unwrap();
    assert_eq!(result.cost, 0.0);
}

#[test]
fn test_invalid_options_are_reported() {
    let options = EvolutionOptions::builder().mutation_rate(1.5).build();
    let result = solve(instance(), EncodingMode::Tuple, &options, Some(1));
    match result {
        Err(GeneticError::Configuration(msg)) => assert!(msg.contains("Mutation rate")),
        other => panic!("Expected Configuration error, got {:?}", other),
    }
}

#[test]
fn test_unreachable_quota_is_reported() {
    let instance = Instance::new(
        vec![Item::new(5.0, vec![100.0]); 10],
        vec![Knapsack::new(1.0)],
    )
    .unwrap();
    let options = EvolutionOptions::builder()
        .generation_size(200)
        .max_generation_attempts(Some(500))
        .build();
    let result = solve(instance, EncodingMode::Single, &options, Some(9));
    assert!(matches!(result, Err(GeneticError::QuotaUnsatisfied { .. })));
}
