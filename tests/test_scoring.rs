use mkga::{
    encoding::BitString,
    evolution::{Challenge, KnapsackChallenge},
    feasibility::is_feasible,
    scoring::{cost, value, violation_count, weight},
    EncodingMode, Instance, Item, Knapsack,
};

const BENEFITS: [f64; 6] = [100.0, 600.0, 1200.0, 2400.0, 500.0, 2000.0];
const WEIGHTS: [f64; 6] = [8.0, 12.0, 13.0, 64.0, 22.0, 41.0];

fn single_knapsack_instance() -> Instance {
    let items = BENEFITS
        .iter()
        .zip(WEIGHTS.iter())
        .map(|(&benefit, &weight)| Item::new(benefit, vec![weight]))
        .collect();
    Instance::new(items, vec![Knapsack::new(80.0)]).unwrap()
}

fn bits(s: &str) -> BitString {
    s.parse().unwrap()
}

#[test]
fn test_reference_selections() {
    let matrix = vec![WEIGHTS.to_vec()];
    let capacities = [80.0];

    let fifth = bits("000010");
    assert_eq!(value(&fifth, &BENEFITS).unwrap(), 500.0);
    assert_eq!(weight(&fifth, &WEIGHTS).unwrap(), 22.0);
    assert_eq!(violation_count(&fifth, &matrix, &capacities).unwrap(), 0);

    let sixth = bits("000001");
    assert_eq!(value(&sixth, &BENEFITS).unwrap(), 2000.0);
    assert_eq!(violation_count(&sixth, &matrix, &capacities).unwrap(), 0);
    assert!(is_feasible(&[sixth], &matrix, &capacities).unwrap());

    let all = bits("111111");
    assert_eq!(weight(&all, &WEIGHTS).unwrap(), 160.0);
    assert_eq!(violation_count(&all, &matrix, &capacities).unwrap(), 1);
    assert_eq!(cost(&all, &BENEFITS, 1, 1).unwrap(), 0.0);
}

#[test]
fn test_both_encodings_agree_on_one_knapsack() {
    let tuple = KnapsackChallenge::new(single_knapsack_instance(), EncodingMode::Tuple);
    let single = KnapsackChallenge::new(single_knapsack_instance(), EncodingMode::Single);

    for genome in ["000010", "000001", "110100", "111111", "000000"] {
        let genome = bits(genome);
        assert_eq!(
            tuple.objective_value(&genome).unwrap(),
            single.objective_value(&genome).unwrap()
        );
        assert_eq!(
            tuple.is_feasible(&genome).unwrap(),
            single.is_feasible(&genome).unwrap()
        );
    }
}

#[test]
fn test_feasible_cost_equals_value() {
    let challenge = KnapsackChallenge::new(single_knapsack_instance(), EncodingMode::Single);
    let scored = challenge.evaluate(bits("000011")).unwrap();
    assert_eq!(scored.violation_count, 0);
    assert_eq!(scored.objective_value, 2500.0);
    assert_eq!(scored.cost, 2500.0);
}

#[test]
fn test_infeasible_tuple_is_penalized() {
    let instance = Instance::new(
        vec![
            Item::new(10.0, vec![1.0, 1.0]),
            Item::new(10.0, vec![1.0, 1.0]),
        ],
        vec![Knapsack::new(5.0), Knapsack::new(5.0)],
    )
    .unwrap();
    let challenge = KnapsackChallenge::new(instance, EncodingMode::Tuple);

    let feasible = challenge.evaluate(bits("1001")).unwrap();
    let double_booked = challenge.evaluate(bits("1010")).unwrap();

    assert_eq!(feasible.objective_value, double_booked.objective_value);
    assert_eq!(double_booked.violation_count, 1);
    assert!(double_booked.cost < feasible.cost);
}
