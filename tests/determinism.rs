use budget_fit::item::Item;
use budget_fit::solve;
use budget_fit::types::InputDigest;

fn many_ties() -> Vec<Item> {
    // Lots of equal-value subsets: every pair of 10s, triples of 5s, ...
    vec![
        Item::new("a", 10),
        Item::new("b", 5),
        Item::new("c", 10),
        Item::new("d", 5),
        Item::new("e", 5),
        Item::new("f", 10),
        Item::new("g", 15),
    ]
}

#[test]
fn repeated_solves_choose_same_positions_in_same_order() {
    let items = many_ties();

    let baseline = solve(&items, 25).unwrap();
    assert_eq!(baseline.achieved_sum, 25);

    for _ in 0..10 {
        let again = solve(&items, 25).unwrap();
        assert_eq!(again.chosen, baseline.chosen);
    }
}

#[test]
fn tie_resolution_is_pinned() {
    // Walking back from g, every row stays flat at w=25 while the items
    // before it can still reach 25. The first divergence is c; then b and a.
    let solution = solve(&many_ties(), 25).unwrap();

    let picked: Vec<(&str, usize)> = solution
        .chosen
        .iter()
        .map(|c| (c.label.as_str(), c.index))
        .collect();
    assert_eq!(picked, vec![("c", 2), ("a", 0), ("b", 1)]);
}

#[test]
fn solution_json_is_byte_stable() {
    let items = many_ties();

    let json1 = serde_json::to_string_pretty(&solve(&items, 25).unwrap()).unwrap();
    let json2 = serde_json::to_string_pretty(&solve(&items, 25).unwrap()).unwrap();

    assert_eq!(json1, json2);
}

#[test]
fn input_digest_is_stable_across_calls() {
    let items = many_ties();

    assert_eq!(
        InputDigest::from_request(&items, 25),
        InputDigest::from_request(&items.clone(), 25)
    );
}
