//! End-to-end tests for greedy cargo packing.
//!
//! Covers the full pipeline: Item list → Packer3D::pack → PackingResult.

use approx::assert_relative_eq;
use std::collections::HashSet;
use stowage_core::solver::{Config, Solver};
use stowage_core::{Advisory, Geometry, EPSILON};
use stowage_d3::{pack_items, Container, Item, Packer3D};

/// Helper: a deterministic assortment of boxes with mixed weights and flags.
fn assorted_items(n: usize) -> Vec<Item> {
    (0..n)
        .map(|i| {
            let a = (i * 7 % 11) as f64;
            let b = (i * 5 % 7) as f64;
            let c = (i * 3 % 5) as f64;
            Item::new(
                format!("item-{}", i),
                0.3 + 0.1 * a,
                0.2 + 0.1 * b,
                0.25 + 0.15 * c,
            )
            .with_name(format!("Box {}", i))
            .with_weight(2.0 + (i * 13 % 70) as f64)
            .with_fragile(i % 6 == 0)
        })
        .collect()
}

fn van() -> Container {
    Container::new(4.2, 2.1, 2.3)
}

/// Pallet, crate and a small cube that only fits on top of the pallet.
fn pallet_load(cube_weight: f64) -> (Container, Vec<Item>) {
    let container = Container::new(2.0, 2.0, 2.0);
    let items = vec![
        Item::new("box", 0.55, 0.55, 0.55).with_weight(cube_weight),
        Item::new("crate", 1.5, 0.5, 0.5).with_weight(5.0),
        Item::new("pallet", 2.0, 2.0, 1.0).with_weight(40.0),
    ];
    (container, items)
}

#[test]
fn test_single_cube_in_corner() {
    let items = vec![Item::new("cube", 1.0, 1.0, 1.0).with_weight(10.0)];

    let result = pack_items(&van(), &items);

    assert!(result.all_placed());
    assert!(result.advisories.is_empty());

    let p = &result.placements[0];
    assert_relative_eq!(p.x(), -1.6, epsilon = 1e-9);
    assert_relative_eq!(p.y(), 0.5, epsilon = 1e-9);
    assert_relative_eq!(p.z(), -0.55, epsilon = 1e-9);
    assert_eq!(p.rotation, [0.0, 0.0, 0.0]);
    assert_eq!(p.orientation, "normal");

    let expected = 100.0 / (4.2 * 2.1 * 2.3);
    assert_relative_eq!(result.efficiency, expected, epsilon = 1e-9);
}

#[test]
fn test_oversized_item_is_unplaced() {
    let items = vec![Item::new("huge", 3.0, 3.0, 3.0).with_weight(10.0)];

    let result = pack_items(&Container::new(2.0, 2.0, 2.0), &items);

    assert!(result.placements.is_empty());
    assert_eq!(result.unplaced, vec!["huge".to_string()]);
    assert_eq!(result.advisory_messages(), vec!["huge could not be placed"]);
    // Requested volume counts even though nothing was placed.
    assert_relative_eq!(result.efficiency, 100.0);
}

#[test]
fn test_heavy_item_cannot_be_stacked() {
    let (container, items) = pallet_load(45.0);

    let result = pack_items(&container, &items);

    assert_eq!(result.placed_count(), 2);
    assert_eq!(result.unplaced, vec!["box".to_string()]);
    assert_eq!(result.stacked_count(), 0);
    assert!(result
        .advisories
        .contains(&Advisory::Unplaced { item: "box".into() }));
}

#[test]
fn test_stacked_on_pallet() {
    let (container, items) = pallet_load(35.0);

    let result = pack_items(&container, &items);

    assert!(result.all_placed());
    assert_eq!(result.stacked_count(), 1);

    let pallet = result.placement_of("pallet").unwrap();
    assert_relative_eq!(pallet.y(), 0.5);

    let crate_ = result.placement_of("crate").unwrap();
    assert_relative_eq!(crate_.x(), -0.25);
    assert_relative_eq!(crate_.y(), 1.25);
    assert_relative_eq!(crate_.z(), -0.75);

    let cube = result.placement_of("box").unwrap();
    assert_eq!(cube.stacked_on.as_deref(), Some("pallet"));
    assert_relative_eq!(cube.x(), 0.0);
    assert_relative_eq!(cube.y(), 1.275, epsilon = 1e-12);
    assert_relative_eq!(cube.z(), 0.0);
    assert_eq!(cube.rotation, [0.0, 0.0, 0.0]);

    assert_eq!(result.advisory_messages(), vec!["box stacked on pallet"]);
    assert!(!cube.aabb().overlaps(&crate_.aabb(), EPSILON));

    let expected = (4.0 + 0.375 + 0.55f64.powi(3)) / 8.0 * 100.0;
    assert_relative_eq!(result.efficiency, expected, epsilon = 1e-9);
}

#[test]
fn test_stacking_weight_limits_are_inclusive() {
    let container = Container::new(2.0, 2.0, 2.0);
    let load = |box_weight: f64| {
        vec![
            Item::new("pallet", 2.0, 2.0, 1.0).with_weight(50.0),
            Item::new("filler", 2.0, 2.0, 0.6).with_weight(1.0),
            Item::new("box", 0.7, 0.7, 0.7).with_weight(box_weight),
        ]
    };

    let result = pack_items(&container, &load(50.0));
    assert!(result.all_placed());
    assert_eq!(result.advisory_messages(), vec!["box stacked on pallet"]);
    let cube = result.placement_of("box").unwrap();
    assert_eq!(cube.stacked_on.as_deref(), Some("pallet"));
    assert_relative_eq!(cube.y(), 1.35, epsilon = 1e-12);

    let result = pack_items(&container, &load(50.0001));
    assert_eq!(result.unplaced, vec!["box".to_string()]);
    assert_eq!(result.stacked_count(), 0);
    assert_eq!(result.advisory_messages(), vec!["box could not be placed"]);
}

#[test]
fn test_stacking_can_overlap_without_verification() {
    let container = Container::new(2.0, 1.0, 3.0);
    let items = vec![
        Item::new("A", 2.0, 1.0, 2.0).with_weight(40.0),
        Item::new("B", 2.0, 1.0, 1.0).with_weight(5.0),
        Item::new("C", 1.0, 1.0, 0.5).with_weight(35.0),
    ];

    let result = pack_items(&container, &items);
    let b = result.placement_of("B").unwrap();
    let c = result.placement_of("C").unwrap();
    assert_eq!(c.stacked_on.as_deref(), Some("A"));
    assert_relative_eq!(c.y(), 2.25);
    assert!(c.aabb().overlaps(&b.aabb(), EPSILON));

    let checked = Packer3D::new(Config::default().with_overlap_check(true));
    let result = checked.pack(Some(&container), &items);
    assert_eq!(result.unplaced, vec!["C".to_string()]);
    assert_eq!(result.stacked_count(), 0);
}

#[test]
fn test_placements_stay_inside_container() {
    let container = van();
    let items = assorted_items(60);

    let result = pack_items(&container, &items);
    assert!(result.placed_count() > 0);

    let bounds = container.bounds();
    for p in &result.placements {
        assert!(
            bounds.contains(&p.aabb(), 1e-6),
            "{} escapes the container: {:?}",
            p.item_id,
            p.aabb()
        );
    }
}

#[test]
fn test_every_item_is_accounted_for_once() {
    let items = assorted_items(60);

    let result = pack_items(&van(), &items);

    assert_eq!(result.placed_count() + result.unplaced_count(), items.len());

    let mut seen = HashSet::new();
    for id in result
        .placements
        .iter()
        .map(|p| &p.item_id)
        .chain(result.unplaced.iter())
    {
        assert!(seen.insert(id.clone()), "{} reported twice", id);
    }
}

#[test]
fn test_packing_is_deterministic() {
    let items = assorted_items(40);
    let packer = Packer3D::default_config();

    let first = packer.pack(Some(&van()), &items);
    let second = packer.pack(Some(&van()), &items);

    assert_eq!(first, second);
}

#[test]
fn test_efficiency_is_bounded() {
    for n in [1, 10, 40, 120] {
        let result = pack_items(&van(), &assorted_items(n));
        assert!(result.efficiency >= 0.0);
        assert!(result.efficiency <= 100.0);
    }
}

#[test]
fn test_stacked_items_respect_support_rules() {
    let items = assorted_items(120);
    let config = Config::default();

    let result = pack_items(&van(), &items);
    let item = |id: &str| items.iter().find(|i| i.id() == id).unwrap();

    for p in result.placements.iter().filter(|p| p.is_stacked()) {
        let stacked = item(&p.item_id);
        let base = item(p.stacked_on.as_deref().unwrap());

        assert!(!stacked.is_fragile());
        assert!(stacked.weight() <= config.stack_weight_limit);
        assert!(!base.is_fragile());
        assert!(base.weight() >= stacked.weight());
    }
}

#[test]
fn test_free_placements_never_overlap() {
    let items = assorted_items(80);

    let result = pack_items(&van(), &items);
    let floor: Vec<_> = result
        .placements
        .iter()
        .filter(|p| !p.is_stacked())
        .collect();

    for (i, a) in floor.iter().enumerate() {
        for b in &floor[i + 1..] {
            assert!(
                !a.aabb().overlaps(&b.aabb(), 1e-6),
                "{} overlaps {}",
                a.item_id,
                b.item_id
            );
        }
    }
}

#[test]
fn test_verified_packing_never_overlaps() {
    let items = assorted_items(80);
    let packer = Packer3D::new(Config::default().with_overlap_check(true));

    let result = packer.pack(Some(&van()), &items);

    for (i, a) in result.placements.iter().enumerate() {
        for b in &result.placements[i + 1..] {
            assert!(!a.aabb().overlaps(&b.aabb(), 1e-6));
        }
    }
}

#[test]
fn test_caller_order_is_untouched() {
    let items = assorted_items(20);
    let before: Vec<String> = items.iter().map(|i| i.name().to_string()).collect();

    let _ = pack_items(&van(), &items);

    let after: Vec<String> = items.iter().map(|i| i.name().to_string()).collect();
    assert_eq!(before, after);
}

#[test]
fn test_overweight_is_advisory_only() {
    let container = van().with_max_weight(30.0);
    let items = vec![
        Item::new("a", 1.0, 1.0, 1.0).with_weight(20.0),
        Item::new("b", 1.0, 1.0, 1.0).with_weight(20.0),
    ];

    let result = pack_items(&container, &items);

    assert!(result.all_placed());
    assert_eq!(
        result.advisory_messages().last().map(String::as_str),
        Some("Placed weight 40.0 exceeds maximum payload 30.0")
    );
}

#[test]
fn test_solve_validates_input() {
    let packer = Packer3D::default_config();
    let items = vec![Item::new("a", 1.0, 1.0, 1.0).with_weight(-1.0)];

    assert!(packer.solve(&items, &van()).is_err());
    assert!(packer
        .solve(&[Item::new("a", 1.0, 1.0, 1.0)], &van())
        .unwrap()
        .all_placed());
}
