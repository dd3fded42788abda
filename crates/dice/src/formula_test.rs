use crate::DiceRoller;

const SAMPLES: usize = 500;

#[test]
fn plain_dice() {
    let mut dice = DiceRoller::new(42);

    for _ in 0..SAMPLES {
        let value = dice.roll_formula("2d6");
        assert!((2..=12).contains(&value), "2d6 produced {}", value);
    }
}

#[test]
fn addition_applies_modifier() {
    let mut dice = DiceRoller::new(42);

    for _ in 0..SAMPLES {
        let value = dice.roll_formula("1d6+3");
        assert!((4..=9).contains(&value), "1d6+3 produced {}", value);
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let mut dice = DiceRoller::new(42);

    for _ in 0..SAMPLES {
        let value = dice.roll_formula("2d6*2");
        assert!((4..=24).contains(&value), "2d6*2 produced {}", value);
        assert_eq!(value % 2, 0, "2d6*2 produced odd {}", value);
    }

    assert_eq!(dice.roll_formula("2*3+1"), 7);
}

#[test]
fn chained_dice_roll_left_to_right() {
    let mut dice = DiceRoller::new(42);
    let mut highest = 0;

    for _ in 0..SAMPLES {
        let value = dice.roll_formula("2d6d8");
        assert!((2..=96).contains(&value), "2d6d8 produced {}", value);
        highest = highest.max(value);
    }

    // Two d6 alone top out at 12; chaining must roll the d8s.
    assert!(highest > 12);
}

#[test]
fn chained_dice_match_manual_rolls() {
    let mut formula_dice = DiceRoller::new(99);
    let mut manual_dice = DiceRoller::new(99);

    let value = formula_dice.roll_formula("2d6d8");

    let count = manual_dice.roll_die(6) + manual_dice.roll_die(6);
    let expected: i32 = (0..count).map(|_| manual_dice.roll_die(8)).sum();

    assert_eq!(value, expected);
}

#[test]
fn constants_evaluate_to_themselves() {
    let mut dice = DiceRoller::new(42);

    assert_eq!(dice.roll_formula("3"), 3);
    assert_eq!(dice.roll_formula(" 4 + 5 "), 9);
}

#[test]
fn unparseable_count_rolls_a_single_die() {
    let mut dice = DiceRoller::new(42);

    for _ in 0..SAMPLES {
        let value = dice.roll_formula("xd6");
        assert!((1..=6).contains(&value), "xd6 produced {}", value);

        let value = dice.roll_formula("d4");
        assert!((1..=4).contains(&value), "d4 produced {}", value);
    }
}

#[test]
fn missing_faces_default_to_six() {
    let mut dice = DiceRoller::new(42);

    for _ in 0..SAMPLES {
        let value = dice.roll_formula("3d");
        assert!((3..=18).contains(&value), "3d produced {}", value);
    }
}

#[test]
fn garbage_evaluates_to_zero() {
    let mut dice = DiceRoller::new(42);

    assert_eq!(dice.roll_formula(""), 0);
    assert_eq!(dice.roll_formula("abc"), 0);
}

#[test]
fn formula_does_not_update_last_natural() {
    let mut dice = DiceRoller::new(42);

    let natural = dice.roll_3d6();
    dice.roll_formula("4d6");

    assert_eq!(dice.last_natural(), natural);
}

#[test]
fn oversized_results_saturate() {
    let mut dice = DiceRoller::new(42);

    assert_eq!(dice.roll_formula("100000*100000"), i32::MAX);
    assert_eq!(dice.roll_formula("2147483647+1"), i32::MAX);
    assert_eq!(dice.roll_formula("1000d6*10000000"), i32::MAX);
    assert_eq!(dice.roll_formula("-100000*100000"), i32::MIN);
}
