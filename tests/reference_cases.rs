use luhn::{
    BigUint, CancellationToken, Config, Identifier, Strategy, append_check_digit, count_in_range,
    count_range, generate_check_digit, is_valid,
};
use num_traits::Zero;
use proptest::prelude::*;

fn id(s: &str) -> Identifier {
    s.parse().unwrap()
}

#[test]
fn check_digits_of_known_partials() {
    assert_eq!(generate_check_digit(&id("92739871")), 9);
    assert_eq!(generate_check_digit(&id("92739875")), 0);
    assert_eq!(generate_check_digit(&id("520082828282821")), 0);
}

#[test]
fn only_one_suffix_completes_927398710() {
    for n in 927_398_710u64..=927_398_718 {
        assert!(!is_valid(&Identifier::from(n)), "{n}");
    }
    assert!(is_valid(&id("927398719")));
}

#[test]
fn test_card_numbers_are_valid() {
    for card in [
        "4242424242424242",
        "4000056655665556",
        "378282246310005",
        "2223003122003222",
    ] {
        assert!(is_valid(&id(card)), "{card}");
    }
}

#[test]
fn range_counts() {
    assert!(count_in_range(&id("927398720"), &id("927398710")).is_zero());
    assert_eq!(count_in_range(&id("927398710"), &id("927398720")), BigUint::from(1u32));
    assert_eq!(
        count_in_range(&id("371449635390000"), &id("371449635398431")),
        BigUint::from(844u32)
    );
}

#[test]
fn both_strategies_agree_on_amex_range() {
    let (start, end) = (id("371449635390000"), id("371449635398431"));
    for strategy in [Strategy::DigitDp, Strategy::Scan] {
        let config = Config { strategy, ..Config::default() };
        let report = count_range(&start, &end, &config, &CancellationToken::new()).unwrap();
        assert_eq!(report.count, BigUint::from(844u32), "{strategy}");
    }
}

#[test]
fn identifiers_serialize_as_decimal_strings() {
    let number = id("123456789012345678901234567890");
    let json = serde_json::to_string(&number).unwrap();
    assert_eq!(json, r#""123456789012345678901234567890""#);
    let back: Identifier = serde_json::from_str(&json).unwrap();
    assert_eq!(back, number);
}

proptest! {
    #[test]
    fn appended_check_digit_validates(digits in "[0-9]{1,40}") {
        let partial = id(&digits);
        let full = append_check_digit(&partial);
        prop_assert!(is_valid(&full));
        prop_assert_eq!(
            full.as_biguint(),
            &(partial.as_biguint() * 10u32 + u32::from(generate_check_digit(&partial)))
        );
    }
}
