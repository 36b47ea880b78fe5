use hd::{
    config::Config,
    error::{Error, RuntimeError},
    evaluate,
    interpreter::{
        value::core::{Kind, Value},
        width::{W16, W64},
    },
};
use proptest::prelude::*;

fn run64(program: &str) -> Result<Option<String>, Error> {
    evaluate(&[program.to_string()], &Config::default(), &mut std::io::sink())
}

fn number_strategy() -> impl Strategy<Value = Value<W64>> {
    prop_oneof![any::<i64>().prop_map(Value::int),
                any::<u64>().prop_map(Value::uint),
                (-1.0e12..1.0e12f64).prop_map(Value::float),]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Both orders of coercion agree on the resulting kind, and both operands
    /// end up in it.
    #[test]
    fn prop_coercion_is_symmetric(a in number_strategy(), b in number_strategy()) {
        let (mut a1, mut b1) = (a.clone(), b.clone());
        let (mut a2, mut b2) = (a, b);

        let forward = a1.coerce(&mut b1).unwrap();
        let backward = b2.coerce(&mut a2).unwrap();

        prop_assert_eq!(forward, backward);
        prop_assert_eq!(a1.kind(), forward);
        prop_assert_eq!(b1.kind(), forward);
        prop_assert_eq!(a2.kind(), forward);
        prop_assert_eq!(b2.kind(), forward);
    }

    /// A negative signed value paired with an unsigned one stays signed.
    #[test]
    fn prop_negative_int_never_becomes_unsigned(a in i64::MIN..0, b in any::<u64>()) {
        let neg = Value::<W64>::int(a);
        let uint = Value::<W64>::uint(b);

        prop_assert_eq!(neg.coercion_target(&uint), Kind::SignedInt);
        prop_assert_eq!(uint.coercion_target(&neg), Kind::SignedInt);
    }

    /// Punning away and back restores the original value.
    #[test]
    fn prop_pun_round_trips(bits in any::<u64>(), via in prop_oneof![Just(Kind::SignedInt),
                                                                      Just(Kind::Float)]) {
        let original = Value::<W64>::uint(bits);
        let mut value = original.clone();

        value.pun(via).unwrap();
        value.pun(Kind::UnsignedInt).unwrap();

        prop_assert_eq!(value, original);
    }

    /// Same as above at a minifloat width.
    #[test]
    fn prop_pun_round_trips_at_16_bits(n in any::<i16>()) {
        let original = Value::<W16>::int(n);
        let mut value = original.clone();

        value.pun(Kind::Float).unwrap();
        value.pun(Kind::UnsignedInt).unwrap();
        value.pun(Kind::SignedInt).unwrap();

        prop_assert_eq!(value, original);
    }

    /// A literal printed back in its own base reproduces its digits.
    #[test]
    fn prop_literals_round_trip(n in any::<u64>()) {
        let cases = [(format!("{n}"), "dec"),
                     (format!("0x{n:X}"), "hex"),
                     (format!("0o{n:o}"), "oct"),
                     (format!("0b{n:b}"), "bin")];

        for (literal, format) in cases {
            let result = run64(&format!("{literal} {format} as")).unwrap();
            prop_assert_eq!(result, Some(literal));
        }
    }

    /// More binary operators than operands always underflows.
    #[test]
    fn prop_excess_operators_underflow(operands in 1usize..8) {
        let program = format!("{}{}", "1 ".repeat(operands), "+ ".repeat(operands));
        let result = run64(&program);

        prop_assert!(matches!(result, Err(Error::Runtime(RuntimeError::StackUnderflow { .. }))),
                     "{}: {:?}",
                     program,
                     result);
    }
}
