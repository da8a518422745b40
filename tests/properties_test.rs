//! Algebraic laws checked with proptest.

use proptest::prelude::*;
use tola_flags::prelude::*;

symbolic! {
    /// Single-bit symbols only, so every valid value decomposes exactly.
    #[flags]
    pub struct Perm: u16 {
        B0 = 1 << 0,
        B1 = 1 << 1,
        B2 = 1 << 2,
        B3 = 1 << 3,
        B4 = 1 << 4,
        B5 = 1 << 5,
        B6 = 1 << 6,
        B7 = 1 << 7,
        B8 = 1 << 8,
        B9 = 1 << 9,
    }

    #[flags]
    pub struct Wide: u64 {
        LOW = 1,
        HIGH = 1 << 63,
    }

    #[flags]
    pub struct Tiny: i8 {
        A = 1,
    }
}

fn arb_perm() -> impl Strategy<Value = Perm> {
    any::<u16>().prop_map(Perm::from_repr)
}

fn arb_symbol() -> impl Strategy<Value = Perm> {
    (0..Perm::SYMBOLS.len()).prop_map(|idx| Perm::SYMBOLS[idx].value)
}

proptest! {
    #[test]
    fn prop_declared_symbol_is_set_in_its_combination(symbol in arb_symbol()) {
        let combined = combine_flags([symbol]).unwrap();
        prop_assert!(is_flag_set(combined, symbol).unwrap());
    }

    #[test]
    fn prop_get_flags_reports_subsets(flags in arb_perm()) {
        let parts: Vec<Perm> = get_flags(flags).unwrap().collect();
        for part in &parts {
            prop_assert!(is_flag_set(flags, *part).unwrap());
        }
        let combined = combine_flags(parts).unwrap();
        prop_assert!(flags.contains(combined));
        if is_valid(flags) {
            prop_assert_eq!(combined, flags);
        }
    }

    #[test]
    fn prop_set_then_clear(flags in arb_perm(), x in arb_perm()) {
        let set = set_flags(flags, x, true).unwrap();
        let cleared = set_flags(set, x, false).unwrap();
        prop_assert_eq!(cleared.to_repr(), flags.to_repr() & !x.to_repr());
    }

    #[test]
    fn prop_combine_order_independent(values in proptest::collection::vec(arb_perm(), 0..8)) {
        let forward = combine_flags(values.iter().copied()).unwrap();
        let backward = combine_flags(values.iter().rev().copied()).unwrap();
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn prop_validity_matches_mask(raw in any::<u16>()) {
        prop_assert_eq!(is_valid(Perm::from_repr(raw)), raw & !0x03FF == 0);
    }

    #[test]
    fn prop_bit_position_of_single_bit(k in 0u32..64) {
        let value = Wide::from_repr(1u64 << k);
        prop_assert_eq!(bit_position(value).unwrap() as u32, k);
    }

    #[test]
    fn prop_reinterpret_is_bit_exact(raw in any::<i8>()) {
        let tiny = Tiny::from_repr(raw);
        prop_assert_eq!(reinterpret_to::<u64, _>(tiny).unwrap(), raw as u8 as u64);
        prop_assert_eq!(reinterpret_to::<i8, _>(tiny).unwrap(), raw);
        let back: Tiny = reinterpret_from(raw as u8).unwrap();
        prop_assert_eq!(back, tiny);
    }

    #[test]
    fn prop_decode_matches_from_le_bytes(bytes in any::<[u8; 8]>()) {
        let wide: Wide = decode_from_bytes(&bytes).unwrap();
        prop_assert_eq!(wide.to_repr(), u64::from_le_bytes(bytes));
        let perm: Perm = decode_from_bytes(&bytes).unwrap();
        prop_assert_eq!(perm.to_repr(), u16::from_le_bytes([bytes[0], bytes[1]]));
    }
}
