//! Monetary value derivation shared by every document write.
//!
//! All results are quantized to two fraction digits with midpoint
//! rounding away from zero, matching how the amounts appear on printed
//! documents.

use rust_decimal::{Decimal, RoundingStrategy};

/// Net / tax / gross triple carried by notes, positions and bills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DocumentValues {
    pub value_net: Decimal,
    pub tax_value: Decimal,
    pub value_gross: Decimal,
}

/// Advance split plus what remains to be invoiced afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceValues {
    pub advance: DocumentValues,
    pub rest: DocumentValues,
}

pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Values of a single note position.
///
/// `value_net = (price_net - discount_value) * quantity`, tax is
/// `value_net * tax_rate / 100`, gross is their sum.
pub fn position_values(
    price_net: Decimal,
    discount_value: Decimal,
    quantity: Decimal,
    tax_rate: i32,
) -> DocumentValues {
    let value_net = round_money((price_net - discount_value) * quantity);
    let tax_value = round_money(value_net * Decimal::from(tax_rate) / Decimal::from(100));
    let value_gross = round_money(value_net + tax_value);

    DocumentValues {
        value_net,
        tax_value,
        value_gross,
    }
}

/// Adds position values onto the running note totals.
pub fn accumulate(note: DocumentValues, position: DocumentValues) -> DocumentValues {
    DocumentValues {
        value_net: note.value_net + position.value_net,
        tax_value: note.tax_value + position.tax_value,
        value_gross: note.value_gross + position.value_gross,
    }
}

/// Splits a paid advance amount proportionally to the note totals and
/// derives the rest values. Returns `None` for a note with zero gross,
/// where no proportion exists.
pub fn advance_values(advance_value: Decimal, note: DocumentValues) -> Option<AdvanceValues> {
    if note.value_gross.is_zero() {
        return None;
    }

    let tax_value = round_money(advance_value * note.tax_value / note.value_gross);
    let value_net = round_money(advance_value - tax_value);
    let value_gross = round_money(advance_value);

    let rest_value_net = round_money(note.value_net - value_net);
    let rest_tax_value = round_money(note.tax_value - tax_value);
    let rest_value_gross = round_money(rest_value_net + rest_tax_value);

    Some(AdvanceValues {
        advance: DocumentValues {
            value_net,
            tax_value,
            value_gross,
        },
        rest: DocumentValues {
            value_net: rest_value_net,
            tax_value: rest_tax_value,
            value_gross: rest_value_gross,
        },
    })
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn position_values_discount_and_tax() {
        let values = position_values(dec!(33.90), dec!(2.00), dec!(3), 23);
        assert_eq!(values.value_net, dec!(95.70));
        assert_eq!(values.tax_value, dec!(22.01));
        assert_eq!(values.value_gross, dec!(117.71));
    }

    #[test]
    fn position_values_zero_tax_rate() {
        let values = position_values(dec!(5.50), dec!(0), dec!(2), 0);
        assert_eq!(values.value_net, dec!(11.00));
        assert_eq!(values.tax_value, dec!(0.00));
        assert_eq!(values.value_gross, dec!(11.00));
    }

    #[rstest]
    #[case(dec!(9.3492), dec!(9.35))]
    #[case(dec!(22.011), dec!(22.01))]
    #[case(dec!(0.125), dec!(0.13))]
    #[case(dec!(-0.125), dec!(-0.13))]
    fn rounding_is_midpoint_away_from_zero(#[case] input: Decimal, #[case] expected: Decimal) {
        assert_eq!(round_money(input), expected);
    }

    #[test]
    fn accumulate_adds_each_component() {
        let note = accumulate(
            DocumentValues::default(),
            DocumentValues {
                value_net: dec!(24.00),
                tax_value: dec!(6.00),
                value_gross: dec!(30.00),
            },
        );
        let note = accumulate(
            note,
            DocumentValues {
                value_net: dec!(11.00),
                tax_value: dec!(0.00),
                value_gross: dec!(11.00),
            },
        );
        assert_eq!(note.value_net, dec!(35.00));
        assert_eq!(note.tax_value, dec!(6.00));
        assert_eq!(note.value_gross, dec!(41.00));
    }

    #[test]
    fn advance_split_matches_note_proportion() {
        let note = DocumentValues {
            value_net: dec!(95.70),
            tax_value: dec!(22.01),
            value_gross: dec!(117.71),
        };
        let split = advance_values(dec!(50.00), note).unwrap();

        assert_eq!(split.advance.tax_value, dec!(9.35));
        assert_eq!(split.advance.value_net, dec!(40.65));
        assert_eq!(split.advance.value_gross, dec!(50.00));

        assert_eq!(split.rest.value_net, dec!(55.05));
        assert_eq!(split.rest.tax_value, dec!(12.66));
        assert_eq!(split.rest.value_gross, dec!(67.71));
    }

    #[test]
    fn advance_split_requires_nonzero_gross() {
        assert!(advance_values(dec!(50.00), DocumentValues::default()).is_none());
    }

    fn money(cents: u32) -> Decimal {
        Decimal::new(cents as i64, 2)
    }

    proptest! {
        #[test]
        fn position_gross_is_net_plus_tax(
            price in 0u32..1_000_000,
            discount in 0u32..1_000,
            quantity in 1u32..10_000,
            tax_rate in 0i32..100,
        ) {
            prop_assume!(discount <= price);
            let values = position_values(money(price), money(discount), money(quantity), tax_rate);

            prop_assert_eq!(values.value_gross, values.value_net + values.tax_value);
            prop_assert!(values.tax_value >= Decimal::ZERO);
            prop_assert!(values.value_net.scale() <= 2);
            prop_assert!(values.tax_value.scale() <= 2);
        }

        #[test]
        fn advance_gross_always_equals_advance_value(
            advance in 1u32..1_000_000,
            net in 1u32..1_000_000,
            tax in 0u32..200_000,
        ) {
            let note = DocumentValues {
                value_net: money(net),
                tax_value: money(tax),
                value_gross: money(net) + money(tax),
            };
            let split = advance_values(money(advance), note).unwrap();

            prop_assert_eq!(split.advance.value_gross, money(advance));
            prop_assert_eq!(
                split.advance.value_net + split.advance.tax_value,
                split.advance.value_gross
            );
            prop_assert_eq!(
                split.rest.value_gross,
                split.rest.value_net + split.rest.tax_value
            );
            prop_assert_eq!(
                split.rest.value_net + split.advance.value_net,
                note.value_net
            );
            prop_assert_eq!(
                split.rest.tax_value + split.advance.tax_value,
                note.tax_value
            );
        }
    }
}
