use dynseq::{GrowthPolicy, Sequence};
use proptest::prelude::*;
use proptest::sample::Index;

/// Growth factors including the non-expansive ones that fall back to linear growth.
fn growth_factor() -> impl Strategy<Value = f64> {
    prop_oneof![
        1.0f64..4.0,
        -4.0f64..1.0,
        Just(1.0),
        Just(0.0),
        Just(f64::NAN),
    ]
}

fn elements(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1e6f64..1e6, 0..max_len)
}

fn non_empty_elements() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1e6f64..1e6, 1..40)
}

proptest! {
    #[test]
    fn next_capacity_covers_request(
        factor in growth_factor(),
        current in 0usize..200,
        extra in 0usize..400,
    ) {
        let requested = current + extra;
        let capacity = GrowthPolicy::new(factor).next_capacity(current, requested).unwrap();

        prop_assert!(capacity >= requested);
        prop_assert!(capacity >= current);
        if extra == 0 {
            prop_assert_eq!(capacity, current);
        }
    }

    #[test]
    fn push_back_appends_and_preserves(
        factor in growth_factor(),
        data in elements(40),
        values in prop::collection::vec(-1e6f64..1e6, 1..40),
    ) {
        let mut sequence = Sequence::new(Some(data.as_slice()), factor);
        let mut model = data.clone();

        for value in values {
            let capacity_before = sequence.capacity();
            sequence.push_back(value).unwrap();
            model.push(value);

            prop_assert_eq!(sequence.len(), model.len());
            prop_assert_eq!(sequence[sequence.len() - 1], value);
            prop_assert!(sequence.capacity() >= capacity_before);
            prop_assert!(sequence.capacity() >= sequence.len());
        }
        prop_assert_eq!(sequence.as_slice(), model.as_slice());
    }

    #[test]
    fn push_front_matches_model(
        factor in growth_factor(),
        data in elements(20),
        values in prop::collection::vec(-1e6f64..1e6, 1..20),
    ) {
        let mut sequence = Sequence::new(Some(data.as_slice()), factor);
        let mut model = data.clone();

        for value in values {
            sequence.push_front(value).unwrap();
            model.insert(0, value);
        }
        prop_assert_eq!(sequence.as_slice(), model.as_slice());
    }

    #[test]
    fn insert_then_erase_restores(
        factor in growth_factor(),
        data in elements(40),
        value in -1e6f64..1e6,
        pos in any::<Index>(),
    ) {
        let pos = pos.index(data.len() + 1);
        let mut sequence = Sequence::new(Some(data.as_slice()), factor);

        sequence.insert(value, pos).unwrap();
        prop_assert_eq!(sequence.len(), data.len() + 1);
        prop_assert_eq!(*sequence.get(pos).unwrap(), value);

        sequence.erase(pos, 1).unwrap();
        prop_assert_eq!(sequence.as_slice(), data.as_slice());
    }

    #[test]
    fn insert_slice_keeps_batch_order(
        factor in growth_factor(),
        data in elements(40),
        batch in non_empty_elements(),
        pos in any::<Index>(),
    ) {
        let pos = pos.index(data.len() + 1);
        let mut sequence = Sequence::new(Some(data.as_slice()), factor);

        sequence.insert_slice(&batch, pos).unwrap();

        let mut model = data[..pos].to_vec();
        model.extend_from_slice(&batch);
        model.extend_from_slice(&data[pos..]);
        prop_assert_eq!(sequence.as_slice(), model.as_slice());
        prop_assert_eq!(&sequence.as_slice()[pos..pos + batch.len()], batch.as_slice());

        sequence.erase(pos, batch.len()).unwrap();
        prop_assert_eq!(sequence.as_slice(), data.as_slice());
    }

    #[test]
    fn erase_matches_model(
        data in non_empty_elements(),
        pos in any::<Index>(),
        count in 0usize..60,
    ) {
        let pos = pos.index(data.len());
        let mut sequence = Sequence::new(Some(data.as_slice()), 2.0);
        let capacity = sequence.capacity();

        sequence.erase(pos, count).unwrap();

        let end = (pos + count).min(data.len());
        let model: Vec<f64> = data[..pos].iter().chain(&data[end..]).copied().collect();
        prop_assert_eq!(sequence.as_slice(), model.as_slice());
        prop_assert_eq!(sequence.capacity(), capacity);
    }

    #[test]
    fn wrapped_access_never_fails_when_non_empty(
        data in non_empty_elements(),
        index in any::<usize>(),
    ) {
        let sequence = Sequence::new(Some(data.as_slice()), 2.0);

        prop_assert_eq!(*sequence.get(index).unwrap(), data[index % data.len()]);
        prop_assert_eq!(sequence[index], data[index % data.len()]);
    }

    #[test]
    fn access_on_empty_always_fails(factor in growth_factor(), index in any::<usize>()) {
        let sequence = Sequence::with_growth_factor(factor);

        prop_assert!(sequence.get(index).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn find_returns_lowest_match(data in non_empty_elements(), pick in any::<Index>()) {
        let sequence = Sequence::new(Some(data.as_slice()), 2.0);
        let value = data[pick.index(data.len())];
        let lowest = data.iter().position(|&element| element == value).unwrap();

        prop_assert_eq!(sequence.find(value), lowest as i64);
    }

    #[test]
    fn find_absent_returns_minus_one(data in elements(40)) {
        let sequence = Sequence::new(Some(data.as_slice()), 2.0);

        // Generated elements stay within +-1e6
        prop_assert_eq!(sequence.find(2e6), -1);
    }

    #[test]
    fn shrink_then_reserve_current_capacity_is_noop(
        factor in growth_factor(),
        data in elements(40),
        values in elements(40),
    ) {
        let mut sequence = Sequence::new(Some(data.as_slice()), factor);
        sequence.extend(values);

        sequence.shrink_to_fit().unwrap();
        let capacity = sequence.capacity();
        prop_assert_eq!(capacity, sequence.len());

        sequence.reserve(capacity).unwrap();
        prop_assert_eq!(sequence.capacity(), capacity);
    }
}
