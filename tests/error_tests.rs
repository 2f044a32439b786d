use dynseq::{ErrorKind, Sequence, SequenceError, MAX_CAPACITY};

#[test]
fn test_error_kinds() {
    let invalid = [
        SequenceError::PositionOutOfRange {
            operation: "insert value",
            position: 5,
            length: 2,
        },
        SequenceError::EmptySequence {
            operation: "get element",
        },
        SequenceError::EmptyBatch,
        SequenceError::InvalidRange { begin: 3, end: 1 },
        SequenceError::InvalidCursor { position: 0 },
    ];
    for error in &invalid {
        assert_eq!(error.kind(), ErrorKind::InvalidArgument);
        assert!(error.is_invalid_argument());
    }

    let overflow = SequenceError::CapacityOverflow {
        requested: MAX_CAPACITY + 1,
        max: MAX_CAPACITY,
    };
    assert_eq!(overflow.kind(), ErrorKind::CapacityOverflow);
    assert!(!overflow.is_invalid_argument());

    let allocation = SequenceError::AllocationFailed { requested: 64 };
    assert_eq!(allocation.kind(), ErrorKind::CapacityOverflow);
    assert!(format!("{}", allocation).contains("64 elements"));
}

#[test]
fn test_error_messages_quality() {
    let mut sequence = Sequence::new(Some(&[1.0, 2.0]), 2.0);

    let message = format!("{}", sequence.insert(0.0, 7).unwrap_err());
    assert!(message.contains("insert value"));
    assert!(message.contains("position 7"));
    assert!(message.contains("length 2"));

    let message = format!("{}", Sequence::default().get(0).unwrap_err());
    assert!(message.contains("get element"));
    assert!(message.contains("empty"));

    let message = format!("{}", sequence.erase_between(1, 1).unwrap_err());
    assert!(message.contains("1..1"));
}

#[test]
fn test_failed_operations_leave_sequence_unchanged() {
    let mut sequence = Sequence::new(Some(&[1.0, 2.0, 3.0]), 2.0);

    assert!(sequence.insert(0.0, 4).is_err());
    assert!(sequence.insert_slice(&[], 0).is_err());
    assert!(sequence.insert_slice(&[1.0], 4).is_err());
    assert!(sequence.erase(3, 1).is_err());
    assert!(sequence.erase_between(2, 1).is_err());
    assert!(sequence.reserve(MAX_CAPACITY + 1).is_err());

    assert_eq!(sequence.as_slice(), &[1.0, 2.0, 3.0]);
    assert_eq!(sequence.capacity(), 3);
}

#[test]
fn test_errors_propagate_with_question_mark() {
    fn rotate_left(sequence: &mut Sequence) -> Result<(), SequenceError> {
        let first = sequence.pop_front()?;
        sequence.push_back(first)
    }

    let mut sequence = Sequence::new(Some(&[1.0, 2.0, 3.0]), 2.0);
    rotate_left(&mut sequence).unwrap();
    assert_eq!(sequence.as_slice(), &[2.0, 3.0, 1.0]);

    let mut empty = Sequence::default();
    assert_eq!(
        rotate_left(&mut empty).unwrap_err(),
        SequenceError::EmptySequence {
            operation: "pop front"
        }
    );
}

#[test]
fn test_error_types_implement_standard_traits() {
    let error = SequenceError::EmptyBatch;

    let debug_str = format!("{:?}", error);
    assert!(!debug_str.is_empty());

    let display_str = format!("{}", error);
    assert!(!display_str.is_empty());

    let cloned = error.clone();
    assert_eq!(error, cloned);
    assert_ne!(error, SequenceError::InvalidCursor { position: 0 });

    let _: &dyn core::error::Error = &error;
}
