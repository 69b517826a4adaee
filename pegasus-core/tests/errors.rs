use std::sync::Arc;

use pegasus_core::{
    ErrorCategory, Labeling, NiceIndex, NodeLabel, PegasusBuilder, PegasusError,
    PegasusErrorCode, PegasusIndex,
};
use rstest::rstest;

#[rstest]
#[case(
    PegasusError::InvalidSize { got: 0 },
    PegasusErrorCode::InvalidSize,
    ErrorCategory::Configuration,
)]
#[case(
    PegasusError::ConflictingOffsets,
    PegasusErrorCode::ConflictingOffsets,
    ErrorCategory::Configuration,
)]
#[case(
    PegasusError::InvalidOffsetsIndex { index: 9, available: 8 },
    PegasusErrorCode::InvalidOffsetsIndex,
    ErrorCategory::Configuration,
)]
#[case(
    PegasusError::InvalidOffsetTableLength { table: "vertical", len: 3, expected: 12 },
    PegasusErrorCode::InvalidOffsetTableLength,
    ErrorCategory::Configuration,
)]
#[case(
    PegasusError::InvalidOffsetValue { table: "horizontal", position: 0, value: 7 },
    PegasusErrorCode::InvalidOffsetValue,
    ErrorCategory::Configuration,
)]
#[case(
    PegasusError::InvalidLabelingMode { mode: Arc::from("chimera") },
    PegasusErrorCode::InvalidLabelingMode,
    ErrorCategory::Configuration,
)]
#[case(
    PegasusError::NiceRequiresStandardOffsets,
    PegasusErrorCode::NiceRequiresStandardOffsets,
    ErrorCategory::Configuration,
)]
#[case(
    PegasusError::LinearOutOfRange { index: 48, m: 2, node_count: 48 },
    PegasusErrorCode::LinearOutOfRange,
    ErrorCategory::Coordinate,
)]
#[case(
    PegasusError::InvalidPegasusCoordinate { coordinate: PegasusIndex::new(2, 0, 0, 0), m: 2 },
    PegasusErrorCode::InvalidPegasusCoordinate,
    ErrorCategory::Coordinate,
)]
#[case(
    PegasusError::InvalidNiceCoordinate { coordinate: NiceIndex::new(3, 0, 0, 0, 0), m: 2 },
    PegasusErrorCode::InvalidNiceCoordinate,
    ErrorCategory::Coordinate,
)]
#[case(
    PegasusError::NoNiceRepresentation { coordinate: PegasusIndex::new(0, 0, 0, 0), m: 2 },
    PegasusErrorCode::NoNiceRepresentation,
    ErrorCategory::Coordinate,
)]
#[case(
    PegasusError::LabelMismatch { label: NodeLabel::Linear(1), expected: Labeling::Nice },
    PegasusErrorCode::LabelMismatch,
    ErrorCategory::Structural,
)]
#[case(
    PegasusError::SelfLoop { node: NodeLabel::Linear(1) },
    PegasusErrorCode::SelfLoop,
    ErrorCategory::Structural,
)]
#[case(
    PegasusError::UnknownNode { node: NodeLabel::Linear(1) },
    PegasusErrorCode::UnknownNode,
    ErrorCategory::Structural,
)]
fn returns_expected_code_and_category(
    #[case] error: PegasusError,
    #[case] expected: PegasusErrorCode,
    #[case] category: ErrorCategory,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().to_string(), expected.as_str());
    assert!(expected.as_str().starts_with("PEGASUS_"));
    assert_eq!(error.category(), category);
}

#[rstest]
#[case(
    PegasusError::InvalidSize { got: 0 },
    "lattice size must be at least 1 and addressable by a linear index (got 0)"
)]
#[case(
    PegasusError::LinearOutOfRange { index: 48, m: 2, node_count: 48 },
    "linear index 48 is out of range for m=2 (lattice has 48 nodes)"
)]
#[case(
    PegasusError::NoNiceRepresentation { coordinate: PegasusIndex::new(0, 0, 0, 0), m: 2 },
    "pegasus coordinate (0, 0, 0, 0) has no nice representation for m=2"
)]
#[case(
    PegasusError::LabelMismatch {
        label: NodeLabel::Nice(NiceIndex::new(1, 0, 0, 1, 2)),
        expected: Labeling::Int,
    },
    "label (1, 0, 0, 1, 2) does not match the `int` labeling mode"
)]
fn messages_name_the_offending_values(#[case] error: PegasusError, #[case] expected: &str) {
    assert_eq!(error.to_string(), expected);
}

#[rstest]
#[case("int", Labeling::Int)]
#[case("coordinate", Labeling::Coordinate)]
#[case("nice", Labeling::Nice)]
fn labeling_modes_parse_from_their_names(#[case] name: &str, #[case] expected: Labeling) {
    let parsed: Labeling = name.parse().expect("known mode");
    assert_eq!(parsed, expected);
    assert_eq!(parsed.to_string(), name);
}

#[rstest]
#[case("Int")]
#[case("linear")]
#[case("")]
fn unknown_labeling_modes_are_rejected(#[case] name: &str) {
    let err = name.parse::<Labeling>().expect_err("unknown mode");
    assert_eq!(err.code(), PegasusErrorCode::InvalidLabelingMode);
    assert_eq!(
        err,
        PegasusError::InvalidLabelingMode {
            mode: Arc::from(name)
        }
    );
}

#[rstest]
fn build_errors_carry_configuration_codes() {
    let conflicting = PegasusBuilder::new(3)
        .with_offsets_index(1)
        .with_offset_lists([2u8; 12], [2u8; 12])
        .build()
        .expect_err("offset forms conflict");
    assert_eq!(conflicting.code(), PegasusErrorCode::ConflictingOffsets);

    let bad_value = PegasusBuilder::new(3)
        .with_offset_lists([2u8; 12], [4u8; 12])
        .build()
        .expect_err("4 is not an allowed offset");
    assert_eq!(bad_value.code(), PegasusErrorCode::InvalidOffsetValue);
    assert_eq!(bad_value.category(), ErrorCategory::Configuration);
}
