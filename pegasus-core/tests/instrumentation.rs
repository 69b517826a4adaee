//! Instrumentation emitted while generating lattices.

use pegasus_core::{Labeling, PegasusBuilder, PegasusError};
use pegasus_test_support::tracing::RecordingLayer;
use rstest::rstest;
use tracing::Level;

#[rstest]
fn build_records_its_configuration() {
    let builder = PegasusBuilder::new(3)
        .with_labeling(Labeling::Coordinate)
        .with_fabric_only(true);
    let (graph, layer) = RecordingLayer::capture(|| builder.build());
    let graph = graph.expect("configuration must be valid");

    let span = layer
        .span("pegasus.build")
        .expect("pegasus.build span must exist");
    assert_eq!(span.field("m"), Some("3"));
    assert_eq!(span.field("labeling"), Some("coordinate"));
    assert_eq!(span.field("offsets"), Some("0"));
    assert_eq!(span.field("fabric_only"), Some("true"));
    assert_eq!(span.field("node_override"), Some("false"));
    assert_eq!(span.field("edge_override"), Some("false"));

    let events = layer.events();
    let generated = events
        .iter()
        .find(|event| event.message() == Some("generated pegasus lattice"))
        .expect("completion event must be emitted");
    assert_eq!(generated.level, Level::DEBUG);
    assert_eq!(generated.scope, vec!["pegasus.build".to_owned()]);
    assert_eq!(generated.field("lattice"), Some("pegasus_graph(3, 0)"));
    assert_eq!(
        generated.field("nodes"),
        Some(graph.node_count().to_string().as_str())
    );
    assert_eq!(
        generated.field("edges"),
        Some(graph.edge_count().to_string().as_str())
    );
}

#[rstest]
fn explicit_offsets_are_recorded_as_such() {
    let builder = PegasusBuilder::new(2).with_offset_lists([6u8; 12], [2u8; 12]);
    let (result, layer) = RecordingLayer::capture(|| builder.build());
    result.expect("tables are valid");
    let span = layer.span("pegasus.build").expect("span must exist");
    assert_eq!(span.field("offsets"), Some("explicit"));
}

#[rstest]
fn node_overrides_log_their_effect() {
    let builder = PegasusBuilder::new(2).with_node_list([0_usize, 1, 2]);
    let (result, layer) = RecordingLayer::capture(|| builder.build());
    result.expect("labels are in range");

    let span = layer.span("pegasus.build").expect("span must exist");
    assert_eq!(span.field("node_override"), Some("true"));
    let applied = layer
        .events()
        .into_iter()
        .find(|event| event.message() == Some("applied node list override"))
        .expect("override event must be emitted");
    assert_eq!(applied.field("removed"), Some("45"));
    assert_eq!(applied.field("added"), Some("0"));
}

#[rstest]
fn conflicting_offsets_warn_and_fail() {
    let builder = PegasusBuilder::new(2)
        .with_offsets_index(3)
        .with_offset_lists([6u8; 12], [6u8; 12]);
    let (result, layer) = RecordingLayer::capture(|| builder.build());
    assert_eq!(result, Err(PegasusError::ConflictingOffsets));

    assert!(layer.has_event(
        Level::WARN,
        "offsets index and explicit offset lists are mutually exclusive"
    ));
    let errored = layer
        .events()
        .into_iter()
        .any(|event| event.level == Level::ERROR && event.scope == ["pegasus.build"]);
    assert!(errored, "instrumented error must be recorded in the span");
}

#[rstest]
fn zero_rows_warn() {
    let (result, layer) = RecordingLayer::capture(|| PegasusBuilder::new(0).build());
    assert_eq!(result, Err(PegasusError::InvalidSize { got: 0 }));
    assert!(layer.has_event(
        Level::WARN,
        "lattice size must be positive, rejecting configuration"
    ));
}

#[rstest]
fn unaddressable_rows_warn() {
    let m = usize::MAX / 2;
    let (result, layer) = RecordingLayer::capture(|| PegasusBuilder::new(m).build());
    assert_eq!(result, Err(PegasusError::InvalidSize { got: m }));
    assert!(layer.has_event(
        Level::WARN,
        "lattice is too large to index, rejecting configuration"
    ));
}

#[rstest]
fn nice_over_custom_offsets_warns() {
    let builder = PegasusBuilder::new(2)
        .with_offsets_index(1)
        .with_labeling(Labeling::Nice);
    let (result, layer) = RecordingLayer::capture(|| builder.build());
    assert_eq!(result, Err(PegasusError::NiceRequiresStandardOffsets));
    assert!(layer.has_event(Level::WARN, "nice labels need the standard offsets"));
}
