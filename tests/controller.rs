use trendview::{ChartController, ChartEvent, Dataset, RawRecord, Timeframe};

const JAN_1_2024_MS: i64 = 1_704_067_200_000;
const DAY_MS: i64 = 86_400_000;

fn dataset(entries: &[(&str, f64)]) -> Dataset {
    Dataset::from_records(
        entries
            .iter()
            .map(|(timestamp, value)| RawRecord {
                timestamp: timestamp.to_string(),
                value: *value,
            })
            .collect(),
    )
}

fn three_point_controller() -> ChartController {
    ChartController::new(dataset(&[
        ("2024-01-01", 5.0),
        ("2024-01-02", 15.0),
        ("2024-01-03", 25.0),
    ]))
}

#[test]
fn zoom_translates_indices_to_timestamps() {
    let mut controller = three_point_controller();

    controller.zoom(Some((0, 2)));
    assert_eq!(
        controller.zoom_domain(),
        Some((JAN_1_2024_MS, JAN_1_2024_MS + 2 * DAY_MS))
    );
}

#[test]
fn zoom_orders_reversed_indices() {
    let mut controller = three_point_controller();

    controller.zoom(Some((2, 0)));
    let (start, end) = controller.zoom_domain().expect("domain set");
    assert!(start <= end);
    assert_eq!(start, JAN_1_2024_MS);
}

#[test]
fn zoom_with_out_of_range_index_clears() {
    let mut controller = three_point_controller();

    controller.zoom(Some((0, 2)));
    assert!(controller.zoom_domain().is_some());

    controller.zoom(Some((0, 99)));
    assert_eq!(controller.zoom_domain(), None);
}

#[test]
fn zoom_on_empty_working_set_clears() {
    let mut controller = ChartController::new(dataset(&[]));

    controller.zoom(Some((0, 0)));
    assert_eq!(controller.zoom_domain(), None);
}

#[test]
fn zoom_index_range_round_trips() {
    let mut controller = three_point_controller();

    controller.zoom(Some((1, 2)));
    assert_eq!(controller.zoom_index_range(), Some((1, 2)));
}

#[test]
fn filter_change_resets_zoom() {
    let mut controller = three_point_controller();

    controller.zoom(Some((0, 2)));
    controller.set_filter(Some(10.0));
    assert_eq!(controller.zoom_domain(), None);

    // Back to "no filter" counts as a change too
    controller.zoom(Some((0, 1)));
    controller.set_filter(None);
    assert_eq!(controller.zoom_domain(), None);
}

#[test]
fn filter_recomputes_working_set() {
    let mut controller = three_point_controller();
    assert_eq!(controller.working_set().len(), 3);

    controller.set_filter(Some(10.0));
    assert_eq!(controller.working_set().len(), 2);
    assert!(controller.working_set().iter().all(|p| p.value >= 10.0));

    controller.clear_filter();
    assert_eq!(controller.working_set().len(), 3);
    assert_eq!(controller.filter_threshold(), None);
}

#[test]
fn selection_opens_dialog_and_close_clears_it() {
    let mut controller = three_point_controller();
    let point = controller.working_set()[1];

    controller.select_point(point, Some(1));
    assert!(controller.detail_open());
    assert_eq!(controller.selected_point(), Some(&point));

    controller.close_detail();
    assert!(!controller.detail_open());
    assert_eq!(controller.selected_point(), None);
}

#[test]
fn click_without_an_index_is_a_no_op() {
    let mut controller = three_point_controller();
    let point = controller.working_set()[0];

    controller.select_point(point, None);
    assert!(!controller.detail_open());
    assert_eq!(controller.selected_point(), None);
}

#[test]
fn dialog_open_implies_selection() {
    let mut controller = three_point_controller();

    // Holds through every transition the controller exposes
    let events = [
        ChartEvent::PointClicked {
            point: controller.working_set()[0],
            index: Some(0),
        },
        ChartEvent::FilterChanged(Some(10.0)),
        ChartEvent::BrushChanged {
            start_index: 0,
            end_index: 1,
        },
        ChartEvent::DetailClosed,
        ChartEvent::TimeframeSelected(Timeframe::Weekly),
        ChartEvent::FilterCleared,
    ];
    for event in events {
        controller.apply(event);
        assert!(!controller.detail_open() || controller.selected_point().is_some());
    }
}

#[test]
fn empty_dataset_survives_clear_filter() {
    let mut controller = ChartController::new(dataset(&[]));
    assert!(controller.working_set().is_empty());

    controller.apply(ChartEvent::FilterCleared);
    assert!(controller.working_set().is_empty());
    assert_eq!(controller.zoom_domain(), None);
}

#[test]
fn timeframe_change_leaves_data_alone() {
    let mut controller = three_point_controller();
    let before: Vec<_> = controller.working_set().to_vec();

    controller.set_timeframe(Timeframe::Monthly);
    assert_eq!(controller.timeframe(), Timeframe::Monthly);
    assert_eq!(controller.working_set(), &before[..]);
    assert_eq!(controller.zoom_domain(), None);
}

#[test]
fn brush_events_drive_zoom_through_apply() {
    let mut controller = three_point_controller();

    controller.apply(ChartEvent::BrushChanged {
        start_index: 0,
        end_index: 1,
    });
    assert_eq!(
        controller.zoom_domain(),
        Some((JAN_1_2024_MS, JAN_1_2024_MS + DAY_MS))
    );

    controller.apply(ChartEvent::BrushCleared);
    assert_eq!(controller.zoom_domain(), None);
}
