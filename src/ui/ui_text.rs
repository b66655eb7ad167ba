/// User-facing strings, collected in one place.
pub struct UiText {
    pub app_title: &'static str,
    pub series_name: &'static str,

    pub filter_label: &'static str,
    pub filter_placeholder: &'static str,
    pub export_jpg: &'static str,
    pub export_png: &'static str,

    pub x_axis_label: &'static str,
    pub y_axis_label: &'static str,
    pub tooltip_date_prefix: &'static str,
    pub tooltip_value_prefix: &'static str,

    pub detail_title: &'static str,
    pub detail_date_label: &'static str,
    pub detail_value_label: &'static str,
    pub detail_close: &'static str,

    pub empty_title: &'static str,
    pub empty_back: &'static str,
    pub load_failed_title: &'static str,

    pub status_points_shown: &'static str,
    pub status_export_pending: &'static str,
    pub status_export_done: &'static str,
    pub status_export_failed: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    app_title: "Chart Application",
    series_name: "value",

    filter_label: "Filter by values: ",
    filter_placeholder: "Enter value",
    export_jpg: "Export as JPG",
    export_png: "Export as PNG",

    x_axis_label: "Time",
    y_axis_label: "Value",
    tooltip_date_prefix: "Date: ",
    tooltip_value_prefix: "Value: ",

    detail_title: "Data Point Details",
    detail_date_label: "Date",
    detail_value_label: "Value",
    detail_close: "Close",

    empty_title: "No data available to display",
    empty_back: "Back to Chart",
    load_failed_title: "Failed to load the bundled dataset",

    status_points_shown: "points shown",
    status_export_pending: "Exporting",
    status_export_done: "Saved",
    status_export_failed: "Export failed:",
};
