use egui::{Color32, Response, Ui};
use gatehouse_utils::version_info;

/// Displays the current environment and version in the UI.
///
/// Display format:
/// - release builds: `stable:{version}`
/// - debug builds: `dev:{commit}`
pub fn env_version(ui: &mut Ui) -> Response {
    let display_text = version_info::format_env_version();
    let (env_name, _) = version_info::env_version_info();

    let color = match env_name {
        "stable" => Color32::GREEN,
        _ => Color32::from_rgb(200, 200, 200), // Light gray
    };

    ui.colored_label(color, display_text)
}

#[cfg(test)]
mod env_version_widget_test {
    use egui_kittest::Harness;
    use kittest::Queryable;

    #[test]
    fn test_env_version_widget_shows_env_info() {
        let harness = Harness::new_ui(|ui| {
            super::env_version(ui);
        });

        // The widget should display something containing a colon (env:info format)
        assert!(
            harness.query_by_label_contains(":").is_some(),
            "env_version widget should display format like 'env:info'"
        );
    }
}
