use gloo_file::File as GlooFile;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// First file of a picker, if the user chose one.
pub fn first_file(input: &HtmlInputElement) -> Option<GlooFile> {
    input
        .files()
        .and_then(|files| files.item(0))
        .map(GlooFile::from)
}

pub fn format_size(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = KIB * 1024.0;

    let bytes_f = bytes as f64;
    if bytes_f >= MIB {
        format!("{:.1} MiB", bytes_f / MIB)
    } else if bytes_f >= KIB {
        format!("{:.1} KiB", bytes_f / KIB)
    } else {
        format!("{} B", bytes)
    }
}

/// Blocking browser notification.
pub fn notify(message: &str) {
    match web_sys::window() {
        Some(window) => {
            if let Err(e) = window.alert_with_message(message) {
                log::warn!("Could not show alert: {:?}", e);
            }
        }
        None => log::warn!("No window to notify: {}", message),
    }
}

/// Banner repeating the last notification until the next attempt.
pub fn render_error_message(error: Option<&str>) -> Html {
    error.map_or_else(Html::default, |message| {
        html! {
            <section class="analysis-notice" role="alert" aria-live="assertive">
                <strong>{ "Analysis not completed" }</strong>
                <span>{ message }</span>
            </section>
        }
    })
}
