use super::super::ServiceStatus;
use yew::prelude::*;

/// Renders the application header with the service indicator
pub fn render_header(service: ServiceStatus) -> Html {
    let (class, text) = match service {
        ServiceStatus::Checking => ("status-checking", "Checking service..."),
        ServiceStatus::Online => ("status-online", "Service online"),
        ServiceStatus::Unreachable => ("status-offline", "Service unreachable"),
    };

    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-user-secret"></i> {" Deepfake Detection"}</h1>
            <p class="subtitle">{"Upload an image, a video, an audio clip, or any combination"}</p>
            <span id="serviceStatus" class={classes!("service-status", class)}>{ text }</span>
        </header>
    }
}
