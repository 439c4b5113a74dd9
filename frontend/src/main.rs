mod api;
mod components;

use api::BrowserTransport;
use components::handlers;
use components::header::render_header;
use components::results::render_results;
use components::upload_section::render_upload_section;
use components::utils::render_error_message;
use deepfake_shared::{
    AnalysisPhase, AnalysisReport, AnalyzeError, MediaRole, MediaSelection, ResultDisplay,
};
use gloo_file::File as GlooFile;
use std::collections::HashMap;
use std::rc::Rc;
use strum::IntoEnumIterator;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Result of the one-off `/health` probe made at startup.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ServiceStatus {
    Checking,
    Online,
    Unreachable,
}

pub enum Msg {
    // Media selection
    FileChosen(MediaRole, Option<GlooFile>),
    ClearFile(MediaRole),

    // Analysis
    Analyze,
    AnalysisFinished(Result<AnalysisReport, AnalyzeError>),

    // Service
    HealthChecked(bool),
}

pub struct Model {
    pub(crate) selection: MediaSelection<GlooFile>,
    pub(crate) pickers: HashMap<MediaRole, NodeRef>,
    pub(crate) phase: AnalysisPhase,
    pub(crate) display: ResultDisplay,
    pub(crate) has_result: bool,
    pub(crate) error: Option<String>,
    pub(crate) service: ServiceStatus,
    pub(crate) transport: Rc<BrowserTransport>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::HealthChecked(api::check_health().await));
        });

        Self {
            selection: MediaSelection::new(),
            pickers: MediaRole::iter().map(|role| (role, NodeRef::default())).collect(),
            phase: AnalysisPhase::Idle,
            display: ResultDisplay::pending(),
            has_result: false,
            error: None,
            service: ServiceStatus::Checking,
            transport: Rc::new(BrowserTransport::same_origin()),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FileChosen(role, file) => handlers::handle_file_chosen(self, role, file),
            Msg::ClearFile(role) => handlers::handle_clear_file(self, role),

            Msg::Analyze => handlers::handle_analyze(self, ctx),
            Msg::AnalysisFinished(outcome) => handlers::handle_analysis_finished(self, outcome),

            Msg::HealthChecked(online) => {
                self.service = if online {
                    ServiceStatus::Online
                } else {
                    ServiceStatus::Unreachable
                };
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { render_header(self.service) }

                <main class="main-content">
                    { render_upload_section(self, ctx) }
                    { render_error_message(self.error.as_deref()) }
                    { render_results(self) }
                </main>

                <footer class="app-footer">
                    <p>{"Multimodal Deepfake Detection | Rust WASM dashboard"}</p>
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Dashboard starting...");
    yew::Renderer::<Model>::new().render();
}
