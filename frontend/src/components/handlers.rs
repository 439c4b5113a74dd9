use super::super::Model;
use super::super::Msg;
use super::utils::notify;
use crate::api::BrowserTransport;
use deepfake_shared::{AnalysisReport, AnalyzeError, MediaRole, MediaSelection, ResultDisplay, submit};
use gloo_file::File as GlooFile;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub fn handle_file_chosen(model: &mut Model, role: MediaRole, file: Option<GlooFile>) -> bool {
    match &file {
        Some(file) => log::info!("{} selected: {} ({} bytes)", role, file.name(), file.size()),
        None => log::info!("{} selection cleared", role),
    }
    model.selection.set(role, file);
    true
}

pub fn handle_clear_file(model: &mut Model, role: MediaRole) -> bool {
    if let Some(input) = model
        .pickers
        .get(&role)
        .and_then(|node| node.cast::<HtmlInputElement>())
    {
        input.set_value("");
    }
    model.selection.set(role, None).is_some()
}

pub fn handle_analyze(model: &mut Model, ctx: &Context<Model>) -> bool {
    if let Err(err) = model.phase.begin() {
        report_error(model, &err);
        return true;
    }

    model.error = None;
    send_analysis_request(ctx, Rc::clone(&model.transport), model.selection.clone());
    true
}

pub fn handle_analysis_finished(
    model: &mut Model,
    outcome: Result<AnalysisReport, AnalyzeError>,
) -> bool {
    model.phase.finish();

    match outcome {
        Ok(report) => {
            log::info!(
                "Analysis complete: {} ({})",
                report.result.classification,
                report.result.risk_level
            );
            model.display = ResultDisplay::render(&report);
            model.has_result = true;
            model.error = None;
        }
        Err(err) => report_error(model, &err),
    }
    true
}

pub fn send_analysis_request(
    ctx: &Context<Model>,
    transport: Rc<BrowserTransport>,
    selection: MediaSelection<GlooFile>,
) {
    spawn_local({
        let link = ctx.link().clone();

        async move {
            let outcome = submit(transport.as_ref(), &selection).await;
            link.send_message(Msg::AnalysisFinished(outcome));
        }
    });
}

fn report_error(model: &mut Model, err: &AnalyzeError) {
    match err {
        AnalyzeError::Transport(_) | AnalyzeError::MalformedResponse(_) => {
            log::error!("Analysis failed: {}", err)
        }
        _ => log::warn!("Analysis not completed: {}", err),
    }

    let message = err.user_message();
    notify(&message);
    model.error = Some(message);
}
