use super::super::Model;
use super::super::Msg;
use super::utils::{first_file, format_size};
use deepfake_shared::MediaRole;
use strum::IntoEnumIterator;
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub fn render_upload_section(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <div class="upload-section">
            <div class="media-pickers">
                { for MediaRole::iter().map(|role| render_media_picker(model, ctx, role)) }
            </div>
            { render_analyze_button(model, ctx) }
        </div>
    }
}

fn render_media_picker(model: &Model, ctx: &Context<Model>, role: MediaRole) -> Html {
    let link = ctx.link();
    let input_id = format!("{}Input", role);
    let node = model.pickers.get(&role).cloned().unwrap_or_default();

    let handle_change = link.callback(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::FileChosen(role, first_file(&input))
    });

    let selected = model.selection.get(role).map(|file| {
        let name = file.name();
        let size = format_size(file.size());
        html! {
            <div class="selected-file">
                <span title={name.clone()}>{ format!("{} ({})", name, size) }</span>
                <button
                    class="remove-btn"
                    title={format!("Remove the {} file", role)}
                    onclick={link.callback(move |_| Msg::ClearFile(role))}
                >
                    <i class="fa-solid fa-times"></i>
                </button>
            </div>
        }
    });

    html! {
        <div class="media-picker">
            <label for={input_id.clone()}>{ role.label() }</label>
            <input
                type="file"
                id={input_id}
                name={role.field_name()}
                accept={role.accept()}
                ref={node}
                onchange={handle_change}
            />
            { selected.unwrap_or_default() }
        </div>
    }
}

fn render_analyze_button(model: &Model, ctx: &Context<Model>) -> Html {
    let in_flight = model.phase.is_in_flight();

    html! {
        <button
            id="analyzeBtn"
            class="analyze-btn"
            onclick={ctx.link().callback(|_| Msg::Analyze)}
            disabled={in_flight}
        >
            {
                if in_flight {
                    html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Analyzing..."}</> }
                } else {
                    html! { <><i class="fa-solid fa-magnifying-glass"></i>{" Analyze"}</> }
                }
            }
        </button>
    }
}
