use super::super::Model;
use yew::prelude::*;

pub fn render_results(model: &Model) -> Html {
    let display = &model.display;

    html! {
        <div class="results-container">
            <div class="detailed-results">
                <h3>{"Component Scores"}</h3>
                <div class="result-bars">
                    { for display.component_rows().into_iter().map(|(label, text)| html! {
                        <div class="result-item">
                            <div class="result-label">{ label }</div>
                            <div class="result-value" id={format!("{}Score", label.to_lowercase())}>{ text }</div>
                        </div>
                    })}
                </div>
            </div>

            <div class="result-header">
                <p id="deepfakeScore">{ &display.deepfake }</p>
                <p id="classification">{ &display.classification }</p>
                <p id="riskLevel">{ &display.risk_level }</p>
                <p id="confidence">{ &display.confidence }</p>
            </div>

            <div class="explainability">
                <h3>{"Explainability"}</h3>
                {
                    if model.has_result {
                        html! { <pre id="explainability">{ &display.explainability }</pre> }
                    } else {
                        html! { <p class="no-results-message">{"Run an analysis to see the full response."}</p> }
                    }
                }
            </div>
        </div>
    }
}
