use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SurveyEmbedProps {
    pub src: AttrValue,
    pub fallback_url: AttrValue,
}

/// Third-party hosted survey, embedded as-is. No parameters are passed and
/// no response comes back; the hosted form owns everything past this iframe.
#[function_component(SurveyEmbed)]
pub fn survey_embed(props: &SurveyEmbedProps) -> Html {
    html! {
        <div class="survey-embed">
            <iframe
                src={props.src.clone()}
                width="100%"
                height="600"
                frameborder="0"
                title="Survey Form"
            >
                {"Loading…"}
            </iframe>
            <p class="survey-fallback">
                {"Cannot see the form? "}
                <a href={props.fallback_url.clone()} target="_blank" rel="noopener noreferrer">
                    {"Open in new tab"}
                </a>
            </p>
        </div>
    }
}
