use leptos::prelude::*;

use crate::contact::{CONTACT_FIELDS, ContactField, FieldKind, SUBMIT_LABEL, SubmitHandler};
use crate::navigation::CONTACT_ANCHOR;

/// Contact band, target of `#contact`.
///
/// The form has no `action`: [`SubmitHandler::Unwired`] is the only handler,
/// so the browser's default submit reloads the page without sending anything
/// anywhere.
#[component]
pub fn Contact(
    /// Submission handling, unwired by default
    #[prop(optional)]
    handler: SubmitHandler,
) -> impl IntoView {
    view! {
        <section id=CONTACT_ANCHOR class="band band-white">
            <div class="container">
                <div class="band-header">
                    <h2 class="band-title">"联系我们"</h2>
                    <p class="band-lede">"立即开始您的数字化转型之旅"</p>
                </div>
                <div class="contact-body">
                    <form class="contact-form" data-submit=handler.marker()>
                        {CONTACT_FIELDS.iter().map(|field| view! { <FieldRow field=*field /> }).collect::<Vec<_>>()}
                        <div>
                            <button type="submit" class="btn-primary btn-submit">{SUBMIT_LABEL}</button>
                        </div>
                    </form>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FieldRow(field: ContactField) -> impl IntoView {
    let control = match field.kind {
        FieldKind::Multiline { rows } => view! {
            <textarea id=field.name name=field.name rows=rows.to_string() class="field-control"></textarea>
        }
        .into_any(),
        FieldKind::Text | FieldKind::Email => {
            let input_type = field.kind.input_type().unwrap_or("text");
            view! {
                <input type=input_type name=field.name id=field.name class="field-control" />
            }
            .into_any()
        }
    };

    view! {
        <div>
            <label for=field.name class="field-label">{field.label}</label>
            {control}
        </div>
    }
}
