use leptos::{either::Either, prelude::*};

use crate::content::Icon;

#[component]
pub fn SectionHeader(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-12">
            <h2 class="text-3xl font-bold mb-4">{title}</h2>
            <p class="max-w-2xl mx-auto text-lg text-muted">{subtitle}</p>
        </div>
    }
}

/// Shown in place of a section whose data couldn't be loaded. The rest of the
/// page keeps rendering.
#[component]
pub fn SectionFallback(errors: ArcRwSignal<Errors>) -> impl IntoView {
    view! {
        <div role="alert" class="mx-auto max-w-2xl p-4 rounded-md border border-red/40 bg-red/10 text-sm">
            <p class="font-medium text-red mb-2">"This section is unavailable right now."</p>
            <ul class="list-disc pl-5">
                {move || {
                    errors
                        .get()
                        .into_iter()
                        .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}

#[component]
pub fn Glyph(icon: Icon) -> impl IntoView {
    match icon.class() {
        Some(class) => Either::Left(view! { <i class=class aria-hidden="true"></i> }),
        None => Either::Right(view! { <span aria-hidden="true">{icon.glyph()}</span> }),
    }
}

#[component]
pub fn Tag(text: &'static str) -> impl IntoView {
    view! {
        <span class="inline-block px-2 py-1 mr-2 mb-2 text-xs rounded-md bg-brightBlack/40 border border-muted/30">
            {text}
        </span>
    }
}
