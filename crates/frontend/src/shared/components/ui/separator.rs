use leptos::prelude::*;

#[component]
pub fn Separator(
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div
            role="separator"
            class=move || format!("separator {}", class.get().unwrap_or_default())
        ></div>
    }
}
