//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"AutoProf"</h1>
            <p class="subtitle">
                "Correction automatique de copies. "
                "Téléversez une photo de votre copie et recevez une note en quelques secondes."
            </p>
        </div>
    }
}
