//! Not found page component

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::ui::language::Bilingual;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Page Not Found | The Junction Dubai" />
        <section class="not-found">
            <div class="container">
                <h1 class="section-title">"404"</h1>
                <p class="section-subtitle">
                    <Bilingual
                        en="This stage is empty. The page you're looking for doesn't exist."
                        ar="هذا المسرح فارغ. الصفحة التي تبحث عنها غير موجودة."
                    />
                </p>
                <A href="/" attr:class="btn btn-primary">
                    <Bilingual en="Back to The Junction" ar="العودة إلى ذا جانكشن" />
                </A>
            </div>
        </section>
    }
}
