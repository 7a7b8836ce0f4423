//! Styles the interactive behaviour depends on

use leptos::prelude::*;
use leptos_meta::Style;

use super::language::LANG_SWITCHING_CLASS;

/// Rules injected next to the site stylesheet
pub fn animation_css() -> String {
    format!(
        r#"
.{LANG_SWITCHING_CLASS} * {{
    transition: all 0.3s ease;
}}

.btn {{
    position: relative;
    overflow: hidden;
}}

.ripple {{
    position: absolute;
    border-radius: 50%;
    background: rgba(255,255,255,0.3);
    transform: scale(0);
    animation: ripple 0.6s linear;
    pointer-events: none;
}}

@keyframes ripple {{
    to {{
        transform: scale(4);
        opacity: 0;
    }}
}}

.animate-in {{
    animation: fadeInUp 0.8s ease forwards;
}}

@keyframes fadeInUp {{
    from {{
        opacity: 0;
        transform: translateY(30px);
    }}
    to {{
        opacity: 1;
        transform: translateY(0);
    }}
}}

@media (min-width: 769px) {{
    .nav-menu {{
        display: flex !important;
    }}
}}
"#
    )
}

#[component]
pub fn AnimationStyles() -> impl IntoView {
    view! { <Style id="junction-animations">{animation_css()}</Style> }
}
