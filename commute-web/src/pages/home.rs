use crate::components::marketing::{CallToAction, FeatureGrid, Hero, HowItWorks};
use yew::prelude::*;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <div class="space-y-16">
            <Hero />
            <FeatureGrid />
            <HowItWorks />
            <CallToAction />
        </div>
    }
}
