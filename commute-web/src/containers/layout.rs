use crate::containers::header::Header;
use crate::routes::AppRoute;
use i18nrs::yew::use_translation;
use yew::{Children, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    #[prop_or_default]
    pub current_route: Option<AppRoute>,
    /// Entries for the header navigation; public and admin pages pass different sets.
    #[prop_or_default]
    pub header_routes: Option<Vec<AppRoute>>,
}

/// Header, page body and footer. The theme itself is set on `<html>` in `index.html`.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let (i18n, ..) = use_translation();

    html! {
        <div class="min-h-screen bg-base-100 flex flex-col">
            <Header header_routes={props.header_routes.clone()} current_route={props.current_route.clone()} />
            <main class="flex-grow container mx-auto p-4 space-y-10">
                { props.children.clone() }
            </main>
            <footer class="footer footer-center p-4 border-t border-base-300 text-base-content">
                <p>{ i18n.t("footer.copyright") }</p>
                <p class="text-xs text-base-content/60">{ i18n.t("app.tagline") }</p>
            </footer>
        </div>
    }
}
