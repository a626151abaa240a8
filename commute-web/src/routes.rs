use crate::{containers::layout::Layout, models::app_state::AppState, pages::*};
use strum::{EnumIter, IntoEnumIterator};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

/// The public routes.
#[derive(Debug, Clone, PartialEq, Eq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/login")]
    Login,
    #[at("/admin")]
    AdminRoot,
    #[at("/admin/*")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// The admin dashboard routes.
#[derive(Debug, Clone, PartialEq, Eq, Routable, EnumIter)]
pub enum AdminRoute {
    #[at("/admin")]
    Dashboard,
    #[at("/admin/users")]
    Users,
    #[at("/admin/hubs")]
    Hubs,
    #[not_found]
    #[at("/admin/404")]
    NotFound,
}

/// The app routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    Main(MainRoute),
    Admin(AdminRoute),
}

impl Default for AppRoute {
    fn default() -> Self {
        AppRoute::Main(MainRoute::Home)
    }
}

impl From<AdminRoute> for AppRoute {
    fn from(route: AdminRoute) -> Self {
        AppRoute::Admin(route)
    }
}

impl From<MainRoute> for AppRoute {
    fn from(route: MainRoute) -> Self {
        AppRoute::Main(route)
    }
}

impl AppRoute {
    /// Translation key prefix for the route's navigation entry.
    pub fn nav_key(&self) -> &'static str {
        match self {
            AppRoute::Main(MainRoute::Home) => "nav.home",
            AppRoute::Main(MainRoute::About) => "nav.about",
            AppRoute::Main(MainRoute::Login) => "nav.login",
            AppRoute::Main(MainRoute::AdminRoot | MainRoute::Admin)
            | AppRoute::Admin(AdminRoute::Dashboard) => "nav.dashboard",
            AppRoute::Admin(AdminRoute::Users) => "nav.users",
            AppRoute::Admin(AdminRoute::Hubs) => "nav.hubs",
            AppRoute::Main(MainRoute::NotFound) | AppRoute::Admin(AdminRoute::NotFound) => {
                "nav.not_found"
            }
        }
    }
}

/// Entries shown in the header on public pages.
pub fn public_nav_routes() -> Vec<AppRoute> {
    vec![
        AppRoute::Main(MainRoute::Home),
        AppRoute::Main(MainRoute::About),
    ]
}

/// Entries shown in the header inside the admin area.
pub fn admin_nav_routes() -> Vec<AppRoute> {
    AdminRoute::iter()
        .filter(|route| route != &AdminRoute::NotFound)
        .map(AppRoute::Admin)
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct MainRouteViewProps {
    pub route: MainRoute,
}

#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let is_authenticated = use_selector(AppState::is_authenticated);
    let is_admin = use_selector(AppState::is_admin);
    let header_routes = public_nav_routes();

    match props.route.clone() {
        MainRoute::Home => html! {
            <Layout {header_routes} current_route={AppRoute::Main(MainRoute::Home)}>
                <HomePage />
            </Layout>
        },
        MainRoute::About => html! {
            <Layout {header_routes} current_route={AppRoute::Main(MainRoute::About)}>
                <AboutPage />
            </Layout>
        },
        MainRoute::Login => {
            if *is_authenticated {
                html! { <Redirect<MainRoute> to={MainRoute::AdminRoot} /> }
            } else {
                html! { <LoginPage /> }
            }
        }
        MainRoute::AdminRoot | MainRoute::Admin => {
            if !*is_authenticated {
                return html! { <Redirect<MainRoute> to={MainRoute::Login} /> };
            }
            if !*is_admin {
                return html! {
                    <Layout {header_routes}>
                        <ErrorPage message={Some("Administrator access is required.".to_string())} />
                    </Layout>
                };
            }
            html! { <Switch<AdminRoute> render={switch_admin} /> }
        }
        MainRoute::NotFound => html! {
            <Layout {header_routes} current_route={AppRoute::Main(MainRoute::NotFound)}>
                <ErrorPage />
            </Layout>
        },
    }
}

/// Switch function for the main routes.
pub fn switch_main(route: MainRoute) -> Html {
    log::debug!("switching to main route: {route:?}");
    html! { <MainRouteView {route} /> }
}

/// Switch function for the admin routes.
fn switch_admin(route: AdminRoute) -> Html {
    log::debug!("switching to admin route: {route:?}");
    let header_routes = admin_nav_routes();
    let current_route = Some(AppRoute::Admin(route.clone()));
    match route {
        AdminRoute::Dashboard => html! {
            <Layout {header_routes} {current_route}><DashboardPage /></Layout>
        },
        AdminRoute::Users => html! {
            <Layout {header_routes} {current_route}><UsersPage /></Layout>
        },
        AdminRoute::Hubs => html! {
            <Layout {header_routes} {current_route}><HubsPage /></Layout>
        },
        AdminRoute::NotFound => html! { <Redirect<MainRoute> to={MainRoute::NotFound} /> },
    }
}
