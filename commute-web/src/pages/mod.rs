mod about;
mod dashboard;
mod error;
mod home;
mod hubs;
mod login;
mod users;

pub use about::AboutPage;
pub use dashboard::DashboardPage;
pub use error::ErrorPage;
pub use home::HomePage;
pub use hubs::HubsPage;
pub use login::LoginPage;
pub use users::UsersPage;
