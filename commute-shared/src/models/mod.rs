pub mod auth;
pub mod errors;
pub mod hub;
pub mod stats;
pub mod user;

pub use auth::{AppMetadata, Session, SessionUser, SignInRequest, TokenResponse, TokenUser};
pub use errors::ErrorResponse;
pub use hub::{CostError, Hub, NewStop, Stop, format_cost, parse_cost};
pub use stats::DashboardStats;
pub use user::{
    DeleteUserRequest, SetBanRequest, UpdateRoleRequest, User, UserPage, UserQuery, UserRole,
};
